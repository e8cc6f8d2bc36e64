use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded unit of sawmill work.
///
/// Dimensions are inches. `unit` is either a manual label ("tasks", "loads")
/// or a derived board-feet string such as "120.00 BF".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLogEntry {
    pub id: String,
    pub date: NaiveDate,
    pub type_of_work: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    /// Number of pieces.
    pub quantity: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_file_name: Option<String>,
    /// Inline `data:` URI, never a durable reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl WorkLogEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn has_photo(&self) -> bool {
        self.photo_url.is_some()
    }
}

/// Renders an optional dimension the way the entry table shows it.
pub fn dimension_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}
