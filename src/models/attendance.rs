use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    #[default]
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence of one employee on one date. Keyed by `(employee_id, date)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    /// Free-form time of day, only meaningful when present.
    pub time_in: String,
    pub time_out: String,
}

impl AttendanceRecord {
    /// Default record for an employee with no attendance yet on `date`.
    pub fn absent(employee_id: &str, employee_name: &str, date: NaiveDate) -> Self {
        Self {
            id: record_id(employee_id, date),
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            date,
            status: AttendanceStatus::Absent,
            time_in: String::new(),
            time_out: String::new(),
        }
    }

    pub fn matches(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.employee_id == employee_id && self.date == date
    }
}

pub fn record_id(employee_id: &str, date: NaiveDate) -> String {
    format!("{}-{}", employee_id, date.format("%Y-%m-%d"))
}
