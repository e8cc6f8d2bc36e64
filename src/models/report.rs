use serde::Serialize;

/// One row of an aggregate production/attendance report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub period: String,
    pub total_production: f64,
    pub production_unit: String,
    /// Percentage, 0..=100.
    pub average_attendance: f64,
}

impl ReportData {
    pub fn new(period: &str, total_production: f64, unit: &str, average_attendance: f64) -> Self {
        Self {
            period: period.to_string(),
            total_production,
            production_unit: unit.to_string(),
            average_attendance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Production {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Headcount {
    pub present: usize,
    pub total: usize,
}

impl Headcount {
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.present as f64 * 100.0 / self.total as f64
    }
}

/// Figures shown on the dashboard for a single day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub daily_production: Production,
    pub employees_present: Headcount,
    pub pending_tasks: usize,
}
