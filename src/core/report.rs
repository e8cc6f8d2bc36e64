//! Reporting views: fixed production series and the live dashboard.

use crate::core::attendance::AttendanceBook;
use crate::core::board_feet::parse_board_feet_unit;
use crate::core::worklog::WorkLog;
use crate::models::report::{Headcount, Production};
use crate::models::{DashboardSummary, Employee, ReportData};
use chrono::NaiveDate;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl ReportPeriod {
    pub fn title(&self) -> &'static str {
        match self {
            ReportPeriod::Daily => "Daily Detailed Report",
            ReportPeriod::Weekly => "Weekly Detailed Report",
            ReportPeriod::Monthly => "Monthly Detailed Report",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::Daily => "daily",
            ReportPeriod::Weekly => "weekly",
            ReportPeriod::Monthly => "monthly",
        }
    }
}

/// Production series shown on the reports page.
pub fn series(period: ReportPeriod) -> Vec<ReportData> {
    match period {
        ReportPeriod::Daily => vec![
            ReportData::new("2024-07-20", 150.0, "m³", 85.0),
            ReportData::new("2024-07-21", 135.0, "m³", 90.0),
            ReportData::new("2024-07-22", 160.0, "m³", 88.0),
        ],
        ReportPeriod::Weekly => vec![
            ReportData::new("Week 28, 2024", 750.0, "m³", 87.0),
            ReportData::new("Week 29, 2024", 780.0, "m³", 89.0),
            ReportData::new("Week 30, 2024", 720.0, "m³", 85.0),
        ],
        ReportPeriod::Monthly => vec![
            ReportData::new("May 2024", 3000.0, "m³", 86.0),
            ReportData::new("June 2024", 3150.0, "m³", 88.0),
            ReportData::new("July 2024", 2900.0, "m³", 87.0),
        ],
    }
}

/// Series totals: production sum and mean attendance.
pub fn totals(rows: &[ReportData]) -> (f64, f64) {
    if rows.is_empty() {
        return (0.0, 0.0);
    }
    let production = rows.iter().map(|r| r.total_production).sum();
    let attendance = rows.iter().map(|r| r.average_attendance).sum::<f64>() / rows.len() as f64;
    (production, attendance)
}

/// Live figures for `date`: board feet logged, headcount, and entries whose
/// unit was typed by hand rather than derived.
pub fn dashboard(
    log: &WorkLog,
    attendance: &AttendanceBook,
    employees: &[Employee],
    date: NaiveDate,
) -> DashboardSummary {
    let todays = log.on_date(date);

    let board_feet: f64 = todays
        .iter()
        .filter_map(|e| parse_board_feet_unit(&e.unit))
        .sum();
    let pending = todays
        .iter()
        .filter(|e| parse_board_feet_unit(&e.unit).is_none())
        .count();

    let (present, total) = attendance.headcount_on(employees, date);

    DashboardSummary {
        daily_production: Production {
            value: board_feet,
            unit: "BF".to_string(),
        },
        employees_present: Headcount { present, total },
        pending_tasks: pending,
    }
}
