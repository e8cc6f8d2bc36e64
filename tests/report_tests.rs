use chrono::NaiveDate;
use timberops::core::attendance::AttendanceBook;
use timberops::core::report::{ReportPeriod, dashboard, series, totals};
use timberops::core::worklog::{WorkLog, sample_entries};
use timberops::models::AttendanceStatus;
use timberops::models::employee::default_employees;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
}

#[test]
fn test_series_per_period() {
    let daily = series(ReportPeriod::Daily);
    assert_eq!(daily.len(), 3);
    assert_eq!(daily[0].period, "2024-07-20");
    assert_eq!(daily[0].production_unit, "m³");

    let monthly = series(ReportPeriod::Monthly);
    assert_eq!(monthly[1].period, "June 2024");
    assert_eq!(monthly[1].total_production, 3150.0);

    assert_eq!(ReportPeriod::Weekly.title(), "Weekly Detailed Report");
}

#[test]
fn test_totals() {
    let (production, attendance) = totals(&series(ReportPeriod::Daily));
    assert_eq!(production, 445.0);
    assert!((attendance - 87.666).abs() < 0.01);
    assert_eq!(totals(&[]), (0.0, 0.0));
}

#[test]
fn test_dashboard_counts_board_feet_and_manual_units() {
    let employees = default_employees();
    let log = WorkLog::from_entries(sample_entries());
    let mut book = AttendanceBook::new(&employees, day(21));
    book.set_status("emp-001", AttendanceStatus::Present).unwrap();
    book.set_status("emp-002", AttendanceStatus::Present).unwrap();

    let summary = dashboard(&log, &book, &employees, day(21));
    assert_eq!(summary.daily_production.value, 120.0);
    assert_eq!(summary.daily_production.unit, "BF");
    assert_eq!(summary.employees_present.present, 2);
    assert_eq!(summary.employees_present.total, 5);
    assert_eq!(summary.employees_present.rate(), 40.0);
    assert_eq!(summary.pending_tasks, 1);
}

#[test]
fn test_dashboard_on_empty_day() {
    let employees = default_employees();
    let log = WorkLog::from_entries(sample_entries());
    let book = AttendanceBook::new(&employees, day(21));

    let summary = dashboard(&log, &book, &employees, day(25));
    assert_eq!(summary.daily_production.value, 0.0);
    assert_eq!(summary.pending_tasks, 0);
    assert_eq!(summary.employees_present.present, 0);
}
