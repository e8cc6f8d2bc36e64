pub mod attendance;
pub mod employee;
pub mod report;
pub mod work_log_entry;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::{Employee, UserRole};
pub use report::{DashboardSummary, ReportData};
pub use work_log_entry::WorkLogEntry;
