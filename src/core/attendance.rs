//! Daily attendance roster.

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, AttendanceStatus, Employee};
use chrono::NaiveDate;
use tracing::{debug, info};

/// One record per known employee for `date`. Existing `(employee, date)`
/// records are reused verbatim, everyone else gets a default absent record.
pub fn materialize(
    employees: &[Employee],
    date: NaiveDate,
    existing: &[AttendanceRecord],
) -> Vec<AttendanceRecord> {
    employees
        .iter()
        .map(|emp| {
            existing
                .iter()
                .find(|r| r.matches(&emp.id, date))
                .cloned()
                .unwrap_or_else(|| AttendanceRecord::absent(&emp.id, &emp.name, date))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    In,
    Out,
}

/// Counts reported when a sheet is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveSummary {
    pub date: NaiveDate,
    pub present: usize,
    pub total: usize,
}

/// The sheet currently on screen plus every record committed this session.
#[derive(Debug, Clone)]
pub struct AttendanceBook {
    date: NaiveDate,
    sheet: Vec<AttendanceRecord>,
    saved: Vec<AttendanceRecord>,
}

impl AttendanceBook {
    pub fn new(employees: &[Employee], date: NaiveDate) -> Self {
        Self {
            date,
            sheet: materialize(employees, date, &[]),
            saved: Vec::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn sheet(&self) -> &[AttendanceRecord] {
        &self.sheet
    }

    pub fn saved(&self) -> &[AttendanceRecord] {
        &self.saved
    }

    /// Regenerates the sheet for a new date. Unsaved edits on the previous
    /// sheet are dropped.
    pub fn select_date(&mut self, employees: &[Employee], date: NaiveDate) {
        self.date = date;
        self.sheet = materialize(employees, date, &self.saved);
        debug!(%date, rows = self.sheet.len(), "attendance sheet regenerated");
    }

    /// Rebuilds the current sheet after the employee list changed, keeping
    /// edits for employees still on it.
    pub fn refresh(&mut self, employees: &[Employee]) {
        let mut existing = self.sheet.clone();
        existing.extend(self.saved.iter().cloned());
        self.sheet = materialize(employees, self.date, &existing);
    }

    fn find_mut(&mut self, key: &str) -> AppResult<&mut AttendanceRecord> {
        let needle = key.trim().to_lowercase();
        let idx = self
            .sheet
            .iter()
            .position(|r| r.employee_id.to_lowercase() == needle)
            .or_else(|| {
                self.sheet
                    .iter()
                    .position(|r| r.employee_name.to_lowercase() == needle)
            })
            .ok_or_else(|| AppError::EmployeeNotFound(key.to_string()))?;
        Ok(&mut self.sheet[idx])
    }

    /// Looks an employee up by id, or by full name (case-insensitive).
    pub fn record(&self, key: &str) -> Option<&AttendanceRecord> {
        let needle = key.trim().to_lowercase();
        self.sheet
            .iter()
            .find(|r| r.employee_id.to_lowercase() == needle)
            .or_else(|| {
                self.sheet
                    .iter()
                    .find(|r| r.employee_name.to_lowercase() == needle)
            })
    }

    pub fn set_status(&mut self, key: &str, status: AttendanceStatus) -> AppResult<&AttendanceRecord> {
        let record = self.find_mut(key)?;
        record.status = status;
        debug!(employee = %record.employee_id, %status, "attendance status changed");
        Ok(record)
    }

    /// Records a time of day. Only allowed while the employee is present.
    pub fn set_time(&mut self, key: &str, field: TimeField, value: &str) -> AppResult<&AttendanceRecord> {
        let record = self.find_mut(key)?;
        if !record.status.is_present() {
            return Err(AppError::EmployeeAbsent(record.employee_name.clone()));
        }
        let value = value.trim().to_string();
        match field {
            TimeField::In => record.time_in = value,
            TimeField::Out => record.time_out = value,
        }
        Ok(record)
    }

    /// Commits the current sheet; reselecting this date reuses it.
    pub fn save(&mut self) -> SaveSummary {
        let date = self.date;
        self.saved.retain(|r| r.date != date);
        self.saved.extend(self.sheet.iter().cloned());

        let summary = SaveSummary {
            date,
            present: self.present_count(),
            total: self.sheet.len(),
        };
        info!(%date, present = summary.present, total = summary.total, "attendance saved");
        summary
    }

    pub fn present_count(&self) -> usize {
        self.sheet.iter().filter(|r| r.status.is_present()).count()
    }

    /// Present/total on `date`, from the open sheet or the saved records.
    pub fn headcount_on(&self, employees: &[Employee], date: NaiveDate) -> (usize, usize) {
        let records = if date == self.date {
            self.sheet.clone()
        } else {
            materialize(employees, date, &self.saved)
        };
        let present = records.iter().filter(|r| r.status.is_present()).count();
        (present, records.len())
    }
}

/// Minutes between two `HH:MM` strings, when both parse and out > in.
pub fn worked_minutes(record: &AttendanceRecord) -> Option<i64> {
    if !record.status.is_present() {
        return None;
    }
    let start = crate::utils::time::parse_time(&record.time_in)?;
    let end = crate::utils::time::parse_time(&record.time_out)?;
    let mins = crate::utils::time::minutes_between(start, end);
    (mins > 0).then_some(mins)
}
