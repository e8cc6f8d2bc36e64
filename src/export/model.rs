// src/export/model.rs

use crate::models::{AttendanceRecord, ReportData, WorkLogEntry};
use serde::Serialize;

/// A flat, serializable row shared by the CSV, JSON and XLSX writers.
pub trait ExportRow: Serialize {
    fn headers() -> Vec<&'static str>;
    fn to_row(&self) -> Vec<String>;
}

fn opt_num(v: Option<f64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

/// Work-log entry without the inline photo payload.
#[derive(Serialize, Clone, Debug)]
pub struct WorkLogExport {
    pub id: String,
    pub date: String,
    pub type_of_work: String,
    pub length_in: Option<f64>,
    pub width_in: Option<f64>,
    pub thickness_in: Option<f64>,
    pub pieces: f64,
    pub unit: String,
    pub notes: String,
    pub photo_file_name: String,
}

impl From<&WorkLogEntry> for WorkLogExport {
    fn from(e: &WorkLogEntry) -> Self {
        Self {
            id: e.id.clone(),
            date: e.date_str(),
            type_of_work: e.type_of_work.clone(),
            length_in: e.length,
            width_in: e.width,
            thickness_in: e.thickness,
            pieces: e.quantity,
            unit: e.unit.clone(),
            notes: e.notes.clone().unwrap_or_default(),
            photo_file_name: e.photo_file_name.clone().unwrap_or_default(),
        }
    }
}

impl ExportRow for WorkLogExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "id",
            "date",
            "type_of_work",
            "length_in",
            "width_in",
            "thickness_in",
            "pieces",
            "unit",
            "notes",
            "photo_file_name",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.clone(),
            self.type_of_work.clone(),
            opt_num(self.length_in),
            opt_num(self.width_in),
            opt_num(self.thickness_in),
            self.pieces.to_string(),
            self.unit.clone(),
            self.notes.clone(),
            self.photo_file_name.clone(),
        ]
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct AttendanceExport {
    pub date: String,
    pub employee_id: String,
    pub employee_name: String,
    pub status: String,
    pub time_in: String,
    pub time_out: String,
}

impl From<&AttendanceRecord> for AttendanceExport {
    fn from(r: &AttendanceRecord) -> Self {
        let present = r.status.is_present();
        Self {
            date: r.date.format("%Y-%m-%d").to_string(),
            employee_id: r.employee_id.clone(),
            employee_name: r.employee_name.clone(),
            status: r.status.as_str().to_string(),
            time_in: if present { r.time_in.clone() } else { String::new() },
            time_out: if present { r.time_out.clone() } else { String::new() },
        }
    }
}

impl ExportRow for AttendanceExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "date",
            "employee_id",
            "employee_name",
            "status",
            "time_in",
            "time_out",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.employee_id.clone(),
            self.employee_name.clone(),
            self.status.clone(),
            self.time_in.clone(),
            self.time_out.clone(),
        ]
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub period: String,
    pub total_production: f64,
    pub production_unit: String,
    pub average_attendance: f64,
}

impl From<&ReportData> for ReportExport {
    fn from(r: &ReportData) -> Self {
        Self {
            period: r.period.clone(),
            total_production: r.total_production,
            production_unit: r.production_unit.clone(),
            average_attendance: r.average_attendance,
        }
    }
}

impl ExportRow for ReportExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "period",
            "total_production",
            "production_unit",
            "average_attendance",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.period.clone(),
            self.total_production.to_string(),
            self.production_unit.clone(),
            self.average_attendance.to_string(),
        ]
    }
}
