//! Unified application error type.
//! All modules (core, console, cli, export, utils) return AppError to keep
//! the error handling consistent and easy to manage.

use std::fmt;
use std::io;
use thiserror::Error;

/// A required work-log field that blocked a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Date,
    TypeOfWork,
    Quantity,
    Unit,
}

impl MissingField {
    pub fn label(&self) -> &'static str {
        match self {
            MissingField::Date => "Date",
            MissingField::TypeOfWork => "Type of Work",
            MissingField::Quantity => "a valid Number of Pieces",
            MissingField::Unit => "Unit",
        }
    }
}

/// Raised when a work-log entry is submitted with missing or invalid
/// required fields. Always recoverable: the form keeps its values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing Information: please fill in {}", join_labels(.missing))]
pub struct ValidationFailure {
    pub missing: Vec<MissingField>,
}

impl ValidationFailure {
    pub fn contains(&self, field: MissingField) -> bool {
        self.missing.contains(&field)
    }
}

fn join_labels(fields: &[MissingField]) -> String {
    let labels: Vec<&str> = fields.iter().map(MissingField::label).collect();
    match labels.as_slice() {
        [] => String::new(),
        [one] => (*one).to_string(),
        [head @ .., last] => format!("{}, and {}", head.join(", "), last),
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    // ---------------------------
    // Work log
    // ---------------------------
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("No work log entry with id '{0}'")]
    EntryNotFound(String),

    #[error("A work log entry with id '{0}' already exists")]
    DuplicateEntry(String),

    #[error("No form is open: use 'new' or 'edit <id>' first")]
    FormNotOpen,

    #[error("A form is already open ({0}): submit or cancel it first")]
    FormAlreadyOpen(FormLabel),

    #[error("Invalid photo: {0}")]
    InvalidPhoto(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Unknown form field: {0}")]
    InvalidField(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // ---------------------------
    // Attendance / users
    // ---------------------------
    #[error("No employee matches '{0}'")]
    EmployeeNotFound(String),

    #[error("{0} is marked absent: mark present before recording times")]
    EmployeeAbsent(String),

    #[error("Employee name cannot be empty")]
    EmptyEmployeeName,

    #[error("The {role} role cannot open {page}")]
    PermissionDenied { role: String, page: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

/// Which form is blocking a new request, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormLabel {
    New,
    Edit(String),
}

impl fmt::Display for FormLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormLabel::New => write!(f, "new entry"),
            FormLabel::Edit(id) => write!(f, "editing {id}"),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
