use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum UserRole {
    Admin,
    Manager,
    Worker,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Manager => "Manager",
            UserRole::Worker => "Worker",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: UserRole,
}

impl Employee {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }
}

/// The reference roster used when the config file lists no employees.
pub fn default_employees() -> Vec<Employee> {
    vec![
        Employee::new("emp-001", "John Doe", UserRole::Worker),
        Employee::new("emp-002", "Jane Smith", UserRole::Worker),
        Employee::new("emp-003", "Mike Johnson", UserRole::Worker),
        Employee::new("emp-004", "Sarah Williams", UserRole::Worker),
        Employee::new("emp-005", "David Brown", UserRole::Admin),
    ]
}
