//! Employee directory (the settings page's user management).

use crate::errors::{AppError, AppResult};
use crate::models::{Employee, UserRole};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
}

impl EmployeeDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Next free `emp-NNN` id.
    fn next_id(&self) -> String {
        let max = self
            .employees
            .iter()
            .filter_map(|e| e.id.strip_prefix("emp-")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("emp-{:03}", max + 1)
    }

    pub fn add(&mut self, name: &str, role: UserRole) -> AppResult<&Employee> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyEmployeeName);
        }
        let employee = Employee::new(self.next_id(), name, role);
        info!(id = %employee.id, %role, "employee added");
        self.employees.push(employee);
        let last = self.employees.len() - 1;
        Ok(&self.employees[last])
    }

    pub fn remove(&mut self, id: &str) -> AppResult<Employee> {
        let idx = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::EmployeeNotFound(id.to_string()))?;
        let removed = self.employees.remove(idx);
        info!(id, "employee removed");
        Ok(removed)
    }
}
