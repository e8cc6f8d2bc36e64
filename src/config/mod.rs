use crate::core::ids::IdScheme;
use crate::core::nav::SessionContext;
use crate::errors::{AppError, AppResult};
use crate::models::employee::default_employees;
use crate::models::{Employee, UserRole};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_user_email")]
    pub user_email: String,
    #[serde(default = "default_role")]
    pub default_role: UserRole,
    #[serde(default)]
    pub id_scheme: IdScheme,
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// chrono pattern for dates in tables.
    #[serde(default = "default_date_display")]
    pub date_display: String,
    #[serde(default = "default_employees")]
    pub employees: Vec<Employee>,
}

fn default_user_name() -> String {
    "Admin User".to_string()
}
fn default_user_email() -> String {
    "admin@example.com".to_string()
}
fn default_role() -> UserRole {
    UserRole::Admin
}
fn default_true() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_date_display() -> String {
    "%b %d, %Y".to_string()
}

/// Whether `pattern` can format a plain date (no time-of-day fields).
fn renders_dates(pattern: &str) -> bool {
    use std::fmt::Write;
    let mut out = String::new();
    write!(out, "{}", NaiveDate::MIN.format(pattern)).is_ok()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            user_email: default_user_email(),
            default_role: default_role(),
            id_scheme: IdScheme::default(),
            seed_sample_data: true,
            separator_char: default_separator_char(),
            date_display: default_date_display(),
            employees: default_employees(),
        }
    }
}

impl Config {
    /// Standard configuration directory (`~/.timberops`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timberops")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timberops.conf")
    }

    /// Load from `path`, or return defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.check()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Rejects values the console cannot work with.
    pub fn check(&self) -> AppResult<()> {
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got '{}'",
                self.separator_char
            )));
        }
        if StrftimeItems::new(&self.date_display).any(|item| matches!(item, Item::Error))
            || !renders_dates(&self.date_display)
        {
            return Err(AppError::Config(format!(
                "date_display is not a valid date pattern: '{}'",
                self.date_display
            )));
        }
        let mut seen = std::collections::HashSet::new();
        for emp in &self.employees {
            if emp.name.trim().is_empty() {
                return Err(AppError::Config(format!("employee '{}' has no name", emp.id)));
            }
            if !seen.insert(emp.id.as_str()) {
                return Err(AppError::Config(format!("duplicate employee id '{}'", emp.id)));
            }
        }
        Ok(())
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Session identity, with an optional role override from the CLI.
    pub fn session(&self, role: Option<UserRole>) -> SessionContext {
        SessionContext::new(
            &self.user_name,
            &self.user_email,
            role.unwrap_or(self.default_role),
        )
    }

    /// Write the defaults to `path`, creating its directory.
    pub fn write_default(path: &Path) -> AppResult<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let cfg = Self::default();
        fs::write(path, serde_yaml::to_string(&cfg)?)?;
        Ok(cfg)
    }
}
