//! Id generation for new work-log entries.
//!
//! Injected into the work-log page so tests can supply deterministic ids.

use serde::{Deserialize, Serialize};

pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// `wl-0001`, `wl-0002`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("wl")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{:04}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Which generator a session uses, as named in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    #[default]
    Sequential,
    Uuid,
}

impl IdScheme {
    pub fn generator(&self) -> Box<dyn IdGenerator> {
        match self {
            IdScheme::Sequential => Box::new(SequentialIds::default()),
            IdScheme::Uuid => Box::new(UuidIds),
        }
    }
}
