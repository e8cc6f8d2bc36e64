//! Work-log collection and the add/edit form workflow around it.

use crate::core::form::EntryForm;
use crate::core::ids::IdGenerator;
use crate::errors::{AppError, AppResult, FormLabel};
use crate::models::WorkLogEntry;
use chrono::NaiveDate;
use tracing::{debug, info};

/// Ordered entries, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkLog {
    entries: Vec<WorkLogEntry>,
}

impl WorkLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<WorkLogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[WorkLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&WorkLogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Prepends a new entry.
    pub fn add(&mut self, entry: WorkLogEntry) -> AppResult<()> {
        if self.get(&entry.id).is_some() {
            return Err(AppError::DuplicateEntry(entry.id));
        }
        self.entries.insert(0, entry);
        Ok(())
    }

    /// Replaces the entry with the same id, keeping its position.
    pub fn update(&mut self, entry: WorkLogEntry) -> AppResult<()> {
        let idx = self
            .position(&entry.id)
            .ok_or_else(|| AppError::EntryNotFound(entry.id.clone()))?;
        self.entries[idx] = entry;
        Ok(())
    }

    /// Removes by id. Missing ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Option<WorkLogEntry> {
        let idx = self.position(id)?;
        Some(self.entries.remove(idx))
    }

    /// Entries dated within `[start, end]`, in display order.
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&WorkLogEntry> {
        self.entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect()
    }

    pub fn on_date(&self, date: NaiveDate) -> Vec<&WorkLogEntry> {
        self.in_range(date, date)
    }
}

/// Form visibility paired with its submit target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Hidden,
    AddingNew,
    Editing(String),
}

/// What a successful submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Added,
    Updated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedEntry {
    pub kind: SaveKind,
    pub entry: WorkLogEntry,
}

type SavedListener = Box<dyn FnMut(&SavedEntry)>;

/// The work-log page: the collection, the open form, and the id source for
/// new entries.
pub struct WorkLogPage {
    log: WorkLog,
    mode: FormMode,
    form: Option<EntryForm>,
    ids: Box<dyn IdGenerator>,
    listeners: Vec<SavedListener>,
}

impl WorkLogPage {
    pub fn new(log: WorkLog, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            log,
            mode: FormMode::Hidden,
            form: None,
            ids,
            listeners: Vec::new(),
        }
    }

    pub fn log(&self) -> &WorkLog {
        &self.log
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn form(&self) -> Option<&EntryForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> AppResult<&mut EntryForm> {
        self.form.as_mut().ok_or(AppError::FormNotOpen)
    }

    /// Registers a callback run after every successful save.
    pub fn on_entry_saved(&mut self, listener: impl FnMut(&SavedEntry) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn ensure_hidden(&self) -> AppResult<()> {
        match &self.mode {
            FormMode::Hidden => Ok(()),
            FormMode::AddingNew => Err(AppError::FormAlreadyOpen(FormLabel::New)),
            FormMode::Editing(id) => Err(AppError::FormAlreadyOpen(FormLabel::Edit(id.clone()))),
        }
    }

    /// Hidden -> AddingNew.
    pub fn open_new(&mut self, today: NaiveDate) -> AppResult<&mut EntryForm> {
        self.ensure_hidden()?;
        self.mode = FormMode::AddingNew;
        debug!("work log form opened for a new entry");
        Ok(self.form.insert(EntryForm::new_entry(today)))
    }

    /// Hidden -> Editing(id), form pre-populated from the entry.
    pub fn begin_edit(&mut self, id: &str) -> AppResult<&mut EntryForm> {
        self.ensure_hidden()?;
        let entry = self
            .log
            .get(id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;
        let form = EntryForm::for_edit(entry);
        self.mode = FormMode::Editing(id.to_string());
        debug!(id, "work log form opened for editing");
        Ok(self.form.insert(form))
    }

    /// Validates and saves the open form. On a validation failure nothing
    /// changes and the form keeps every value.
    pub fn submit(&mut self) -> AppResult<SavedEntry> {
        let form = self.form.as_ref().ok_or(AppError::FormNotOpen)?;

        let saved = match &self.mode {
            FormMode::Hidden => return Err(AppError::FormNotOpen),
            FormMode::AddingNew => {
                let ids = &mut self.ids;
                let entry = form.build(|| ids.next_id())?;
                self.log.add(entry.clone())?;
                SavedEntry {
                    kind: SaveKind::Added,
                    entry,
                }
            }
            FormMode::Editing(target) => {
                let mut entry = form.build(|| target.clone())?;
                entry.id = target.clone();
                self.log.update(entry.clone())?;
                SavedEntry {
                    kind: SaveKind::Updated,
                    entry,
                }
            }
        };

        info!(id = %saved.entry.id, kind = ?saved.kind, "work log entry saved");

        self.mode = FormMode::Hidden;
        self.form = None;

        for listener in self.listeners.iter_mut() {
            listener(&saved);
        }

        Ok(saved)
    }

    /// Any state -> Hidden. The collection is untouched.
    pub fn cancel(&mut self) -> FormMode {
        self.form = None;
        let previous = std::mem::replace(&mut self.mode, FormMode::Hidden);
        if previous != FormMode::Hidden {
            debug!(?previous, "work log form cancelled");
        }
        previous
    }

    /// Removes an entry. Deleting the entry under edit closes the form.
    pub fn delete(&mut self, id: &str) -> Option<WorkLogEntry> {
        let removed = self.log.delete(id)?;
        if self.mode == FormMode::Editing(id.to_string()) {
            self.cancel();
        }
        info!(id, "work log entry deleted");
        Some(removed)
    }
}

/// The demo entries a fresh session starts with.
pub fn sample_entries() -> Vec<WorkLogEntry> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    let entry = |id: &str, date: NaiveDate, work: &str, quantity: f64, unit: &str, notes: &str| {
        WorkLogEntry {
            id: id.to_string(),
            date,
            type_of_work: work.to_string(),
            length: None,
            width: None,
            thickness: None,
            quantity,
            unit: unit.to_string(),
            notes: Some(notes.to_string()),
            photo_file_name: None,
            photo_url: None,
        }
    };

    vec![
        WorkLogEntry {
            length: Some(144.0),
            width: Some(12.0),
            thickness: Some(1.0),
            ..entry(
                "1",
                date(2024, 7, 21),
                "Pine Cutting",
                10.0,
                "120.00 BF",
                "Morning shift, premium grade",
            )
        },
        entry(
            "2",
            date(2024, 7, 21),
            "Oak Loading",
            2.0,
            "loads",
            "Afternoon delivery to Smith Co.",
        ),
        entry(
            "3",
            date(2024, 7, 20),
            "Equipment Maintenance",
            3.0,
            "tasks",
            "Saws A1, A2, B1 serviced",
        ),
        WorkLogEntry {
            length: Some(96.0),
            width: Some(8.0),
            thickness: Some(1.5),
            ..entry(
                "4",
                date(2024, 7, 22),
                "Cedar Planking",
                50.0,
                "400.00 BF",
                "For custom order #C123",
            )
        },
    ]
}
