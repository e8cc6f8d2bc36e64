//! Single work-log entry form: field state, reactive board-feet unit and
//! submit-time validation.

use crate::core::board_feet::{derive_unit, parse_input};
use crate::core::photo::PhotoAttachment;
use crate::errors::{AppError, MissingField, ValidationFailure};
use crate::models::WorkLogEntry;
use chrono::NaiveDate;

/// Fields addressable from the console `set` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    TypeOfWork,
    Length,
    Width,
    Thickness,
    Quantity,
    Unit,
    Notes,
}

impl FormField {
    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "date" => Ok(FormField::Date),
            "type" | "typeofwork" | "work" => Ok(FormField::TypeOfWork),
            "length" | "l" => Ok(FormField::Length),
            "width" | "w" => Ok(FormField::Width),
            "thickness" | "t" => Ok(FormField::Thickness),
            "pieces" | "quantity" | "qty" | "q" => Ok(FormField::Quantity),
            "unit" => Ok(FormField::Unit),
            "notes" | "note" | "remarks" => Ok(FormField::Notes),
            _ => Err(AppError::InvalidField(name.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    editing_id: Option<String>,
    date: Option<NaiveDate>,
    type_of_work: String,
    length: String,
    width: String,
    thickness: String,
    quantity: String,
    unit: String,
    notes: String,
    photo: Option<PhotoAttachment>,
}

impl EntryForm {
    /// Blank form for a new entry, dated today.
    pub fn new_entry(today: NaiveDate) -> Self {
        Self {
            editing_id: None,
            date: Some(today),
            type_of_work: String::new(),
            length: String::new(),
            width: String::new(),
            thickness: String::new(),
            quantity: String::new(),
            unit: String::new(),
            notes: String::new(),
            photo: None,
        }
    }

    /// Form pre-populated from an existing entry.
    pub fn for_edit(entry: &WorkLogEntry) -> Self {
        let num = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
        let photo = match (&entry.photo_file_name, &entry.photo_url) {
            (Some(name), Some(url)) => Some(PhotoAttachment {
                file_name: name.clone(),
                data_url: url.clone(),
            }),
            _ => None,
        };

        let mut form = Self {
            editing_id: Some(entry.id.clone()),
            date: Some(entry.date),
            type_of_work: entry.type_of_work.clone(),
            length: num(entry.length),
            width: num(entry.width),
            thickness: num(entry.thickness),
            quantity: entry.quantity.to_string(),
            unit: entry.unit.clone(),
            notes: entry.notes.clone().unwrap_or_default(),
            photo,
        };
        form.recalculate_unit();
        form
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn type_of_work(&self) -> &str {
        &self.type_of_work
    }

    pub fn length(&self) -> &str {
        &self.length
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn thickness(&self) -> &str {
        &self.thickness
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn photo(&self) -> Option<&PhotoAttachment> {
        self.photo.as_ref()
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    pub fn set_type_of_work(&mut self, value: &str) {
        self.type_of_work = value.to_string();
    }

    pub fn set_length(&mut self, value: &str) {
        self.length = value.to_string();
        self.recalculate_unit();
    }

    pub fn set_width(&mut self, value: &str) {
        self.width = value.to_string();
        self.recalculate_unit();
    }

    pub fn set_thickness(&mut self, value: &str) {
        self.thickness = value.to_string();
        self.recalculate_unit();
    }

    pub fn set_quantity(&mut self, value: &str) {
        self.quantity = value.to_string();
        self.recalculate_unit();
    }

    pub fn set_unit(&mut self, value: &str) {
        self.unit = value.to_string();
    }

    pub fn set_notes(&mut self, value: &str) {
        self.notes = value.to_string();
    }

    pub fn attach_photo(&mut self, photo: PhotoAttachment) {
        self.photo = Some(photo);
    }

    pub fn clear_photo(&mut self) {
        self.photo = None;
    }

    /// Sets a text field by name. An empty date clears it; anything else
    /// that is not `YYYY-MM-DD` is rejected.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), AppError> {
        match field {
            FormField::Date => {
                let v = value.trim();
                if v.is_empty() {
                    self.set_date(None);
                } else {
                    let d = crate::utils::date::parse_date(v)
                        .ok_or_else(|| AppError::InvalidDate(v.to_string()))?;
                    self.set_date(Some(d));
                }
            }
            FormField::TypeOfWork => self.set_type_of_work(value),
            FormField::Length => self.set_length(value),
            FormField::Width => self.set_width(value),
            FormField::Thickness => self.set_thickness(value),
            FormField::Quantity => self.set_quantity(value),
            FormField::Unit => self.set_unit(value),
            FormField::Notes => self.set_notes(value),
        }
        Ok(())
    }

    /// Re-derives the unit from the dimensional inputs. Leaves the current
    /// unit alone unless all four inputs are valid.
    fn recalculate_unit(&mut self) {
        if let Some(derived) = derive_unit(&self.length, &self.width, &self.thickness, &self.quantity)
        {
            tracing::trace!(unit = %derived, "board feet derived");
            self.unit = derived;
        }
    }

    /// Unit as it would be saved right now.
    pub fn resolved_unit(&self) -> String {
        derive_unit(&self.length, &self.width, &self.thickness, &self.quantity)
            .unwrap_or_else(|| self.unit.clone())
    }

    /// Runs every submit check and returns the parsed quantity.
    pub fn validate(&self) -> Result<f64, ValidationFailure> {
        let mut missing = Vec::new();

        if self.date.is_none() {
            missing.push(MissingField::Date);
        }
        if self.type_of_work.trim().is_empty() {
            missing.push(MissingField::TypeOfWork);
        }
        let quantity = parse_input(&self.quantity).filter(|q| *q > 0.0);
        if quantity.is_none() {
            missing.push(MissingField::Quantity);
        }
        if self.resolved_unit().trim().is_empty() {
            missing.push(MissingField::Unit);
        }

        match quantity {
            Some(q) if missing.is_empty() => Ok(q),
            _ => Err(ValidationFailure { missing }),
        }
    }

    /// Constructs the entry. `new_id` is only consulted when this form is
    /// not editing an existing entry.
    pub fn build(&self, new_id: impl FnOnce() -> String) -> Result<WorkLogEntry, ValidationFailure> {
        let quantity = self.validate()?;
        let date = self.date.ok_or(ValidationFailure {
            missing: vec![MissingField::Date],
        })?;

        let dimension = |s: &str| {
            if s.is_empty() { None } else { parse_input(s) }
        };
        let non_blank = |s: &str| {
            if s.trim().is_empty() { None } else { Some(s.to_string()) }
        };

        let id = match &self.editing_id {
            Some(id) => id.clone(),
            None => new_id(),
        };

        Ok(WorkLogEntry {
            id,
            date,
            type_of_work: self.type_of_work.clone(),
            length: dimension(&self.length),
            width: dimension(&self.width),
            thickness: dimension(&self.thickness),
            quantity,
            unit: self.resolved_unit(),
            notes: non_blank(&self.notes),
            photo_file_name: self.photo.as_ref().map(|p| p.file_name.clone()),
            photo_url: self.photo.as_ref().map(|p| p.data_url.clone()),
        })
    }
}
