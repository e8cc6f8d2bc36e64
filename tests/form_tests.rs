use chrono::NaiveDate;
use timberops::core::form::{EntryForm, FormField};
use timberops::core::worklog::sample_entries;
use timberops::errors::MissingField;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 21).unwrap()
}

fn filled_form() -> EntryForm {
    let mut form = EntryForm::new_entry(today());
    form.set_type_of_work("Walnut Sawing");
    form.set_length("144");
    form.set_width("12");
    form.set_thickness("1");
    form.set_quantity("10");
    form
}

#[test]
fn test_new_form_defaults_to_today() {
    let form = EntryForm::new_entry(today());
    assert_eq!(form.date(), Some(today()));
    assert!(form.type_of_work().is_empty());
    assert!(form.unit().is_empty());
    assert!(form.editing_id().is_none());
}

#[test]
fn test_unit_follows_dimensions() {
    let mut form = filled_form();
    assert_eq!(form.unit(), "120.00 BF");

    form.set_quantity("5");
    assert_eq!(form.unit(), "60.00 BF");
}

#[test]
fn test_invalid_dimension_keeps_previous_unit() {
    let mut form = filled_form();
    form.set_width("");
    assert_eq!(form.unit(), "120.00 BF");

    form.set_unit("boards");
    form.set_width("abc");
    assert_eq!(form.unit(), "boards");
}

#[test]
fn test_derived_unit_wins_over_manual_unit_on_save() {
    let mut form = filled_form();
    form.set_unit("boards");
    assert_eq!(form.unit(), "boards");

    let entry = form.build(|| "x-2".into()).expect("valid form");
    assert_eq!(entry.unit, "120.00 BF");
    assert_eq!(entry.length, Some(144.0));
}

#[test]
fn test_manual_unit_without_dimensions() {
    let mut form = EntryForm::new_entry(today());
    form.set_type_of_work("Oak Loading");
    form.set_quantity("2");
    form.set_unit("loads");

    let entry = form.build(|| "x-1".into()).expect("valid form");
    assert_eq!(entry.id, "x-1");
    assert_eq!(entry.unit, "loads");
    assert_eq!(entry.quantity, 2.0);
    assert_eq!(entry.length, None);
    assert_eq!(entry.notes, None);
}

#[test]
fn test_empty_type_of_work_is_rejected() {
    let mut form = filled_form();
    form.set_type_of_work("   ");

    let err = form.validate().unwrap_err();
    assert_eq!(err.missing, vec![MissingField::TypeOfWork]);
    assert!(err.to_string().starts_with("Missing Information"));
}

#[test]
fn test_non_positive_quantity_is_rejected() {
    for bad in ["0", "-5", "", "ten"] {
        let mut form = filled_form();
        form.set_quantity(bad);
        let err = form.validate().unwrap_err();
        assert!(err.contains(MissingField::Quantity), "quantity {bad:?}");
    }
}

#[test]
fn test_every_missing_field_is_reported() {
    let mut form = EntryForm::new_entry(today());
    form.set_date(None);

    let err = form.validate().unwrap_err();
    assert_eq!(
        err.missing,
        vec![
            MissingField::Date,
            MissingField::TypeOfWork,
            MissingField::Quantity,
            MissingField::Unit
        ]
    );
    assert_eq!(
        err.to_string(),
        "Missing Information: please fill in Date, Type of Work, a valid Number of Pieces, and Unit"
    );
}

#[test]
fn test_set_field_by_name() {
    let mut form = EntryForm::new_entry(today());
    form.set_field(FormField::parse("type").unwrap(), "Cedar Planking")
        .unwrap();
    form.set_field(FormField::parse("Qty").unwrap(), "3").unwrap();
    form.set_field(FormField::Date, "2024-07-22").unwrap();

    assert_eq!(form.type_of_work(), "Cedar Planking");
    assert_eq!(form.quantity(), "3");
    assert_eq!(form.date(), NaiveDate::from_ymd_opt(2024, 7, 22));

    assert!(form.set_field(FormField::Date, "22/07/2024").is_err());
    assert!(FormField::parse("colour").is_err());
}

#[test]
fn test_edit_form_round_trips_entry() {
    let entry = sample_entries()
        .into_iter()
        .find(|e| e.id == "1")
        .unwrap();

    let form = EntryForm::for_edit(&entry);
    assert_eq!(form.editing_id(), Some("1"));
    assert_eq!(form.length(), "144");
    assert_eq!(form.unit(), "120.00 BF");

    let rebuilt = form.build(|| panic!("id must be kept")).unwrap();
    assert_eq!(rebuilt, entry);
}
