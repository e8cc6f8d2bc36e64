use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;
use timberops::core::ids::{IdScheme, SequentialIds};
use timberops::core::worklog::{FormMode, SaveKind, WorkLog, WorkLogPage, sample_entries};
use timberops::errors::AppError;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
}

fn seeded_page() -> WorkLogPage {
    WorkLogPage::new(
        WorkLog::from_entries(sample_entries()),
        Box::new(SequentialIds::default()),
    )
}

fn ids(page: &WorkLogPage) -> Vec<String> {
    page.log().entries().iter().map(|e| e.id.clone()).collect()
}

#[test]
fn test_new_entry_is_prepended_with_generated_id() {
    let mut page = seeded_page();
    let form = page.open_new(day(21)).unwrap();
    form.set_type_of_work("Walnut Sawing");
    form.set_length("144");
    form.set_width("12");
    form.set_thickness("1");
    form.set_quantity("10");

    let saved = page.submit().unwrap();
    assert_eq!(saved.kind, SaveKind::Added);
    assert_eq!(saved.entry.id, "wl-0001");
    assert_eq!(saved.entry.unit, "120.00 BF");

    assert_eq!(page.log().len(), 5);
    assert_eq!(page.log().entries()[0].id, "wl-0001");
    assert_eq!(page.mode(), &FormMode::Hidden);
    assert!(page.form().is_none());
}

#[test]
fn test_add_then_delete_restores_collection() {
    let mut page = seeded_page();
    let before = page.log().entries().to_vec();

    let form = page.open_new(day(21)).unwrap();
    form.set_type_of_work("Sweeping");
    form.set_quantity("1");
    form.set_unit("tasks");
    let saved = page.submit().unwrap();

    let removed = page.delete(&saved.entry.id).unwrap();
    assert_eq!(removed, saved.entry);
    assert_eq!(page.log().entries(), before.as_slice());
}

#[test]
fn test_validation_failure_keeps_form_and_collection() {
    let mut page = seeded_page();
    let form = page.open_new(day(21)).unwrap();
    form.set_quantity("-5");
    form.set_unit("tasks");

    let err = page.submit().unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(page.mode(), &FormMode::AddingNew);
    assert_eq!(page.form().unwrap().quantity(), "-5");
    assert_eq!(page.log().len(), 4);
}

#[test]
fn test_edit_replaces_in_place() {
    let mut page = seeded_page();
    let order = ids(&page);

    let form = page.begin_edit("3").unwrap();
    form.set_quantity("4");
    let saved = page.submit().unwrap();

    assert_eq!(saved.kind, SaveKind::Updated);
    assert_eq!(saved.entry.id, "3");
    assert_eq!(ids(&page), order);
    assert_eq!(page.log().get("3").unwrap().quantity, 4.0);
    assert_eq!(page.log().get("3").unwrap().unit, "tasks");
}

#[test]
fn test_edit_without_changes_is_identity() {
    let mut page = seeded_page();
    let before = page.log().entries().to_vec();

    page.begin_edit("4").unwrap();
    page.submit().unwrap();

    assert_eq!(page.log().entries(), before.as_slice());
}

#[test]
fn test_cancel_leaves_collection_unchanged() {
    let mut page = seeded_page();
    let before = page.log().entries().to_vec();

    page.begin_edit("1").unwrap().set_type_of_work("Changed");
    let previous = page.cancel();

    assert_eq!(previous, FormMode::Editing("1".into()));
    assert_eq!(page.mode(), &FormMode::Hidden);
    assert_eq!(page.log().entries(), before.as_slice());
}

#[test]
fn test_second_form_is_refused() {
    let mut page = seeded_page();
    page.open_new(day(21)).unwrap();

    assert!(matches!(
        page.begin_edit("1"),
        Err(AppError::FormAlreadyOpen(_))
    ));
    assert!(matches!(
        page.open_new(day(21)),
        Err(AppError::FormAlreadyOpen(_))
    ));
}

#[test]
fn test_edit_unknown_id_fails() {
    let mut page = seeded_page();
    assert!(matches!(
        page.begin_edit("nope"),
        Err(AppError::EntryNotFound(_))
    ));
    assert_eq!(page.mode(), &FormMode::Hidden);
}

#[test]
fn test_deleting_entry_under_edit_closes_form() {
    let mut page = seeded_page();
    page.begin_edit("2").unwrap();

    page.delete("2").unwrap();

    assert_eq!(page.mode(), &FormMode::Hidden);
    assert!(page.log().get("2").is_none());
    assert!(matches!(page.submit(), Err(AppError::FormNotOpen)));
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut page = seeded_page();
    assert!(page.delete("999").is_none());
    assert_eq!(page.log().len(), 4);
}

#[test]
fn test_listener_sees_every_save() {
    let mut page = seeded_page();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    page.on_entry_saved(move |saved| sink.borrow_mut().push((saved.kind, saved.entry.id.clone())));

    page.begin_edit("1").unwrap();
    page.submit().unwrap();

    let form = page.open_new(day(22)).unwrap();
    form.set_type_of_work("Oak Loading");
    form.set_quantity("1");
    form.set_unit("loads");
    page.submit().unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            (SaveKind::Updated, "1".to_string()),
            (SaveKind::Added, "wl-0001".to_string())
        ]
    );
}

#[test]
fn test_uuid_scheme_gives_distinct_ids() {
    let mut page = WorkLogPage::new(WorkLog::new(), IdScheme::Uuid.generator());
    for _ in 0..2 {
        let form = page.open_new(day(21)).unwrap();
        form.set_type_of_work("Stacking");
        form.set_quantity("1");
        form.set_unit("tasks");
        page.submit().unwrap();
    }
    let ids = ids(&page);
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

#[test]
fn test_log_filters_by_date() {
    let log = WorkLog::from_entries(sample_entries());
    assert_eq!(log.on_date(day(21)).len(), 2);
    assert_eq!(log.in_range(day(20), day(21)).len(), 3);
}
