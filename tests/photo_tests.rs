use std::fs;
use tempfile::tempdir;
use timberops::core::form::EntryForm;
use timberops::core::photo::{load_photo, mime_for};
use timberops::errors::AppError;

#[test]
fn test_photo_becomes_data_url() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stack.png");
    fs::write(&path, b"abc").unwrap();

    let photo = load_photo(&path).unwrap();
    assert_eq!(photo.file_name, "stack.png");
    assert_eq!(photo.data_url, "data:image/png;base64,YWJj");
}

#[test]
fn test_non_image_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, b"abc").unwrap();

    assert!(matches!(load_photo(&path), Err(AppError::InvalidPhoto(_))));
    assert_eq!(mime_for(std::path::Path::new("a.JPG")), Some("image/jpeg"));
}

#[test]
fn test_empty_image_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blank.jpg");
    fs::write(&path, b"").unwrap();

    assert!(matches!(load_photo(&path), Err(AppError::InvalidPhoto(_))));
}

#[test]
fn test_photo_is_saved_with_entry() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.gif");
    fs::write(&path, b"GIF89a").unwrap();

    let mut form = EntryForm::new_entry(chrono::NaiveDate::from_ymd_opt(2024, 7, 21).unwrap());
    form.set_type_of_work("Debarking");
    form.set_quantity("1");
    form.set_unit("logs");
    form.attach_photo(load_photo(&path).unwrap());

    let entry = form.build(|| "p-1".into()).unwrap();
    assert!(entry.has_photo());
    assert_eq!(entry.photo_file_name.as_deref(), Some("log.gif"));
    assert!(entry.photo_url.unwrap().starts_with("data:image/gif;base64,"));
}
