mod common;
use common::{console, console_as};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_list_shows_sample_entries() {
    console("list\n")
        .assert()
        .success()
        .stdout(contains("Pine Cutting"))
        .stdout(contains("Cedar Planking"))
        .stdout(contains("400.00 BF"))
        .stdout(contains("Equipment Maintenance"));
}

#[test]
fn test_add_entry_with_board_feet() {
    console(
        "new\n\
         set type Walnut Sawing\n\
         set length 144\n\
         set width 12\n\
         set thickness 1\n\
         set pieces 10\n\
         set notes \"Grade A, kiln dried\"\n\
         submit\n\
         list --range 2024-07-21\n",
    )
    .assert()
    .success()
    .stdout(contains("Add New Work Log"))
    .stdout(contains("Unit: 120.00 BF"))
    .stdout(contains(
        "Entry for Walnut Sawing on July 21st, 2024 has been saved.",
    ))
    .stdout(contains("wl-0001"))
    .stdout(contains("Grade A, kiln dried"));
}

#[test]
fn test_missing_fields_keep_form_open() {
    console("new\nset pieces 0\nset unit tasks\nsubmit\nshow\nlist\n")
        .assert()
        .success()
        .stderr(contains(
            "Missing Information: please fill in Type of Work, and a valid Number of Pieces",
        ))
        .stdout(contains("Add New Work Log").count(2))
        .stdout(contains("wl-0001").not());
}

#[test]
fn test_edit_entry_keeps_id() {
    console("edit 2\nset pieces 3\nsubmit\nlist\n")
        .assert()
        .success()
        .stdout(contains("Edit Work Log (2)"))
        .stdout(contains(
            "Entry for Oak Loading on July 21st, 2024 has been saved.",
        ))
        .stdout(contains("wl-0001").not());
}

#[test]
fn test_unknown_entry_cannot_be_edited() {
    console("edit 42\n")
        .assert()
        .success()
        .stderr(contains("No work log entry with id '42'"));
}

#[test]
fn test_second_form_is_refused() {
    console("new\nedit 1\n")
        .assert()
        .success()
        .stderr(contains("A form is already open (new entry)"));
}

#[test]
fn test_delete_under_edit_closes_form() {
    console("edit 1\ndelete 1\nsubmit\nlist\n")
        .assert()
        .success()
        .stdout(contains("Deleted entry 1 (Pine Cutting)."))
        .stderr(contains("No form is open"))
        .stdout(contains("Pine Cutting").count(2));
}

#[test]
fn test_cancel_discards_changes() {
    console("edit 3\nset type Nothing\ncancel\nlist\n")
        .assert()
        .success()
        .stdout(contains("Form closed."))
        .stdout(contains("Nothing").not());
}

#[test]
fn test_delete_unknown_is_harmless() {
    console("del 99\n")
        .assert()
        .success()
        .stdout(contains("No entry with id '99'; nothing deleted."));
}

#[test]
fn test_attendance_flow() {
    console(
        "attendance show\n\
         attendance present emp-001\n\
         attendance in \"John Doe\" 08:00\n\
         attendance out emp-001 16:30\n\
         attendance in emp-002 08:00\n\
         attendance save\n\
         attendance show\n",
    )
    .assert()
    .success()
    .stdout(contains("Attendance for July 21st, 2024"))
    .stdout(contains("Present: 0 / 5"))
    .stdout(contains("Present: 1 / 5"))
    .stdout(contains("08h 30m"))
    .stdout(contains("Attendance for July 21st, 2024 has been saved."))
    .stderr(contains("Jane Smith is marked absent"));
}

#[test]
fn test_attendance_date_switch_reuses_saved_sheet() {
    console(
        "attendance present emp-005\n\
         attendance save\n\
         attendance date 2024-07-22\n\
         attendance date today\n",
    )
    .assert()
    .success()
    .stdout(contains("Attendance for July 22nd, 2024"))
    .stdout(contains("Present: 0 / 5"))
    .stdout(contains("Present: 1 / 5"));
}

#[test]
fn test_dashboard_figures() {
    console("attendance present emp-001\nattendance present emp-002\ndashboard\n")
        .assert()
        .success()
        .stdout(contains("Timber processed today : 120.00 BF"))
        .stdout(contains("Employees present      : 2 / 5 (40% attendance rate)"))
        .stdout(contains("Pending tasks          : 1 logs"));
}

#[test]
fn test_report_weekly() {
    console("report weekly\n")
        .assert()
        .success()
        .stdout(contains("Weekly Detailed Report"))
        .stdout(contains("Week 30, 2024"))
        .stdout(contains("Total: 2250 m³"));
}

#[test]
fn test_worker_is_limited() {
    console_as("worker", "nav\nreport\nattendance show\nlist\n")
        .assert()
        .success()
        .stdout(contains("Work Log"))
        .stdout(contains("[New]"))
        .stdout(contains("/admin/settings").not())
        .stderr(contains("The Worker role cannot open Reports"))
        .stderr(contains("The Worker role cannot open Attendance"))
        .stdout(contains("Pine Cutting"));
}

#[test]
fn test_admin_nav_has_settings() {
    console("nav\n")
        .assert()
        .success()
        .stdout(contains("signed in as Admin User <admin@example.com> (Admin)"))
        .stdout(contains("/admin/settings"));
}

#[test]
fn test_employees_management() {
    console(
        "employees add \"Tom Hardy\" --role manager\n\
         employees remove emp-001\n\
         employees list\n\
         attendance show\n\
         log\n",
    )
    .assert()
    .success()
    .stdout(contains("Tom Hardy has been added (emp-006)."))
    .stdout(contains("John Doe removed."))
    .stdout(contains("Present: 0 / 5"))
    .stdout(contains("(emp-006)"));
}

#[test]
fn test_manager_cannot_manage_employees() {
    console_as("manager", "employees add Someone\n")
        .assert()
        .success()
        .stderr(contains("The Manager role cannot open Settings"));
}

#[test]
fn test_photo_attachment() {
    let dir = tempdir().unwrap();
    let img = dir.path().join("pile.jpg");
    fs::write(&img, [0xFF, 0xD8, 0xFF]).unwrap();

    console(&format!(
        "new\nset type Stacking\nset pieces 2\nset unit piles\nphoto {}\nsubmit\nlist\n",
        img.display()
    ))
    .assert()
    .success()
    .stdout(contains("Photo attached: pile.jpg"))
    .stdout(contains("pile.jpg").count(2));
}

#[test]
fn test_audit_log_records_saves() {
    console("edit 1\nsubmit\ndel 3\nlog\n")
        .assert()
        .success()
        .stdout(contains("Internal log:"))
        .stdout(contains("(1)"))
        .stdout(contains("Pine Cutting updated"))
        .stdout(contains("Equipment Maintenance deleted"));
}

#[test]
fn test_bad_input_does_not_stop_session() {
    console("frobnicate\nset \"unterminated\nset colour red\nlist\n")
        .assert()
        .success()
        .stderr(contains("unrecognized subcommand"))
        .stderr(contains("unterminated quote"))
        .stderr(contains("No form is open").or(contains("Unknown form field")))
        .stdout(contains("Pine Cutting"));
}

#[test]
fn test_quit_ends_session() {
    console("# comment\n\nquit\nlist\n")
        .assert()
        .success()
        .stdout(contains("Pine Cutting").not());
}

#[test]
fn test_help_lists_commands() {
    console("help\n")
        .assert()
        .success()
        .stdout(contains("Commands:"))
        .stdout(contains("attendance"));
}
