mod common;
use common::{TODAY, tbo, tbo_test, temp_out};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_calc_board_feet() {
    tbo_test()
        .args(["calc", "-l", "96", "-w", "8", "-t", "1.5", "-p", "50"])
        .assert()
        .success()
        .stdout(contains("400.00 BF"));
}

#[test]
fn test_calc_rejects_zero_dimension() {
    tbo_test()
        .args(["calc", "-l", "96", "-w", "0", "-t", "1.5", "-p", "50"])
        .assert()
        .success()
        .stdout(contains("greater than zero"))
        .stdout(contains("BF").not());
}

#[test]
fn test_roster_defaults_everyone_absent() {
    tbo_test()
        .args(["roster", "--date", "2024-07-22"])
        .assert()
        .success()
        .stdout(contains("Attendance for July 22nd, 2024"))
        .stdout(contains("David Brown"))
        .stdout(contains("Present: 0 / 5"));
}

#[test]
fn test_roster_needs_supervisor_role() {
    tbo_test()
        .args(["--role", "worker", "roster"])
        .assert()
        .failure()
        .stderr(contains("Error: The Worker role cannot open Attendance"));
}

#[test]
fn test_nav_for_manager() {
    tbo_test()
        .args(["--role", "manager", "nav"])
        .assert()
        .success()
        .stdout(contains("/admin/reports"))
        .stdout(contains("/admin/settings").not());
}

#[test]
fn test_report_with_export() {
    let out = temp_out("cli_report_monthly", "json");

    tbo_test()
        .args(["report", "monthly", "--export", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Monthly Detailed Report"))
        .stdout(contains("Total: 9050 m³"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"period\": \"June 2024\""));
}

#[test]
fn test_invalid_today_is_rejected() {
    tbo()
        .args(["--test", "--today", "21/07/2024", "nav"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = tempdir().unwrap();
    let conf = dir.path().join("timberops.conf");
    let conf_str = conf.to_str().unwrap();

    tbo()
        .args(["--config", conf_str, "init"])
        .assert()
        .success()
        .stdout(contains("TimberOps initialization completed!"));

    let yaml = fs::read_to_string(&conf).unwrap();
    assert!(yaml.contains("default_role: Admin"));
    assert!(yaml.contains("Sarah Williams"));

    tbo()
        .args(["--config", conf_str, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    tbo()
        .args(["--config", conf_str, "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_custom_config_drives_console() {
    let dir = tempdir().unwrap();
    let conf = dir.path().join("mill.conf");
    fs::write(
        &conf,
        "user_name: Mill Boss\n\
         user_email: boss@mill.test\n\
         default_role: Manager\n\
         seed_sample_data: false\n\
         employees:\n  - id: e-1\n    name: Ana Lima\n    role: Worker\n",
    )
    .unwrap();

    tbo()
        .args(["--config", conf.to_str().unwrap(), "--today", TODAY, "console"])
        .write_stdin("nav\nlist\nattendance show\n")
        .assert()
        .success()
        .stdout(contains("Mill Boss <boss@mill.test> (Manager)"))
        .stdout(contains("No work logs found. Type 'new' to get started."))
        .stdout(contains("Ana Lima"))
        .stdout(contains("Present: 0 / 1"));
}

#[test]
fn test_config_print_and_validation() {
    let dir = tempdir().unwrap();
    let conf = dir.path().join("bad.conf");
    fs::write(&conf, "separator_char: \"==\"\n").unwrap();

    tbo()
        .args(["--config", conf.to_str().unwrap(), "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("separator_char must be a single character"));

    fs::write(&conf, "separator_char: \"=\"\nid_scheme: uuid\n").unwrap();
    tbo()
        .args(["--config", conf.to_str().unwrap(), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("id_scheme: uuid"))
        .stdout(contains("John Doe"));
}

#[test]
fn test_bad_date_pattern_is_rejected_at_load() {
    let dir = tempdir().unwrap();
    let conf = dir.path().join("pattern.conf");

    for pattern in ["%Q", "%H:%M"] {
        fs::write(&conf, format!("date_display: \"{pattern}\"\n")).unwrap();

        tbo()
            .args(["--config", conf.to_str().unwrap(), "--today", TODAY, "console"])
            .write_stdin("list\n")
            .assert()
            .failure()
            .code(1)
            .stderr(contains("date_display is not a valid date pattern"))
            .stderr(contains("panicked").not());
    }
}
