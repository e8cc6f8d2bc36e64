#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fixed "today" matching the sample work-log entries.
pub const TODAY: &str = "2024-07-21";

pub fn tbo() -> Command {
    cargo_bin_cmd!("timberops")
}

/// Binary in test mode: built-in defaults, fixed date.
pub fn tbo_test() -> Command {
    let mut cmd = tbo();
    cmd.args(["--test", "--today", TODAY]);
    cmd
}

/// Console session fed from `script`, one command per line.
pub fn console(script: &str) -> Command {
    let mut cmd = tbo_test();
    cmd.arg("console").write_stdin(script.to_string());
    cmd
}

/// Same as [`console`] with a role override.
pub fn console_as(role: &str, script: &str) -> Command {
    let mut cmd = tbo_test();
    cmd.args(["--role", role, "console"])
        .write_stdin(script.to_string());
    cmd
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timberops_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
