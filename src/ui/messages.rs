//! User-facing notices. Console output only; diagnostics go through
//! `tracing` instead.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(&self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (FG_BLUE, "ℹ️"),
            Level::Success => (FG_GREEN, "✅"),
            Level::Warning => (FG_YELLOW, "⚠️"),
            Level::Error => (FG_RED, "❌"),
        }
    }
}

pub fn notify<T: fmt::Display>(level: Level, msg: T) {
    let (color, icon) = level.style();
    let line = format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
    if level == Level::Error {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    notify(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    notify(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    notify(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    notify(Level::Error, msg);
}

/// Title plus description, the console's stand-in for a toast.
pub fn toast<T: fmt::Display>(level: Level, title: &str, description: T) {
    notify(level, format!("{BOLD}{title}{RESET}: {description}"));
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}", FG_BLUE, BOLD, msg, RESET);
}
