//! In-memory operation journal, printed by the console `log` command.

use crate::utils::formatting::{strip_ansi, truncate};
use ansi_term::Colour;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub id: usize,
    pub date: DateTime<Local>,
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    lines: Vec<LogLine>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        tracing::debug!(operation, target, message, "audit");
        self.lines.push(LogLine {
            id: self.lines.len() + 1,
            date: Local::now(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    /// Colored, aligned listing.
    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            return "📜 Internal log is empty.\n".to_string();
        }

        let op_w = self
            .lines
            .iter()
            .map(|l| op_target(l).chars().count())
            .max()
            .unwrap_or(10)
            .min(60);
        let id_w = self.lines.len().to_string().len();

        let mut out = String::from("📜 Internal log:\n\n");
        for line in &self.lines {
            let color = color_for_operation(&line.operation);
            let visible = truncate(&op_target(line), 60);

            let recolored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&recolored).chars().count()));

            out.push_str(&format!(
                "{:>id_w$}: {} | {}{} => {}\n",
                line.id,
                line.date.format("%FT%T%:z"),
                recolored,
                padding,
                line.message,
                id_w = id_w
            ));
        }
        out
    }
}

fn op_target(line: &LogLine) -> String {
    if line.target.is_empty() {
        line.operation.clone()
    } else {
        format!("{} ({})", line.operation, line.target)
    }
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "attendance" => Colour::Cyan,
        "export" => Colour::Blue,
        "employee" => Colour::Purple,
        _ => Colour::White,
    }
}
