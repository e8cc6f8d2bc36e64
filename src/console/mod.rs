//! Line-oriented console standing in for the admin web pages.

pub mod parser;
pub mod session;
pub mod tokenize;

use crate::errors::AppResult;
use crate::ui::messages;
use clap::Parser;
use parser::ConsoleLine;
use session::{Flow, Session};
use std::io::{self, BufRead, IsTerminal, Write};

/// Reads commands from `input` until `quit` or end of input. Command
/// failures are reported and the loop keeps going.
pub fn run<R: BufRead>(session: &mut Session, input: R) -> AppResult<()> {
    let interactive = io::stdin().is_terminal();
    if interactive {
        messages::header("TimberOps console (type 'help' for commands, 'quit' to leave)");
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            print!("timberops> ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens = match tokenize::split_line(trimmed) {
            Ok(t) => t,
            Err(e) => {
                messages::error(e.to_string());
                continue;
            }
        };

        let cmd = match ConsoleLine::try_parse_from(&tokens) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // help output and usage errors alike
                let _ = e.print();
                continue;
            }
        };

        tracing::debug!(?cmd, "console command");
        match session.execute(cmd) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => messages::error(e.to_string()),
        }
    }

    Ok(())
}
