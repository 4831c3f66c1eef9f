//! Line-driven editing session
//!
//! Each stdin line is one event, processed to completion before the next is
//! read: `name=value` edits, `seed=...`, `show`, `share`, `url`, `quit`.

use colored::*;
use eyre::{Context, Result};
use std::io::{self, BufRead};

use super::{CliState, apply_edits, render, share};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::location::LocationProvider;

pub fn run(url: Option<&str>, no_clipboard: bool, config: &Config) -> Result<()> {
    let mut state = super::open_state(url, config, no_clipboard)?;
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if !handle_line(&mut state, line.trim())? {
            break;
        }
    }

    Ok(())
}

/// Process one line. Returns false when the session should end.
fn handle_line(state: &mut CliState, line: &str) -> Result<bool> {
    match line {
        "" => {}
        "quit" | "exit" => return Ok(false),
        "show" => render(state.config(), OutputFormat::Text)?,
        "url" => println!("{}", state.location().current()),
        "share" => share::report(&state.share()),
        edit => match apply_edits(state, &[edit.to_string()]) {
            Ok(()) => println!("{}", state.location().current()),
            Err(e) => eprintln!("{} {:#}", "✗".red(), e),
        },
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_applies_lines_in_order() {
        let mut state = super::super::open_state(Some("https://example.com/"), &Config::default(), true).unwrap();
        for line in ["hair=4", "hat=pirate", "bogus", "fire=true"] {
            assert!(handle_line(&mut state, line).unwrap());
        }
        assert_eq!(
            state.location().current().query(),
            Some("seed=0100400000&hat=pirate&fire=true")
        );
        assert!(!handle_line(&mut state, "quit").unwrap());
    }
}
