use colored::*;
use eyre::Result;

use super::apply_edits;
use crate::config::Config;
use crate::state::ShareOutcome;

pub fn run(url: Option<&str>, edits: &[String], no_clipboard: bool, config: &Config) -> Result<()> {
    let mut state = super::open_state(url, config, no_clipboard)?;
    apply_edits(&mut state, edits)?;

    let outcome = state.share();
    report(&outcome);
    Ok(())
}

/// Print a share outcome: the URL on stdout, status on stderr
pub fn report(outcome: &ShareOutcome) {
    match outcome {
        ShareOutcome::Copied { .. } => {
            eprintln!("{} Link copied to clipboard", "✓".green());
            println!("{}", outcome.url());
        }
        ShareOutcome::Fallback { .. } => {
            println!("{}", outcome.message());
        }
    }
}
