use colored::*;
use eyre::Result;

use super::apply_edits;
use crate::config::Config;
use crate::location::LocationProvider;
use crate::state::Change;

pub fn run(url: Option<&str>, edits: &[String], verbose: bool, config: &Config) -> Result<()> {
    let mut state = super::open_state(url, config, true)?;

    if verbose {
        state.on_change(|change, character| match change {
            Change::Trait(name) => {
                let value = character
                    .attributes()
                    .get(name.as_str())
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                eprintln!("{} {} = {}", "→".blue(), name.as_str().cyan(), value.green());
            }
            Change::Seed => eprintln!("{} seed applied", "→".blue()),
        });
    }

    apply_edits(&mut state, edits)?;

    if verbose {
        eprintln!("{} location rewritten {} time(s)", "→".blue(), state.location().replacements());
    }

    println!("{}", state.location().current());
    Ok(())
}
