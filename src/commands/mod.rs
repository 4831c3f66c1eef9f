//! CLI commands
//!
//! The CLI is the rendering side of the character state: it turns arguments
//! and stdin lines into edit events and prints the configuration back.

use colored::*;
use eyre::{Context, Result};
use lazy_regex::regex_captures;

use crate::character::{CharacterConfig, TraitName};
use crate::cli::OutputFormat;
use crate::clipboard::{ClipboardProvider, DisabledClipboard, SystemClipboard};
use crate::config::Config;
use crate::location::MemoryLocation;
use crate::state::{CharacterState, EditEvent};

pub mod completions;
pub mod config;
pub mod edit;
pub mod seed;
pub mod set;
pub mod share;
pub mod show;

pub type CliState = CharacterState<MemoryLocation, Box<dyn ClipboardProvider>>;

/// Build the state for the page at `--url` (or the configured page)
pub fn open_state(url: Option<&str>, config: &Config, no_clipboard: bool) -> Result<CliState> {
    let page = url.unwrap_or(&config.page_url);
    let location = MemoryLocation::parse(page).context(format!("Invalid page URL: {}", page))?;

    let clipboard: Box<dyn ClipboardProvider> = if no_clipboard || !config.clipboard.enabled {
        Box::new(DisabledClipboard)
    } else {
        Box::new(SystemClipboard::from_config(&config.clipboard))
    };

    Ok(CharacterState::new(location, clipboard))
}

/// Parse `name=value` into an edit event. Flags become checkbox events, so
/// `fire=on` and `fire=true` both check the box.
pub fn parse_edit(input: &str) -> Result<EditEvent> {
    let (name, value) = split_edit(input)?;

    match TraitName::parse(name) {
        Some(TraitName::Flag(_)) => {
            let checked = match value.trim().to_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => true,
                "false" | "off" | "no" | "0" | "" => false,
                other => eyre::bail!("Invalid value {:?} for {}, expected true or false", other, name),
            };
            Ok(EditEvent::checked(name, checked))
        }
        _ => Ok(EditEvent::text(name, value)),
    }
}

/// Split `name=value`, tolerating whitespace around the name
fn split_edit(input: &str) -> Result<(&str, &str)> {
    let Some((_, name, value)) = regex_captures!(r"^\s*([A-Za-z][A-Za-z_-]*)\s*=(.*)$", input) else {
        eyre::bail!("Invalid edit {:?}, expected name=value", input);
    };
    Ok((name, value))
}

/// Apply edits in order, stopping at the first rejected one. `seed=...`
/// replaces all nine numeric traits at once.
pub fn apply_edits(state: &mut CliState, edits: &[String]) -> Result<()> {
    for edit in edits {
        let (name, value) = split_edit(edit)?;
        if name.eq_ignore_ascii_case("seed") {
            state.apply_seed(value).context(format!("Invalid seed {:?}", value))?;
            continue;
        }
        let event = parse_edit(edit)?;
        state.set_trait(event).context(format!("Failed to apply {:?}", edit))?;
    }
    Ok(())
}

/// Print a character in the requested format
pub fn render(config: &CharacterConfig, format: OutputFormat) -> Result<()> {
    let attributes = config.attributes();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&attributes)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&attributes)?),
        OutputFormat::Text => {
            let title = if config.name.is_empty() { "RPG Character" } else { config.name.as_str() };
            println!("{}", title.bold());
            println!("{}", "═".repeat(40));
            for (key, value) in &attributes {
                if *key == "name" {
                    continue;
                }
                let value = match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                println!("  {:<12} {}", key.cyan(), value);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationProvider;
    use crate::state::EditValue;

    #[test]
    fn test_parse_edit_text() {
        let event = parse_edit("hair=7").unwrap();
        assert_eq!(event, EditEvent::text("hair", "7"));

        let event = parse_edit("name=Sir Robin = brave").unwrap();
        assert_eq!(event.value, EditValue::Text("Sir Robin = brave".to_string()));
    }

    #[test]
    fn test_parse_edit_flags() {
        assert_eq!(parse_edit("fire=true").unwrap(), EditEvent::checked("fire", true));
        assert_eq!(parse_edit("walking=off").unwrap(), EditEvent::checked("walking", false));
        assert!(parse_edit("circle=maybe").is_err());
    }

    #[test]
    fn test_parse_edit_rejects_garbage() {
        assert!(parse_edit("hair").is_err());
        assert!(parse_edit("=7").is_err());
        assert!(parse_edit("7=7").is_err());
    }

    #[test]
    fn test_open_state_with_url() {
        let mut config = Config::default();
        config.clipboard.enabled = false;
        let state = open_state(Some("https://example.com/?seed=0100300000"), &config, false).unwrap();
        assert_eq!(state.config().hair, 3);
    }

    #[test]
    fn test_open_state_invalid_url() {
        assert!(open_state(Some("not a url"), &Config::default(), true).is_err());
    }

    #[test]
    fn test_apply_edits_stops_on_error() {
        let mut state = open_state(Some("https://example.com/"), &Config::default(), true).unwrap();
        let edits = vec!["hair=2".to_string(), "wings=3".to_string(), "skin=4".to_string()];
        assert!(apply_edits(&mut state, &edits).is_err());
        assert_eq!(state.config().hair, 2);
        assert_eq!(state.config().skin, 0);
    }

    #[test]
    fn test_apply_edits_seed() {
        let mut state = open_state(Some("https://example.com/"), &Config::default(), true).unwrap();
        let edits = vec!["seed=1234567890".to_string(), "hair=0".to_string()];
        apply_edits(&mut state, &edits).unwrap();
        assert_eq!(state.config().accessories, 1);
        assert_eq!(state.config().base, 1);
        assert_eq!(state.config().hair, 0);
        assert_eq!(state.location().current().query(), Some("seed=1134067890"));

        let bad = vec!["seed=12".to_string()];
        assert!(apply_edits(&mut state, &bad).is_err());
        assert_eq!(state.config().accessories, 1);
    }

    #[test]
    fn test_apply_edits_seed_name_is_lenient() {
        let mut state = open_state(Some("https://example.com/"), &Config::default(), true).unwrap();
        apply_edits(&mut state, &[" seed=3100000000".to_string()]).unwrap();
        assert_eq!(state.config().accessories, 3);

        apply_edits(&mut state, &["Seed=0500000000".to_string()]).unwrap();
        assert_eq!(state.config().accessories, 0);
        assert_eq!(state.config().base, 5);
        assert_eq!(state.location().current().query(), Some("seed=0500000000"));
    }
}
