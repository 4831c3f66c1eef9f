//! Character state
//!
//! `CharacterState` owns the current configuration and keeps the page
//! location in step with it. Edits arrive as uniform `(name, value)` events;
//! each one is applied, written back to the location and announced to
//! subscribers before `set_trait` returns.

use thiserror::Error;
use url::Url;

use crate::character::{self, CharacterConfig, Hat, MAX_SIZE, MIN_SIZE, SeedError, TraitName};
use crate::clipboard::ClipboardProvider;
use crate::location::LocationProvider;
use crate::params;

/// Value reported by a control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditValue {
    /// Sliders, text inputs, dropdowns
    Text(String),
    /// Checkboxes
    Checked(bool),
}

/// One user edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEvent {
    pub name: String,
    pub value: EditValue,
}

impl EditEvent {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: EditValue::Text(value.into()),
        }
    }

    pub fn checked(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            value: EditValue::Checked(checked),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("unknown trait: {0}")]
    UnknownTrait(String),

    #[error("unknown hat {0:?} (expected one of: {})", hat_names())]
    InvalidHat(String),
}

fn hat_names() -> String {
    Hat::ALL.iter().map(|h| h.as_str()).collect::<Vec<_>>().join(", ")
}

/// What changed in an update notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Trait(TraitName),
    Seed,
}

/// Result of a share action. Clipboard failure is not an error: the link is
/// handed back for display instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Copied { url: String },
    Fallback { url: String, reason: String },
}

impl ShareOutcome {
    pub fn url(&self) -> &str {
        match self {
            ShareOutcome::Copied { url } | ShareOutcome::Fallback { url, .. } => url,
        }
    }

    /// Text shown to the user
    pub fn message(&self) -> String {
        match self {
            ShareOutcome::Copied { url } => format!("Link copied to clipboard: {}", url),
            ShareOutcome::Fallback { url, .. } => format!("Shareable link: {}", url),
        }
    }
}

type Listener = Box<dyn FnMut(Change, &CharacterConfig)>;

pub struct CharacterState<L, C> {
    config: CharacterConfig,
    location: L,
    clipboard: C,
    listeners: Vec<Listener>,
}

impl<L: LocationProvider, C: ClipboardProvider> CharacterState<L, C> {
    /// Create the state, reading the location's query parameters once
    pub fn new(location: L, clipboard: C) -> Self {
        let config = params::load_from_url(&location.current());
        Self {
            config,
            location,
            clipboard,
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Subscribe to every change of the configuration
    pub fn on_change(&mut self, listener: impl FnMut(Change, &CharacterConfig) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, change: Change) {
        for listener in &mut self.listeners {
            listener(change, &self.config);
        }
    }

    /// Apply one edit event, then write the location
    pub fn set_trait(&mut self, event: EditEvent) -> Result<TraitName, EditError> {
        let name = TraitName::parse(&event.name).ok_or_else(|| EditError::UnknownTrait(event.name.clone()))?;

        match name {
            TraitName::Numeric(t) => {
                let value = t.coerce(coerce_number(&event.name, &event.value));
                self.config.set_numeric(t, value);
            }
            TraitName::Flag(flag) => {
                let checked = match &event.value {
                    EditValue::Checked(c) => *c,
                    EditValue::Text(s) => s == "true",
                };
                self.config.set_flag(flag, checked);
            }
            TraitName::Hat => {
                let text = value_text(&event.value);
                let hat = Hat::parse(&text).ok_or(EditError::InvalidHat(text))?;
                self.config.hat = hat;
            }
            TraitName::Name => {
                self.config.name = value_text(&event.value);
            }
            TraitName::Size => {
                let size = coerce_number(&event.name, &event.value).clamp(MIN_SIZE as i64, MAX_SIZE as i64);
                self.config.size = size as u16;
            }
        }

        if name.is_seed_encoded() {
            self.config.seed = Some(character::seed::encode(&self.config));
        }

        log::debug!("Set {} from {:?}", name, event.value);
        self.persist_to_url();
        self.notify(Change::Trait(name));
        Ok(name)
    }

    /// Decode `seed` into the numeric traits. A bad seed changes nothing.
    pub fn apply_seed(&mut self, seed: &str) -> Result<(), SeedError> {
        self.config.apply_seed(seed)?;
        self.persist_to_url();
        self.notify(Change::Seed);
        Ok(())
    }

    /// Rewrite the location's query from the current configuration
    pub fn persist_to_url(&mut self) {
        let query = params::build_query(&self.config);
        self.location.replace_query(Some(&query));
    }

    /// Absolute URL carrying the current configuration
    pub fn build_share_url(&self) -> Url {
        params::share_url(&self.location.current(), &self.config)
    }

    /// Build the share URL and try to copy it. State and location are not
    /// touched whatever the clipboard does.
    pub fn share(&self) -> ShareOutcome {
        let url = self.build_share_url().to_string();
        match self.clipboard.write_text(&url) {
            Ok(()) => {
                log::info!("Link copied to clipboard: {}", url);
                ShareOutcome::Copied { url }
            }
            Err(e) => {
                log::warn!("Clipboard write failed: {}", e);
                ShareOutcome::Fallback {
                    url,
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn value_text(value: &EditValue) -> String {
    match value {
        EditValue::Text(s) => s.clone(),
        EditValue::Checked(c) => c.to_string(),
    }
}

/// Best-effort numeric coercion: fractional input truncates, anything that is
/// not a number becomes 0.
fn coerce_number(name: &str, value: &EditValue) -> i64 {
    match value {
        EditValue::Checked(c) => *c as i64,
        EditValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => n as i64,
            _ => {
                log::warn!("Non-numeric value {:?} for {}, using 0", s, name);
                0
            }
        },
    }
}
