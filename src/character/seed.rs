//! Seed codec
//!
//! A seed is ten ASCII digits: one per numeric trait in seed order, then a
//! reserved `0`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{CharacterConfig, normalize_base};

pub const SEED_LEN: usize = 10;
const RESERVED_DIGIT: char = '0';
const BASE_INDEX: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("seed must be 10 characters, got {0}")]
    WrongLength(usize),

    #[error("seed has non-digit {found:?} at position {position}")]
    NonDigit { position: usize, found: char },
}

/// A well-formed seed string. Deserializing goes through `decode`, so only
/// valid seeds get in, stored in their canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Seed(String);

impl Seed {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_traits(traits: &SeedTraits) -> Self {
        let mut seed: String = traits.0.iter().map(|&v| char::from(b'0' + v.min(9))).collect();
        seed.push(RESERVED_DIGIT);
        Seed(seed)
    }
}

impl TryFrom<String> for Seed {
    type Error = SeedError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        decode(&s).map(|traits| Seed::from_traits(&traits))
    }
}

impl From<Seed> for String {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoded numeric trait values, in seed order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedTraits(pub [u8; 9]);

/// Encode the nine numeric traits. Values above 9 are clamped to 9 so the
/// result always has exactly one digit per trait.
pub fn encode(config: &CharacterConfig) -> Seed {
    Seed::from_traits(&config.seed_traits())
}

/// Decode a seed. Input is not trimmed; any character other than an ASCII
/// digit in positions 0-8 rejects the whole seed.
pub fn decode(seed: &str) -> Result<SeedTraits, SeedError> {
    let chars: Vec<char> = seed.chars().collect();
    if chars.len() != SEED_LEN {
        return Err(SeedError::WrongLength(chars.len()));
    }

    let mut values = [0u8; 9];
    for (position, (slot, &c)) in values.iter_mut().zip(&chars).enumerate() {
        let digit = c.to_digit(10).ok_or(SeedError::NonDigit { position, found: c })?;
        *slot = digit as u8;
    }
    values[BASE_INDEX] = normalize_base(values[BASE_INDEX] as i64);

    log::debug!("Decoded seed {} into {:?}", seed, values);
    Ok(SeedTraits(values))
}
