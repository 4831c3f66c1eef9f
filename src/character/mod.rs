//! Character configuration
//!
//! A character is a plain record of trait values: nine single-digit numeric
//! traits (encoded into the seed), the hat, three boolean flags, and the
//! display-only name and size.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod seed;

pub use seed::{Seed, SeedError, SeedTraits};

pub const DEFAULT_SIZE: u16 = 200;
pub const MIN_SIZE: u16 = 100;
pub const MAX_SIZE: u16 = 600;

/// Hats the avatar renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hat {
    #[default]
    None,
    Bunny,
    Coffee,
    Construction,
    Cowboy,
    Education,
    Knight,
    Ninja,
    Party,
    Pirate,
    Watermelon,
}

impl Hat {
    pub const ALL: [Hat; 11] = [
        Hat::None,
        Hat::Bunny,
        Hat::Coffee,
        Hat::Construction,
        Hat::Cowboy,
        Hat::Education,
        Hat::Knight,
        Hat::Ninja,
        Hat::Party,
        Hat::Pirate,
        Hat::Watermelon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Hat::None => "none",
            Hat::Bunny => "bunny",
            Hat::Coffee => "coffee",
            Hat::Construction => "construction",
            Hat::Cowboy => "cowboy",
            Hat::Education => "education",
            Hat::Knight => "knight",
            Hat::Ninja => "ninja",
            Hat::Party => "party",
            Hat::Pirate => "pirate",
            Hat::Watermelon => "watermelon",
        }
    }

    /// Exact match against the hat whitelist; no case folding.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|hat| hat.as_str() == s)
    }
}

impl fmt::Display for Hat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The nine traits carried by the seed, in seed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericTrait {
    Accessories,
    Base,
    Face,
    FaceItem,
    Hair,
    Pants,
    Shirt,
    Skin,
    HatColor,
}

impl NumericTrait {
    pub const SEED_ORDER: [NumericTrait; 9] = [
        NumericTrait::Accessories,
        NumericTrait::Base,
        NumericTrait::Face,
        NumericTrait::FaceItem,
        NumericTrait::Hair,
        NumericTrait::Pants,
        NumericTrait::Shirt,
        NumericTrait::Skin,
        NumericTrait::HatColor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NumericTrait::Accessories => "accessories",
            NumericTrait::Base => "base",
            NumericTrait::Face => "face",
            NumericTrait::FaceItem => "faceItem",
            NumericTrait::Hair => "hair",
            NumericTrait::Pants => "pants",
            NumericTrait::Shirt => "shirt",
            NumericTrait::Skin => "skin",
            NumericTrait::HatColor => "hatColor",
        }
    }

    /// Largest value the trait accepts from a control
    pub fn max(&self) -> u8 {
        match self {
            NumericTrait::Base => 5,
            NumericTrait::Face => 5,
            _ => 9,
        }
    }

    /// Fit an arbitrary integer into the trait's range. `base` only knows 1 and 5.
    pub fn coerce(&self, value: i64) -> u8 {
        match self {
            NumericTrait::Base => normalize_base(value),
            _ => value.clamp(0, self.max() as i64) as u8,
        }
    }
}

/// Body type: 5 selects the alternate base, everything else the default.
pub fn normalize_base(value: i64) -> u8 {
    if value == 5 { 5 } else { 1 }
}

/// Boolean flags sent as separate URL parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Fire,
    Walking,
    Circle,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Flag::Fire, Flag::Walking, Flag::Circle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Fire => "fire",
            Flag::Walking => "walking",
            Flag::Circle => "circle",
        }
    }
}

/// Any editable trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraitName {
    Numeric(NumericTrait),
    Flag(Flag),
    Hat,
    Name,
    Size,
}

impl TraitName {
    /// Resolve a control name. Both spellings used by the widget variants are
    /// accepted (`faceItem`/`faceitem`, `hatColor`/`hatcolor`).
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.to_lowercase().replace(['-', '_'], "");
        let name = match key.as_str() {
            "accessories" => Self::Numeric(NumericTrait::Accessories),
            "base" => Self::Numeric(NumericTrait::Base),
            "face" => Self::Numeric(NumericTrait::Face),
            "faceitem" => Self::Numeric(NumericTrait::FaceItem),
            "hair" => Self::Numeric(NumericTrait::Hair),
            "pants" => Self::Numeric(NumericTrait::Pants),
            "shirt" => Self::Numeric(NumericTrait::Shirt),
            "skin" => Self::Numeric(NumericTrait::Skin),
            "hatcolor" => Self::Numeric(NumericTrait::HatColor),
            "fire" => Self::Flag(Flag::Fire),
            "walking" => Self::Flag(Flag::Walking),
            "circle" => Self::Flag(Flag::Circle),
            "hat" => Self::Hat,
            "name" => Self::Name,
            "size" => Self::Size,
            _ => return None,
        };
        Some(name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TraitName::Numeric(t) => t.as_str(),
            TraitName::Flag(f) => f.as_str(),
            TraitName::Hat => "hat",
            TraitName::Name => "name",
            TraitName::Size => "size",
        }
    }

    pub fn is_seed_encoded(&self) -> bool {
        matches!(self, TraitName::Numeric(_))
    }
}

impl fmt::Display for TraitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current avatar configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterConfig {
    pub accessories: u8,
    pub base: u8,
    pub face: u8,
    pub face_item: u8,
    pub hair: u8,
    pub pants: u8,
    pub shirt: u8,
    pub skin: u8,
    pub hat_color: u8,
    pub hat: Hat,
    pub fire: bool,
    pub walking: bool,
    pub circle: bool,
    pub name: String,
    pub size: u16,
    /// Unset until the first seed-relevant edit or a valid `seed` parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<Seed>,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            accessories: 0,
            base: 1,
            face: 0,
            face_item: 0,
            hair: 0,
            pants: 0,
            shirt: 0,
            skin: 0,
            hat_color: 0,
            hat: Hat::None,
            fire: false,
            walking: false,
            circle: false,
            name: String::new(),
            size: DEFAULT_SIZE,
            seed: None,
        }
    }
}

impl CharacterConfig {
    pub fn numeric(&self, t: NumericTrait) -> u8 {
        match t {
            NumericTrait::Accessories => self.accessories,
            NumericTrait::Base => self.base,
            NumericTrait::Face => self.face,
            NumericTrait::FaceItem => self.face_item,
            NumericTrait::Hair => self.hair,
            NumericTrait::Pants => self.pants,
            NumericTrait::Shirt => self.shirt,
            NumericTrait::Skin => self.skin,
            NumericTrait::HatColor => self.hat_color,
        }
    }

    pub fn set_numeric(&mut self, t: NumericTrait, value: u8) {
        let slot = match t {
            NumericTrait::Accessories => &mut self.accessories,
            NumericTrait::Base => &mut self.base,
            NumericTrait::Face => &mut self.face,
            NumericTrait::FaceItem => &mut self.face_item,
            NumericTrait::Hair => &mut self.hair,
            NumericTrait::Pants => &mut self.pants,
            NumericTrait::Shirt => &mut self.shirt,
            NumericTrait::Skin => &mut self.skin,
            NumericTrait::HatColor => &mut self.hat_color,
        };
        *slot = value;
    }

    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::Fire => self.fire,
            Flag::Walking => self.walking,
            Flag::Circle => self.circle,
        }
    }

    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        match flag {
            Flag::Fire => self.fire = value,
            Flag::Walking => self.walking = value,
            Flag::Circle => self.circle = value,
        }
    }

    /// The nine seed-encoded values, in seed order
    pub fn seed_traits(&self) -> SeedTraits {
        SeedTraits(NumericTrait::SEED_ORDER.map(|t| self.numeric(t)))
    }

    /// Overwrite the nine numeric traits from decoded seed values
    pub fn apply_seed_traits(&mut self, traits: &SeedTraits) {
        for (t, value) in NumericTrait::SEED_ORDER.iter().zip(traits.0) {
            self.set_numeric(*t, value);
        }
    }

    /// Decode `seed` and apply it. A seed that fails to decode leaves the
    /// config untouched and the error is returned to the caller.
    pub fn apply_seed(&mut self, seed: &str) -> Result<(), SeedError> {
        let traits = seed::decode(seed)?;
        self.apply_seed_traits(&traits);
        self.seed = Some(seed::encode(self));
        Ok(())
    }

    /// The stored seed, or the encoding of the current traits if none was set yet
    pub fn effective_seed(&self) -> Seed {
        self.seed.clone().unwrap_or_else(|| seed::encode(self))
    }

    /// Everything the renderer consumes, in display order
    pub fn attributes(&self) -> IndexMap<&'static str, serde_json::Value> {
        let mut attrs = IndexMap::new();
        for t in NumericTrait::SEED_ORDER {
            attrs.insert(t.as_str(), serde_json::Value::from(self.numeric(t)));
        }
        attrs.insert("hat", serde_json::Value::from(self.hat.as_str()));
        for flag in Flag::ALL {
            attrs.insert(flag.as_str(), serde_json::Value::from(self.flag(flag)));
        }
        attrs.insert("name", serde_json::Value::from(self.name.clone()));
        attrs.insert("size", serde_json::Value::from(self.size));
        attrs.insert("seed", serde_json::Value::from(self.effective_seed().to_string()));
        attrs
    }
}
