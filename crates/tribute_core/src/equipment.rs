//! Profile and equipment records. None of these influence damage.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub weight: u32,
    pub height: u32,
    #[serde(default)]
    pub description: String,
    /// Subject, object and possessive forms, e.g. `["he", "him", "his"]`.
    #[serde(default)]
    pub pronouns: Vec<String>,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        weight: u32,
        height: u32,
        description: impl Into<String>,
        pronouns: &str,
    ) -> Self {
        Self {
            name: name.into(),
            weight,
            height,
            description: description.into(),
            pronouns: pronouns.split('/').map(str::to_owned).collect(),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Profile(name={:?}, weight={}, height={}, description={:?}, pronouns={})",
            self.name,
            self.weight,
            self.height,
            self.description,
            self.pronouns.join("/")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weapons {
    pub main: String,
    pub secondary: String,
    pub ranged: String,
    pub ammo: u32,
}

impl Default for Weapons {
    fn default() -> Self {
        Self {
            main: "fists".into(),
            secondary: "fists".into(),
            ranged: "fists".into(),
            ammo: 0,
        }
    }
}

impl fmt::Display for Weapons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weapons(main={}, secondary={}, ranged={}, ammo={})",
            self.main, self.secondary, self.ranged, self.ammo
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Armor {
    pub head: String,
    pub torso: String,
    pub arms: String,
    pub hands: String,
    pub legs: String,
    pub feet: String,
}

impl fmt::Display for Armor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Armor(head={}, torso={}, arms={}, hands={}, legs={}, feet={})",
            slot(&self.head),
            slot(&self.torso),
            slot(&self.arms),
            slot(&self.hands),
            slot(&self.legs),
            slot(&self.feet)
        )
    }
}

fn slot(piece: &str) -> &str {
    if piece.is_empty() {
        "none"
    } else {
        piece
    }
}
