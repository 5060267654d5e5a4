use std::fmt;

use serde::{Deserialize, Serialize};

/// The five attributes a tribute enters the arena with.
///
/// Only `strength` and `constitution` feed the hitpoint formula; the rest are
/// carried for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: u32,
    pub dexterity: u32,
    pub constitution: u32,
    pub intelligence: u32,
    pub charisma: u32,
}

impl AbilityScores {
    pub fn new(
        strength: u32,
        dexterity: u32,
        constitution: u32,
        intelligence: u32,
        charisma: u32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            charisma,
        }
    }
}

impl fmt::Display for AbilityScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AbilityScores(strength={}, dexterity={}, constitution={}, intelligence={}, charisma={})",
            self.strength, self.dexterity, self.constitution, self.intelligence, self.charisma
        )
    }
}
