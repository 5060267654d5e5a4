use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TributeError;

/// Hit locations tracked for a tribute. `Total` is the aggregate pool, every
/// other member is a physical part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyLocation {
    Total,
    Head,
    Torso,
    LArm,
    LHand,
    RArm,
    RHand,
    LLeg,
    LFoot,
    RLeg,
    RFoot,
}

impl BodyLocation {
    pub const ALL: [BodyLocation; 11] = [
        BodyLocation::Total,
        BodyLocation::Head,
        BodyLocation::Torso,
        BodyLocation::LArm,
        BodyLocation::LHand,
        BodyLocation::RArm,
        BodyLocation::RHand,
        BodyLocation::LLeg,
        BodyLocation::LFoot,
        BodyLocation::RLeg,
        BodyLocation::RFoot,
    ];

    /// Every location that can be targeted by damage.
    pub const PARTS: [BodyLocation; 10] = [
        BodyLocation::Head,
        BodyLocation::Torso,
        BodyLocation::LArm,
        BodyLocation::LHand,
        BodyLocation::RArm,
        BodyLocation::RHand,
        BodyLocation::LLeg,
        BodyLocation::LFoot,
        BodyLocation::RLeg,
        BodyLocation::RFoot,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BodyLocation::Total => "total",
            BodyLocation::Head => "head",
            BodyLocation::Torso => "torso",
            BodyLocation::LArm => "larm",
            BodyLocation::LHand => "lhand",
            BodyLocation::RArm => "rarm",
            BodyLocation::RHand => "rhand",
            BodyLocation::LLeg => "lleg",
            BodyLocation::LFoot => "lfoot",
            BodyLocation::RLeg => "rleg",
            BodyLocation::RFoot => "rfoot",
        }
    }

    pub fn is_part(self) -> bool {
        self != BodyLocation::Total
    }
}

impl fmt::Display for BodyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyLocation {
    type Err = TributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BodyLocation::ALL
            .into_iter()
            .find(|loc| loc.as_str() == s)
            .ok_or_else(|| TributeError::InvalidLocation(s.to_owned()))
    }
}

/// Hitpoints per location. `total` is its own counter and is not kept in
/// sync with the sum of the parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HitpointState {
    pub total: u32,
    pub head: u32,
    pub torso: u32,
    pub larm: u32,
    pub lhand: u32,
    pub rarm: u32,
    pub rhand: u32,
    pub lleg: u32,
    pub lfoot: u32,
    pub rleg: u32,
    pub rfoot: u32,
}

impl HitpointState {
    pub fn get(&self, location: BodyLocation) -> u32 {
        *self.slot(location)
    }

    pub fn set(&mut self, location: BodyLocation, value: u32) {
        *self.slot_mut(location) = value;
    }

    /// Subtracts `amount` from `location`, stopping at zero. Returns how much
    /// was actually removed.
    pub fn reduce(&mut self, location: BodyLocation, amount: u32) -> u32 {
        let slot = self.slot_mut(location);
        let before = *slot;
        *slot = before.saturating_sub(amount);
        before - *slot
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyLocation, u32)> + '_ {
        BodyLocation::ALL.into_iter().map(|loc| (loc, self.get(loc)))
    }

    fn slot(&self, location: BodyLocation) -> &u32 {
        match location {
            BodyLocation::Total => &self.total,
            BodyLocation::Head => &self.head,
            BodyLocation::Torso => &self.torso,
            BodyLocation::LArm => &self.larm,
            BodyLocation::LHand => &self.lhand,
            BodyLocation::RArm => &self.rarm,
            BodyLocation::RHand => &self.rhand,
            BodyLocation::LLeg => &self.lleg,
            BodyLocation::LFoot => &self.lfoot,
            BodyLocation::RLeg => &self.rleg,
            BodyLocation::RFoot => &self.rfoot,
        }
    }

    fn slot_mut(&mut self, location: BodyLocation) -> &mut u32 {
        match location {
            BodyLocation::Total => &mut self.total,
            BodyLocation::Head => &mut self.head,
            BodyLocation::Torso => &mut self.torso,
            BodyLocation::LArm => &mut self.larm,
            BodyLocation::LHand => &mut self.lhand,
            BodyLocation::RArm => &mut self.rarm,
            BodyLocation::RHand => &mut self.rhand,
            BodyLocation::LLeg => &mut self.lleg,
            BodyLocation::LFoot => &mut self.lfoot,
            BodyLocation::RLeg => &mut self.rleg,
            BodyLocation::RFoot => &mut self.rfoot,
        }
    }
}

impl fmt::Display for HitpointState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hitpoints(")?;
        for (idx, (loc, value)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{loc}={value}")?;
        }
        f.write_str(")")
    }
}
