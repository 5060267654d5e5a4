use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::ability::AbilityScores;
use crate::body::{BodyLocation, HitpointState};
use crate::calculator::max_hitpoints;
use crate::equipment::{Armor, Profile, Weapons};
use crate::error::{Result, TributeError};

/// How the `total` pool reacts when a part is hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalDrain {
    /// Every hit removes the full damage amount from `total`, even when the
    /// part itself had less left. Multi-location hits drain `total` once per
    /// location. Default.
    #[default]
    Coupled,
    /// `total` only loses what the part actually absorbed, so overkill on a
    /// spent limb costs nothing.
    Absorbed,
}

/// One status line produced while applying damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DamageReport {
    Hit {
        location: BodyLocation,
        remaining: u32,
        total: u32,
    },
    Dead {
        name: String,
    },
}

impl fmt::Display for DamageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageReport::Hit {
                location,
                remaining,
                total,
            } => write!(
                f,
                "{location} hitpoints: {remaining}\n{} hitpoints: {total}",
                BodyLocation::Total
            ),
            DamageReport::Dead { name } => write!(f, "{name} is dead!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOutcome {
    pub amount: u32,
    /// Locations actually hit; shorter than the request when death stopped
    /// the batch.
    pub processed: Vec<BodyLocation>,
    pub reports: Vec<DamageReport>,
    pub alive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tribute {
    pub profile: Profile,
    pub ability_scores: AbilityScores,
    pub weapons: Weapons,
    pub armor: Armor,
    max_hitpoints: HitpointState,
    hitpoints: HitpointState,
    total_drain: TotalDrain,
}

impl Tribute {
    /// Starts at full health: current hitpoints equal the derived maximum.
    pub fn new(
        profile: Profile,
        ability_scores: AbilityScores,
        weapons: Weapons,
        armor: Armor,
    ) -> Self {
        let max_hitpoints = max_hitpoints(&ability_scores);
        Self {
            profile,
            ability_scores,
            weapons,
            armor,
            max_hitpoints,
            hitpoints: max_hitpoints,
            total_drain: TotalDrain::default(),
        }
    }

    /// Replaces the current hitpoints, e.g. to enter the arena already wounded.
    pub fn with_hitpoints(mut self, hitpoints: HitpointState) -> Result<Self> {
        for (location, value) in hitpoints.iter() {
            let max = self.max_hitpoints.get(location);
            if value > max {
                return Err(TributeError::InvalidHitpoints {
                    location,
                    value,
                    max,
                });
            }
        }
        self.hitpoints = hitpoints;
        Ok(self)
    }

    pub fn with_total_drain(mut self, total_drain: TotalDrain) -> Self {
        self.total_drain = total_drain;
        self
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn hitpoints(&self) -> &HitpointState {
        &self.hitpoints
    }

    pub fn max_hitpoints(&self) -> &HitpointState {
        &self.max_hitpoints
    }

    pub fn total_drain(&self) -> TotalDrain {
        self.total_drain
    }

    pub fn is_alive(&self) -> bool {
        self.hitpoints.total > 0 && self.hitpoints.head > 0 && self.hitpoints.torso > 0
    }

    /// Validates `amount` and every location name before touching any state,
    /// then hits each location in order. Stops at the first hit that leaves
    /// the tribute dead.
    pub fn take_damage<I, S>(&mut self, amount: i64, locations: I) -> Result<DamageOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if amount < 0 {
            return Err(TributeError::InvalidInput(format!(
                "damage amount must be non-negative, got {amount}"
            )));
        }
        let amount = u32::try_from(amount).map_err(|_| {
            TributeError::InvalidInput(format!("damage amount {amount} is out of range"))
        })?;
        let targets = locations
            .into_iter()
            .map(|name| name.as_ref().parse::<BodyLocation>())
            .collect::<Result<Vec<_>>>()?;
        self.apply_damage(amount, &targets)
    }

    pub fn apply_damage(
        &mut self,
        amount: u32,
        locations: &[BodyLocation],
    ) -> Result<DamageOutcome> {
        if let Some(loc) = locations.iter().find(|loc| !loc.is_part()) {
            return Err(TributeError::InvalidLocation(loc.to_string()));
        }

        let mut outcome = DamageOutcome {
            amount,
            processed: Vec::with_capacity(locations.len()),
            reports: Vec::with_capacity(locations.len()),
            alive: self.is_alive(),
        };

        for &location in locations {
            let absorbed = self.hitpoints.reduce(location, amount);
            let drained = match self.total_drain {
                TotalDrain::Coupled => amount,
                TotalDrain::Absorbed => absorbed,
            };
            self.hitpoints.reduce(BodyLocation::Total, drained);
            outcome.processed.push(location);

            if !self.is_alive() {
                warn!(
                    target: "tribute_core.damage",
                    tribute = %self.profile.name,
                    %location,
                    "tribute is dead"
                );
                outcome.reports.push(DamageReport::Dead {
                    name: self.profile.name.clone(),
                });
                outcome.alive = false;
                break;
            }

            let remaining = self.hitpoints.get(location);
            info!(
                target: "tribute_core.damage",
                tribute = %self.profile.name,
                %location,
                amount,
                remaining,
                total = self.hitpoints.total,
                "hit"
            );
            outcome.reports.push(DamageReport::Hit {
                location,
                remaining,
                total: self.hitpoints.total,
            });
            outcome.alive = true;
        }

        Ok(outcome)
    }
}

impl fmt::Display for Tribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.profile)?;
        writeln!(f, "{}", self.ability_scores)?;
        writeln!(f, "{}", self.weapons)?;
        writeln!(f, "{}", self.armor)?;
        write!(f, "{}", self.hitpoints)
    }
}
