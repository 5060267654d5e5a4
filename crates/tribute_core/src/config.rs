use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::ability::AbilityScores;
use crate::body::HitpointState;
use crate::equipment::{Armor, Profile, Weapons};
use crate::tribute::{TotalDrain, Tribute};

/// A tribute described in TOML.
#[derive(Debug, Deserialize)]
pub struct TributeConfig {
    pub profile: Profile,
    pub ability_scores: AbilityScores,
    #[serde(default)]
    pub weapons: Weapons,
    #[serde(default)]
    pub armor: Armor,
    /// Current hitpoints to start from instead of the derived maximum.
    #[serde(default)]
    pub hitpoints: Option<HitpointState>,
    #[serde(default)]
    pub damage: DamageConfig,
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

impl TributeConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read tribute config {}", path.display()))?;
        Self::parse(&data).with_context(|| format!("invalid tribute config {}", path.display()))
    }

    pub fn parse(data: &str) -> Result<Self> {
        let cfg: TributeConfig = toml::from_str(data)?;
        Ok(cfg)
    }

    pub fn into_tribute(self) -> Result<Tribute> {
        let mut tribute = Tribute::new(
            self.profile,
            self.ability_scores,
            self.weapons,
            self.armor,
        )
        .with_total_drain(self.damage.total_drain);
        if let Some(hitpoints) = self.hitpoints {
            tribute = tribute.with_hitpoints(hitpoints)?;
        }
        Ok(tribute)
    }

    pub fn trace_filter(&self) -> Option<&str> {
        self.telemetry.as_ref()?.trace_filter.as_deref()
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct DamageConfig {
    #[serde(default)]
    pub total_drain: TotalDrain,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub trace_filter: Option<String>,
}
