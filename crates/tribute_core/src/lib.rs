//! Hitpoint model for a single tribute: derives per-location maximums from
//! ability scores, applies damage to body locations and answers whether the
//! tribute is still alive.

pub mod ability;
pub mod body;
pub mod calculator;
pub mod config;
pub mod equipment;
pub mod error;
pub mod scenario;
pub mod tribute;

pub use ability::AbilityScores;
pub use body::{BodyLocation, HitpointState};
pub use calculator::{max_hitpoints, BASE_HP};
pub use config::TributeConfig;
pub use equipment::{Armor, Profile, Weapons};
pub use error::{Result, TributeError};
pub use tribute::{DamageOutcome, DamageReport, TotalDrain, Tribute};
