//! Maximum hitpoint derivation.
//!
//! Each physical part gets `strength * str + constitution * con + BASE_HP * base`,
//! truncated on its own. The `total` pool is a quarter of the sum of the
//! untruncated part values, truncated once at the end.

use tracing::debug;

use crate::ability::AbilityScores;
use crate::body::{BodyLocation, HitpointState};

pub const BASE_HP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multipliers {
    pub strength: f64,
    pub constitution: f64,
    pub base: f64,
}

const HEAD: Multipliers = Multipliers {
    strength: 0.0,
    constitution: 4.0,
    base: 1.0,
};
const TORSO: Multipliers = Multipliers {
    strength: 1.5,
    constitution: 3.0,
    base: 2.0,
};
const ARM: Multipliers = Multipliers {
    strength: 1.0,
    constitution: 2.0,
    base: 1.5,
};
const HAND: Multipliers = Multipliers {
    strength: 0.0,
    constitution: 2.0,
    base: 1.0,
};
const LEG: Multipliers = Multipliers {
    strength: 1.0,
    constitution: 3.0,
    base: 1.5,
};
const FOOT: Multipliers = Multipliers {
    strength: 0.0,
    constitution: 2.0,
    base: 1.0,
};

/// `None` for `Total`, which has no multipliers of its own.
pub fn multipliers_for(location: BodyLocation) -> Option<Multipliers> {
    match location {
        BodyLocation::Total => None,
        BodyLocation::Head => Some(HEAD),
        BodyLocation::Torso => Some(TORSO),
        BodyLocation::LArm | BodyLocation::RArm => Some(ARM),
        BodyLocation::LHand | BodyLocation::RHand => Some(HAND),
        BodyLocation::LLeg | BodyLocation::RLeg => Some(LEG),
        BodyLocation::LFoot | BodyLocation::RFoot => Some(FOOT),
    }
}

/// Untruncated maximum for one location. For `Total` this is the value
/// before the final truncation.
pub fn location_value(scores: &AbilityScores, location: BodyLocation) -> f64 {
    match multipliers_for(location) {
        Some(mult) => raw_hp(scores, mult),
        None => {
            BodyLocation::PARTS
                .into_iter()
                .map(|part| location_value(scores, part))
                .sum::<f64>()
                / 4.0
        }
    }
}

pub fn max_hitpoints(scores: &AbilityScores) -> HitpointState {
    let mut state = HitpointState::default();
    for loc in BodyLocation::ALL {
        state.set(loc, truncate(location_value(scores, loc)));
    }
    debug!(
        target: "tribute_core.hitpoints",
        strength = scores.strength,
        constitution = scores.constitution,
        total = state.total,
        "derived max hitpoints"
    );
    state
}

fn raw_hp(scores: &AbilityScores, mult: Multipliers) -> f64 {
    f64::from(scores.strength) * mult.strength
        + f64::from(scores.constitution) * mult.constitution
        + f64::from(BASE_HP) * mult.base
}

// Float-to-int `as` saturates, so huge scores clamp at u32::MAX.
fn truncate(value: f64) -> u32 {
    value.trunc() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(strength: u32, constitution: u32) -> AbilityScores {
        AbilityScores::new(strength, 0, constitution, 0, 0)
    }

    #[test]
    fn demo_scores_match_known_table() {
        let s = AbilityScores::new(16, 12, 16, 8, 10);
        // legs: 16 + 48 + 15; total: (74 + 92 + 126 + 84 + 158 + 84) / 4 = 154.5
        assert_eq!(location_value(&s, BodyLocation::LLeg), 79.0);
        assert_eq!(location_value(&s, BodyLocation::Total), 154.5);
        let max = max_hitpoints(&s);
        assert_eq!(
            max,
            HitpointState {
                total: 154,
                head: 74,
                torso: 92,
                larm: 63,
                lhand: 42,
                rarm: 63,
                rhand: 42,
                lleg: 79,
                lfoot: 42,
                rleg: 79,
                rfoot: 42,
            }
        );
    }

    #[test]
    fn parts_truncate_individually_total_truncates_once() {
        // str 1: torso 21.5, arms and legs 16
        let s = scores(1, 0);
        let max = max_hitpoints(&s);
        assert_eq!(max.torso, 21);
        assert_eq!(max.larm, 16);
        assert_eq!(max.lleg, 16);
        // 10 + 21.5 + 2 * (16 + 10 + 16 + 10) = 135.5
        assert_eq!(location_value(&s, BodyLocation::Torso), 21.5);
        assert_eq!(location_value(&s, BodyLocation::Total), 33.875);
        assert_eq!(max.total, 33);
    }

    #[test]
    fn zero_scores_only_carry_base() {
        let max = max_hitpoints(&scores(0, 0));
        assert_eq!(max.head, 10);
        assert_eq!(max.torso, 20);
        assert_eq!(max.larm, 15);
        assert_eq!(max.lhand, 10);
        assert_eq!(max.lleg, 15);
        assert_eq!(max.lfoot, 10);
        // 10 + 20 + 2*(15 + 10 + 15 + 10) = 130 -> 32.5
        assert_eq!(max.total, 32);
    }

    #[test]
    fn dexterity_intelligence_charisma_are_ignored() {
        let a = max_hitpoints(&AbilityScores::new(12, 0, 14, 0, 0));
        let b = max_hitpoints(&AbilityScores::new(12, 18, 14, 18, 18));
        assert_eq!(a, b);
    }

    #[test]
    fn calculation_is_pure() {
        for strength in 0..30 {
            for constitution in 0..30 {
                let s = scores(strength, constitution);
                assert_eq!(max_hitpoints(&s), max_hitpoints(&s));
            }
        }
    }

    #[test]
    fn total_is_quarter_of_real_sum_for_small_scores() {
        for strength in 0..40 {
            for constitution in 0..40 {
                let s = scores(strength, constitution);
                let real_sum: f64 = BodyLocation::PARTS
                    .into_iter()
                    .map(|loc| location_value(&s, loc))
                    .sum();
                assert_eq!(max_hitpoints(&s).total, (real_sum / 4.0).floor() as u32);
            }
        }
    }

    #[test]
    fn huge_scores_saturate() {
        let max = max_hitpoints(&scores(u32::MAX, u32::MAX));
        assert_eq!(max.head, u32::MAX);
        assert_eq!(max.total, u32::MAX);
    }
}
