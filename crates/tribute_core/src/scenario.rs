//! The demo tribute and the opening volley used for regression checks.

use crate::ability::AbilityScores;
use crate::body::BodyLocation;
use crate::equipment::{Armor, Profile, Weapons};
use crate::error::Result;
use crate::tribute::{DamageOutcome, Tribute};

pub const DEMO_DAMAGE: u32 = 18;

pub const DEMO_TARGETS: [BodyLocation; 5] = [
    BodyLocation::Head,
    BodyLocation::LArm,
    BodyLocation::RArm,
    BodyLocation::LLeg,
    BodyLocation::Torso,
];

pub fn demo_tribute() -> Tribute {
    Tribute::new(
        Profile::new(
            "Donny Dingle",
            180,
            72,
            "An accomplished warrior.",
            "he/him/his",
        ),
        AbilityScores::new(16, 12, 16, 8, 10),
        Weapons {
            main: "fists".into(),
            secondary: "fists".into(),
            ranged: "fists".into(),
            ammo: 69,
        },
        Armor {
            head: "leather".into(),
            torso: "steel".into(),
            arms: "leather".into(),
            hands: "leather".into(),
            legs: "steel".into(),
            feet: "steel".into(),
        },
    )
}

pub fn run_demo(tribute: &mut Tribute) -> Result<DamageOutcome> {
    tribute.apply_damage(DEMO_DAMAGE, &DEMO_TARGETS)
}
