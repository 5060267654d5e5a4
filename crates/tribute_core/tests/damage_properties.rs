use tribute_core::{AbilityScores, Armor, BodyLocation, Profile, TotalDrain, Tribute, Weapons};

fn tribute(strength: u32, constitution: u32) -> Tribute {
    Tribute::new(
        Profile::new("Glimmer", 120, 65, "", "she/her/hers"),
        AbilityScores::new(strength, 10, constitution, 10, 10),
        Weapons::default(),
        Armor::default(),
    )
}

#[test]
fn every_part_drops_by_amount_or_to_zero() {
    for amount in [0u32, 1, 17, 41, 42, 43, 90, 200] {
        for loc in BodyLocation::PARTS {
            let mut t = tribute(14, 12);
            let before = t.hitpoints().get(loc);
            t.apply_damage(amount, &[loc]).unwrap();
            assert_eq!(
                t.hitpoints().get(loc),
                before.saturating_sub(amount),
                "{loc} after {amount}"
            );
        }
    }
}

#[test]
fn max_hitpoints_never_change() {
    let mut t = tribute(10, 10);
    let max = *t.max_hitpoints();
    t.take_damage(25, ["lfoot", "rfoot", "lhand"]).unwrap();
    t.take_damage(25, ["torso"]).unwrap();
    assert_eq!(t.max_hitpoints(), &max);
}

#[test]
fn coupled_total_drains_faster_than_parts() {
    let mut coupled = tribute(10, 10);
    let mut absorbed = tribute(10, 10).with_total_drain(TotalDrain::Absorbed);
    let hits = ["lhand", "lhand", "rhand", "rhand"];
    coupled.take_damage(30, hits).unwrap();
    absorbed.take_damage(30, hits).unwrap();

    assert_eq!(coupled.hitpoints().lhand, absorbed.hitpoints().lhand);
    assert!(coupled.hitpoints().total < absorbed.hitpoints().total);
}

#[test]
fn failed_call_leaves_state_intact() {
    let mut t = tribute(10, 10);
    t.take_damage(5, ["head"]).unwrap();
    let snapshot = *t.hitpoints();
    assert!(t.take_damage(5, ["torso", "wing"]).is_err());
    assert!(t.take_damage(-1, ["torso"]).is_err());
    assert!(t.apply_damage(5, &[BodyLocation::Torso, BodyLocation::Total]).is_err());
    assert_eq!(t.hitpoints(), &snapshot);
}
