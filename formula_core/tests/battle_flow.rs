//! End-to-end flows: master data -> ship -> attack power -> damage

use formula_core::prelude::*;
use formula_core::variant::{DayCutinContext, ShellingTypeContext};
use formula_core::{attack_power, variant};

const NIGHT_FLEET: &str = r#"
[[ships]]
id = 1
name = "Cruiser"
ship_type = "light_cruiser"
slot_sizes = [2, 2, 2]
max_hp = { left = 40, right = 60 }

[[ships]]
id = 2
name = "Destroyer A"
ship_type = "destroyer"
max_hp = { left = 30, right = 60 }

[[ships]]
id = 3
name = "Destroyer B"
ship_type = "destroyer"
max_hp = { left = 30, right = 60 }

[[gears]]
id = 469
name = "Night Recon"
category = "recon_seaplane"
los = 10
accuracy = 1
"#;

#[test]
fn test_night_contact_scenario() {
    let master = MasterData::from_toml_str(NIGHT_FLEET).unwrap();
    let states = [
        ShipState::new(1, 99).with_gears(&[GearState::new(469)]),
        ShipState::new(2, 99),
        ShipState::new(3, 99),
    ];
    let fleet = Fleet::from_states(&master, &states);
    assert_eq!(fleet.len(), 3);

    // floor(sqrt(10) * sqrt(99)) / 25 = 31 / 25, clamped to 1
    let single = formula_core::fleet::contact_probability(10.0, 99);
    assert!((single - 1.0).abs() < f64::EPSILON);

    let chance = fleet.night_contact_chance();
    assert!(chance.rank1.abs() < f64::EPSILON);
    assert!(chance.rank2.abs() < f64::EPSILON);
    assert!((chance.rank3 - 1.0).abs() < f64::EPSILON);
    assert!(chance.total() <= 1.0 + 1e-12);
}

#[test]
fn test_unknown_ids_are_absent() {
    let master = default_master_data();
    assert!(Ship::from_state(&master, &ShipState::new(9999, 99)).is_none());

    // the unknown gear contributes nothing
    let state = ShipState::new(541, 99).with_gears(&[GearState::new(9999), GearState::new(8)]);
    let ship = Ship::from_state(&master, &state).unwrap();
    assert!((ship.stats().firepower.displayed() - 103.0).abs() < f64::EPSILON);
}

#[test]
fn test_spotting_battleship_into_damage() {
    let master = default_master_data();
    let constants = FormulaConstants::default();
    let state = ShipState::new(82, 99).with_gears(&[
        GearState::new(8),
        GearState::new(8),
        GearState::new(36),
        GearState::new(102),
    ]);
    let ise = Ship::from_state(&master, &state).unwrap();

    let shelling = variant::shelling_type(&ShellingTypeContext::from_ship(&ise, TargetKind::Surface));
    assert_eq!(shelling, ShellingType::Shelling);

    let context = DayCutinContext::from_ship(&ise, AirState::AirSupremacy);
    let cutin = select_variant::<DayCutin>(&context);
    assert_eq!(cutin, DayCutin::MainMain);

    // no air control leaves only the fallback
    let denied = DayCutinContext::from_ship(&ise, AirState::AirDenial);
    assert_eq!(select_variant::<DayCutin>(&denied), DayCutin::Normal);

    // 63 + 48 + 5 = 116, floor(116 * 1.08) = 125, then the cut-in
    let situation = AttackSituation::default().armored();
    let attack = shelling_attack_power(&ise, &situation, cutin, &constants);
    assert!((attack.power.basic - 116.0).abs() < f64::EPSILON);
    assert!(!attack.power.is_capped);
    assert!((attack.power.postcap - 187.5).abs() < 1e-9);

    // Yuudachi Kai Ni armor 14: defense 9.8 to 17.6
    let target = Ship::from_state(&master, &ShipState::new(144, 99)).unwrap();
    let defense = DefensePower::from_armor(target.stats().armor.displayed(), &constants.damage);
    let range = resolve_damage(attack.power.postcap, &defense, &DamageModifiers::default(), target.current_hp());
    assert_eq!(range.min, 169);
    assert_eq!(range.max, 177);
    assert!(range.is_deadly);
}

#[test]
fn test_capped_power_keeps_sqrt_growth() {
    let modifiers = AttackPowerModifiers {
        a13: Some(1.2),
        ..AttackPowerModifiers::default()
    };
    // 200 * 1.2 = 240 -> 220 + sqrt(20)
    let result = calc_attack_power(200.0, 220.0, &modifiers, &StageHooks::none());
    assert!(result.is_capped);
    assert!((result.capped - (220.0 + 20.0_f64.sqrt())).abs() < 1e-9);
    assert!((result.postcap - 224.0).abs() < f64::EPSILON);
    assert!((attack_power::softcap(220.0, 100.0) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_constants_override_from_toml() {
    let constants = FormulaConstants::from_toml_str(
        r#"
[caps]
day_shelling = 180.0

[critical]
multiplier = 1.5
"#,
    )
    .unwrap();
    assert!((constants.caps.day_shelling - 180.0).abs() < f64::EPSILON);
    assert!((constants.caps.night - 360.0).abs() < f64::EPSILON);
}

#[test]
fn test_night_cutin_rate_chain_sums_to_one() {
    let master = default_master_data();
    let state = ShipState::new(144, 99).with_gears(&[GearState::new(15), GearState::new(15)]);
    let ship = Ship::from_state(&master, &state).unwrap();
    let context = variant::NightCutinContext::from_ship(&ship);
    let term = variant::night_cutin_term(&ship, &variant::NightSituation::default());
    let rates = night_cutin_rates(&context, term);
    assert!(rates.rate_of(NightCutin::TorpTorp) > 0.0);
    assert!((rates.total() + rates.fallback_rate() - 1.0).abs() < 1e-9);
}
