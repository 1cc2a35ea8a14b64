//! Ship anti-air - adjusted (weighted) anti-air and fleet anti-air share

use crate::gear::{Equipment, Gear, GearAttributes, ImprovementTarget};
use crate::master::GearStat;

fn adjusted_weight(gear: &Gear<'_>) -> f64 {
    if gear.is(GearAttributes::ANTI_AIR_GUN) {
        6.0
    } else if gear.is_any(GearAttributes::HIGH_ANGLE_GUN | GearAttributes::ANTI_AIR_FIRE_DIRECTOR) {
        4.0
    } else if gear.is(GearAttributes::RADAR) {
        3.0
    } else {
        0.0
    }
}

fn fleet_weight(gear: &Gear<'_>) -> f64 {
    if gear.is_any(GearAttributes::HIGH_ANGLE_GUN | GearAttributes::ANTI_AIR_FIRE_DIRECTOR) {
        0.35
    } else if gear.is(GearAttributes::RADAR) {
        0.4
    } else if gear.is(GearAttributes::ANTI_AIR_SHELL) {
        0.6
    } else {
        0.2
    }
}

/// Ship adjusted anti-air: naked anti-air plus weighted gear anti-air
pub fn adjusted_anti_air(naked_anti_air: f64, equipment: &Equipment<'_>) -> f64 {
    naked_anti_air
        + equipment.sum_with(|gear| {
            adjusted_weight(gear) * gear.stat(GearStat::AntiAir)
                + gear.improvement(ImprovementTarget::AdjustedAntiAir)
        })
}

/// The ship's share of fleet anti-air, before the formation modifier
pub fn fleet_anti_air_contribution(equipment: &Equipment<'_>) -> f64 {
    equipment
        .sum_with(|gear| {
            fleet_weight(gear) * gear.stat(GearStat::AntiAir)
                + gear.improvement(ImprovementTarget::FleetAntiAir)
        })
        .floor()
}
