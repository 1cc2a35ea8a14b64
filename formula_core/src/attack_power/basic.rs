//! Basic attack power per attack kind

use crate::gear::ImprovementTarget;
use crate::master::GearStat;
use crate::ship::Ship;
use crate::types::ShipType;
use crate::variant::ShellingType;

pub fn shelling_basic_power(firepower: f64, improvement: f64) -> f64 {
    firepower + 5.0 + improvement
}

/// `floor((firepower + torpedo + floor(bombing * 1.3) + improvement) * 1.5) + 55`
pub fn carrier_shelling_basic_power(firepower: f64, torpedo: f64, bombing: f64, improvement: f64) -> f64 {
    ((firepower + torpedo + (bombing * 1.3).floor() + improvement) * 1.5).floor() + 55.0
}

pub fn torpedo_basic_power(torpedo: f64, improvement: f64) -> f64 {
    torpedo + 5.0 + improvement
}

pub fn night_basic_power(firepower: f64, torpedo: f64, improvement: f64) -> f64 {
    firepower + torpedo + improvement
}

/// `sqrt(naked asw) * 2 + equipment asw * 1.5 + improvement + type constant`
pub fn asw_basic_power(naked_asw: f64, equipment_asw: f64, improvement: f64, type_constant: f64) -> f64 {
    naked_asw.sqrt() * 2.0 + equipment_asw * 1.5 + improvement + type_constant
}

/// 8 for attacks carried out by aircraft, 13 for depth charges
pub fn asw_type_constant(ship_type: ShipType) -> f64 {
    if uses_aircraft_for_asw(ship_type) {
        8.0
    } else {
        13.0
    }
}

fn uses_aircraft_for_asw(ship_type: ShipType) -> bool {
    ship_type.is_carrier_class()
        || matches!(
            ship_type,
            ShipType::AviationCruiser
                | ShipType::AviationBattleship
                | ShipType::SeaplaneTender
                | ShipType::AmphibiousAssaultShip
        )
}

/// Day basic power of a ship for the given shelling type
pub fn day_shelling_basic(ship: &Ship<'_>, shelling_type: ShellingType) -> f64 {
    let stats = ship.stats();
    let equipment = ship.equipment();
    let improvement = equipment.sum_with(|g| g.improvement(ImprovementTarget::Shelling));
    match shelling_type {
        ShellingType::Shelling => shelling_basic_power(stats.firepower.displayed(), improvement),
        ShellingType::CarrierShelling => carrier_shelling_basic_power(
            stats.firepower.displayed(),
            stats.torpedo.displayed(),
            equipment.sum_by(GearStat::Bombing),
            improvement,
        ),
    }
}

pub fn torpedo_basic(ship: &Ship<'_>) -> f64 {
    let improvement = ship
        .equipment()
        .sum_with(|g| g.improvement(ImprovementTarget::Torpedo));
    torpedo_basic_power(ship.stats().torpedo.displayed(), improvement)
}

pub fn night_basic(ship: &Ship<'_>) -> f64 {
    let stats = ship.stats();
    let improvement = ship
        .equipment()
        .sum_with(|g| g.improvement(ImprovementTarget::Night));
    night_basic_power(stats.firepower.displayed(), stats.torpedo.displayed(), improvement)
}

pub fn asw_basic(ship: &Ship<'_>) -> f64 {
    let equipment = ship.equipment();
    asw_basic_power(
        ship.stats().asw.naked(),
        equipment.sum_by(GearStat::Asw),
        equipment.sum_with(|g| g.improvement(ImprovementTarget::Asw)),
        asw_type_constant(ship.ship_type()),
    )
}
