//! Transport point (TP) of a ship

use crate::gear::{Equipment, Gear};
use crate::master::{GearCategory, ShipBase};

/// Kinu Kai Ni carries her own landing craft
const KINU_KAI_NI: u16 = 487;
const KINU_KAI_NI_TP: f64 = 8.0;

pub fn gear_transport_point(gear: &Gear<'_>) -> f64 {
    match gear.category() {
        GearCategory::TransportationMaterial => 5.0,
        GearCategory::LandingCraft => 8.0,
        GearCategory::SpecialAmphibiousTank => 2.0,
        GearCategory::CombatRation => 1.0,
        GearCategory::Supplies => 5.0,
        _ => 0.0,
    }
}

/// Gear TP + hull TP + ship-specific bonus
pub fn ship_transport_point(base: &ShipBase, equipment: &Equipment<'_>) -> f64 {
    let special = if base.id == KINU_KAI_NI { KINU_KAI_NI_TP } else { 0.0 };
    equipment.sum_with(gear_transport_point) + base.ship_type.transport_point() + special
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_master_data;
    use crate::gear::{GearState, SlotState};

    #[test]
    fn test_kinu_kai_ni_transport_point() {
        let master = default_master_data();
        let kinu = master.ship(487).unwrap();
        let states = vec![
            SlotState::with_gear(GearState::new(75)),
            SlotState::with_gear(GearState::new(68)),
        ];
        let equipment = Equipment::from_states(&master, &kinu.slot_sizes, &states, None);
        // drum 5 + daihatsu 8 + light cruiser 2 + 8
        assert!((ship_transport_point(kinu, &equipment) - 23.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hull_without_transport_point() {
        let master = default_master_data();
        let nagato = master.ship(541).unwrap();
        let equipment = Equipment::from_states(&master, &nagato.slot_sizes, &[], None);
        assert!((ship_transport_point(nagato, &equipment) - 0.0).abs() < f64::EPSILON);
    }
}
