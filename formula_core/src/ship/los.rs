//! Effective LOS (node visibility score)

use crate::gear::{Equipment, ImprovementTarget};
use crate::master::{GearCategory, GearStat};

/// Per-category weight of gear LOS
pub fn los_multiplier(category: GearCategory) -> f64 {
    match category {
        GearCategory::CarrierBasedTorpedoBomber => 0.8,
        GearCategory::CarrierBasedRecon => 1.0,
        GearCategory::SeaplaneBomber => 1.1,
        GearCategory::ReconSeaplane | GearCategory::LargeFlyingBoat => 1.2,
        _ => 0.6,
    }
}

/// Weighted LOS of all equipment, improvement included
pub fn equipment_effective_los(equipment: &Equipment<'_>) -> f64 {
    equipment.sum_with(|gear| {
        los_multiplier(gear.category())
            * (gear.stat(GearStat::Los) + gear.improvement(ImprovementTarget::EffectiveLos))
    })
}

/// `sqrt(naked los) + equipment * node_factor - 2`
pub fn ship_effective_los(naked_los: f64, equipment: &Equipment<'_>, node_factor: f64) -> f64 {
    naked_los.sqrt() + equipment_effective_los(equipment) * node_factor - 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_master_data;
    use crate::gear::{GearState, SlotState};

    #[test]
    fn test_multiplier_table() {
        assert!((los_multiplier(GearCategory::ReconSeaplane) - 1.2).abs() < f64::EPSILON);
        assert!((los_multiplier(GearCategory::SeaplaneBomber) - 1.1).abs() < f64::EPSILON);
        assert!((los_multiplier(GearCategory::SmallRadar) - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ship_effective_los() {
        let master = default_master_data();
        let states = vec![
            SlotState::with_gear(GearState::new(28)),
            SlotState::with_gear(GearState::new(25)),
        ];
        let equipment = Equipment::from_states(&master, &[3, 3], &states, None);
        // radar 5 * 0.6 + recon 5 * 1.2
        assert!((equipment_effective_los(&equipment) - 9.0).abs() < 1e-9);
        let value = ship_effective_los(49.0, &equipment, 2.0);
        assert!((value - (7.0 + 18.0 - 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_improvement_weighted() {
        let master = default_master_data();
        let states = vec![SlotState::with_gear(GearState::new(25).with_stars(4))];
        let equipment = Equipment::from_states(&master, &[1], &states, None);
        // 1.2 * (5 + 1.2 * 2)
        assert!((equipment_effective_los(&equipment) - 8.88).abs() < 1e-9);
    }
}
