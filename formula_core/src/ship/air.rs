//! Air power - fighter power, interception power and proficiency criticals

use crate::gear::{
    critical_proficiency_bonus, fighter_ace_bonus, Equipment, EquipmentSlot, Gear,
    GearAttributes, SlotKey,
};

fn slot_air_power<'a>(slot: &EquipmentSlot<'a>, anti_air: impl Fn(&Gear<'a>) -> f64) -> f64 {
    let Some(gear) = slot.gear else {
        return 0.0;
    };
    if slot.current_size == 0 || !gear.is(GearAttributes::FIGHTER) {
        return 0.0;
    }
    let size = slot.current_size as f64;
    (anti_air(&gear) * size.sqrt()).floor() + fighter_ace_bonus(gear.ace(), gear.category())
}

/// Sortie fighter power: per slot `floor(aa * sqrt(size)) + ace bonus`
pub fn fighter_power(equipment: &Equipment<'_>) -> f64 {
    equipment
        .slots()
        .iter()
        .map(|slot| slot_air_power(slot, Gear::fighter_anti_air))
        .sum()
}

/// Land base air defense power, counting interception and anti-bomber
pub fn interception_power(equipment: &Equipment<'_>) -> f64 {
    equipment
        .slots()
        .iter()
        .map(|slot| slot_air_power(slot, Gear::interception_anti_air))
        .sum()
}

/// Critical power modifier from attack aircraft proficiency
///
/// The first slot counts in full, every other slot at half weight.
pub fn proficiency_critical_modifier(equipment: &Equipment<'_>) -> f64 {
    let mut modifier = 1.0;
    for slot in equipment.slots() {
        let Some(gear) = slot.gear else {
            continue;
        };
        if slot.current_size == 0 || !gear.is(GearAttributes::CARRIER_SHELLING_PLANE) {
            continue;
        }
        let bonus = critical_proficiency_bonus(gear.exp());
        if slot.key == SlotKey::Slot(0) {
            modifier += bonus;
        } else {
            modifier += bonus / 2.0;
        }
    }
    modifier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_master_data;
    use crate::gear::{GearState, SlotState};

    const AKAGI_SLOTS: [u8; 4] = [20, 20, 32, 10];

    #[test]
    fn test_fighter_power_without_proficiency() {
        let master = default_master_data();
        let states = vec![SlotState::with_gear(GearState::new(20))];
        let equipment = Equipment::from_states(&master, &AKAGI_SLOTS, &states, None);
        // floor(5 * sqrt(20)) = 22
        assert!((fighter_power(&equipment) - 22.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fighter_power_with_max_proficiency() {
        let master = default_master_data();
        let states = vec![
            SlotState::with_gear(GearState::new(20).with_exp(120)),
            SlotState::with_gear(GearState::new(24)),
        ];
        let equipment = Equipment::from_states(&master, &AKAGI_SLOTS, &states, None);
        // floor(5 * sqrt(20)) + 22 = 44; Suisei has no anti-air
        assert!((fighter_power(&equipment) - 44.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ace_bonus_added_after_floor() {
        let master = default_master_data();
        // exp 85 and 99 are both ace 6: floor(5 * sqrt(20)) + 14
        for exp in [85, 99] {
            let states = vec![SlotState::with_gear(GearState::new(20).with_exp(exp))];
            let equipment = Equipment::from_states(&master, &AKAGI_SLOTS, &states, None);
            assert!((fighter_power(&equipment) - 36.0).abs() < f64::EPSILON, "exp {}", exp);
        }
    }

    #[test]
    fn test_interception_with_proficiency() {
        let master = default_master_data();
        let states = vec![SlotState::with_gear(GearState::new(175).with_exp(120)).sized(16)];
        let equipment = Equipment::from_states(&master, &[18], &states, None);
        // floor(18 * 4) + 22
        assert!((interception_power(&equipment) - 94.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_size_slot_contributes_nothing() {
        let master = default_master_data();
        let states = vec![SlotState::with_gear(GearState::new(22).with_exp(120)).sized(0)];
        let equipment = Equipment::from_states(&master, &AKAGI_SLOTS, &states, None);
        assert!((fighter_power(&equipment) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_interception_counts_anti_bomber() {
        let master = default_master_data();
        // Raiden: AA 6, interception 2, anti-bomber 5
        let states = vec![SlotState::with_gear(GearState::new(175)).sized(16)];
        let equipment = Equipment::from_states(&master, &[18], &states, None);
        // sortie: floor(9 * 4) = 36, air defense: floor(18 * 4) = 72
        assert!((fighter_power(&equipment) - 36.0).abs() < f64::EPSILON);
        assert!((interception_power(&equipment) - 72.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_critical_modifier_first_slot_full_weight() {
        let master = default_master_data();
        let states = vec![
            SlotState::with_gear(GearState::new(24).with_exp(120)),
            SlotState::with_gear(GearState::new(18).with_exp(120)),
            SlotState::with_gear(GearState::new(20).with_exp(120)),
        ];
        let equipment = Equipment::from_states(&master, &AKAGI_SLOTS, &states, None);
        // 1 + 0.20 + 0.20 / 2, the fighter does not count
        assert!((proficiency_critical_modifier(&equipment) - 1.3).abs() < 1e-9);
    }
}
