//! Damage range of one hit against a defense power range

use super::DefensePower;
use serde::{Deserialize, Serialize};

/// Remaining ammo modifier: `min(1, ammo% / 50)`
pub fn remaining_ammo_modifier(ammo_percent: f64) -> f64 {
    (ammo_percent / 50.0).clamp(0.0, 1.0)
}

/// Optional terms of the damage formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageModifiers {
    #[serde(default = "default_ammo_modifier")]
    pub remaining_ammo: f64,
    #[serde(default)]
    pub armor_penetration: f64,
}

fn default_ammo_modifier() -> f64 {
    1.0
}

impl Default for DamageModifiers {
    fn default() -> Self {
        DamageModifiers {
            remaining_ammo: 1.0,
            armor_penetration: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
    /// Even the minimum damage sinks the defender
    pub is_deadly: bool,
}

/// Damage interval of an attack power against a defense range
///
/// The strongest defense gives the minimum, the weakest the maximum.
pub fn resolve_damage(
    attack_power: f64,
    defense: &DefensePower,
    modifiers: &DamageModifiers,
    defender_hp: f64,
) -> DamageRange {
    let value_at = |defense_value: f64| -> u32 {
        let effective = (defense_value - modifiers.armor_penetration).max(1.0);
        let damage = ((attack_power - effective) * modifiers.remaining_ammo).floor();
        damage.max(0.0) as u32
    };

    let min = value_at(defense.max);
    let max = value_at(defense.min);
    DamageRange {
        min,
        max,
        is_deadly: defender_hp <= min as f64,
    }
}
