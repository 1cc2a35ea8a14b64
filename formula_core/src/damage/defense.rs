//! Defense power derived from the defender's armor

use crate::config::DamageConstants;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Range of defense power a single hit may roll
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefensePower {
    pub min: f64,
    pub max: f64,
}

impl DefensePower {
    pub fn new(min: f64, max: f64) -> Self {
        DefensePower { min, max }
    }

    /// `armor * 0.7` up to `armor * 0.7 + (armor - 1) * 0.6`
    pub fn from_armor(armor: f64, constants: &DamageConstants) -> Self {
        let min = armor * constants.armor_min_factor;
        let max = min + (armor - 1.0).max(0.0) * constants.armor_random_factor;
        DefensePower { min, max }
    }

    /// Sample one defense value: `armor * 0.7 + r * 0.6`, `r` an integer in `[0, armor)`
    pub fn roll<R: Rng + ?Sized>(armor: f64, constants: &DamageConstants, rng: &mut R) -> f64 {
        let steps = armor.floor().max(0.0) as u32;
        let r = if steps == 0 { 0 } else { rng.gen_range(0..steps) };
        armor * constants.armor_min_factor + r as f64 * constants.armor_random_factor
    }
}
