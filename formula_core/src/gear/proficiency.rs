//! Aircraft proficiency - experience to ace level, and the bonuses it grants

use crate::master::GearCategory;

/// Lower experience bound of each ace level
pub const ACE_BOUNDARIES: [u8; 9] = [0, 10, 25, 40, 55, 70, 85, 100, 120];

pub const MAX_ACE: u8 = 7;

pub const MAX_EXP: u8 = 120;

const FIGHTER_ACE_BONUS: [f64; 8] = [0.0, 0.0, 2.0, 5.0, 9.0, 14.0, 14.0, 22.0];
const SEAPLANE_BOMBER_ACE_BONUS: [f64; 8] = [0.0, 0.0, 1.0, 1.0, 1.0, 3.0, 3.0, 6.0];
const CRITICAL_ACE_BONUS: [f64; 8] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 7.0, 10.0];

/// Convert internal experience to the displayed ace level (0..=7)
///
/// The ace level is the index of the last boundary not exceeding `exp`.
pub fn ace_from_exp(exp: u8) -> u8 {
    let passed = ACE_BOUNDARIES.iter().filter(|&&bound| bound <= exp).count();
    (passed.saturating_sub(1) as u8).min(MAX_ACE)
}

/// Ace-level bonus added to a slot's floored fighter power, by aircraft family
pub fn fighter_ace_bonus(ace: u8, category: GearCategory) -> f64 {
    let index = ace.min(MAX_ACE) as usize;
    match category {
        GearCategory::CarrierBasedFighter
        | GearCategory::SeaplaneFighter
        | GearCategory::LandBasedFighter
        | GearCategory::JetFighterBomber => FIGHTER_ACE_BONUS[index],
        GearCategory::SeaplaneBomber => SEAPLANE_BOMBER_ACE_BONUS[index],
        _ => 0.0,
    }
}

/// Critical bonus of a single aircraft, as a fraction (0.10 = +10%)
pub fn critical_proficiency_bonus(exp: u8) -> f64 {
    let ace = ace_from_exp(exp) as usize;
    ((exp.min(MAX_EXP) as f64).sqrt() + CRITICAL_ACE_BONUS[ace]).floor() / 100.0
}
