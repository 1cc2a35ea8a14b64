//! Expedition resource bonus from landing craft

use crate::gear::Equipment;

/// Upper bound of the summed base bonus
pub const EXPEDITION_BONUS_CAP: f64 = 0.2;

const KINU_KAI_NI: u16 = 487;
const KINU_KAI_NI_BONUS: f64 = 0.05;

/// Base bonus per gear id
const GEAR_BONUS: &[(u16, f64)] = &[
    // Daihatsu Landing Craft
    (68, 0.05),
    // Daihatsu (Type 89 Medium Tank & Landing Force)
    (166, 0.02),
    // Special Type 2 Amphibious Tank
    (167, 0.01),
    // Toku Daihatsu
    (193, 0.05),
];

/// One ship's part of the fleet expedition bonus
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExpeditionContribution {
    /// Base bonus as a fraction
    pub bonus: f64,
    /// Landing craft that count towards the average improvement
    pub count: usize,
    pub total_stars: f64,
}

impl ExpeditionContribution {
    pub fn from_ship(ship_id: u16, equipment: &Equipment<'_>) -> Self {
        let mut contribution = ExpeditionContribution::default();
        if ship_id == KINU_KAI_NI {
            contribution.bonus += KINU_KAI_NI_BONUS;
        }
        for gear in equipment.gears() {
            if let Some((_, bonus)) = GEAR_BONUS.iter().find(|(id, _)| *id == gear.gear_id()) {
                contribution.bonus += bonus;
                contribution.count += 1;
                contribution.total_stars += gear.stars() as f64;
            }
        }
        contribution
    }
}

/// Fleet bonus: `min(sum, cap) * (1 + 0.01 * average stars)`
pub fn expedition_bonus(contributions: &[ExpeditionContribution]) -> f64 {
    let base: f64 = contributions.iter().map(|c| c.bonus).sum();
    let count: usize = contributions.iter().map(|c| c.count).sum();
    let stars: f64 = contributions.iter().map(|c| c.total_stars).sum();
    let average_stars = if count == 0 { 0.0 } else { stars / count as f64 };
    base.min(EXPEDITION_BONUS_CAP) * (1.0 + 0.01 * average_stars)
}
