//! Accuracy and evasion terms

use crate::gear::{Equipment, ImprovementTarget};
use crate::master::GearStat;

/// Basic accuracy: `90 + 2 * sqrt(level) + 1.5 * sqrt(luck) + equipment accuracy + improvement`
pub fn basic_accuracy(level: u16, luck: f64, equipment: &Equipment<'_>) -> f64 {
    let equipment_accuracy = equipment.sum_by(GearStat::Accuracy);
    let improvement = equipment.sum_with(|g| g.improvement(ImprovementTarget::Accuracy));
    90.0 + 2.0 * (level as f64).sqrt() + 1.5 * luck.sqrt() + equipment_accuracy + improvement
}

/// Evasion soft cap applied to the raw evasion term
pub fn evasion_cap(value: f64) -> f64 {
    if value < 40.0 {
        value
    } else if value < 65.0 {
        (40.0 + 3.0 * (value - 40.0).sqrt()).floor()
    } else {
        (55.0 + 2.0 * (value - 65.0).sqrt()).floor()
    }
}
