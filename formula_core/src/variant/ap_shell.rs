//! Armor-piercing shell modifiers

use crate::gear::{Equipment, GearAttributes};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApShellModifiers {
    pub power: f64,
    pub accuracy: f64,
}

impl Default for ApShellModifiers {
    fn default() -> Self {
        ApShellModifiers {
            power: 1.0,
            accuracy: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApShellContext {
    pub has_ap_shell: bool,
    pub has_main_gun: bool,
    pub has_secondary_gun: bool,
    pub has_radar: bool,
}

impl ApShellContext {
    pub fn from_equipment(equipment: &Equipment<'_>) -> Self {
        ApShellContext {
            has_ap_shell: equipment.has(GearAttributes::AP_SHELL),
            has_main_gun: equipment.has(GearAttributes::MAIN_GUN),
            has_secondary_gun: equipment.has(GearAttributes::SECONDARY_GUN),
            has_radar: equipment.has(GearAttributes::RADAR),
        }
    }
}

/// Requires both an AP shell and a main gun; the tier depends on
/// secondary gun and radar
pub fn ap_shell_modifiers(context: &ApShellContext) -> ApShellModifiers {
    if !(context.has_ap_shell && context.has_main_gun) {
        return ApShellModifiers::default();
    }
    let (power, accuracy) = match (context.has_secondary_gun, context.has_radar) {
        (true, true) => (1.15, 1.3),
        (true, false) => (1.15, 1.2),
        (false, true) => (1.1, 1.25),
        (false, false) => (1.08, 1.1),
    };
    ApShellModifiers { power, accuracy }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(ap: bool, main: bool, secondary: bool, radar: bool) -> ApShellContext {
        ApShellContext {
            has_ap_shell: ap,
            has_main_gun: main,
            has_secondary_gun: secondary,
            has_radar: radar,
        }
    }

    #[test]
    fn test_both_flags_required() {
        assert_eq!(ap_shell_modifiers(&context(false, true, true, true)), ApShellModifiers::default());
        assert_eq!(ap_shell_modifiers(&context(true, false, true, true)), ApShellModifiers::default());
    }

    #[test]
    fn test_full_bonus() {
        let m = ap_shell_modifiers(&context(true, true, true, true));
        assert!((m.power - 1.15).abs() < f64::EPSILON);
        assert!((m.accuracy - 1.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tiers() {
        let secondary = ap_shell_modifiers(&context(true, true, true, false));
        assert!((secondary.accuracy - 1.2).abs() < f64::EPSILON);
        let radar = ap_shell_modifiers(&context(true, true, false, true));
        assert!((radar.power - 1.1).abs() < f64::EPSILON);
        assert!((radar.accuracy - 1.25).abs() < f64::EPSILON);
        let bare = ap_shell_modifiers(&context(true, true, false, false));
        assert!((bare.power - 1.08).abs() < f64::EPSILON);
        assert!((bare.accuracy - 1.1).abs() < f64::EPSILON);
    }
}
