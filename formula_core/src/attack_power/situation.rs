//! Situation modifiers and per-phase attack power assembly

use super::basic::{asw_basic, day_shelling_basic, night_basic, torpedo_basic};
use super::modifiers::AttackPowerModifiers;
use super::pipeline::{calc_attack_power, AttackPowerResult, StageHooks};
use crate::config::FormulaConstants;
use crate::fleet::ContactRank;
use crate::ship::Ship;
use crate::types::{AttackPhase, DamageState, Engagement, Formation, TargetKind};
use crate::variant::{
    ap_shell_modifiers, shelling_type, ApShellContext, ApShellModifiers, AttackVariant, DayCutin,
    NightCutin, ShellingType, ShellingTypeContext,
};
use serde::{Deserialize, Serialize};

/// Formation power modifier of the attacker for a phase
pub fn formation_modifier(formation: Formation, phase: AttackPhase) -> f64 {
    use Formation::*;
    match phase {
        AttackPhase::DayShelling => match formation {
            LineAhead => 1.0,
            DoubleLine => 0.8,
            Diamond => 0.7,
            Echelon => 0.75,
            LineAbreast => 0.6,
            VanguardTop => 0.5,
            VanguardBottom => 1.0,
        },
        AttackPhase::Torpedo => match formation {
            LineAhead => 1.0,
            DoubleLine => 0.8,
            Diamond => 0.7,
            Echelon | LineAbreast => 0.6,
            VanguardTop | VanguardBottom => 1.0,
        },
        AttackPhase::Night => match formation {
            VanguardTop => 0.5,
            _ => 1.0,
        },
        AttackPhase::Asw => match formation {
            LineAhead => 0.6,
            DoubleLine => 0.8,
            Diamond => 1.2,
            Echelon => 1.1,
            LineAbreast => 1.3,
            VanguardTop => 1.0,
            VanguardBottom => 0.6,
        },
        AttackPhase::Support | AttackPhase::Aerial => 1.0,
    }
}

/// Engagement multiplier on day attack power
pub fn engagement_modifier(engagement: Engagement) -> f64 {
    match engagement {
        Engagement::Parallel => 1.0,
        Engagement::HeadOn => 0.8,
        Engagement::GreenT => 1.2,
        Engagement::RedT => 0.6,
    }
}

/// Attacker damage state modifier; torpedoes are not fired from heavy damage
pub fn damage_state_modifier(state: DamageState, phase: AttackPhase) -> f64 {
    match phase {
        AttackPhase::Torpedo => match state {
            DamageState::Moderate => 0.8,
            DamageState::Heavy | DamageState::Sunk => 0.0,
            _ => 1.0,
        },
        AttackPhase::DayShelling | AttackPhase::Night | AttackPhase::Asw => match state {
            DamageState::Moderate => 0.7,
            DamageState::Heavy | DamageState::Sunk => 0.4,
            _ => 1.0,
        },
        AttackPhase::Support | AttackPhase::Aerial => 1.0,
    }
}

/// Battle situation an attack happens in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackSituation {
    pub formation: Formation,
    pub engagement: Engagement,
    pub target: TargetKind,
    /// Heavily armored target; enables the AP shell bonus
    #[serde(default)]
    pub armored_target: bool,
    #[serde(default)]
    pub is_critical: bool,
}

impl Default for AttackSituation {
    fn default() -> Self {
        AttackSituation {
            formation: Formation::LineAhead,
            engagement: Engagement::Parallel,
            target: TargetKind::Surface,
            armored_target: false,
            is_critical: false,
        }
    }
}

impl AttackSituation {
    /// Situation against a surface target
    pub fn new(formation: Formation, engagement: Engagement) -> Self {
        AttackSituation {
            formation,
            engagement,
            ..AttackSituation::default()
        }
    }

    /// Change the target kind
    pub fn against(mut self, target: TargetKind) -> Self {
        self.target = target;
        self
    }

    /// Mark the target heavily armored
    pub fn armored(mut self) -> Self {
        self.armored_target = true;
        self
    }

    /// Treat the attack as a critical hit
    pub fn critical(mut self) -> Self {
        self.is_critical = true;
        self
    }

    /// `a13` for a phase: formation, engagement (not at night) and damage state
    pub fn modifiers(&self, ship: &Ship<'_>, phase: AttackPhase) -> AttackPowerModifiers {
        let engagement = match phase {
            AttackPhase::Night => 1.0,
            _ => engagement_modifier(self.engagement),
        };
        AttackPowerModifiers {
            a13: Some(
                formation_modifier(self.formation, phase)
                    * engagement
                    * damage_state_modifier(ship.damage_state(), phase),
            ),
            ..AttackPowerModifiers::default()
        }
    }

    fn critical_multiplier(&self, constants: &FormulaConstants) -> Option<f64> {
        self.is_critical.then_some(constants.critical.multiplier)
    }
}

/// A resolved day shelling attack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellingPower {
    pub shelling_type: ShellingType,
    pub cutin: DayCutin,
    pub ap_shell: ApShellModifiers,
    pub power: AttackPowerResult,
}

impl ShellingPower {
    /// Accuracy multiplier from the cut-in and the AP shell tier
    pub fn accuracy_multiplier(&self) -> f64 {
        self.cutin.def().accuracy_multiplier * self.ap_shell.accuracy
    }
}

/// Day shelling attack power of a ship performing `cutin`
pub fn shelling_attack_power(
    ship: &Ship<'_>,
    situation: &AttackSituation,
    cutin: DayCutin,
    constants: &FormulaConstants,
) -> ShellingPower {
    let shelling_type = shelling_type(&ShellingTypeContext::from_ship(ship, situation.target));
    let basic = day_shelling_basic(ship, shelling_type);

    let ap_shell = if situation.armored_target {
        ap_shell_modifiers(&ApShellContext::from_equipment(ship.equipment()))
    } else {
        ApShellModifiers::default()
    };

    let mut modifiers = situation.modifiers(ship, AttackPhase::DayShelling);
    modifiers.a6 = Some(ap_shell.power);
    modifiers.a11 = situation.critical_multiplier(constants).map(|critical| {
        match shelling_type {
            ShellingType::CarrierShelling => critical * ship.proficiency_critical_modifier(),
            ShellingType::Shelling => critical,
        }
    });

    let cutin_power = cutin.def().power_multiplier;
    let apply_cutin = move |power: f64| power * cutin_power;
    let hooks = if cutin.is_fallback() {
        StageHooks::none()
    } else {
        StageHooks::none().with_next(&apply_cutin)
    };

    let power = calc_attack_power(
        basic,
        constants.caps.cap_for(AttackPhase::DayShelling),
        &modifiers,
        &hooks,
    );
    log::debug!(
        "ship {} {:?} {:?}: {} -> {}",
        ship.ship_id(),
        shelling_type,
        cutin,
        basic,
        power.postcap
    );

    ShellingPower {
        shelling_type,
        cutin,
        ap_shell,
        power,
    }
}

/// Closing torpedo attack power with the critical multiplier
pub fn torpedo_attack_power(
    ship: &Ship<'_>,
    situation: &AttackSituation,
    constants: &FormulaConstants,
) -> AttackPowerResult {
    let mut modifiers = situation.modifiers(ship, AttackPhase::Torpedo);
    modifiers.a11 = situation.critical_multiplier(constants);
    calc_attack_power(
        torpedo_basic(ship),
        constants.caps.cap_for(AttackPhase::Torpedo),
        &modifiers,
        &StageHooks::none(),
    )
}

/// Night attack power; contact adds its bonus before any multiplier and the
/// cut-in applies last before the cap
pub fn night_attack_power(
    ship: &Ship<'_>,
    situation: &AttackSituation,
    cutin: NightCutin,
    contact: Option<ContactRank>,
    constants: &FormulaConstants,
) -> AttackPowerResult {
    let mut modifiers = situation.modifiers(ship, AttackPhase::Night);
    modifiers.b12 = contact.map(ContactRank::power_bonus);
    if !cutin.is_fallback() {
        modifiers.a14 = Some(cutin.def().power_multiplier);
    }
    modifiers.a11 = situation.critical_multiplier(constants);
    calc_attack_power(
        night_basic(ship),
        constants.caps.cap_for(AttackPhase::Night),
        &modifiers,
        &StageHooks::none(),
    )
}

/// Anti-submarine attack power; a critical hit applies after the cap
pub fn asw_attack_power(
    ship: &Ship<'_>,
    situation: &AttackSituation,
    constants: &FormulaConstants,
) -> AttackPowerResult {
    let mut modifiers = situation.modifiers(ship, AttackPhase::Asw);
    modifiers.a11 = situation.critical_multiplier(constants);
    calc_attack_power(
        asw_basic(ship),
        constants.caps.cap_for(AttackPhase::Asw),
        &modifiers,
        &StageHooks::none(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_master_data;
    use crate::gear::GearState;
    use crate::ship::ShipState;

    fn nagato_state() -> ShipState {
        ShipState::new(541, 99).with_gears(&[
            GearState::new(8),
            GearState::new(8),
            GearState::new(36),
            GearState::new(27),
        ])
    }

    #[test]
    fn test_formation_tables() {
        assert!((formation_modifier(Formation::Echelon, AttackPhase::DayShelling) - 0.75).abs() < f64::EPSILON);
        assert!((formation_modifier(Formation::Echelon, AttackPhase::Torpedo) - 0.6).abs() < f64::EPSILON);
        assert!((formation_modifier(Formation::LineAbreast, AttackPhase::Asw) - 1.3).abs() < f64::EPSILON);
        assert!((formation_modifier(Formation::DoubleLine, AttackPhase::Night) - 1.0).abs() < f64::EPSILON);
        assert!((formation_modifier(Formation::VanguardTop, AttackPhase::Night) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_damage_state_modifiers() {
        assert!((damage_state_modifier(DamageState::Moderate, AttackPhase::DayShelling) - 0.7).abs() < f64::EPSILON);
        assert!((damage_state_modifier(DamageState::Heavy, AttackPhase::Torpedo)).abs() < f64::EPSILON);
        assert!((damage_state_modifier(DamageState::Minor, AttackPhase::Torpedo) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ap_shell_only_against_armored_targets() {
        let master = default_master_data();
        let constants = FormulaConstants::default();
        let ship = Ship::from_state(&master, &nagato_state()).unwrap();
        let situation = AttackSituation::default();

        // 83 + 48 + 5
        let soft = shelling_attack_power(&ship, &situation, DayCutin::Normal, &constants);
        assert_eq!(soft.shelling_type, ShellingType::Shelling);
        assert!((soft.power.postcap - 136.0).abs() < f64::EPSILON);

        // main gun + AP + radar: floor(136 * 1.1)
        let hard = shelling_attack_power(&ship, &situation.armored(), DayCutin::Normal, &constants);
        assert!((hard.power.postcap - 149.0).abs() < f64::EPSILON);
        assert!((hard.accuracy_multiplier() - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_day_cutin_and_critical_apply_after_floors() {
        let master = default_master_data();
        let constants = FormulaConstants::default();
        let ship = Ship::from_state(&master, &nagato_state()).unwrap();
        let situation = AttackSituation::default().armored();

        let cutin = shelling_attack_power(&ship, &situation, DayCutin::MainMain, &constants);
        assert!((cutin.power.postcap - 223.5).abs() < 1e-9);
        assert!((cutin.accuracy_multiplier() - 1.5).abs() < 1e-9);

        let critical = shelling_attack_power(&ship, &situation.critical(), DayCutin::Normal, &constants);
        assert!((critical.power.postcap - 223.5).abs() < 1e-9);
    }

    #[test]
    fn test_situation_multiplies_precap() {
        let master = default_master_data();
        let constants = FormulaConstants::default();
        let ship = Ship::from_state(&master, &nagato_state()).unwrap();

        let red_t = AttackSituation::new(Formation::DoubleLine, Engagement::RedT);
        let result = shelling_attack_power(&ship, &red_t, DayCutin::Normal, &constants);
        // 136 * 0.8 * 0.6
        assert!((result.power.precap - 65.28).abs() < 1e-9);
        assert!((result.power.postcap - 65.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_carrier_shelling_power() {
        let master = default_master_data();
        let constants = FormulaConstants::default();
        let state = ShipState::new(277, 99).with_gears(&[GearState::new(24), GearState::new(18)]);
        let ship = Ship::from_state(&master, &state).unwrap();
        let result = shelling_attack_power(&ship, &AttackSituation::default(), DayCutin::Normal, &constants);
        assert_eq!(result.shelling_type, ShellingType::CarrierShelling);
        assert!((result.power.postcap - 145.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_torpedo_power() {
        let master = default_master_data();
        let constants = FormulaConstants::default();
        let gears = [GearState::new(15), GearState::new(15)];

        let ship = Ship::from_state(&master, &ShipState::new(144, 99).with_gears(&gears)).unwrap();
        let head_on = AttackSituation::new(Formation::LineAhead, Engagement::HeadOn);
        // (40 + 20 + 5) * 0.8
        assert!((torpedo_attack_power(&ship, &head_on, &constants).postcap - 52.0).abs() < f64::EPSILON);

        let state = ShipState::new(144, 99).with_gears(&gears).with_current_hp(7.0);
        let heavy = Ship::from_state(&master, &state).unwrap();
        let result = torpedo_attack_power(&heavy, &AttackSituation::default(), &constants);
        assert!(result.postcap.abs() < f64::EPSILON);
    }

    #[test]
    fn test_night_contact_then_cutin() {
        let master = default_master_data();
        let constants = FormulaConstants::default();
        let state = ShipState::new(144, 99).with_gears(&[GearState::new(15), GearState::new(15)]);
        let ship = Ship::from_state(&master, &state).unwrap();
        let situation = AttackSituation::new(Formation::LineAhead, Engagement::RedT);

        // engagement does not apply at night: 26 + 60
        let plain = night_attack_power(&ship, &situation, NightCutin::Normal, None, &constants);
        assert!((plain.postcap - 86.0).abs() < f64::EPSILON);

        // (86 + 5) * 1.5
        let result = night_attack_power(
            &ship,
            &situation,
            NightCutin::TorpTorp,
            Some(ContactRank::Rank3),
            &constants,
        );
        assert!((result.precap - 136.5).abs() < 1e-9);
        assert!((result.postcap - 136.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_asw_uses_asw_formation_table() {
        let master = default_master_data();
        let constants = FormulaConstants::default();
        let ship = Ship::from_state(&master, &ShipState::new(144, 99)).unwrap();
        let abreast = AttackSituation::new(Formation::LineAbreast, Engagement::Parallel)
            .against(TargetKind::Submarine);
        let result = asw_attack_power(&ship, &abreast, &constants);
        assert!((result.precap - asw_basic(&ship) * 1.3).abs() < 1e-9);
    }
}
