//! Night cut-ins and the night cut-in activation term

use super::rates::CutinRates;
use super::selector::{AttackVariant, Priority, VariantDef};
use crate::fleet::Fleet;
use crate::gear::GearAttributes;
use crate::ship::Ship;
use crate::types::DamageState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NightCutin {
    /// Submarine: late model torpedo + submarine radar
    SubRadarTorp,
    /// Submarine: two late model torpedoes
    SubTorpTorp,
    MainMainMain,
    MainMainSecond,
    TorpTorp,
    /// Destroyer: main gun + torpedo + surface radar
    DdMainTorpRadar,
    /// Destroyer: torpedo + lookouts + surface radar
    DdTorpLookoutRadar,
    MainTorp,
    DoubleAttack,
    Normal,
}

const NIGHT_CUTINS: [NightCutin; 10] = [
    NightCutin::SubRadarTorp,
    NightCutin::SubTorpTorp,
    NightCutin::MainMainMain,
    NightCutin::MainMainSecond,
    NightCutin::TorpTorp,
    NightCutin::DdMainTorpRadar,
    NightCutin::DdTorpLookoutRadar,
    NightCutin::MainTorp,
    NightCutin::DoubleAttack,
    NightCutin::Normal,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NightCutinContext {
    pub is_destroyer: bool,
    pub is_submarine: bool,
    pub main_gun_count: usize,
    pub secondary_gun_count: usize,
    pub torpedo_count: usize,
    pub late_model_torpedo_count: usize,
    pub has_submarine_radar: bool,
    pub has_surface_radar: bool,
    pub has_lookout: bool,
}

impl NightCutinContext {
    pub fn from_ship(ship: &Ship<'_>) -> Self {
        let equipment = ship.equipment();
        NightCutinContext {
            is_destroyer: ship.ship_type().is_destroyer(),
            is_submarine: ship.ship_type().is_submarine_class(),
            main_gun_count: equipment.count(GearAttributes::MAIN_GUN),
            secondary_gun_count: equipment.count(GearAttributes::SECONDARY_GUN),
            torpedo_count: equipment.count(GearAttributes::TORPEDO),
            late_model_torpedo_count: equipment.count(GearAttributes::LATE_MODEL_TORPEDO),
            has_submarine_radar: equipment.has(GearAttributes::SUBMARINE_RADAR),
            has_surface_radar: equipment.has(GearAttributes::SURFACE_RADAR),
            has_lookout: equipment.has(GearAttributes::LOOKOUT),
        }
    }
}

impl AttackVariant for NightCutin {
    type Context = NightCutinContext;
    const FAMILY: &'static str = "night cut-in";
    const FALLBACK: Self = NightCutin::Normal;

    fn catalog() -> &'static [Self] {
        &NIGHT_CUTINS
    }

    fn def(&self) -> VariantDef {
        use Priority::Rank;
        match self {
            NightCutin::SubRadarTorp => VariantDef::new(Rank(0), Some(105.0), 1.75, 1.0),
            NightCutin::SubTorpTorp => VariantDef::new(Rank(1), Some(110.0), 1.6, 1.0),
            NightCutin::MainMainMain => VariantDef::new(Rank(2), Some(140.0), 2.0, 2.0),
            NightCutin::MainMainSecond => VariantDef::new(Rank(3), Some(130.0), 1.75, 2.0),
            NightCutin::TorpTorp => VariantDef::new(Rank(4), Some(122.0), 1.5, 1.65),
            NightCutin::DdMainTorpRadar => VariantDef::new(Rank(5), Some(130.0), 1.3, 1.0),
            NightCutin::DdTorpLookoutRadar => VariantDef::new(Rank(6), Some(150.0), 1.2, 1.0),
            NightCutin::MainTorp => VariantDef::new(Rank(7), Some(115.0), 1.3, 1.5),
            NightCutin::DoubleAttack => VariantDef::new(Rank(8), None, 1.2, 1.1),
            NightCutin::Normal => VariantDef::fallback(),
        }
    }

    fn is_eligible(&self, c: &NightCutinContext) -> bool {
        match self {
            NightCutin::SubRadarTorp => {
                c.is_submarine && c.late_model_torpedo_count >= 1 && c.has_submarine_radar
            }
            NightCutin::SubTorpTorp => c.is_submarine && c.late_model_torpedo_count >= 2,
            NightCutin::MainMainMain => c.main_gun_count >= 3,
            NightCutin::MainMainSecond => c.main_gun_count == 2 && c.secondary_gun_count >= 1,
            NightCutin::TorpTorp => c.torpedo_count >= 2,
            NightCutin::DdMainTorpRadar => {
                c.is_destroyer && c.main_gun_count >= 1 && c.torpedo_count >= 1 && c.has_surface_radar
            }
            NightCutin::DdTorpLookoutRadar => {
                c.is_destroyer && c.torpedo_count >= 1 && c.has_lookout && c.has_surface_radar
            }
            NightCutin::MainTorp => c.main_gun_count >= 1 && c.torpedo_count >= 1,
            NightCutin::DoubleAttack => {
                c.main_gun_count >= 2
                    || (c.main_gun_count == 1 && c.secondary_gun_count >= 1)
                    || c.secondary_gun_count >= 2
            }
            NightCutin::Normal => true,
        }
    }
}

/// Night battle conditions that shift the cut-in term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NightSituation {
    pub is_flagship: bool,
    pub own_searchlight: bool,
    pub own_star_shell: bool,
    pub enemy_searchlight: bool,
    pub enemy_star_shell: bool,
}

impl NightSituation {
    /// Situation of the ship at `position`; own searchlight and star shell
    /// count when any ship in the fleet carries one
    pub fn for_position(fleet: &Fleet<'_>, position: usize) -> Self {
        let fleet_has = |attribute| fleet.ships().iter().any(|s| s.equipment().has(attribute));
        NightSituation {
            is_flagship: position == 0,
            own_searchlight: fleet_has(GearAttributes::SEARCHLIGHT),
            own_star_shell: fleet_has(GearAttributes::STAR_SHELL),
            ..NightSituation::default()
        }
    }

    pub fn with_enemy(mut self, searchlight: bool, star_shell: bool) -> Self {
        self.enemy_searchlight = searchlight;
        self.enemy_star_shell = star_shell;
        self
    }
}

/// `15 + luck + 0.75 * sqrt(level)` below 50 luck,
/// `65 + sqrt(luck - 50) + 0.8 * sqrt(level)` from 50 up
pub fn night_cutin_base_term(luck: f64, level: u16) -> f64 {
    let level = level as f64;
    if luck < 50.0 {
        15.0 + luck + 0.75 * level.sqrt()
    } else {
        65.0 + (luck - 50.0).sqrt() + 0.8 * level.sqrt()
    }
}

/// Floored night cut-in term of one ship
pub fn night_cutin_term(ship: &Ship<'_>, situation: &NightSituation) -> f64 {
    let mut term = night_cutin_base_term(ship.luck(), ship.level());
    if situation.is_flagship {
        term += 15.0;
    }
    if ship.damage_state() == DamageState::Moderate {
        term += 18.0;
    }
    if ship.equipment().has(GearAttributes::LOOKOUT) {
        term += if ship.ship_type().is_destroyer() { 8.0 } else { 5.0 };
    }
    if situation.own_searchlight {
        term += 7.0;
    }
    if situation.own_star_shell {
        term += 4.0;
    }
    if situation.enemy_searchlight {
        term -= 5.0;
    }
    if situation.enemy_star_shell {
        term -= 10.0;
    }
    term.floor()
}

/// Exclusive chances of each eligible night cut-in
pub fn night_cutin_rates(context: &NightCutinContext, term: f64) -> CutinRates<NightCutin> {
    CutinRates::from_context(context, |v: &NightCutin| v.def().rate(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_master_data;
    use crate::gear::GearState;
    use crate::ship::ShipState;
    use crate::variant::select_variant;

    #[test]
    fn test_torpedo_cutin_destroyer() {
        let master = default_master_data();
        // Yuudachi Kai Ni with two quad torpedoes
        let state = ShipState::new(144, 99).with_gears(&[GearState::new(15), GearState::new(15)]);
        let ship = Ship::from_state(&master, &state).unwrap();
        let context = NightCutinContext::from_ship(&ship);
        assert_eq!(select_variant::<NightCutin>(&context), NightCutin::TorpTorp);
    }

    #[test]
    fn test_destroyer_radar_cutin_before_main_torp() {
        let master = default_master_data();
        let state = ShipState::new(426, 99).with_gears(&[
            GearState::new(2),
            GearState::new(15),
            GearState::new(28),
        ]);
        let ship = Ship::from_state(&master, &state).unwrap();
        let context = NightCutinContext::from_ship(&ship);
        assert_eq!(select_variant::<NightCutin>(&context), NightCutin::DdMainTorpRadar);
    }

    #[test]
    fn test_submarine_cutin() {
        let context = NightCutinContext {
            is_submarine: true,
            torpedo_count: 2,
            late_model_torpedo_count: 2,
            ..NightCutinContext::default()
        };
        assert_eq!(select_variant::<NightCutin>(&context), NightCutin::SubTorpTorp);
    }

    #[test]
    fn test_main_main_main_over_double_attack() {
        let context = NightCutinContext {
            main_gun_count: 3,
            ..NightCutinContext::default()
        };
        assert_eq!(select_variant::<NightCutin>(&context), NightCutin::MainMainMain);
    }

    #[test]
    fn test_base_term_branches() {
        // 15 + 40 + 0.75 * 10
        assert!((night_cutin_base_term(40.0, 100) - 62.5).abs() < 1e-9);
        // 65 + 7 + 0.8 * 10
        assert!((night_cutin_base_term(99.0, 100) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_term_situation_bonuses() {
        let master = default_master_data();
        // Yuudachi Kai Ni: luck 20 at Lv99, lookouts equipped, moderately damaged
        let state = ShipState::new(144, 99)
            .with_gears(&[GearState::new(129)])
            .with_current_hp(15.0);
        let ship = Ship::from_state(&master, &state).unwrap();
        assert_eq!(ship.damage_state(), DamageState::Moderate);
        let situation = NightSituation {
            is_flagship: true,
            own_searchlight: true,
            enemy_star_shell: true,
            ..NightSituation::default()
        };
        let expected = (15.0 + 20.0 + 0.75 * 99.0_f64.sqrt() + 15.0 + 18.0 + 8.0 + 7.0 - 10.0).floor();
        assert!((night_cutin_term(&ship, &situation) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_situation_from_fleet_gear() {
        let master = default_master_data();
        let states = [
            ShipState::new(426, 99).with_gears(&[GearState::new(74)]),
            ShipState::new(144, 99).with_gears(&[GearState::new(101)]),
        ];
        let fleet = Fleet::from_states(&master, &states);
        let escort = NightSituation::for_position(&fleet, 1);
        assert!(!escort.is_flagship);
        assert!(escort.own_searchlight);
        assert!(escort.own_star_shell);
        assert!(!escort.enemy_searchlight);
        assert!(NightSituation::for_position(&fleet, 0).is_flagship);

        let with_enemy = escort.with_enemy(true, false);
        assert!(with_enemy.enemy_searchlight);
        assert!(!with_enemy.enemy_star_shell);
    }

    #[test]
    fn test_situation_without_night_gear() {
        let master = default_master_data();
        let states = [ShipState::new(144, 99).with_gears(&[GearState::new(129)])];
        let fleet = Fleet::from_states(&master, &states);
        let situation = NightSituation::for_position(&fleet, 0);
        assert_eq!(
            situation,
            NightSituation {
                is_flagship: true,
                ..NightSituation::default()
            }
        );
    }

    #[test]
    fn test_term_uses_fleet_searchlight() {
        let master = default_master_data();
        let states = [
            ShipState::new(426, 99).with_gears(&[GearState::new(74)]),
            ShipState::new(144, 99),
        ];
        let fleet = Fleet::from_states(&master, &states);
        let ship = &fleet.ships()[1];
        let plain = night_cutin_term(ship, &NightSituation::default());
        let lit = night_cutin_term(ship, &NightSituation::for_position(&fleet, 1));
        assert!((lit - plain - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_double_attack_guaranteed() {
        let context = NightCutinContext {
            main_gun_count: 2,
            torpedo_count: 1,
            ..NightCutinContext::default()
        };
        let rates = night_cutin_rates(&context, 57.5);
        // MainTorp 57.5 / 115 = 0.5, double attack takes the rest
        assert!((rates.rate_of(NightCutin::MainTorp) - 0.5).abs() < 1e-9);
        assert!((rates.rate_of(NightCutin::DoubleAttack) - 0.5).abs() < 1e-9);
        assert!((rates.rate_of(NightCutin::Normal) - 0.0).abs() < 1e-9);
    }
}
