//! Day cut-ins - artillery spotting and carrier cut-ins

use super::rates::CutinRates;
use super::selector::{AttackVariant, Priority, VariantDef};
use crate::gear::{Gear, GearAttributes};
use crate::master::{GearCategory, GearStat};
use crate::ship::Ship;
use crate::types::AirState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCutin {
    /// Carrier cut-in: fighter + dive bomber + torpedo bomber
    Fba,
    /// Carrier cut-in: two dive bombers + torpedo bomber
    Bba,
    /// Carrier cut-in: dive bomber + torpedo bomber
    Ba,
    MainMain,
    MainAp,
    MainRadar,
    MainSecond,
    DoubleAttack,
    Normal,
}

const DAY_CUTINS: [DayCutin; 9] = [
    DayCutin::Fba,
    DayCutin::Bba,
    DayCutin::Ba,
    DayCutin::MainMain,
    DayCutin::MainAp,
    DayCutin::MainRadar,
    DayCutin::MainSecond,
    DayCutin::DoubleAttack,
    DayCutin::Normal,
];

/// Flags read by the day cut-in predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayCutinContext {
    pub is_carrier_class: bool,
    pub main_gun_count: usize,
    pub has_secondary_gun: bool,
    pub has_ap_shell: bool,
    pub has_radar: bool,
    /// Observation plane in a slot that still holds planes
    pub has_observation_plane: bool,
    pub fighter_count: usize,
    pub dive_bomber_count: usize,
    pub torpedo_bomber_count: usize,
    pub air_state: Option<AirState>,
}

impl DayCutinContext {
    pub fn from_ship(ship: &Ship<'_>, air_state: AirState) -> Self {
        let equipment = ship.equipment();
        let planes = |pred: &dyn Fn(&Gear<'_>) -> bool| {
            equipment
                .slots()
                .iter()
                .filter(|s| s.current_size > 0 && s.gear.map_or(false, |g| pred(&g)))
                .count()
        };
        DayCutinContext {
            is_carrier_class: ship.is_carrier_class(),
            main_gun_count: equipment.count(GearAttributes::MAIN_GUN),
            has_secondary_gun: equipment.has(GearAttributes::SECONDARY_GUN),
            has_ap_shell: equipment.has(GearAttributes::AP_SHELL),
            has_radar: equipment.has(GearAttributes::RADAR),
            has_observation_plane: equipment.has_aircraft(GearAttributes::OBSERVATION_PLANE),
            fighter_count: planes(&|g| g.category() == GearCategory::CarrierBasedFighter),
            dive_bomber_count: planes(&|g| g.is(GearAttributes::DIVE_BOMBER)),
            torpedo_bomber_count: planes(&|g| g.is(GearAttributes::TORPEDO_BOMBER)),
            air_state: Some(air_state),
        }
    }

    fn has_air_control(&self) -> bool {
        matches!(
            self.air_state,
            Some(AirState::AirSupremacy) | Some(AirState::AirSuperiority)
        )
    }
}

impl AttackVariant for DayCutin {
    type Context = DayCutinContext;
    const FAMILY: &'static str = "day cut-in";
    const FALLBACK: Self = DayCutin::Normal;

    fn catalog() -> &'static [Self] {
        &DAY_CUTINS
    }

    fn def(&self) -> VariantDef {
        use Priority::Rank;
        match self {
            DayCutin::Fba => VariantDef::new(Rank(0), Some(125.0), 1.25, 1.0),
            DayCutin::Bba => VariantDef::new(Rank(1), Some(140.0), 1.2, 1.0),
            DayCutin::Ba => VariantDef::new(Rank(2), Some(155.0), 1.15, 1.0),
            DayCutin::MainMain => VariantDef::new(Rank(3), Some(150.0), 1.5, 1.2),
            DayCutin::MainAp => VariantDef::new(Rank(4), Some(140.0), 1.3, 1.3),
            DayCutin::MainRadar => VariantDef::new(Rank(5), Some(130.0), 1.2, 1.5),
            DayCutin::MainSecond => VariantDef::new(Rank(6), Some(120.0), 1.1, 1.3),
            DayCutin::DoubleAttack => VariantDef::new(Rank(7), Some(130.0), 1.2, 1.1),
            DayCutin::Normal => VariantDef::fallback(),
        }
    }

    fn is_eligible(&self, c: &DayCutinContext) -> bool {
        if *self == DayCutin::Normal {
            return true;
        }
        if !c.has_air_control() {
            return false;
        }
        let carrier = c.is_carrier_class && c.dive_bomber_count >= 1 && c.torpedo_bomber_count >= 1;
        let spotting = !c.is_carrier_class && c.has_observation_plane && c.main_gun_count >= 1;
        match self {
            DayCutin::Fba => carrier && c.fighter_count >= 1,
            DayCutin::Bba => carrier && c.dive_bomber_count >= 2,
            DayCutin::Ba => carrier,
            DayCutin::MainMain => spotting && c.main_gun_count >= 2 && c.has_ap_shell,
            DayCutin::MainAp => spotting && c.has_secondary_gun && c.has_ap_shell,
            DayCutin::MainRadar => spotting && c.has_secondary_gun && c.has_radar,
            DayCutin::MainSecond => spotting && c.has_secondary_gun,
            DayCutin::DoubleAttack => spotting && c.main_gun_count >= 2,
            DayCutin::Normal => true,
        }
    }
}

/// Inputs of the day cut-in observation term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationTerm {
    pub luck: f64,
    /// Displayed LOS summed over the whole fleet
    pub fleet_los: f64,
    /// LOS of the attacker's own equipment
    pub equipment_los: f64,
    pub air_state: AirState,
    pub is_flagship: bool,
}

impl ObservationTerm {
    pub fn from_ship(ship: &Ship<'_>, fleet_los: f64, air_state: AirState, is_flagship: bool) -> Self {
        ObservationTerm {
            luck: ship.luck(),
            fleet_los,
            equipment_los: ship.equipment().sum_by(GearStat::Los),
            air_state,
            is_flagship,
        }
    }

    /// Floored observation term; zero without air control
    pub fn value(&self) -> f64 {
        let luck_factor = (self.luck.sqrt() + 10.0).floor();
        let fleet_los_factor = (self.fleet_los.sqrt() + self.fleet_los / 10.0).floor();
        let base = match self.air_state {
            AirState::AirSupremacy => {
                luck_factor + 0.7 * (fleet_los_factor + 1.6 * self.equipment_los) + 10.0
            }
            AirState::AirSuperiority => luck_factor + 0.6 * (fleet_los_factor + 1.2 * self.equipment_los),
            _ => return 0.0,
        };
        let flagship = if self.is_flagship { 15.0 } else { 0.0 };
        (base + flagship).floor()
    }
}

/// Exclusive chances of each eligible day cut-in
pub fn day_cutin_rates(context: &DayCutinContext, term: &ObservationTerm) -> CutinRates<DayCutin> {
    let value = term.value();
    CutinRates::from_context(context, |v: &DayCutin| v.def().rate(value))
}
