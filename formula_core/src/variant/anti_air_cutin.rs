//! Anti-air cut-ins (AACI) - fixed catalog of kinds and their requirements

use super::rates::CutinRates;
use super::selector::{AttackVariant, Priority, VariantDef};
use crate::gear::GearAttributes;
use crate::ship::Ship;
use serde::{Deserialize, Serialize};

const AKIZUKI_CLASS: u16 = 54;
const FLETCHER_CLASS: u16 = 91;

const MAYA_KAI_NI: u16 = 428;
const ISUZU_KAI_NI: u16 = 141;
const KASUMI_KAI_NI_B: u16 = 470;
const SATSUKI_KAI_NI: u16 = 418;
const KINU_KAI_NI: u16 = 487;
const YURA_KAI_NI: u16 = 488;
const FUMIZUKI_KAI_NI: u16 = 548;
const TENRYUU_KAI_NI: u16 = 477;
const TATSUTA_KAI_NI: u16 = 478;
const MUSASHI_KAI_NI: u16 = 546;
const GOTLAND_KAI: u16 = 579;
const ISE_CLASS_KAI: &[u16] = &[82, 88, 553, 554];
const HAMAKAZE_ISOKAZE_B: &[u16] = &[557, 558];
const ATLANTA: &[u16] = &[597, 696];

/// 10cm Twin High-angle Gun Mount Kai + Additional Machine Guns
const HA_KAI_WITH_MACHINE_GUNS: u16 = 275;
/// GFCS Mk.37
const GFCS_MK37: u16 = 307;
/// 5inch Single Gun Mount Mk.30 Kai + GFCS Mk.37
const MK30_KAI_WITH_GFCS: u16 = 308;
/// 5inch Single Gun Mount Mk.30 Kai
const MK30_KAI: u16 = 313;
/// 5inch Twin Dual-purpose Gun Mount (Concentrated Deployment)
const TWIN_DUAL_PURPOSE_CD: u16 = 362;
/// GFCS Mk.37 + 5inch Twin Dual-purpose Gun Mount (Concentrated Deployment)
const TWIN_DUAL_PURPOSE_CD_WITH_GFCS: u16 = 363;

/// Kinds that only specific ships can trigger
const SPECIAL_CUTIN_IDS: &[u8] = &[
    1, 2, 3, 10, 11, 14, 15, 16, 17, 18, 19, 20, 21, 22, 24, 25, 26, 28, 29, 30, 31, 33, 34, 35,
    36, 37, 38, 39, 40, 41,
];

/// Gear counts and ship identity read by the requirements
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AntiAirCutinContext {
    pub ship_id: u16,
    pub ship_class: u16,
    /// High-angle guns, with or without a built-in director
    pub high_angle_gun: usize,
    pub high_angle_gun_with_director: usize,
    pub fire_director: usize,
    pub air_radar: usize,
    /// Anti-air machine guns, concentrated deployment included
    pub anti_air_gun: usize,
    pub special_anti_air_gun: usize,
    pub large_main_gun: usize,
    pub anti_air_shell: usize,
    pub anti_air_rocket: usize,
    pub gear_ids: Vec<u16>,
}

impl AntiAirCutinContext {
    pub fn from_ship(ship: &Ship<'_>) -> Self {
        let equipment = ship.equipment();
        AntiAirCutinContext {
            ship_id: ship.ship_id(),
            ship_class: ship.ship_class(),
            high_angle_gun: equipment.count(GearAttributes::HIGH_ANGLE_GUN),
            high_angle_gun_with_director: equipment.count(GearAttributes::HIGH_ANGLE_GUN_WITH_DIRECTOR),
            fire_director: equipment.count(GearAttributes::ANTI_AIR_FIRE_DIRECTOR),
            air_radar: equipment.count(GearAttributes::AIR_RADAR),
            anti_air_gun: equipment.count(GearAttributes::ANTI_AIR_GUN),
            special_anti_air_gun: equipment.count(GearAttributes::SPECIAL_ANTI_AIR_GUN),
            large_main_gun: equipment.count(GearAttributes::LARGE_MAIN_GUN),
            anti_air_shell: equipment.count(GearAttributes::ANTI_AIR_SHELL),
            anti_air_rocket: equipment.count(GearAttributes::ANTI_AIR_ROCKET),
            gear_ids: equipment.gear_ids(),
        }
    }

    fn count_id(&self, id: u16) -> usize {
        self.gear_ids.iter().filter(|&&g| g == id).count()
    }

    fn plain_high_angle_gun(&self) -> usize {
        self.high_angle_gun.saturating_sub(self.high_angle_gun_with_director)
    }

    fn plain_anti_air_gun(&self) -> usize {
        self.anti_air_gun.saturating_sub(self.special_anti_air_gun)
    }

    fn ship_in(&self, ids: &[u16]) -> bool {
        ids.contains(&self.ship_id)
    }
}

type Requirement = fn(&AntiAirCutinContext) -> bool;

/// One anti-air cut-in kind
#[derive(Debug, Clone, Copy)]
pub struct AntiAirCutin {
    pub id: u8,
    /// Guaranteed minimum shot-down count
    pub minimum_bonus: f64,
    /// Multiplier on the fixed shot-down count
    pub fixed_modifier: f64,
    /// Activation rate out of 101
    pub base_rate: f64,
    requirement: Requirement,
}

impl PartialEq for AntiAirCutin {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

const fn kind(
    id: u8,
    minimum_bonus: f64,
    fixed_modifier: f64,
    base_rate: f64,
    requirement: Requirement,
) -> AntiAirCutin {
    AntiAirCutin {
        id,
        minimum_bonus,
        fixed_modifier,
        base_rate,
        requirement,
    }
}

const NO_CUTIN: AntiAirCutin = kind(0, 0.0, 1.0, 0.0, |_| true);

static ANTI_AIR_CUTINS: [AntiAirCutin; 39] = [
    kind(1, 7.0, 1.7, 65.0, |c| {
        c.ship_class == AKIZUKI_CLASS && c.high_angle_gun >= 2 && c.air_radar >= 1
    }),
    kind(2, 6.0, 1.7, 58.0, |c| {
        c.ship_class == AKIZUKI_CLASS && c.high_angle_gun >= 1 && c.air_radar >= 1
    }),
    kind(3, 4.0, 1.6, 50.0, |c| c.ship_class == AKIZUKI_CLASS && c.high_angle_gun >= 2),
    kind(4, 6.0, 1.5, 52.0, |c| {
        c.large_main_gun >= 1 && c.anti_air_shell >= 1 && c.fire_director >= 1 && c.air_radar >= 1
    }),
    kind(5, 4.0, 1.5, 55.0, |c| c.high_angle_gun_with_director >= 2 && c.air_radar >= 1),
    kind(6, 4.0, 1.45, 40.0, |c| {
        c.large_main_gun >= 1 && c.anti_air_shell >= 1 && c.fire_director >= 1
    }),
    kind(7, 3.0, 1.35, 45.0, |c| {
        c.high_angle_gun >= 1 && c.fire_director >= 1 && c.air_radar >= 1
    }),
    kind(8, 4.0, 1.4, 50.0, |c| c.high_angle_gun_with_director >= 1 && c.air_radar >= 1),
    kind(9, 2.0, 1.3, 40.0, |c| c.high_angle_gun >= 1 && c.fire_director >= 1),
    kind(10, 8.0, 1.65, 60.0, |c| {
        c.ship_id == MAYA_KAI_NI
            && c.high_angle_gun >= 1
            && c.special_anti_air_gun >= 1
            && c.air_radar >= 1
    }),
    kind(11, 6.0, 1.5, 55.0, |c| {
        c.ship_id == MAYA_KAI_NI && c.high_angle_gun >= 1 && c.special_anti_air_gun >= 1
    }),
    kind(12, 3.0, 1.25, 45.0, |c| {
        c.special_anti_air_gun >= 1 && c.anti_air_gun >= 2 && c.air_radar >= 1
    }),
    kind(13, 4.0, 1.35, 35.0, |c| {
        c.high_angle_gun >= 1 && c.special_anti_air_gun >= 1 && c.air_radar >= 1
    }),
    kind(14, 4.0, 1.45, 63.0, |c| {
        c.ship_id == ISUZU_KAI_NI && c.high_angle_gun >= 1 && c.anti_air_gun >= 1 && c.air_radar >= 1
    }),
    kind(15, 3.0, 1.3, 54.0, |c| {
        c.ship_id == ISUZU_KAI_NI && c.high_angle_gun >= 1 && c.anti_air_gun >= 1
    }),
    kind(16, 4.0, 1.4, 62.0, |c| {
        c.ship_id == KASUMI_KAI_NI_B
            && c.high_angle_gun >= 1
            && c.anti_air_gun >= 1
            && c.air_radar >= 1
    }),
    kind(17, 2.0, 1.25, 57.0, |c| {
        c.ship_id == KASUMI_KAI_NI_B && c.high_angle_gun >= 1 && c.anti_air_gun >= 1
    }),
    kind(18, 2.0, 1.2, 60.0, |c| c.ship_id == SATSUKI_KAI_NI && c.special_anti_air_gun >= 1),
    kind(19, 5.0, 1.45, 55.0, |c| {
        c.ship_id == KINU_KAI_NI && c.plain_high_angle_gun() >= 1 && c.special_anti_air_gun >= 1
    }),
    kind(20, 3.0, 1.25, 60.0, |c| c.ship_id == KINU_KAI_NI && c.special_anti_air_gun >= 1),
    kind(21, 5.0, 1.45, 60.0, |c| {
        c.ship_id == YURA_KAI_NI && c.high_angle_gun >= 1 && c.air_radar >= 1
    }),
    kind(22, 2.0, 1.2, 59.0, |c| c.ship_id == FUMIZUKI_KAI_NI && c.special_anti_air_gun >= 1),
    kind(24, 3.0, 1.25, 63.0, |c| {
        c.ship_in(&[TENRYUU_KAI_NI, TATSUTA_KAI_NI])
            && c.high_angle_gun >= 1
            && c.plain_anti_air_gun() >= 1
    }),
    kind(25, 7.0, 1.55, 60.0, |c| {
        c.ship_in(ISE_CLASS_KAI) && c.anti_air_rocket >= 1 && c.air_radar >= 1 && c.anti_air_shell >= 1
    }),
    kind(26, 6.0, 1.4, 60.0, |c| {
        c.ship_id == MUSASHI_KAI_NI && c.count_id(HA_KAI_WITH_MACHINE_GUNS) >= 1 && c.air_radar >= 1
    }),
    kind(28, 4.0, 1.4, 55.0, |c| {
        (c.ship_in(ISE_CLASS_KAI) || c.ship_id == MUSASHI_KAI_NI)
            && c.anti_air_rocket >= 1
            && c.air_radar >= 1
    }),
    kind(29, 5.0, 1.55, 60.0, |c| {
        c.ship_in(HAMAKAZE_ISOKAZE_B) && c.high_angle_gun >= 1 && c.air_radar >= 1
    }),
    kind(30, 3.0, 1.3, 44.0, |c| c.ship_id == TENRYUU_KAI_NI && c.high_angle_gun >= 3),
    kind(31, 2.0, 1.25, 53.0, |c| c.ship_id == TENRYUU_KAI_NI && c.high_angle_gun >= 2),
    kind(33, 3.0, 1.35, 42.0, |c| {
        c.ship_id == GOTLAND_KAI && c.high_angle_gun >= 1 && c.anti_air_gun >= 1
    }),
    kind(34, 7.0, 1.6, 60.0, |c| {
        c.ship_class == FLETCHER_CLASS && c.count_id(MK30_KAI_WITH_GFCS) >= 2
    }),
    kind(35, 6.0, 1.55, 55.0, |c| {
        c.ship_class == FLETCHER_CLASS
            && c.count_id(MK30_KAI_WITH_GFCS) >= 1
            && c.count_id(MK30_KAI) >= 1
    }),
    kind(36, 6.0, 1.55, 55.0, |c| {
        c.ship_class == FLETCHER_CLASS && c.count_id(MK30_KAI) >= 2 && c.count_id(GFCS_MK37) >= 1
    }),
    kind(37, 4.0, 1.45, 40.0, |c| c.ship_class == FLETCHER_CLASS && c.count_id(MK30_KAI) >= 2),
    kind(38, 10.0, 1.85, 60.0, |c| {
        c.ship_in(ATLANTA) && c.count_id(TWIN_DUAL_PURPOSE_CD) >= 2
    }),
    kind(39, 10.0, 1.7, 57.0, |c| {
        c.ship_in(ATLANTA)
            && c.count_id(TWIN_DUAL_PURPOSE_CD_WITH_GFCS) >= 1
            && c.count_id(TWIN_DUAL_PURPOSE_CD) >= 1
    }),
    kind(40, 10.0, 1.7, 56.0, |c| {
        c.ship_in(ATLANTA)
            && c.count_id(TWIN_DUAL_PURPOSE_CD_WITH_GFCS) >= 2
            && c.count_id(GFCS_MK37) >= 1
    }),
    kind(41, 9.0, 1.65, 65.0, |c| {
        c.ship_in(ATLANTA) && c.count_id(TWIN_DUAL_PURPOSE_CD_WITH_GFCS) >= 2
    }),
    NO_CUTIN,
];

impl AntiAirCutin {
    pub fn by_id(id: u8) -> Option<&'static AntiAirCutin> {
        ANTI_AIR_CUTINS.iter().find(|k| k.id == id)
    }

    /// Activation chance of this kind alone: `base_rate / 101`
    pub fn intrinsic_rate(&self) -> f64 {
        self.base_rate / 101.0
    }

    /// Kind limited to particular ships
    pub fn is_special(&self) -> bool {
        SPECIAL_CUTIN_IDS.contains(&self.id)
    }

    pub fn is_satisfied_by(&self, context: &AntiAirCutinContext) -> bool {
        (self.requirement)(context)
    }
}

impl AttackVariant for AntiAirCutin {
    type Context = AntiAirCutinContext;
    const FAMILY: &'static str = "anti-air cut-in";
    const FALLBACK: Self = NO_CUTIN;

    fn catalog() -> &'static [Self] {
        &ANTI_AIR_CUTINS
    }

    fn def(&self) -> VariantDef {
        if self.id == 0 {
            return VariantDef::fallback();
        }
        VariantDef::new(Priority::Rank(self.id), None, self.fixed_modifier, 1.0)
    }

    fn is_eligible(&self, context: &AntiAirCutinContext) -> bool {
        self.is_satisfied_by(context)
    }
}

/// Exclusive chances of each satisfied kind, in catalog order
pub fn anti_air_cutin_rates(context: &AntiAirCutinContext) -> CutinRates<AntiAirCutin> {
    CutinRates::from_context(context, AntiAirCutin::intrinsic_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_master_data;
    use crate::gear::GearState;
    use crate::ship::ShipState;
    use crate::variant::{eligible_variants, select_variant};

    fn context_for(ship_id: u16, gears: &[u16]) -> AntiAirCutinContext {
        let master = default_master_data();
        let gears: Vec<GearState> = gears.iter().map(|&id| GearState::new(id)).collect();
        let state = ShipState::new(ship_id, 99).with_gears(&gears);
        let ship = Ship::from_state(&master, &state).unwrap();
        AntiAirCutinContext::from_ship(&ship)
    }

    fn ids(kinds: &[AntiAirCutin]) -> Vec<u8> {
        kinds.iter().map(|k| k.id).collect()
    }

    #[test]
    fn test_catalog_is_ordered_and_unique() {
        let catalog = AntiAirCutin::catalog();
        assert_eq!(catalog.len(), 39);
        let regular = &catalog[..catalog.len() - 1];
        assert!(regular.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(catalog.last().map(|k| k.id), Some(0));
    }

    #[test]
    fn test_akizuki_kind_one() {
        let context = context_for(330, &[122, 122, 106]);
        assert_eq!(select_variant::<AntiAirCutin>(&context).id, 1);
        assert_eq!(ids(&eligible_variants::<AntiAirCutin>(&context)), vec![1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_maya_kai_ni() {
        let context = context_for(428, &[3, 131, 106]);
        assert_eq!(ids(&eligible_variants::<AntiAirCutin>(&context)), vec![10, 11, 13]);
    }

    #[test]
    fn test_battleship_with_type_3_shell() {
        let context = context_for(541, &[8, 35, 121, 27]);
        assert_eq!(select_variant::<AntiAirCutin>(&context).id, 4);
    }

    #[test]
    fn test_no_requirement_met() {
        let context = context_for(426, &[2, 15]);
        let selected = select_variant::<AntiAirCutin>(&context);
        assert_eq!(selected.id, 0);
        assert!((selected.fixed_modifier - 1.0).abs() < f64::EPSILON);
        assert!((anti_air_cutin_rates(&context).total() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_intrinsic_rate_and_special_flag() {
        let kind_1 = AntiAirCutin::by_id(1).unwrap();
        assert!((kind_1.intrinsic_rate() - 65.0 / 101.0).abs() < 1e-12);
        assert!(kind_1.is_special());
        assert!(!AntiAirCutin::by_id(4).unwrap().is_special());
        assert!(AntiAirCutin::by_id(23).is_none());
    }

    #[test]
    fn test_rate_chain_in_catalog_order() {
        let context = context_for(330, &[122, 122, 106]);
        let rates = anti_air_cutin_rates(&context);
        let first = rates.entries()[0];
        assert_eq!(first.variant.id, 1);
        assert!((first.rate - 65.0 / 101.0).abs() < 1e-12);
        let second = rates.entries()[1];
        assert!((second.rate - (1.0 - 65.0 / 101.0) * 58.0 / 101.0).abs() < 1e-12);
        assert!(rates.total() <= 1.0);
    }
}
