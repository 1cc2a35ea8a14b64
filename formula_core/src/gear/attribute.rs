//! Gear attributes - tag set derived once from the master record
//!
//! Each attribute has exactly one matcher (a pure predicate over the raw
//! record). A gear's attribute set is the union of every matcher that holds.

use crate::master::{GearCategory, GearRecord};
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GearAttributes: u64 {
        const MAIN_GUN = 1 << 0;
        const LARGE_MAIN_GUN = 1 << 1;
        const SECONDARY_GUN = 1 << 2;
        const HIGH_ANGLE_GUN = 1 << 3;
        /// High-angle gun with an integrated fire director
        const HIGH_ANGLE_GUN_WITH_DIRECTOR = 1 << 4;
        const TORPEDO = 1 << 5;
        const LATE_MODEL_TORPEDO = 1 << 6;
        const RADAR = 1 << 7;
        const AIR_RADAR = 1 << 8;
        const SURFACE_RADAR = 1 << 9;
        const SUBMARINE_RADAR = 1 << 10;
        const AP_SHELL = 1 << 11;
        const ANTI_AIR_SHELL = 1 << 12;
        const ANTI_AIR_GUN = 1 << 13;
        /// Concentrated-deployment machine guns (AA 9+)
        const SPECIAL_ANTI_AIR_GUN = 1 << 14;
        const ANTI_AIR_FIRE_DIRECTOR = 1 << 15;
        const ANTI_AIR_ROCKET = 1 << 16;
        const AIRCRAFT = 1 << 17;
        /// Aircraft that takes part in air combat (counts for fighter power)
        const FIGHTER = 1 << 18;
        /// Aircraft that lets a non-carrier perform carrier shelling
        const CARRIER_SHELLING_PLANE = 1 << 19;
        const DIVE_BOMBER = 1 << 20;
        const TORPEDO_BOMBER = 1 << 21;
        /// Seaplane that enables artillery spotting
        const OBSERVATION_PLANE = 1 << 22;
        const NIGHT_RECON = 1 << 23;
        const SEARCHLIGHT = 1 << 24;
        const STAR_SHELL = 1 << 25;
        const LOOKOUT = 1 << 26;
    }
}

const NIGHT_RECON_IDS: &[u16] = &[102, 469];
const LATE_MODEL_TORPEDO_IDS: &[u16] = &[213, 214, 383, 441, 443, 457, 461];
const LOOKOUT_IDS: &[u16] = &[129, 412];
const ANTI_AIR_ROCKET_IDS: &[u16] = &[274];
const HIGH_ANGLE_ICON: u16 = 16;

type Matcher = fn(&GearRecord) -> bool;

fn category_in(record: &GearRecord, categories: &[GearCategory]) -> bool {
    categories.contains(&record.category)
}

fn is_radar(record: &GearRecord) -> bool {
    category_in(record, &[GearCategory::SmallRadar, GearCategory::LargeRadar])
}

const MATCHERS: &[(GearAttributes, Matcher)] = &[
    (GearAttributes::MAIN_GUN, |r| {
        category_in(
            r,
            &[
                GearCategory::SmallCaliberMainGun,
                GearCategory::MediumCaliberMainGun,
                GearCategory::LargeCaliberMainGun,
            ],
        )
    }),
    (GearAttributes::LARGE_MAIN_GUN, |r| {
        r.category == GearCategory::LargeCaliberMainGun
    }),
    (GearAttributes::SECONDARY_GUN, |r| {
        r.category == GearCategory::SecondaryGun
    }),
    (GearAttributes::HIGH_ANGLE_GUN, |r| r.icon_id == HIGH_ANGLE_ICON),
    (GearAttributes::HIGH_ANGLE_GUN_WITH_DIRECTOR, |r| {
        r.icon_id == HIGH_ANGLE_ICON && r.anti_air >= 8.0
    }),
    (GearAttributes::TORPEDO, |r| {
        category_in(r, &[GearCategory::Torpedo, GearCategory::SubmarineTorpedo])
    }),
    (GearAttributes::LATE_MODEL_TORPEDO, |r| {
        LATE_MODEL_TORPEDO_IDS.contains(&r.id)
    }),
    (GearAttributes::RADAR, is_radar),
    (GearAttributes::AIR_RADAR, |r| is_radar(r) && r.anti_air >= 2.0),
    (GearAttributes::SURFACE_RADAR, |r| is_radar(r) && r.los >= 5.0),
    (GearAttributes::SUBMARINE_RADAR, |r| {
        r.category == GearCategory::SubmarineEquipment
    }),
    (GearAttributes::AP_SHELL, |r| r.category == GearCategory::ApShell),
    (GearAttributes::ANTI_AIR_SHELL, |r| {
        r.category == GearCategory::AntiAirShell
    }),
    (GearAttributes::ANTI_AIR_GUN, |r| r.category == GearCategory::AntiAirGun),
    (GearAttributes::SPECIAL_ANTI_AIR_GUN, |r| {
        r.category == GearCategory::AntiAirGun && r.anti_air >= 9.0
    }),
    (GearAttributes::ANTI_AIR_FIRE_DIRECTOR, |r| {
        r.category == GearCategory::AntiAirFireDirector
    }),
    (GearAttributes::ANTI_AIR_ROCKET, |r| ANTI_AIR_ROCKET_IDS.contains(&r.id)),
    (GearAttributes::AIRCRAFT, |r| r.category.is_aircraft()),
    (GearAttributes::FIGHTER, |r| {
        category_in(
            r,
            &[
                GearCategory::CarrierBasedFighter,
                GearCategory::CarrierBasedDiveBomber,
                GearCategory::CarrierBasedTorpedoBomber,
                GearCategory::JetFighterBomber,
                GearCategory::SeaplaneBomber,
                GearCategory::SeaplaneFighter,
                GearCategory::LandBasedAttackAircraft,
                GearCategory::LandBasedFighter,
            ],
        )
    }),
    (GearAttributes::CARRIER_SHELLING_PLANE, |r| {
        category_in(
            r,
            &[
                GearCategory::CarrierBasedDiveBomber,
                GearCategory::CarrierBasedTorpedoBomber,
                GearCategory::JetFighterBomber,
            ],
        )
    }),
    (GearAttributes::DIVE_BOMBER, |r| {
        category_in(
            r,
            &[GearCategory::CarrierBasedDiveBomber, GearCategory::JetFighterBomber],
        )
    }),
    (GearAttributes::TORPEDO_BOMBER, |r| {
        r.category == GearCategory::CarrierBasedTorpedoBomber
    }),
    (GearAttributes::OBSERVATION_PLANE, |r| {
        category_in(r, &[GearCategory::ReconSeaplane, GearCategory::SeaplaneBomber])
    }),
    (GearAttributes::NIGHT_RECON, |r| NIGHT_RECON_IDS.contains(&r.id)),
    (GearAttributes::SEARCHLIGHT, |r| {
        category_in(r, &[GearCategory::Searchlight, GearCategory::LargeSearchlight])
    }),
    (GearAttributes::STAR_SHELL, |r| r.category == GearCategory::StarShell),
    (GearAttributes::LOOKOUT, |r| {
        r.category == GearCategory::SurfaceShipPersonnel && LOOKOUT_IDS.contains(&r.id)
    }),
];

impl GearAttributes {
    /// Evaluate every matcher against a record
    pub fn from_record(record: &GearRecord) -> Self {
        MATCHERS
            .iter()
            .filter(|(_, matches)| matches(record))
            .fold(GearAttributes::empty(), |acc, (attribute, _)| acc | *attribute)
    }
}
