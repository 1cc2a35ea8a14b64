//! Improvement (stars) bonuses by gear category

use super::GearAttributes;
use crate::master::{GearBase, GearCategory};

/// Which stat an improvement bonus feeds into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImprovementTarget {
    /// Day shelling firepower
    Shelling,
    Torpedo,
    Night,
    Asw,
    Accuracy,
    /// Weighted LOS contribution in the effective LOS formula
    EffectiveLos,
    /// Anti-air used for fighter power
    FighterAntiAir,
    /// Ship-level adjusted anti-air
    AdjustedAntiAir,
    /// Contribution to fleet anti-air
    FleetAntiAir,
    Armor,
}

/// Improvement bonus of a gear for the given stat
pub fn improvement_bonus(base: &GearBase, stars: u8, target: ImprovementTarget) -> f64 {
    if stars == 0 {
        return 0.0;
    }
    let stars = stars as f64;
    let root = stars.sqrt();
    let category = base.category();
    let anti_air = base.record().anti_air;

    match target {
        ImprovementTarget::Shelling => match category {
            GearCategory::SmallCaliberMainGun
            | GearCategory::MediumCaliberMainGun
            | GearCategory::ApShell
            | GearCategory::AntiAirFireDirector
            | GearCategory::Searchlight
            | GearCategory::LargeSearchlight
            | GearCategory::AntiAirShell => root,
            GearCategory::LargeCaliberMainGun => 1.5 * root,
            GearCategory::SecondaryGun if base.is(GearAttributes::HIGH_ANGLE_GUN) => 0.2 * stars,
            GearCategory::SecondaryGun => 0.3 * stars,
            GearCategory::Sonar | GearCategory::DepthCharge => 0.75 * root,
            GearCategory::CarrierBasedTorpedoBomber => 0.2 * stars,
            _ => 0.0,
        },
        ImprovementTarget::Torpedo => match category {
            GearCategory::Torpedo | GearCategory::SubmarineTorpedo => 1.2 * root,
            GearCategory::AntiAirGun => 1.2 * root,
            _ => 0.0,
        },
        ImprovementTarget::Night => match category {
            GearCategory::SmallCaliberMainGun
            | GearCategory::MediumCaliberMainGun
            | GearCategory::LargeCaliberMainGun
            | GearCategory::SecondaryGun
            | GearCategory::ApShell
            | GearCategory::Torpedo
            | GearCategory::SubmarineTorpedo
            | GearCategory::Searchlight
            | GearCategory::LargeSearchlight => root,
            _ => 0.0,
        },
        ImprovementTarget::Asw => match category {
            GearCategory::Sonar | GearCategory::DepthCharge => 2.0 / 3.0 * root,
            _ => 0.0,
        },
        ImprovementTarget::Accuracy => match category {
            GearCategory::SmallRadar | GearCategory::LargeRadar => 1.7 * root,
            GearCategory::SmallCaliberMainGun
            | GearCategory::MediumCaliberMainGun
            | GearCategory::LargeCaliberMainGun
            | GearCategory::SecondaryGun
            | GearCategory::ApShell
            | GearCategory::AntiAirShell
            | GearCategory::AntiAirFireDirector => root,
            _ => 0.0,
        },
        ImprovementTarget::EffectiveLos => match category {
            GearCategory::SmallRadar => 1.25 * root,
            GearCategory::LargeRadar => 1.4 * root,
            GearCategory::ReconSeaplane | GearCategory::CarrierBasedRecon => 1.2 * root,
            GearCategory::SeaplaneBomber => 1.15 * root,
            _ => 0.0,
        },
        ImprovementTarget::FighterAntiAir => match category {
            GearCategory::CarrierBasedFighter
            | GearCategory::SeaplaneFighter
            | GearCategory::LandBasedFighter => 0.2 * stars,
            GearCategory::CarrierBasedDiveBomber | GearCategory::JetFighterBomber
                if anti_air > 0.0 =>
            {
                0.25 * stars
            }
            GearCategory::LandBasedAttackAircraft => 0.5 * root,
            _ => 0.0,
        },
        ImprovementTarget::AdjustedAntiAir => {
            if base.is(GearAttributes::ANTI_AIR_GUN) {
                let factor = if anti_air >= 8.0 { 6.0 } else { 4.0 };
                factor * root
            } else if base.is(GearAttributes::HIGH_ANGLE_GUN) {
                let factor = if anti_air >= 8.0 { 3.0 } else { 2.0 };
                factor * root
            } else if base.is(GearAttributes::ANTI_AIR_FIRE_DIRECTOR) {
                2.0 * root
            } else {
                0.0
            }
        }
        ImprovementTarget::FleetAntiAir => {
            if base.is(GearAttributes::HIGH_ANGLE_GUN) {
                let factor = if anti_air >= 8.0 { 3.0 } else { 2.0 };
                factor * root
            } else if base.is(GearAttributes::ANTI_AIR_FIRE_DIRECTOR) {
                2.0 * root
            } else if base.is(GearAttributes::AIR_RADAR) {
                1.5 * root
            } else {
                0.0
            }
        }
        ImprovementTarget::Armor => match category {
            GearCategory::MediumExtraArmor => 0.2 * stars,
            GearCategory::LargeExtraArmor => 0.3 * stars,
            _ => 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::master::GearRecord;

    fn base(category: GearCategory, icon_id: u16, anti_air: f64) -> GearBase {
        GearBase::from(GearRecord {
            id: 1,
            name: "test".to_string(),
            category,
            icon_id,
            firepower: 0.0,
            torpedo: 0.0,
            anti_air,
            bombing: 0.0,
            asw: 0.0,
            los: 0.0,
            accuracy: 0.0,
            evasion: 0.0,
            armor: 0.0,
            interception: 0.0,
            anti_bomber: 0.0,
            radius: 0.0,
        })
    }

    #[test]
    fn test_no_stars_no_bonus() {
        let gun = base(GearCategory::LargeCaliberMainGun, 3, 0.0);
        assert!((improvement_bonus(&gun, 0, ImprovementTarget::Shelling) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_large_main_gun_shelling() {
        let gun = base(GearCategory::LargeCaliberMainGun, 3, 0.0);
        let bonus = improvement_bonus(&gun, 4, ImprovementTarget::Shelling);
        assert!((bonus - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_fighter_anti_air_is_linear() {
        let fighter = base(GearCategory::CarrierBasedFighter, 6, 10.0);
        let bonus = improvement_bonus(&fighter, 10, ImprovementTarget::FighterAntiAir);
        assert!((bonus - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_high_angle_gun_fleet_anti_air() {
        let strong = base(GearCategory::SmallCaliberMainGun, 16, 10.0);
        let weak = base(GearCategory::SmallCaliberMainGun, 16, 7.0);
        let strong_bonus = improvement_bonus(&strong, 9, ImprovementTarget::FleetAntiAir);
        let weak_bonus = improvement_bonus(&weak, 9, ImprovementTarget::FleetAntiAir);
        assert!((strong_bonus - 9.0).abs() < 1e-9);
        assert!((weak_bonus - 6.0).abs() < 1e-9);
    }
}
