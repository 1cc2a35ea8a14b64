//! GearBase - Immutable gear master record with precomputed attributes

use crate::gear::GearAttributes;
use serde::{Deserialize, Serialize};

/// Gear category (equipment type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearCategory {
    SmallCaliberMainGun,
    MediumCaliberMainGun,
    LargeCaliberMainGun,
    SecondaryGun,
    Torpedo,
    SubmarineTorpedo,
    MidgetSubmarine,
    CarrierBasedFighter,
    CarrierBasedDiveBomber,
    CarrierBasedTorpedoBomber,
    CarrierBasedRecon,
    JetFighterBomber,
    ReconSeaplane,
    SeaplaneBomber,
    SeaplaneFighter,
    LargeFlyingBoat,
    Autogyro,
    AntiSubmarinePatrolAircraft,
    LandBasedAttackAircraft,
    LandBasedFighter,
    LandBasedRecon,
    SmallRadar,
    LargeRadar,
    SubmarineEquipment,
    Sonar,
    LargeSonar,
    DepthCharge,
    ExtraArmor,
    MediumExtraArmor,
    LargeExtraArmor,
    EngineImprovement,
    AntiAirShell,
    ApShell,
    AntiAirGun,
    AntiAirFireDirector,
    LandingCraft,
    SpecialAmphibiousTank,
    Searchlight,
    LargeSearchlight,
    StarShell,
    SurfaceShipPersonnel,
    TransportationMaterial,
    CombatRation,
    Supplies,
    Other,
}

impl GearCategory {
    /// Aircraft categories (anything that occupies an aircraft slot size)
    pub fn is_aircraft(self) -> bool {
        matches!(
            self,
            GearCategory::CarrierBasedFighter
                | GearCategory::CarrierBasedDiveBomber
                | GearCategory::CarrierBasedTorpedoBomber
                | GearCategory::CarrierBasedRecon
                | GearCategory::JetFighterBomber
                | GearCategory::ReconSeaplane
                | GearCategory::SeaplaneBomber
                | GearCategory::SeaplaneFighter
                | GearCategory::LargeFlyingBoat
                | GearCategory::Autogyro
                | GearCategory::AntiSubmarinePatrolAircraft
                | GearCategory::LandBasedAttackAircraft
                | GearCategory::LandBasedFighter
                | GearCategory::LandBasedRecon
        )
    }
}

/// Named numeric stat of a gear record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearStat {
    Firepower,
    Torpedo,
    AntiAir,
    Bombing,
    Asw,
    Los,
    Accuracy,
    Evasion,
    Armor,
    Interception,
    AntiBomber,
}

/// Raw gear record as stored in master data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearRecord {
    pub id: u16,
    pub name: String,
    pub category: GearCategory,
    #[serde(default)]
    pub icon_id: u16,
    #[serde(default)]
    pub firepower: f64,
    #[serde(default)]
    pub torpedo: f64,
    #[serde(default)]
    pub anti_air: f64,
    #[serde(default)]
    pub bombing: f64,
    #[serde(default)]
    pub asw: f64,
    #[serde(default)]
    pub los: f64,
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub evasion: f64,
    #[serde(default)]
    pub armor: f64,
    #[serde(default)]
    pub interception: f64,
    #[serde(default)]
    pub anti_bomber: f64,
    #[serde(default)]
    pub radius: f64,
}

impl GearRecord {
    pub fn stat(&self, stat: GearStat) -> f64 {
        match stat {
            GearStat::Firepower => self.firepower,
            GearStat::Torpedo => self.torpedo,
            GearStat::AntiAir => self.anti_air,
            GearStat::Bombing => self.bombing,
            GearStat::Asw => self.asw,
            GearStat::Los => self.los,
            GearStat::Accuracy => self.accuracy,
            GearStat::Evasion => self.evasion,
            GearStat::Armor => self.armor,
            GearStat::Interception => self.interception,
            GearStat::AntiBomber => self.anti_bomber,
        }
    }
}

/// Gear master record with its attribute set resolved once
///
/// Deserializes from a plain [`GearRecord`]; the attributes are derived from
/// the record and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "GearRecord", into = "GearRecord")]
pub struct GearBase {
    record: GearRecord,
    attributes: GearAttributes,
}

impl From<GearRecord> for GearBase {
    fn from(record: GearRecord) -> Self {
        let attributes = GearAttributes::from_record(&record);
        GearBase { record, attributes }
    }
}

impl From<GearBase> for GearRecord {
    fn from(base: GearBase) -> Self {
        base.record
    }
}

impl GearBase {
    pub fn id(&self) -> u16 {
        self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn category(&self) -> GearCategory {
        self.record.category
    }

    pub fn icon_id(&self) -> u16 {
        self.record.icon_id
    }

    pub fn record(&self) -> &GearRecord {
        &self.record
    }

    pub fn attributes(&self) -> GearAttributes {
        self.attributes
    }

    pub fn stat(&self, stat: GearStat) -> f64 {
        self.record.stat(stat)
    }

    /// Aircraft keep proficiency (experience) in addition to stars
    pub fn has_proficiency(&self) -> bool {
        self.record.category.is_aircraft()
    }

    pub fn is(&self, attribute: GearAttributes) -> bool {
        self.attributes.contains(attribute)
    }

    /// True if any of the given attributes is present
    pub fn is_any(&self, attributes: GearAttributes) -> bool {
        self.attributes.intersects(attributes)
    }

    pub fn category_in(&self, categories: &[GearCategory]) -> bool {
        categories.contains(&self.record.category)
    }
}
