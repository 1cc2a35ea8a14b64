//! Core enums shared across the engine

use serde::{Deserialize, Serialize};

/// Ship type (hull classification)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipType {
    CoastalDefenseShip,
    Destroyer,
    LightCruiser,
    TorpedoCruiser,
    HeavyCruiser,
    AviationCruiser,
    LightCarrier,
    FastBattleship,
    Battleship,
    AviationBattleship,
    StandardCarrier,
    ArmoredCarrier,
    Submarine,
    SubmarineCarrier,
    SeaplaneTender,
    AmphibiousAssaultShip,
    RepairShip,
    SubmarineTender,
    TrainingCruiser,
    FleetOiler,
}

impl ShipType {
    /// Light, standard and armored carriers
    pub fn is_carrier_class(self) -> bool {
        matches!(
            self,
            ShipType::LightCarrier | ShipType::StandardCarrier | ShipType::ArmoredCarrier
        )
    }

    pub fn is_submarine_class(self) -> bool {
        matches!(self, ShipType::Submarine | ShipType::SubmarineCarrier)
    }

    pub fn is_battleship_class(self) -> bool {
        matches!(
            self,
            ShipType::FastBattleship | ShipType::Battleship | ShipType::AviationBattleship
        )
    }

    pub fn is_destroyer(self) -> bool {
        self == ShipType::Destroyer
    }

    /// Transport point contributed by the hull itself
    pub fn transport_point(self) -> f64 {
        match self {
            ShipType::Destroyer => 5.0,
            ShipType::LightCruiser => 2.0,
            ShipType::AviationCruiser => 4.0,
            ShipType::AviationBattleship => 7.0,
            ShipType::SeaplaneTender => 9.0,
            ShipType::AmphibiousAssaultShip => 12.0,
            ShipType::SubmarineCarrier => 1.0,
            ShipType::SubmarineTender => 7.0,
            ShipType::TrainingCruiser => 6.0,
            ShipType::FleetOiler => 15.0,
            _ => 0.0,
        }
    }
}

/// Fleet formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formation {
    LineAhead,
    DoubleLine,
    Diamond,
    Echelon,
    LineAbreast,
    /// Vanguard, attacker in the first half of the fleet
    VanguardTop,
    /// Vanguard, attacker in the second half of the fleet
    VanguardBottom,
}

impl Formation {
    pub fn all() -> &'static [Formation] {
        &[
            Formation::LineAhead,
            Formation::DoubleLine,
            Formation::Diamond,
            Formation::Echelon,
            Formation::LineAbreast,
            Formation::VanguardTop,
            Formation::VanguardBottom,
        ]
    }
}

/// Engagement form (relative heading of both fleets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engagement {
    Parallel,
    HeadOn,
    GreenT,
    RedT,
}

/// Result of the aerial combat phase from the attacker's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirState {
    AirSupremacy,
    AirSuperiority,
    AirParity,
    AirDenial,
    AirIncapability,
}

/// Damage state derived from current / max HP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageState {
    Normal,
    Minor,
    Moderate,
    Heavy,
    Sunk,
}

impl DamageState {
    pub fn from_hp(current: f64, max: f64) -> Self {
        if current <= 0.0 {
            return DamageState::Sunk;
        }
        if max <= 0.0 {
            return DamageState::Normal;
        }
        let ratio = current / max;
        if ratio <= 0.25 {
            DamageState::Heavy
        } else if ratio <= 0.5 {
            DamageState::Moderate
        } else if ratio <= 0.75 {
            DamageState::Minor
        } else {
            DamageState::Normal
        }
    }
}

/// What the attack is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Surface,
    Installation,
    Submarine,
}

/// Combat phase the attack happens in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackPhase {
    DayShelling,
    Torpedo,
    Night,
    Asw,
    Support,
    Aerial,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_class() {
        assert!(ShipType::LightCarrier.is_carrier_class());
        assert!(ShipType::ArmoredCarrier.is_carrier_class());
        assert!(!ShipType::AviationBattleship.is_carrier_class());
        assert!(!ShipType::SeaplaneTender.is_carrier_class());
    }

    #[test]
    fn test_damage_state_thresholds() {
        assert_eq!(DamageState::from_hp(40.0, 40.0), DamageState::Normal);
        assert_eq!(DamageState::from_hp(30.0, 40.0), DamageState::Minor);
        assert_eq!(DamageState::from_hp(20.0, 40.0), DamageState::Moderate);
        assert_eq!(DamageState::from_hp(10.0, 40.0), DamageState::Heavy);
        assert_eq!(DamageState::from_hp(0.0, 40.0), DamageState::Sunk);
    }

    #[test]
    fn test_transport_point_by_type() {
        assert!((ShipType::Destroyer.transport_point() - 5.0).abs() < f64::EPSILON);
        assert!((ShipType::Battleship.transport_point() - 0.0).abs() < f64::EPSILON);
    }
}
