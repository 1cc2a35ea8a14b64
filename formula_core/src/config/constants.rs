//! Formula constants configuration

use super::{load_toml, parse_toml, ConfigError};
use crate::types::AttackPhase;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable formula constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormulaConstants {
    #[serde(default)]
    pub caps: CapConstants,
    #[serde(default)]
    pub critical: CriticalConstants,
    #[serde(default)]
    pub damage: DamageConstants,
}

impl FormulaConstants {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let constants: FormulaConstants = parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: FormulaConstants = load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for phase in [
            AttackPhase::DayShelling,
            AttackPhase::Torpedo,
            AttackPhase::Night,
            AttackPhase::Asw,
            AttackPhase::Support,
            AttackPhase::Aerial,
        ] {
            if self.caps.cap_for(phase) <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "soft cap for {:?} must be positive",
                    phase
                )));
            }
        }
        Ok(())
    }
}

/// Soft cap per attack phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapConstants {
    #[serde(default = "default_day_shelling_cap")]
    pub day_shelling: f64,
    #[serde(default = "default_torpedo_cap")]
    pub torpedo: f64,
    #[serde(default = "default_night_cap")]
    pub night: f64,
    #[serde(default = "default_asw_cap")]
    pub asw: f64,
    #[serde(default = "default_support_cap")]
    pub support: f64,
    #[serde(default = "default_aerial_cap")]
    pub aerial: f64,
}

impl CapConstants {
    pub fn cap_for(&self, phase: AttackPhase) -> f64 {
        match phase {
            AttackPhase::DayShelling => self.day_shelling,
            AttackPhase::Torpedo => self.torpedo,
            AttackPhase::Night => self.night,
            AttackPhase::Asw => self.asw,
            AttackPhase::Support => self.support,
            AttackPhase::Aerial => self.aerial,
        }
    }
}

impl Default for CapConstants {
    fn default() -> Self {
        CapConstants {
            day_shelling: 220.0,
            torpedo: 180.0,
            night: 360.0,
            asw: 170.0,
            support: 170.0,
            aerial: 170.0,
        }
    }
}

fn default_day_shelling_cap() -> f64 {
    220.0
}
fn default_torpedo_cap() -> f64 {
    180.0
}
fn default_night_cap() -> f64 {
    360.0
}
fn default_asw_cap() -> f64 {
    170.0
}
fn default_support_cap() -> f64 {
    170.0
}
fn default_aerial_cap() -> f64 {
    170.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalConstants {
    /// Critical hit power multiplier (1.5 = 150%)
    #[serde(default = "default_critical_multiplier")]
    pub multiplier: f64,
}

impl Default for CriticalConstants {
    fn default() -> Self {
        CriticalConstants {
            multiplier: 1.5,
        }
    }
}

fn default_critical_multiplier() -> f64 {
    1.5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageConstants {
    /// Defense power = armor * min_factor + floor(r) * random_factor, r in [0, armor)
    #[serde(default = "default_armor_min_factor")]
    pub armor_min_factor: f64,
    #[serde(default = "default_armor_random_factor")]
    pub armor_random_factor: f64,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            armor_min_factor: 0.7,
            armor_random_factor: 0.6,
        }
    }
}

fn default_armor_min_factor() -> f64 {
    0.7
}
fn default_armor_random_factor() -> f64 {
    0.6
}
