//! formula_core - Battle formula engine for fleet combat
//!
//! This library provides:
//! - StatValue: Level-interpolated and basic ship stats
//! - Gear / Equipment: Gear instances with stars, proficiency and slot sizes
//! - Ship / Fleet: Aggregated stats and fleet-level derived values
//! - Attack power pipeline: Ordered modifier positions with the soft cap
//! - Variant selection: Shelling type, AP shell tier and cut-in families
//! - Damage resolution: Defense power and damage ranges

pub mod attack_power;
pub mod config;
pub mod damage;
pub mod fleet;
pub mod gear;
pub mod master;
pub mod prelude;
pub mod ship;
pub mod stat;
pub mod types;
pub mod variant;

// Re-export core types for convenience
pub use attack_power::{calc_attack_power, AttackPowerModifiers, AttackPowerResult, AttackSituation, StageHooks};
pub use config::{default_master_data, ConfigError, FormulaConstants, MasterData};
pub use damage::{resolve_damage, DamageModifiers, DamageRange, DefensePower};
pub use fleet::{ContactRank, Fleet};
pub use gear::{Equipment, Gear, GearAttributes, GearState};
pub use master::{GearBase, GearCategory, ShipBase};
pub use ship::{Ship, ShipState, ShipStats};
pub use stat::StatValue;
pub use types::{AirState, AttackPhase, DamageState, Engagement, Formation, ShipType, TargetKind};
pub use variant::{select_variant, AttackVariant, CutinRates, DayCutin, NightCutin, ShellingType};
