//! Prelude module for convenient imports
//!
//! ```rust
//! use formula_core::prelude::*;
//! ```

// Master data and config
pub use crate::config::{default_master_data, FormulaConstants, MasterData};
pub use crate::master::{GearBase, GearCategory, GearStat, ShipBase, StatRange};

// Entities
pub use crate::fleet::{Fleet, NightContactChance};
pub use crate::gear::{Equipment, Gear, GearAttributes, GearState, SlotState};
pub use crate::ship::{Ship, ShipState, ShipStats, StatDelta};
pub use crate::types::{AirState, AttackPhase, DamageState, Engagement, Formation, ShipType, TargetKind};

// Attack power
pub use crate::attack_power::{
    calc_attack_power, night_attack_power, shelling_attack_power, torpedo_attack_power,
    AttackPowerModifiers, AttackPowerResult, AttackSituation, StageHooks,
};

// Variants
pub use crate::variant::{
    anti_air_cutin_rates, day_cutin_rates, night_cutin_rates, select_variant, AntiAirCutin,
    AttackVariant, CutinRates, DayCutin, NightCutin, ShellingType,
};

// Damage
pub use crate::damage::{resolve_damage, DamageModifiers, DamageRange, DefensePower};
