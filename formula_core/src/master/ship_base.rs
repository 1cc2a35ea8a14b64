//! ShipBase - Immutable ship master record

use crate::types::ShipType;
use serde::{Deserialize, Serialize};

/// Master stat range: `left` is the level 1 (or base) value, `right` the
/// level 99 (or maximum) value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatRange {
    pub left: f64,
    pub right: f64,
}

impl StatRange {
    pub fn new(left: f64, right: f64) -> Self {
        StatRange { left, right }
    }
}

/// Ship master record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipBase {
    pub id: u16,
    pub name: String,
    pub ship_type: ShipType,
    /// Ship class identifier (e.g. 54 = Akizuki class)
    #[serde(default)]
    pub ship_class: u16,
    /// Maximum aircraft count per regular slot; its length is the slot count
    #[serde(default)]
    pub slot_sizes: Vec<u8>,
    pub max_hp: StatRange,
    #[serde(default)]
    pub firepower: StatRange,
    #[serde(default)]
    pub torpedo: StatRange,
    #[serde(default)]
    pub anti_air: StatRange,
    #[serde(default)]
    pub armor: StatRange,
    #[serde(default)]
    pub evasion: StatRange,
    #[serde(default)]
    pub asw: StatRange,
    #[serde(default)]
    pub los: StatRange,
    #[serde(default)]
    pub luck: StatRange,
}

impl ShipBase {
    pub fn slot_count(&self) -> usize {
        self.slot_sizes.len()
    }

    pub fn is_carrier_class(&self) -> bool {
        self.ship_type.is_carrier_class()
    }
}
