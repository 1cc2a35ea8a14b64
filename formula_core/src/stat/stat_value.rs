//! StatValue - level-interpolated ship stat with equipment and bonus terms

use crate::master::StatRange;
use serde::{Deserialize, Serialize};

/// Level from which a ship counts as married
pub const MARRIAGE_LEVEL: u16 = 100;

/// How the naked value is derived from the master range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    /// Grows with level from `left` (Lv1) towards `right` (Lv99)
    Growth,
    /// Fixed at `right`; modernization is the only way to change it
    Basic,
}

/// Linear level interpolation used by growth stats
///
/// `floor((right - left) * level / 99 + left)`. Levels above 99 are not
/// clamped, so married ships keep growing past `right`.
pub fn interpolate_level_stat(left: f64, right: f64, level: u16) -> f64 {
    ((right - left) * level as f64 / 99.0 + left).floor()
}

/// A single stat as seen in one query
///
/// `naked` excludes equipment and bonus; `displayed` is the final value:
/// `displayed = naked + equipment + bonus`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub kind: StatKind,
    pub left: f64,
    pub right: f64,
    pub level: u16,
    #[serde(default)]
    pub modernization: f64,
    /// Sum of the stat over all equipped gear
    #[serde(default)]
    pub equipment: f64,
    /// Externally computed equipment bonus
    #[serde(default)]
    pub bonus: f64,
}

impl StatValue {
    /// Level-scaled stat from a master range
    pub fn growth(range: StatRange, level: u16) -> Self {
        StatValue {
            kind: StatKind::Growth,
            left: range.left,
            right: range.right,
            level,
            modernization: 0.0,
            equipment: 0.0,
            bonus: 0.0,
        }
    }

    /// Fixed stat taking the range's `right` value
    pub fn basic(range: StatRange) -> Self {
        StatValue {
            kind: StatKind::Basic,
            left: range.left,
            right: range.right,
            level: 1,
            modernization: 0.0,
            equipment: 0.0,
            bonus: 0.0,
        }
    }

    /// Set the modernization delta
    pub fn with_modernization(mut self, value: f64) -> Self {
        self.modernization = value;
        self
    }

    /// Set the summed stat of equipped gear
    pub fn with_equipment(mut self, value: f64) -> Self {
        self.equipment = value;
        self
    }

    /// Set the external equipment bonus
    pub fn with_bonus(mut self, value: f64) -> Self {
        self.bonus = value;
        self
    }

    /// Value without equipment or bonus
    pub fn naked(&self) -> f64 {
        match self.kind {
            StatKind::Growth => {
                interpolate_level_stat(self.left, self.right, self.level) + self.modernization
            }
            StatKind::Basic => self.right + self.modernization,
        }
    }

    /// `naked + equipment + bonus`
    pub fn displayed(&self) -> f64 {
        self.naked() + self.equipment + self.bonus
    }
}

/// HP bonus granted on marriage, by the level 1 HP
pub fn marriage_bonus(left: f64) -> f64 {
    if left >= 90.0 {
        9.0
    } else if left >= 70.0 {
        8.0
    } else if left >= 50.0 {
        7.0
    } else if left >= 40.0 {
        6.0
    } else if left >= 30.0 {
        5.0
    } else {
        4.0
    }
}

/// Max HP: `min(left + modernization + marriage bonus, right)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxHpStat {
    pub left: f64,
    pub right: f64,
    pub level: u16,
    #[serde(default)]
    pub modernization: f64,
}

impl MaxHpStat {
    pub fn new(range: StatRange, level: u16, modernization: f64) -> Self {
        MaxHpStat {
            left: range.left,
            right: range.right,
            level,
            modernization,
        }
    }

    /// Ships at or past [`MARRIAGE_LEVEL`]
    pub fn is_married(&self) -> bool {
        self.level >= MARRIAGE_LEVEL
    }

    /// HP gained on marriage, zero before it
    pub fn marriage_bonus(&self) -> f64 {
        if self.is_married() {
            marriage_bonus(self.left)
        } else {
            0.0
        }
    }

    /// Same as [`MaxHpStat::displayed`]; gear never adds HP
    pub fn naked(&self) -> f64 {
        self.displayed()
    }

    /// Base HP plus modernization and marriage bonus, capped by the range maximum
    pub fn displayed(&self) -> f64 {
        (self.left + self.modernization + self.marriage_bonus()).min(self.right)
    }
}

/// Luck: `left + modernization`, unaffected by level and equipment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LuckStat {
    pub left: f64,
    pub right: f64,
    #[serde(default)]
    pub modernization: f64,
}

impl LuckStat {
    pub fn new(range: StatRange, modernization: f64) -> Self {
        LuckStat {
            left: range.left,
            right: range.right,
            modernization,
        }
    }

    pub fn naked(&self) -> f64 {
        self.displayed()
    }

    pub fn displayed(&self) -> f64 {
        self.left + self.modernization
    }
}
