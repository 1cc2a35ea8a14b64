//! Stat model - naked and displayed values of a single ship stat

mod stat_value;

pub use stat_value::{
    interpolate_level_stat, marriage_bonus, LuckStat, MaxHpStat, StatKind, StatValue,
    MARRIAGE_LEVEL,
};
