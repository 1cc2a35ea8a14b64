//! Attack Power - basic power, modifier positions and the cap pipeline

mod basic;
mod modifiers;
mod pipeline;
mod situation;

pub use basic::{
    asw_basic, asw_basic_power, asw_type_constant, carrier_shelling_basic_power,
    day_shelling_basic, night_basic, night_basic_power, shelling_basic_power, torpedo_basic,
    torpedo_basic_power,
};
pub use modifiers::AttackPowerModifiers;
pub use pipeline::{calc_attack_power, softcap, AttackPowerResult, StageHooks};
pub use situation::{
    asw_attack_power, damage_state_modifier, engagement_modifier, formation_modifier,
    night_attack_power, shelling_attack_power, torpedo_attack_power, AttackSituation,
    ShellingPower,
};
