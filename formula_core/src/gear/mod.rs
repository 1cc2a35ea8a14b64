//! Gear model - attributes, proficiency, improvement and equipment slots

mod attribute;
mod equipment;
#[allow(clippy::module_inception)]
mod gear;
mod improvement;
mod proficiency;

pub use attribute::GearAttributes;
pub use equipment::{Equipment, EquipmentSlot, SlotKey, SlotState};
pub use gear::{Gear, GearState, MAX_STARS};
pub use improvement::{improvement_bonus, ImprovementTarget};
pub use proficiency::{
    ace_from_exp, critical_proficiency_bonus, fighter_ace_bonus, ACE_BOUNDARIES, MAX_ACE,
    MAX_EXP,
};
