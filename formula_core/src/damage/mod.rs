//! Damage resolution - defense power and damage ranges

mod defense;
mod range;

pub use defense::DefensePower;
pub use range::{remaining_ammo_modifier, resolve_damage, DamageModifiers, DamageRange};
