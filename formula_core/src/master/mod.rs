//! Master data records - immutable ship and gear base stats

mod gear_base;
mod ship_base;

pub use gear_base::{GearBase, GearCategory, GearRecord, GearStat};
pub use ship_base::{ShipBase, StatRange};
