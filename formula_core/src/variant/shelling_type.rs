//! Shelling vs carrier shelling decision

use crate::gear::GearAttributes;
use crate::ship::Ship;
use crate::types::{ShipType, TargetKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellingType {
    Shelling,
    CarrierShelling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellingTypeContext {
    pub is_carrier_class: bool,
    /// Non-carrier hulls that switch to carrier shelling when they carry bombers
    pub is_special_class: bool,
    pub target: TargetKind,
    /// Carrier shelling plane in a slot that still holds planes
    pub has_carrier_shelling_plane: bool,
}

fn is_special_class(ship_type: ShipType) -> bool {
    matches!(ship_type, ShipType::FleetOiler | ShipType::AmphibiousAssaultShip)
}

impl ShellingTypeContext {
    pub fn from_ship(ship: &Ship<'_>, target: TargetKind) -> Self {
        ShellingTypeContext {
            is_carrier_class: ship.is_carrier_class(),
            is_special_class: is_special_class(ship.ship_type()),
            target,
            has_carrier_shelling_plane: ship
                .equipment()
                .has_aircraft(GearAttributes::CARRIER_SHELLING_PLANE),
        }
    }
}

/// Decision table, recomputed for every attack
pub fn shelling_type(context: &ShellingTypeContext) -> ShellingType {
    if context.is_carrier_class {
        return ShellingType::CarrierShelling;
    }
    if context.target != TargetKind::Installation && !context.is_special_class {
        return ShellingType::Shelling;
    }
    if context.has_carrier_shelling_plane {
        ShellingType::CarrierShelling
    } else {
        ShellingType::Shelling
    }
}
