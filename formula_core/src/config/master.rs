//! Master data - read-only ship and gear tables keyed by id

use super::{load_toml, parse_json, parse_toml, ConfigError};
use crate::master::{GearBase, ShipBase};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// On-disk layout: `[[ships]]` and `[[gears]]` arrays
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct MasterDataFile {
    #[serde(default)]
    ships: Vec<ShipBase>,
    #[serde(default)]
    gears: Vec<GearBase>,
}

/// Immutable lookup tables for ship and gear master records
#[derive(Debug, Clone, Default)]
pub struct MasterData {
    ships: HashMap<u16, ShipBase>,
    gears: HashMap<u16, GearBase>,
}

impl MasterData {
    /// Build lookup tables, rejecting duplicate ids
    pub fn new(ships: Vec<ShipBase>, gears: Vec<GearBase>) -> Result<Self, ConfigError> {
        let mut ship_map = HashMap::with_capacity(ships.len());
        for ship in ships {
            let id = ship.id;
            if ship_map.insert(id, ship).is_some() {
                return Err(ConfigError::ValidationError(format!("duplicate ship id {}", id)));
            }
        }

        let mut gear_map = HashMap::with_capacity(gears.len());
        for gear in gears {
            let id = gear.id();
            if gear_map.insert(id, gear).is_some() {
                return Err(ConfigError::ValidationError(format!("duplicate gear id {}", id)));
            }
        }

        log::debug!(
            "master data loaded: {} ships, {} gears",
            ship_map.len(),
            gear_map.len()
        );

        Ok(MasterData {
            ships: ship_map,
            gears: gear_map,
        })
    }

    fn from_file(file: MasterDataFile) -> Result<Self, ConfigError> {
        MasterData::new(file.ships, file.gears)
    }

    /// Parse master data from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        MasterData::from_file(parse_toml(content)?)
    }

    /// Parse master data from a JSON string (`{"ships": [...], "gears": [...]}`)
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        MasterData::from_file(parse_json(content)?)
    }

    /// Load master data from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        MasterData::from_file(load_toml(path)?)
    }

    pub fn ship(&self, id: u16) -> Option<&ShipBase> {
        self.ships.get(&id)
    }

    pub fn gear(&self, id: u16) -> Option<&GearBase> {
        self.gears.get(&id)
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn gear_count(&self) -> usize {
        self.gears.len()
    }
}

/// Bundled sample master data
pub fn default_master_data() -> MasterData {
    let toml = include_str!("../../config/master.toml");
    MasterData::from_toml_str(toml).unwrap_or_else(|err| {
        log::warn!("bundled master data failed to load: {}", err);
        MasterData::default()
    })
}
