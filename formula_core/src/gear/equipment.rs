//! Equipment - Fixed-size slot collection with independent aircraft counts

use super::{Gear, GearAttributes, GearState};
use crate::config::MasterData;
use crate::master::GearStat;
use serde::{Deserialize, Serialize};

/// Slot position on a ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKey {
    /// Regular slot, zero-based
    Slot(usize),
    /// Exclusive (reinforcement expansion) slot
    Exslot,
}

/// Caller-owned state of one regular slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotState {
    #[serde(default)]
    pub gear: Option<GearState>,
    /// Current aircraft count; `None` means "full"
    #[serde(default)]
    pub size: Option<u8>,
}

impl SlotState {
    pub fn empty() -> Self {
        SlotState::default()
    }

    pub fn with_gear(gear: GearState) -> Self {
        SlotState {
            gear: Some(gear),
            size: None,
        }
    }

    /// Override the aircraft count of the slot
    pub fn sized(mut self, size: u8) -> Self {
        self.size = Some(size);
        self
    }
}

/// A resolved slot
#[derive(Debug, Clone, Copy)]
pub struct EquipmentSlot<'a> {
    pub key: SlotKey,
    pub gear: Option<Gear<'a>>,
    /// Aircraft count used in every calculation, even when over `max_size`
    pub current_size: u8,
    pub max_size: u8,
}

impl<'a> EquipmentSlot<'a> {
    pub fn is_over_capacity(&self) -> bool {
        self.current_size > self.max_size
    }

    pub fn is_exslot(&self) -> bool {
        self.key == SlotKey::Exslot
    }
}

/// All slots of a ship; regular slots first, then the exslot
#[derive(Debug, Clone, Default)]
pub struct Equipment<'a> {
    slots: Vec<EquipmentSlot<'a>>,
}

impl<'a> Equipment<'a> {
    pub fn new(slots: Vec<EquipmentSlot<'a>>) -> Self {
        Equipment { slots }
    }

    /// Build equipment for a hull with `max_sizes.len()` regular slots
    ///
    /// States beyond the slot count are ignored, missing states are empty
    /// slots, and unknown gear ids resolve to an empty slot.
    pub fn from_states(
        master: &'a MasterData,
        max_sizes: &[u8],
        states: &[SlotState],
        exslot: Option<&GearState>,
    ) -> Self {
        let mut slots: Vec<EquipmentSlot<'a>> = max_sizes
            .iter()
            .enumerate()
            .map(|(index, &max_size)| {
                let state = states.get(index).copied().unwrap_or_default();
                EquipmentSlot {
                    key: SlotKey::Slot(index),
                    gear: state.gear.and_then(|g| Gear::from_state(master, &g)),
                    current_size: state.size.unwrap_or(max_size),
                    max_size,
                }
            })
            .collect();

        slots.push(EquipmentSlot {
            key: SlotKey::Exslot,
            gear: exslot.and_then(|g| Gear::from_state(master, g)),
            current_size: 0,
            max_size: 0,
        });

        Equipment { slots }
    }

    pub fn slots(&self) -> &[EquipmentSlot<'a>] {
        &self.slots
    }

    /// Slot by key, including the reinforcement slot
    pub fn slot(&self, key: SlotKey) -> Option<&EquipmentSlot<'a>> {
        self.slots.iter().find(|s| s.key == key)
    }

    /// Filled slots in slot order
    pub fn filled(&self) -> impl Iterator<Item = &EquipmentSlot<'a>> + '_ {
        self.slots.iter().filter(|s| s.gear.is_some())
    }

    /// Equipped gear in slot order
    pub fn gears(&self) -> impl Iterator<Item = &Gear<'a>> + '_ {
        self.slots.iter().filter_map(|s| s.gear.as_ref())
    }

    /// Sum a master stat over every filled slot
    pub fn sum_by(&self, stat: GearStat) -> f64 {
        self.gears().map(|g| g.stat(stat)).sum()
    }

    /// Sum a per-gear value over every filled slot
    pub fn sum_with(&self, f: impl Fn(&Gear<'a>) -> f64) -> f64 {
        self.gears().map(f).sum()
    }

    /// Number of gears carrying the attribute
    pub fn count(&self, attribute: GearAttributes) -> usize {
        self.gears().filter(|g| g.is(attribute)).count()
    }

    pub fn has(&self, attribute: GearAttributes) -> bool {
        self.gears().any(|g| g.is(attribute))
    }

    /// Number of copies of one master gear
    pub fn count_id(&self, gear_id: u16) -> usize {
        self.gears().filter(|g| g.gear_id() == gear_id).count()
    }

    /// True if a gear with the attribute sits in a slot holding aircraft
    pub fn has_aircraft(&self, attribute: GearAttributes) -> bool {
        self.slots
            .iter()
            .any(|s| s.current_size > 0 && s.gear.map_or(false, |g| g.is(attribute)))
    }

    pub fn gear_ids(&self) -> Vec<u16> {
        self.gears().map(|g| g.gear_id()).collect()
    }
}
