//! Ship aggregate - stats, equipment and the values derived from both
//!
//! A [`Ship`] is rebuilt from a [`ShipState`] for every query. It borrows
//! master data for its equipment, while [`ShipStats`] is a plain owned
//! snapshot that outlives the borrow.

mod accuracy;
mod air;
mod anti_air;
mod expedition;
mod los;
mod transport;

pub use accuracy::{basic_accuracy, evasion_cap};
pub use air::{fighter_power, interception_power, proficiency_critical_modifier};
pub use anti_air::{adjusted_anti_air, fleet_anti_air_contribution};
pub use expedition::{expedition_bonus, ExpeditionContribution, EXPEDITION_BONUS_CAP};
pub use los::{equipment_effective_los, los_multiplier, ship_effective_los};
pub use transport::{gear_transport_point, ship_transport_point};

use crate::config::MasterData;
use crate::gear::{Equipment, Gear, GearState, SlotState};
use crate::master::{GearStat, ShipBase};
use crate::stat::{LuckStat, MaxHpStat, StatValue};
use crate::types::{DamageState, ShipType};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Per-stat deltas, used both for modernization and for equipment bonuses
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatDelta {
    #[serde(default)]
    pub max_hp: f64,
    #[serde(default)]
    pub firepower: f64,
    #[serde(default)]
    pub torpedo: f64,
    #[serde(default)]
    pub anti_air: f64,
    #[serde(default)]
    pub armor: f64,
    #[serde(default)]
    pub evasion: f64,
    #[serde(default)]
    pub asw: f64,
    #[serde(default)]
    pub los: f64,
    #[serde(default)]
    pub luck: f64,
}

impl Add for StatDelta {
    type Output = StatDelta;

    fn add(self, other: StatDelta) -> StatDelta {
        StatDelta {
            max_hp: self.max_hp + other.max_hp,
            firepower: self.firepower + other.firepower,
            torpedo: self.torpedo + other.torpedo,
            anti_air: self.anti_air + other.anti_air,
            armor: self.armor + other.armor,
            evasion: self.evasion + other.evasion,
            asw: self.asw + other.asw,
            los: self.los + other.los,
            luck: self.luck + other.luck,
        }
    }
}

/// Caller-owned ship state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipState {
    pub ship_id: u16,
    pub level: u16,
    #[serde(default)]
    pub slots: Vec<SlotState>,
    #[serde(default)]
    pub exslot: Option<GearState>,
    #[serde(default)]
    pub modernization: StatDelta,
    /// Current HP; `None` means undamaged
    #[serde(default)]
    pub current_hp: Option<f64>,
}

impl ShipState {
    /// Unequipped ship state at a level
    pub fn new(ship_id: u16, level: u16) -> Self {
        ShipState {
            ship_id,
            level,
            slots: Vec::new(),
            exslot: None,
            modernization: StatDelta::default(),
            current_hp: None,
        }
    }

    /// Set per-slot gear and sizes
    pub fn with_slots(mut self, slots: Vec<SlotState>) -> Self {
        self.slots = slots;
        self
    }

    /// Fill slots in order, every slot at full size
    pub fn with_gears(mut self, gears: &[GearState]) -> Self {
        self.slots = gears.iter().map(|g| SlotState::with_gear(*g)).collect();
        self
    }

    /// Gear in the reinforcement slot
    pub fn with_exslot(mut self, gear: GearState) -> Self {
        self.exslot = Some(gear);
        self
    }

    /// Modernization deltas applied on top of the naked stats
    pub fn with_modernization(mut self, modernization: StatDelta) -> Self {
        self.modernization = modernization;
        self
    }

    /// Current HP; leave unset for an undamaged ship
    pub fn with_current_hp(mut self, hp: f64) -> Self {
        self.current_hp = Some(hp);
        self
    }
}

/// Derived stats of one ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipStats {
    pub max_hp: MaxHpStat,
    pub firepower: StatValue,
    pub torpedo: StatValue,
    pub anti_air: StatValue,
    pub armor: StatValue,
    pub evasion: StatValue,
    pub asw: StatValue,
    pub los: StatValue,
    pub luck: LuckStat,
    pub fighter_power: f64,
    pub interception_power: f64,
    /// Effective LOS with a node factor of 1
    pub effective_los: f64,
    pub transport_point: f64,
}

/// Compose master stats, equipment, modernization and bonuses
///
/// `bonus` yields the externally computed bonus of a single gear; the
/// bonuses of every equipped gear are summed.
pub fn compute_ship_stats<F>(
    base: &ShipBase,
    equipment: &Equipment<'_>,
    modernization: &StatDelta,
    level: u16,
    bonus: F,
) -> ShipStats
where
    F: Fn(&Gear<'_>) -> StatDelta,
{
    let bonus = equipment
        .gears()
        .map(&bonus)
        .fold(StatDelta::default(), |acc, b| acc + b);

    let basic = |range, modernization, stat, bonus| {
        StatValue::basic(range)
            .with_modernization(modernization)
            .with_equipment(equipment.sum_by(stat))
            .with_bonus(bonus)
    };
    let growth = |range, modernization, stat, bonus| {
        StatValue::growth(range, level)
            .with_modernization(modernization)
            .with_equipment(equipment.sum_by(stat))
            .with_bonus(bonus)
    };

    let los = growth(base.los, modernization.los, GearStat::Los, bonus.los);

    ShipStats {
        max_hp: MaxHpStat::new(base.max_hp, level, modernization.max_hp),
        firepower: basic(base.firepower, modernization.firepower, GearStat::Firepower, bonus.firepower),
        torpedo: basic(base.torpedo, modernization.torpedo, GearStat::Torpedo, bonus.torpedo),
        anti_air: basic(base.anti_air, modernization.anti_air, GearStat::AntiAir, bonus.anti_air),
        armor: basic(base.armor, modernization.armor, GearStat::Armor, bonus.armor),
        evasion: growth(base.evasion, modernization.evasion, GearStat::Evasion, bonus.evasion),
        asw: growth(base.asw, modernization.asw, GearStat::Asw, bonus.asw),
        los,
        luck: LuckStat::new(base.luck, modernization.luck),
        fighter_power: fighter_power(equipment),
        interception_power: interception_power(equipment),
        effective_los: ship_effective_los(los.naked(), equipment, 1.0),
        transport_point: ship_transport_point(base, equipment),
    }
}

/// A resolved ship
#[derive(Debug, Clone)]
pub struct Ship<'a> {
    base: &'a ShipBase,
    level: u16,
    equipment: Equipment<'a>,
    stats: ShipStats,
    current_hp: f64,
}

impl<'a> Ship<'a> {
    /// Build a ship without external equipment bonuses
    pub fn new(
        base: &'a ShipBase,
        level: u16,
        equipment: Equipment<'a>,
        modernization: &StatDelta,
        current_hp: Option<f64>,
    ) -> Self {
        Ship::with_bonus(base, level, equipment, modernization, current_hp, |_| StatDelta::default())
    }

    /// Build a ship, adding `bonus` of each gear to the stat bonus terms
    pub fn with_bonus<F>(
        base: &'a ShipBase,
        level: u16,
        equipment: Equipment<'a>,
        modernization: &StatDelta,
        current_hp: Option<f64>,
        bonus: F,
    ) -> Self
    where
        F: Fn(&Gear<'_>) -> StatDelta,
    {
        let stats = compute_ship_stats(base, &equipment, modernization, level, bonus);
        let current_hp = current_hp.unwrap_or_else(|| stats.max_hp.displayed());
        Ship {
            base,
            level,
            equipment,
            stats,
            current_hp,
        }
    }

    /// Resolve a ship state; an unknown ship id yields `None`
    pub fn from_state(master: &'a MasterData, state: &ShipState) -> Option<Self> {
        Ship::from_state_with_bonus(master, state, |_| StatDelta::default())
    }

    /// [`Ship::from_state`] with an equipment bonus callback
    pub fn from_state_with_bonus<F>(master: &'a MasterData, state: &ShipState, bonus: F) -> Option<Self>
    where
        F: Fn(&Gear<'_>) -> StatDelta,
    {
        let Some(base) = master.ship(state.ship_id) else {
            log::debug!("ship {} not found in master data", state.ship_id);
            return None;
        };
        let equipment =
            Equipment::from_states(master, &base.slot_sizes, &state.slots, state.exslot.as_ref());
        Some(Ship::with_bonus(
            base,
            state.level,
            equipment,
            &state.modernization,
            state.current_hp,
            bonus,
        ))
    }

    /// Master record of the ship
    pub fn base(&self) -> &'a ShipBase {
        self.base
    }

    /// Master ship id
    pub fn ship_id(&self) -> u16 {
        self.base.id
    }

    /// Hull type
    pub fn ship_type(&self) -> ShipType {
        self.base.ship_type
    }

    /// Ship class id from the master data
    pub fn ship_class(&self) -> u16 {
        self.base.ship_class
    }

    /// Carriers and carrier-like hulls
    pub fn is_carrier_class(&self) -> bool {
        self.base.is_carrier_class()
    }

    /// Ship level
    pub fn level(&self) -> u16 {
        self.level
    }

    /// Resolved equipment
    pub fn equipment(&self) -> &Equipment<'a> {
        &self.equipment
    }

    /// Derived stats at the current level and equipment
    pub fn stats(&self) -> &ShipStats {
        &self.stats
    }

    /// Owned copy of the derived stats
    pub fn into_stats(self) -> ShipStats {
        self.stats
    }

    /// HP left
    pub fn current_hp(&self) -> f64 {
        self.current_hp
    }

    /// Displayed max HP
    pub fn max_hp(&self) -> f64 {
        self.stats.max_hp.displayed()
    }

    /// Damage state from current and max HP
    pub fn damage_state(&self) -> DamageState {
        DamageState::from_hp(self.current_hp, self.max_hp())
    }

    /// Displayed luck
    pub fn luck(&self) -> f64 {
        self.stats.luck.displayed()
    }

    /// Basic accuracy before fit and formation terms
    pub fn basic_accuracy(&self) -> f64 {
        basic_accuracy(self.level, self.luck(), &self.equipment)
    }

    /// Displayed evasion after the evasion cap
    pub fn capped_evasion(&self) -> f64 {
        evasion_cap(self.stats.evasion.displayed())
    }

    /// Ship term of fleet effective LOS
    pub fn effective_los(&self, node_factor: f64) -> f64 {
        ship_effective_los(self.stats.los.naked(), &self.equipment, node_factor)
    }

    /// Adjusted anti-air (per-ship air defense weight)
    pub fn adjusted_anti_air(&self) -> f64 {
        adjusted_anti_air(self.stats.anti_air.naked(), &self.equipment)
    }

    /// Gear share of fleet anti-air
    pub fn fleet_anti_air_contribution(&self) -> f64 {
        fleet_anti_air_contribution(&self.equipment)
    }

    /// Critical multiplier from aircraft proficiency
    pub fn proficiency_critical_modifier(&self) -> f64 {
        proficiency_critical_modifier(&self.equipment)
    }

    /// What the ship adds to the expedition income bonus
    pub fn expedition_contribution(&self) -> ExpeditionContribution {
        ExpeditionContribution::from_ship(self.base.id, &self.equipment)
    }
}
