//! Fleet - up to seven ships and the fleet-wide aggregates

mod contact;

pub use contact::{contact_probability, night_contact_chance, ContactRank, NightContactChance};

use crate::config::MasterData;
use crate::ship::{expedition_bonus, ExpeditionContribution, Ship, ShipState};
use crate::types::Formation;

/// Largest fleet (a strike force) has seven ships
pub const MAX_FLEET_SIZE: usize = 7;

/// Fleet anti-air multiplier by formation
pub fn formation_anti_air_modifier(formation: Formation) -> f64 {
    match formation {
        Formation::LineAhead | Formation::Echelon | Formation::LineAbreast => 1.0,
        Formation::DoubleLine => 1.2,
        Formation::Diamond => 1.6,
        Formation::VanguardTop | Formation::VanguardBottom => 1.1,
    }
}

#[derive(Debug, Clone, Default)]
pub struct Fleet<'a> {
    ships: Vec<Ship<'a>>,
}

impl<'a> Fleet<'a> {
    /// Ships past [`MAX_FLEET_SIZE`] are dropped
    pub fn new(mut ships: Vec<Ship<'a>>) -> Self {
        ships.truncate(MAX_FLEET_SIZE);
        Fleet { ships }
    }

    /// Resolve ship states; unknown ships are skipped
    pub fn from_states(master: &'a MasterData, states: &[ShipState]) -> Self {
        let ships = states
            .iter()
            .filter_map(|state| Ship::from_state(master, state))
            .collect();
        Fleet::new(ships)
    }

    /// Ships in fleet order
    pub fn ships(&self) -> &[Ship<'a>] {
        &self.ships
    }

    /// First ship of the fleet
    pub fn flagship(&self) -> Option<&Ship<'a>> {
        self.ships.first()
    }

    /// Number of ships
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// True for a fleet without ships
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Sum of displayed LOS over every ship
    pub fn total_los(&self) -> f64 {
        self.ships.iter().map(|s| s.stats().los.displayed()).sum()
    }

    /// Fleet effective LOS: `sum(ship values) - ceil(0.4 * hq level) + 12`
    pub fn effective_los(&self, node_factor: f64, hq_level: u16) -> f64 {
        let ships: f64 = self.ships.iter().map(|s| s.effective_los(node_factor)).sum();
        ships - (0.4 * hq_level as f64).ceil() + 12.0
    }

    /// Floored fleet anti-air under a formation
    pub fn fleet_anti_air(&self, formation: Formation) -> f64 {
        let total: f64 = self.ships.iter().map(|s| s.fleet_anti_air_contribution()).sum();
        (formation_anti_air_modifier(formation) * total).floor()
    }

    /// Transport points summed over the fleet
    pub fn transport_point(&self) -> f64 {
        self.ships.iter().map(|s| s.stats().transport_point).sum()
    }

    /// Expedition income bonus of the whole fleet
    pub fn expedition_bonus(&self) -> f64 {
        let contributions: Vec<ExpeditionContribution> =
            self.ships.iter().map(|s| s.expedition_contribution()).collect();
        expedition_bonus(&contributions)
    }

    /// Chance of each night contact rank
    pub fn night_contact_chance(&self) -> NightContactChance {
        night_contact_chance(&self.ships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_master_data;
    use crate::gear::GearState;
    use crate::ship::ShipState;

    #[test]
    fn test_unknown_ships_skipped() {
        let master = default_master_data();
        let fleet = Fleet::from_states(
            &master,
            &[ShipState::new(541, 99), ShipState::new(9999, 99), ShipState::new(330, 99)],
        );
        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet.flagship().map(|s| s.ship_id()), Some(541));
    }

    #[test]
    fn test_fleet_size_limit() {
        let master = default_master_data();
        let states: Vec<ShipState> = (0..9).map(|_| ShipState::new(426, 99)).collect();
        assert_eq!(Fleet::from_states(&master, &states).len(), MAX_FLEET_SIZE);
    }

    #[test]
    fn test_fleet_effective_los() {
        let master = default_master_data();
        // Nagato Kai Ni Lv99 naked LOS 45 with a recon seaplane (LOS 5)
        let fleet = Fleet::from_states(
            &master,
            &[ShipState::new(541, 99).with_gears(&[GearState::new(25)])],
        );
        let expected = 45.0_f64.sqrt() + 6.0 - 2.0 - 48.0 + 12.0;
        assert!((fleet.effective_los(1.0, 120) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fleet_anti_air_formation() {
        let master = default_master_data();
        let akizuki = ShipState::new(330, 99).with_gears(&[
            GearState::new(122),
            GearState::new(122),
            GearState::new(131),
        ]);
        let fleet = Fleet::from_states(&master, &[akizuki.clone(), akizuki]);
        // each ship contributes 8
        assert!((fleet.fleet_anti_air(Formation::LineAhead) - 16.0).abs() < f64::EPSILON);
        assert!((fleet.fleet_anti_air(Formation::Diamond) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_night_contact_from_fleet() {
        let master = default_master_data();
        // Type 98 night recon: LOS 3, accuracy 1 -> rank 3
        let fleet = Fleet::from_states(
            &master,
            &[
                ShipState::new(541, 99).with_gears(&[GearState::new(102)]),
                ShipState::new(330, 99),
                ShipState::new(426, 99),
            ],
        );
        let chance = fleet.night_contact_chance();
        assert!((chance.rank3 - 0.68).abs() < 1e-9);
        assert!((chance.rank1 - 0.0).abs() < f64::EPSILON);
        assert!(chance.total() <= 1.0);
    }
}
