//! Night contact - which rank of night recon makes contact, and how likely

use crate::gear::GearAttributes;
use crate::master::GearStat;
use crate::ship::Ship;
use serde::{Deserialize, Serialize};

/// Night recon rank, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactRank {
    Rank1,
    Rank2,
    Rank3,
}

impl ContactRank {
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy >= 3.0 {
            ContactRank::Rank1
        } else if accuracy >= 2.0 {
            ContactRank::Rank2
        } else {
            ContactRank::Rank3
        }
    }

    /// Night attack power added while in contact
    pub fn power_bonus(self) -> f64 {
        match self {
            ContactRank::Rank1 => 9.0,
            ContactRank::Rank2 => 7.0,
            ContactRank::Rank3 => 5.0,
        }
    }

    fn index(self) -> usize {
        match self {
            ContactRank::Rank1 => 0,
            ContactRank::Rank2 => 1,
            ContactRank::Rank3 => 2,
        }
    }
}

/// Contact chance of a single plane: `min(1, floor(sqrt(los) * sqrt(level)) / 25)`
pub fn contact_probability(los: f64, level: u16) -> f64 {
    ((los.sqrt() * (level as f64).sqrt()).floor() / 25.0).min(1.0)
}

/// Rank-exclusive contact probabilities
///
/// A better rank always takes precedence, so each bucket is conditioned on
/// every better rank having failed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NightContactChance {
    pub rank1: f64,
    pub rank2: f64,
    pub rank3: f64,
}

impl NightContactChance {
    /// Combine `(rank, probability)` pairs of individual planes
    pub fn from_sources(sources: impl IntoIterator<Item = (ContactRank, f64)>) -> Self {
        let mut miss = [1.0_f64; 3];
        for (rank, probability) in sources {
            miss[rank.index()] *= 1.0 - probability.clamp(0.0, 1.0);
        }
        let at_least_one = miss.map(|m| 1.0 - m);

        let rank1 = at_least_one[0];
        let rank2 = (1.0 - rank1) * at_least_one[1];
        let rank3 = (1.0 - rank1) * (1.0 - rank2) * at_least_one[2];
        NightContactChance { rank1, rank2, rank3 }
    }

    pub fn get(&self, rank: ContactRank) -> f64 {
        match rank {
            ContactRank::Rank1 => self.rank1,
            ContactRank::Rank2 => self.rank2,
            ContactRank::Rank3 => self.rank3,
        }
    }

    pub fn total(&self) -> f64 {
        self.rank1 + self.rank2 + self.rank3
    }
}

/// Night contact chance over every night recon in the fleet
///
/// Only slots that still hold planes take part.
pub fn night_contact_chance(ships: &[Ship<'_>]) -> NightContactChance {
    let sources = ships.iter().flat_map(|ship| {
        ship.equipment()
            .slots()
            .iter()
            .filter(|slot| slot.current_size > 0)
            .filter_map(|slot| slot.gear)
            .filter(|gear| gear.is(GearAttributes::NIGHT_RECON))
            .map(move |gear| {
                let rank = ContactRank::from_accuracy(gear.stat(GearStat::Accuracy));
                (rank, contact_probability(gear.stat(GearStat::Los), ship.level()))
            })
    });
    NightContactChance::from_sources(sources)
}
