//! Gear - A gear instance (master record + stars + experience)

use super::improvement::{improvement_bonus, ImprovementTarget};
use super::proficiency::{ace_from_exp, MAX_EXP};
use super::GearAttributes;
use crate::config::MasterData;
use crate::master::{GearBase, GearCategory, GearStat};
use serde::{Deserialize, Serialize};

/// Maximum improvement level ("max" / "M")
pub const MAX_STARS: u8 = 10;

/// Per-entity gear state as owned by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GearState {
    pub gear_id: u16,
    #[serde(default)]
    pub stars: u8,
    #[serde(default)]
    pub exp: u8,
}

impl GearState {
    pub fn new(gear_id: u16) -> Self {
        GearState {
            gear_id,
            stars: 0,
            exp: 0,
        }
    }

    /// Improvement level, clamped to 10 on resolve
    pub fn with_stars(mut self, stars: u8) -> Self {
        self.stars = stars;
        self
    }

    /// Internal proficiency experience
    pub fn with_exp(mut self, exp: u8) -> Self {
        self.exp = exp;
        self
    }
}

/// A resolved gear: borrows its master record for the duration of a query
#[derive(Debug, Clone, Copy)]
pub struct Gear<'a> {
    base: &'a GearBase,
    stars: u8,
    exp: u8,
}

impl<'a> Gear<'a> {
    pub fn new(base: &'a GearBase, stars: u8, exp: u8) -> Self {
        Gear {
            base,
            stars: stars.min(MAX_STARS),
            exp: exp.min(MAX_EXP),
        }
    }

    /// Resolve a gear state against master data; unknown ids yield `None`
    pub fn from_state(master: &'a MasterData, state: &GearState) -> Option<Self> {
        match master.gear(state.gear_id) {
            Some(base) => Some(Gear::new(base, state.stars, state.exp)),
            None => {
                log::debug!("gear {} not found in master data, slot treated as empty", state.gear_id);
                None
            }
        }
    }

    pub fn base(&self) -> &'a GearBase {
        self.base
    }

    pub fn gear_id(&self) -> u16 {
        self.base.id()
    }

    pub fn category(&self) -> GearCategory {
        self.base.category()
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn exp(&self) -> u8 {
        self.exp
    }

    /// Proficiency level (0..=7); always 0 for gear without proficiency
    pub fn ace(&self) -> u8 {
        if self.base.has_proficiency() {
            ace_from_exp(self.exp)
        } else {
            0
        }
    }

    pub fn stat(&self, stat: GearStat) -> f64 {
        self.base.stat(stat)
    }

    pub fn is(&self, attribute: GearAttributes) -> bool {
        self.base.is(attribute)
    }

    pub fn is_any(&self, attributes: GearAttributes) -> bool {
        self.base.is_any(attributes)
    }

    pub fn category_in(&self, categories: &[GearCategory]) -> bool {
        self.base.category_in(categories)
    }

    /// Improvement bonus of this gear for one calculation
    pub fn improvement(&self, target: ImprovementTarget) -> f64 {
        improvement_bonus(self.base, self.stars, target)
    }

    /// Anti-air used for fighter power in sortie: `aa + 1.5 * interception + improvement`
    pub fn fighter_anti_air(&self) -> f64 {
        let record = self.base.record();
        record.anti_air
            + 1.5 * record.interception
            + self.improvement(ImprovementTarget::FighterAntiAir)
    }

    /// Anti-air used for land base air defense:
    /// `aa + interception + 2 * anti_bomber + improvement`
    pub fn interception_anti_air(&self) -> f64 {
        let record = self.base.record();
        record.anti_air
            + record.interception
            + 2.0 * record.anti_bomber
            + self.improvement(ImprovementTarget::FighterAntiAir)
    }
}
