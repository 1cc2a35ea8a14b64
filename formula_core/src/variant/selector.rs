//! Priority-ordered variant selection with a guaranteed fallback

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Check order of a variant; lower ranks are checked first
///
/// `Fallback` sorts after every rank and is never filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Rank(u8),
    Fallback,
}

/// Static numbers attached to a variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantDef {
    pub priority: Priority,
    /// Activation denominator; `None` means the variant always fires when
    /// it is reached
    pub denominator: Option<f64>,
    pub power_multiplier: f64,
    pub accuracy_multiplier: f64,
}

impl VariantDef {
    pub const fn new(
        priority: Priority,
        denominator: Option<f64>,
        power_multiplier: f64,
        accuracy_multiplier: f64,
    ) -> Self {
        VariantDef {
            priority,
            denominator,
            power_multiplier,
            accuracy_multiplier,
        }
    }

    /// The fallback entry of a family: no multipliers, always available
    pub const fn fallback() -> Self {
        VariantDef::new(Priority::Fallback, None, 1.0, 1.0)
    }

    /// Activation rate of a single roll: `min(1, term / denominator)`
    pub fn rate(&self, term: f64) -> f64 {
        match self.denominator {
            Some(denominator) if denominator > 0.0 => (term / denominator).clamp(0.0, 1.0),
            _ => 1.0,
        }
    }
}

/// A family of attack variants with a fixed catalog
pub trait AttackVariant: Copy + PartialEq + Debug + 'static {
    /// Flags the eligibility predicates read
    type Context;

    /// Family name for logging
    const FAMILY: &'static str;

    /// The family's single fallback entry
    const FALLBACK: Self;

    /// Every variant in declaration order, fallback included
    fn catalog() -> &'static [Self];

    fn def(&self) -> VariantDef;

    fn is_eligible(&self, context: &Self::Context) -> bool;

    fn priority(&self) -> Priority {
        self.def().priority
    }

    fn is_fallback(&self) -> bool {
        self.priority() == Priority::Fallback
    }
}

/// Eligible non-fallback variants sorted by priority, catalog order on ties
pub fn eligible_variants<V: AttackVariant>(context: &V::Context) -> Vec<V> {
    let mut eligible: Vec<V> = V::catalog()
        .iter()
        .copied()
        .filter(|v| !v.is_fallback() && v.is_eligible(context))
        .collect();
    // stable: equal priorities keep catalog order
    eligible.sort_by_key(|v| v.priority());
    eligible
}

/// The eligible variant with the lowest priority, or the fallback
///
/// Ties go to the variant declared first in the catalog.
pub fn select_variant<V: AttackVariant>(context: &V::Context) -> V {
    let mut best: Option<V> = None;
    for &variant in V::catalog() {
        if variant.is_fallback() || !variant.is_eligible(context) {
            continue;
        }
        match best {
            Some(current) if current.priority() <= variant.priority() => {}
            _ => best = Some(variant),
        }
    }
    let selected = best.unwrap_or(V::FALLBACK);
    log::trace!("{} variant selected: {:?}", V::FAMILY, selected);
    selected
}
