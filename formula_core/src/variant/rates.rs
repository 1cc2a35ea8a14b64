//! Activation rate chains over priority-ordered variants

use super::selector::{eligible_variants, AttackVariant};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutinRate<V> {
    pub variant: V,
    /// Chance that this variant is the one that fires
    pub rate: f64,
}

/// Exclusive activation chances of one attack
///
/// Variants are tried in order; each only gets the probability left over
/// by the ones before it. Whatever remains goes to the fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct CutinRates<V> {
    entries: Vec<CutinRate<V>>,
    fallback: V,
}

impl<V: AttackVariant> CutinRates<V> {
    /// Chain individual rates in the given order: `P(i) = remaining * rate_i`
    pub fn chain(individual: impl IntoIterator<Item = (V, f64)>) -> Self {
        let mut remaining = 1.0;
        let mut entries = Vec::new();
        for (variant, rate) in individual {
            let rate = remaining * rate.clamp(0.0, 1.0);
            remaining -= rate;
            entries.push(CutinRate { variant, rate });
        }
        CutinRates {
            entries,
            fallback: V::FALLBACK,
        }
    }

    /// Chain every eligible variant in priority order, each rated by `rate`
    pub fn from_context(context: &V::Context, rate: impl Fn(&V) -> f64) -> Self {
        CutinRates::chain(eligible_variants::<V>(context).into_iter().map(|v| {
            let r = rate(&v);
            (v, r)
        }))
    }

    pub fn entries(&self) -> &[CutinRate<V>] {
        &self.entries
    }

    pub fn rate_of(&self, variant: V) -> f64 {
        if variant == self.fallback {
            return self.fallback_rate();
        }
        self.entries
            .iter()
            .filter(|e| e.variant == variant)
            .map(|e| e.rate)
            .sum()
    }

    /// Combined chance of any non-fallback variant
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.rate).sum()
    }

    pub fn fallback_rate(&self) -> f64 {
        (1.0 - self.total()).max(0.0)
    }

    /// Sample the variant that fires, using the caller's RNG
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> V {
        let roll: f64 = rng.gen();
        let mut cumulative = 0.0;
        for entry in &self.entries {
            cumulative += entry.rate;
            if roll < cumulative {
                return entry.variant;
            }
        }
        self.fallback
    }
}
