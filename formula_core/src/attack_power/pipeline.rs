//! Attack power pipeline - precap stages, soft cap, postcap stages

use super::AttackPowerModifiers;
use serde::{Deserialize, Serialize};

/// `value` up to `cap`, `cap + sqrt(value - cap)` above it
pub fn softcap(cap: f64, value: f64) -> f64 {
    if value <= cap {
        value
    } else {
        cap + (value - cap).sqrt()
    }
}

/// Caller-supplied transforms injected into the pipeline
///
/// `prev` runs between the `a13next` and `a14` stages, `next` after the
/// last postcap stage.
#[derive(Clone, Copy, Default)]
pub struct StageHooks<'h> {
    pub prev: Option<&'h dyn Fn(f64) -> f64>,
    pub next: Option<&'h dyn Fn(f64) -> f64>,
}

impl<'h> StageHooks<'h> {
    /// No hooks
    pub fn none() -> Self {
        StageHooks::default()
    }

    /// Transform run right before `a14`
    pub fn with_prev(mut self, prev: &'h dyn Fn(f64) -> f64) -> Self {
        self.prev = Some(prev);
        self
    }

    /// Transform run after the last postcap stage
    pub fn with_next(mut self, next: &'h dyn Fn(f64) -> f64) -> Self {
        self.next = Some(next);
        self
    }
}

impl std::fmt::Debug for StageHooks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageHooks")
            .field("prev", &self.prev.is_some())
            .field("next", &self.next.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackPowerResult {
    pub basic: f64,
    pub cap: f64,
    pub precap: f64,
    /// The cap bound the precap value
    pub is_capped: bool,
    pub capped: f64,
    pub postcap: f64,
}

fn stage(value: f64, a: Option<f64>, b: Option<f64>) -> f64 {
    value * a.unwrap_or(1.0) + b.unwrap_or(0.0)
}

/// Run the full pipeline over a basic power
pub fn calc_attack_power(
    basic: f64,
    cap: f64,
    modifiers: &AttackPowerModifiers,
    hooks: &StageHooks<'_>,
) -> AttackPowerResult {
    let m = modifiers;

    let mut precap = stage(basic, m.a12, m.b12);
    precap = stage(precap, m.a13, m.b13);
    precap = stage(precap, m.a13next, m.b13next);
    if let Some(prev) = hooks.prev {
        precap = prev(precap);
    }
    precap = stage(precap, m.a14, m.b14);

    let is_capped = cap < precap;
    let capped = softcap(cap, precap);

    let mut postcap = stage(capped, m.a5, m.b5).floor();
    postcap = stage(postcap, m.a6, m.b6).floor();
    postcap = stage(postcap, m.a11, m.b11);
    if let Some(next) = hooks.next {
        postcap = next(postcap);
    }

    log::trace!(
        "attack power: basic={} precap={} capped={} (cap {}, bound={}) postcap={}",
        basic,
        precap,
        capped,
        cap,
        is_capped,
        postcap
    );

    AttackPowerResult {
        basic,
        cap,
        precap,
        is_capped,
        capped,
        postcap,
    }
}
