//! AttackPowerModifiers - named pipeline positions and their composition
//!
//! `a*` positions are multiplicative and compose by product, `b*`
//! positions are additive and compose by sum. An unset position is the
//! identity (1 for `a*`, 0 for `b*`).

use serde::{Deserialize, Serialize};

/// Coefficients for every pipeline position
///
/// Precap positions: `a12 b12`, `a13 b13`, `a13next b13next`, `a14 b14`.
/// Postcap positions: `a5 b5`, `a6 b6`, `a11 b11`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AttackPowerModifiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a12: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b12: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a13: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b13: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a13next: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b13next: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a14: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b14: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a5: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b5: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a6: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b6: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a11: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b11: Option<f64>,
}

fn compose_multiplicative(lhs: Option<f64>, rhs: Option<f64>) -> Option<f64> {
    match (lhs, rhs) {
        (Some(x), Some(y)) => Some(x * y),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

fn compose_additive(lhs: Option<f64>, rhs: Option<f64>) -> Option<f64> {
    match (lhs, rhs) {
        (Some(x), Some(y)) => Some(x + y),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

impl AttackPowerModifiers {
    pub fn new() -> Self {
        AttackPowerModifiers::default()
    }

    /// Merge two modifier sources position by position
    pub fn compose(&self, other: &AttackPowerModifiers) -> AttackPowerModifiers {
        AttackPowerModifiers {
            a12: compose_multiplicative(self.a12, other.a12),
            b12: compose_additive(self.b12, other.b12),
            a13: compose_multiplicative(self.a13, other.a13),
            b13: compose_additive(self.b13, other.b13),
            a13next: compose_multiplicative(self.a13next, other.a13next),
            b13next: compose_additive(self.b13next, other.b13next),
            a14: compose_multiplicative(self.a14, other.a14),
            b14: compose_additive(self.b14, other.b14),
            a5: compose_multiplicative(self.a5, other.a5),
            b5: compose_additive(self.b5, other.b5),
            a6: compose_multiplicative(self.a6, other.a6),
            b6: compose_additive(self.b6, other.b6),
            a11: compose_multiplicative(self.a11, other.a11),
            b11: compose_additive(self.b11, other.b11),
        }
    }

    /// Merge any number of sources; no sources gives the identity
    pub fn compose_all<'m>(sources: impl IntoIterator<Item = &'m AttackPowerModifiers>) -> Self {
        sources
            .into_iter()
            .fold(AttackPowerModifiers::default(), |acc, m| acc.compose(m))
    }

    pub fn is_identity(&self) -> bool {
        *self == AttackPowerModifiers::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_compose_multiplies_and_adds() {
        let formation = AttackPowerModifiers {
            a13: Some(0.8),
            b12: Some(5.0),
            ..AttackPowerModifiers::default()
        };
        let engagement = AttackPowerModifiers {
            a13: Some(1.2),
            b12: Some(2.0),
            a6: Some(1.1),
            ..AttackPowerModifiers::default()
        };
        let merged = formation.compose(&engagement);
        assert!((merged.a13.unwrap() - 0.96).abs() < 1e-9);
        assert!((merged.b12.unwrap() - 7.0).abs() < 1e-9);
        assert_eq!(merged.a6, Some(1.1));
        assert_eq!(merged.a5, None);
    }

    #[test]
    fn test_empty_compose_is_identity() {
        let empty = AttackPowerModifiers::new();
        assert!(empty.compose(&empty).is_identity());
        assert!(AttackPowerModifiers::compose_all(std::iter::empty()).is_identity());
    }

    #[test]
    fn test_compose_order_independent() {
        let x = AttackPowerModifiers {
            a11: Some(1.5),
            b5: Some(3.0),
            ..AttackPowerModifiers::default()
        };
        let y = AttackPowerModifiers {
            a11: Some(1.3),
            b5: Some(-1.0),
            ..AttackPowerModifiers::default()
        };
        assert_eq!(x.compose(&y), y.compose(&x));
    }

    #[test]
    fn test_deserialize_partial_record() {
        let modifiers: AttackPowerModifiers = serde_json::from_str(r#"{"a14": 1.25}"#).unwrap();
        assert_eq!(modifiers.a14, Some(1.25));
        assert_eq!(modifiers.b14, None);
    }

    fn coefficient() -> impl Strategy<Value = Option<f64>> {
        prop::option::of(-10.0f64..10.0)
    }

    proptest! {
        #[test]
        fn prop_compose_with_empty_is_unchanged(
            a12 in coefficient(),
            b12 in coefficient(),
            a13next in coefficient(),
            a6 in coefficient(),
            b11 in coefficient(),
        ) {
            let record = AttackPowerModifiers {
                a12,
                b12,
                a13next,
                a6,
                b11,
                ..AttackPowerModifiers::default()
            };
            let empty = AttackPowerModifiers::default();
            prop_assert_eq!(record.compose(&empty), record);
            prop_assert_eq!(empty.compose(&record), record);
        }
    }
}
