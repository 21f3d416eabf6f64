//! Per-factor multipliers applied when scoring places.
//!
//! A [`WeightConfiguration`] maps each [`Factor`] to a non-negative
//! multiplier. Factors without an explicit weight use [`DEFAULT_WEIGHT`].

use std::collections::BTreeMap;

use thiserror::Error;

/// Weight applied to any factor that has not been configured.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A scoring factor.
///
/// # Examples
/// ```
/// use stopwise_core::Factor;
///
/// assert_eq!(Factor::Distance.as_str(), "distance");
/// assert_eq!("Rating".parse::<Factor>().ok(), Some(Factor::Rating));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Factor {
    /// Bonus for how highly the user ranks the place's activity.
    Activity,
    /// Bonus for how far inside the walking cutoff the place lies.
    Distance,
    /// Bonus for rating above the user's floor.
    Rating,
}

impl Factor {
    /// Every factor, in scoring order.
    pub const ALL: [Self; 3] = [Self::Activity, Self::Distance, Self::Rating];

    /// Return the factor name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Distance => "distance",
            Self::Rating => "rating",
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Factor {
    type Err = WeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "activity" => Ok(Self::Activity),
            "distance" => Ok(Self::Distance),
            "rating" => Ok(Self::Rating),
            _ => Err(WeightError::UnknownFactor { name: s.to_owned() }),
        }
    }
}

/// Errors raised while configuring weights.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WeightError {
    /// A factor name did not match any [`Factor`].
    #[error("unknown weight factor '{name}'")]
    UnknownFactor {
        /// Name as supplied.
        name: String,
    },
    /// A weight was negative or not finite.
    #[error("weight for {factor} must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Factor being configured.
        factor: Factor,
        /// Rejected value.
        value: f64,
    },
}

/// Multipliers controlling each factor's influence on the composite score.
///
/// # Examples
/// ```
/// use stopwise_core::{Factor, WeightConfiguration};
///
/// let weights = WeightConfiguration::new()
///     .with_weight(Factor::Activity, 5.0)
///     .with_weight(Factor::Distance, 3.0);
/// assert_eq!(weights.weight(Factor::Activity), 5.0);
/// assert_eq!(weights.weight(Factor::Rating), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "BTreeMap<String, f64>")
)]
pub struct WeightConfiguration {
    weights: BTreeMap<Factor, f64>,
}

impl WeightConfiguration {
    /// Construct a configuration where every factor has [`DEFAULT_WEIGHT`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the effective weight for `factor`.
    #[must_use]
    pub fn weight(&self, factor: Factor) -> f64 {
        self.explicit_weight(factor).unwrap_or(DEFAULT_WEIGHT)
    }

    /// Return the configured weight for `factor`, if one was set.
    #[must_use]
    pub fn explicit_weight(&self, factor: Factor) -> Option<f64> {
        self.weights.get(&factor).copied()
    }

    /// Insert or update a weight after validating it.
    ///
    /// # Errors
    /// Returns [`WeightError::InvalidWeight`] for negative or non-finite
    /// values; the configuration is left unchanged.
    pub fn try_set_weight(&mut self, factor: Factor, weight: f64) -> Result<(), WeightError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(WeightError::InvalidWeight {
                factor,
                value: weight,
            });
        }
        self.weights.insert(factor, weight);
        Ok(())
    }

    /// Insert or update a weight.
    ///
    /// Non-finite values become `0.0` and negative values clamp to `0.0`.
    pub fn set_weight(&mut self, factor: Factor, weight: f64) {
        let sanitised = if weight.is_finite() {
            weight.max(0.0)
        } else {
            0.0
        };
        self.weights.insert(factor, sanitised);
    }

    /// Set a weight while returning `self` for chaining.
    #[must_use]
    pub fn with_weight(mut self, factor: Factor, weight: f64) -> Self {
        self.set_weight(factor, weight);
        self
    }

    /// Build a configuration from `(factor name, weight)` pairs.
    ///
    /// # Errors
    /// Returns [`WeightError`] for unknown factor names or invalid weights.
    ///
    /// # Examples
    /// ```
    /// use stopwise_core::{Factor, WeightConfiguration};
    ///
    /// let weights = WeightConfiguration::from_named([("activity", 5.0), ("rating", 2.0)])?;
    /// assert_eq!(weights.weight(Factor::Rating), 2.0);
    /// assert!(WeightConfiguration::from_named([("popularity", 1.0)]).is_err());
    /// # Ok::<(), stopwise_core::WeightError>(())
    /// ```
    pub fn from_named<I, K>(pairs: I) -> Result<Self, WeightError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut configuration = Self::new();
        for (name, weight) in pairs {
            let factor: Factor = name.as_ref().parse()?;
            configuration.try_set_weight(factor, weight)?;
        }
        Ok(configuration)
    }

    /// Report whether every factor's effective weight is zero.
    #[must_use]
    pub fn is_all_zero(&self) -> bool {
        Factor::ALL.iter().all(|factor| self.weight(*factor) == 0.0)
    }
}

impl TryFrom<BTreeMap<String, f64>> for WeightConfiguration {
    type Error = WeightError;

    fn try_from(named: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_named(named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unset_factors_default_to_one() {
        let weights = WeightConfiguration::new();
        for factor in Factor::ALL {
            assert_eq!(weights.weight(factor), DEFAULT_WEIGHT);
            assert!(weights.explicit_weight(factor).is_none());
        }
    }

    #[rstest]
    #[case(-2.0, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    #[case(f64::NAN, 0.0)]
    #[case(2.5, 2.5)]
    fn set_weight_sanitises(#[case] input: f64, #[case] expected: f64) {
        let mut weights = WeightConfiguration::new();
        weights.set_weight(Factor::Distance, input);
        assert_eq!(weights.weight(Factor::Distance), expected);
    }

    #[rstest]
    #[case(-0.1)]
    #[case(f64::NAN)]
    fn try_set_weight_rejects_invalid(#[case] input: f64) {
        let mut weights = WeightConfiguration::new();
        let err = weights.try_set_weight(Factor::Rating, input).unwrap_err();
        assert!(matches!(err, WeightError::InvalidWeight { factor: Factor::Rating, .. }));
        assert!(weights.explicit_weight(Factor::Rating).is_none());
    }

    #[rstest]
    fn zero_weights_are_detected() {
        let weights = WeightConfiguration::new()
            .with_weight(Factor::Activity, 0.0)
            .with_weight(Factor::Distance, 0.0);
        assert!(!weights.is_all_zero());
        assert!(weights.with_weight(Factor::Rating, 0.0).is_all_zero());
    }

    #[rstest]
    fn factor_parsing_rejects_unknown() {
        let err = "popularity".parse::<Factor>().unwrap_err();
        assert_eq!(
            err,
            WeightError::UnknownFactor {
                name: "popularity".into()
            }
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserializes_from_named_map() {
        let weights: WeightConfiguration =
            serde_json::from_str(r#"{"activity":5,"distance":3}"#).unwrap();
        assert_eq!(weights.weight(Factor::Activity), 5.0);
        assert_eq!(weights.weight(Factor::Distance), 3.0);
        assert_eq!(weights.weight(Factor::Rating), 1.0);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserializing_unknown_factor_fails() {
        let result = serde_json::from_str::<WeightConfiguration>(r#"{"popularity":1}"#);
        assert!(result.is_err());
    }
}
