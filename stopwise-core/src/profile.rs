//! Preference profiles: a user's ranked activity preferences plus the
//! walking-distance and rating cutoffs used for filtering.

use thiserror::Error;

use crate::place::same_activity;

/// One user's stated preferences.
///
/// `preferred_activity_types` is a priority list: index `0` is the most
/// preferred activity. Comparisons against place activities ignore case.
///
/// # Examples
/// ```
/// use stopwise_core::PreferenceProfile;
///
/// # fn main() -> Result<(), stopwise_core::PreferenceProfileError> {
/// let profile = PreferenceProfile::new(["park", "brewery", "sports"], 1.0)?
///     .with_min_rating(4.0)?;
/// assert_eq!(profile.activity_rank("Brewery"), Some(1));
/// assert_eq!(profile.activity_priority("park"), 3);
/// assert_eq!(profile.activity_priority("museum"), 0);
/// assert_eq!(profile.min_rating(), Some(4.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceProfile {
    preferred_activity_types: Vec<String>,
    max_walking_distance: f64,
    min_rating: Option<f64>,
}

/// Errors returned while building a [`PreferenceProfile`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PreferenceProfileError {
    /// The walking-distance cutoff was negative or not finite.
    #[error("maximum walking distance must be finite and non-negative, got {value}")]
    InvalidMaxWalkingDistance {
        /// Rejected value.
        value: f64,
    },
    /// The rating cutoff was negative or not finite.
    #[error("minimum rating must be finite and non-negative, got {value}")]
    InvalidMinRating {
        /// Rejected value.
        value: f64,
    },
}

impl PreferenceProfile {
    /// Validate and construct a profile without a rating cutoff.
    ///
    /// Activity labels are trimmed and blank labels are dropped; order is
    /// otherwise preserved.
    ///
    /// # Errors
    /// Returns [`PreferenceProfileError::InvalidMaxWalkingDistance`] when
    /// `max_walking_distance` is negative or not finite.
    pub fn new<I, S>(
        preferred_activity_types: I,
        max_walking_distance: f64,
    ) -> Result<Self, PreferenceProfileError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !is_cutoff(max_walking_distance) {
            return Err(PreferenceProfileError::InvalidMaxWalkingDistance {
                value: max_walking_distance,
            });
        }
        let preferred_activity_types = preferred_activity_types
            .into_iter()
            .map(|label| label.as_ref().trim().to_owned())
            .filter(|label| !label.is_empty())
            .collect();
        Ok(Self {
            preferred_activity_types,
            max_walking_distance,
            min_rating: None,
        })
    }

    /// Add a rating cutoff while returning `self` for chaining.
    ///
    /// # Errors
    /// Returns [`PreferenceProfileError::InvalidMinRating`] when `min_rating`
    /// is negative or not finite.
    pub fn with_min_rating(mut self, min_rating: f64) -> Result<Self, PreferenceProfileError> {
        if !is_cutoff(min_rating) {
            return Err(PreferenceProfileError::InvalidMinRating { value: min_rating });
        }
        self.min_rating = Some(min_rating);
        Ok(self)
    }

    /// Preferred activities, most preferred first.
    #[must_use]
    pub fn preferred_activity_types(&self) -> &[String] {
        &self.preferred_activity_types
    }

    /// Walking-distance cutoff.
    #[must_use]
    pub const fn max_walking_distance(&self) -> f64 {
        self.max_walking_distance
    }

    /// Rating cutoff, if any.
    #[must_use]
    pub const fn min_rating(&self) -> Option<f64> {
        self.min_rating
    }

    /// Rating floor used when scoring; `0.0` without a cutoff.
    #[must_use]
    pub fn rating_floor(&self) -> f64 {
        self.min_rating.unwrap_or(0.0)
    }

    /// Zero-based position of the first preference matching `activity_type`.
    #[must_use]
    pub fn activity_rank(&self, activity_type: &str) -> Option<usize> {
        self.preferred_activity_types
            .iter()
            .position(|preferred| same_activity(preferred, activity_type))
    }

    /// Report whether `activity_type` appears in the preference list.
    #[must_use]
    pub fn prefers(&self, activity_type: &str) -> bool {
        self.activity_rank(activity_type).is_some()
    }

    /// Unweighted activity bonus: `len - rank` for a preferred activity and
    /// `0` otherwise.
    #[must_use]
    pub fn activity_priority(&self, activity_type: &str) -> usize {
        self.activity_rank(activity_type)
            .map_or(0, |rank| self.preferred_activity_types.len() - rank)
    }
}

const fn is_cutoff(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
