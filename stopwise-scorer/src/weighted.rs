//! Linear weighted scoring over activity priority, proximity and rating.
//!
//! Each factor contributes a non-negative component:
//!
//! - activity: `(n - rank) * w_activity`, where `n` is the length of the
//!   preference list and `rank` the zero-based position of the place's
//!   activity;
//! - distance: `max(0, max_walking_distance - walking_distance) * w_distance`;
//! - rating: `max(0, rating - min_rating) * w_rating`, with an unrated place
//!   and an unset floor both read as `0.0`.

#![forbid(unsafe_code)]

use serde::Serialize;
use stopwise_core::{Factor, PlaceRecord, PreferenceProfile, Scorer, WeightConfiguration};

/// Per-factor contributions to a place's score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    /// Contribution from the activity's position in the preference list.
    pub activity: f64,
    /// Contribution from walking distance headroom.
    pub distance: f64,
    /// Contribution from rating above the floor.
    pub rating: f64,
}

impl ScoreBreakdown {
    /// Sum the three components.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the composite score is a plain sum of components"
    )]
    pub const fn total(&self) -> f64 {
        self.activity + self.distance + self.rating
    }
}

/// [`Scorer`] applying a [`WeightConfiguration`] to the three factors.
///
/// # Examples
/// ```
/// use stopwise_core::{Factor, PlaceRecord, PreferenceProfile, Scorer, WeightConfiguration};
/// use stopwise_scorer::WeightedScorer;
///
/// let profile = PreferenceProfile::new(["park", "brewery"], 1.0).unwrap();
/// let place = PlaceRecord::new("Yards Park", "park", Some(0.5), None).unwrap();
/// let scorer = WeightedScorer::new(WeightConfiguration::new().with_weight(Factor::Activity, 5.0));
/// // 2 * 5 for the top activity, plus 0.5 miles of headroom at weight 1.
/// assert!((scorer.score(&place, &profile) - 10.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightedScorer {
    weights: WeightConfiguration,
}

impl WeightedScorer {
    /// Create a scorer with the given weights.
    #[must_use]
    pub const fn new(weights: WeightConfiguration) -> Self {
        Self { weights }
    }

    /// Return the configured weights.
    #[must_use]
    pub const fn weights(&self) -> &WeightConfiguration {
        &self.weights
    }

    /// Compute each factor's contribution for `place`.
    ///
    /// A place whose activity is not preferred gets no activity
    /// contribution, and a place with an unknown distance gets no distance
    /// contribution.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "components are weighted differences"
    )]
    pub fn breakdown(&self, place: &PlaceRecord, profile: &PreferenceProfile) -> ScoreBreakdown {
        let priority = priority_as_f64(profile.activity_priority(place.activity_type()));
        let headroom =
            (profile.max_walking_distance() - place.effective_walking_distance()).max(0.0);
        let surplus = (place.effective_rating() - profile.rating_floor()).max(0.0);
        ScoreBreakdown {
            activity: priority * self.weights.weight(Factor::Activity),
            distance: headroom * self.weights.weight(Factor::Distance),
            rating: surplus * self.weights.weight(Factor::Rating),
        }
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, place: &PlaceRecord, profile: &PreferenceProfile) -> f64 {
        Self::sanitise(self.breakdown(place, profile).total())
    }
}

fn priority_as_f64(priority: usize) -> f64 {
    f64::from(u32::try_from(priority).unwrap_or(u32::MAX))
}
