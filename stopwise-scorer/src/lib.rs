//! Ranking engine for places near a transit stop.
//!
//! Ranking runs in two stages:
//! - **Filtering** keeps a place only when its activity is one the user
//!   prefers, it lies within the walking cutoff, and its rating meets the
//!   floor when one is set. See [`check`].
//! - **Scoring** sums weighted contributions from the activity's position in
//!   the preference list, remaining walking headroom and rating above the
//!   floor. See [`WeightedScorer`].
//!
//! Survivors are ordered by descending score; ties keep their input order.
//!
//! # Examples
//!
//! ```
//! use stopwise_core::{Factor, PlaceRecord, PreferenceProfile, WeightConfiguration};
//! use stopwise_scorer::filter_and_rank;
//!
//! let places = vec![
//!     PlaceRecord::new("Bluejacket", "brewery", Some(0.3), None).unwrap(),
//!     PlaceRecord::new("Diamond Teague Park", "park", Some(0.4), None).unwrap(),
//!     PlaceRecord::new("Nationals Park", "sports", Some(0.1), None).unwrap(),
//! ];
//! let profile = PreferenceProfile::new(["park", "brewery", "sports"], 1.0).unwrap();
//! let weights = WeightConfiguration::new()
//!     .with_weight(Factor::Activity, 5.0)
//!     .with_weight(Factor::Distance, 3.0);
//!
//! let ranked = filter_and_rank(&places, &profile, &weights);
//! let names: Vec<_> = ranked.iter().map(|scored| scored.place.name()).collect();
//! assert_eq!(names, ["Diamond Teague Park", "Bluejacket", "Nationals Park"]);
//! ```

#![forbid(unsafe_code)]

mod engine;
mod filter;
mod weighted;

pub use engine::{RankingEngine, RankingReport, SkippedRecord};
pub use filter::{Rejection, admits, check};
pub use weighted::{ScoreBreakdown, WeightedScorer};

use stopwise_core::{
    PlaceRecord, PreferenceProfile, RawPlaceRecord, ScoredPlace, WeightConfiguration,
};

/// Filter `places` against `profile` and rank the survivors with `weights`.
///
/// The input is left untouched. An empty result is not an error.
#[must_use]
pub fn filter_and_rank(
    places: &[PlaceRecord],
    profile: &PreferenceProfile,
    weights: &WeightConfiguration,
) -> Vec<ScoredPlace> {
    RankingEngine::with_weights(weights.clone()).rank(places, profile)
}

/// Validate raw records, then filter and rank the valid ones with `weights`.
#[must_use]
pub fn rank_records(
    records: &[RawPlaceRecord],
    profile: &PreferenceProfile,
    weights: &WeightConfiguration,
) -> RankingReport {
    RankingEngine::with_weights(weights.clone()).rank_records(records, profile)
}
