//! Facade crate for the Stopwise place ranking engine.
//!
//! This crate re-exports the core domain types and, behind the `scorer`
//! feature, the ranking engine.
//!
//! # Examples
//!
//! ```
//! use stopwise::{PlaceRecord, PreferenceProfile, WeightConfiguration, filter_and_rank};
//!
//! let places = vec![
//!     PlaceRecord::new("Canal Park", "park", Some(0.6), Some(4.4)).unwrap(),
//!     PlaceRecord::new("Navy Museum", "museum", Some(0.2), Some(4.8)).unwrap(),
//! ];
//! let profile = PreferenceProfile::new(["park"], 1.0).unwrap();
//! let ranked = filter_and_rank(&places, &profile, &WeightConfiguration::new());
//! assert_eq!(ranked.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub use stopwise_core::{
    ActivityCategory, ActivityCategoryError, DEFAULT_WEIGHT, Factor, PlaceRecord,
    PlaceRecordError, PreferenceProfile, PreferenceProfileError, RawPlaceRecord, ScoredPlace,
    Scorer, WeightConfiguration, WeightError, map_activity_types,
};

#[cfg(feature = "scorer")]
pub use stopwise_scorer::{
    RankingEngine, RankingReport, Rejection, ScoreBreakdown, SkippedRecord, WeightedScorer,
    filter_and_rank, rank_records,
};
