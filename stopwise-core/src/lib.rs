//! Core domain types for the Stopwise place ranking engine.
//!
//! These models are validated where they enter the system: constructors
//! return `Result` so malformed provider data surfaces early, and everything
//! downstream can rely on fixed-shape records.
//!
//! - [`PlaceRecord`] and [`RawPlaceRecord`] describe candidate places.
//! - [`PreferenceProfile`] holds a user's ranked activities and cutoffs.
//! - [`WeightConfiguration`] holds per-[`Factor`] multipliers.
//! - [`ActivityCategory`] and [`map_activity_types`] translate user-facing
//!   categories into provider place types.
//! - [`Scorer`] is the seam ranking engines score through.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod place;
pub mod profile;
pub mod scorer;
pub mod weights;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use category::{ActivityCategory, ActivityCategoryError, map_activity_types};
pub use place::{PlaceRecord, PlaceRecordError, RawPlaceRecord, ScoredPlace};
pub use profile::{PreferenceProfile, PreferenceProfileError};
pub use scorer::Scorer;
pub use weights::{DEFAULT_WEIGHT, Factor, WeightConfiguration, WeightError};
