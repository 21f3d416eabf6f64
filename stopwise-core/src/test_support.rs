//! Test-only fixtures shared by unit, behaviour and property tests.
//!
//! The Navy Yard fixture mirrors a small batch a places provider might return
//! for the Navy Yard-Ballpark stop: three venues with distances in miles.

use crate::{PlaceRecord, PreferenceProfile, Scorer};

/// Build a place record, panicking on invalid input.
///
/// # Panics
/// Panics when the arguments would fail [`PlaceRecord::new`] validation.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures should fail fast during setup")]
pub fn place(
    name: &str,
    activity_type: &str,
    walking_distance: Option<f64>,
    rating: Option<f64>,
) -> PlaceRecord {
    PlaceRecord::new(name, activity_type, walking_distance, rating).expect("valid fixture place")
}

/// Bluejacket, Diamond Teague Park and Nationals Park, in provider order.
#[must_use]
pub fn navy_yard_places() -> Vec<PlaceRecord> {
    vec![
        place("Bluejacket", "brewery", Some(0.3), Some(4.1)),
        place("Diamond Teague Park", "park", Some(0.4), Some(4.6)),
        place("Nationals Park", "sports", Some(0.1), Some(4.7)),
    ]
}

/// Preferences of park, brewery, sports within one mile.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures should fail fast during setup")]
pub fn navy_yard_profile() -> PreferenceProfile {
    PreferenceProfile::new(["park", "brewery", "sports"], 1.0).expect("valid fixture profile")
}

/// `Scorer` returning the same value for every place.
#[derive(Debug, Copy, Clone, Default)]
pub struct ConstantScorer(
    /// Score returned for every place.
    pub f64,
);

impl Scorer for ConstantScorer {
    fn score(&self, _place: &PlaceRecord, _profile: &PreferenceProfile) -> f64 {
        Self::sanitise(self.0)
    }
}
