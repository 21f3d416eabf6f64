//! Proptest strategies for ranking property tests.
//!
//! Generated places carry unique names of the form `place-<index>` so a
//! ranked entry can be traced back to its input position.

use proptest::prelude::*;
use stopwise_core::{Factor, PlaceRecord, PreferenceProfile, WeightConfiguration};

/// Activity labels drawn for both places and preferences.
const ACTIVITIES: [&str; 6] = ["park", "brewery", "sports", "museum", "bar", "Park"];

/// Strategy for one place with an optional distance and rating.
fn place_strategy(index: usize) -> impl Strategy<Value = PlaceRecord> {
    (
        prop::sample::select(ACTIVITIES.to_vec()),
        prop::option::of(0.0_f64..3.0_f64),
        prop::option::of(0.0_f64..5.0_f64),
    )
        .prop_filter_map("valid place", move |(activity, distance, rating)| {
            PlaceRecord::new(format!("place-{index}"), activity, distance, rating).ok()
        })
}

/// Strategy for up to `max_count` places in provider order.
pub fn places_strategy(max_count: usize) -> impl Strategy<Value = Vec<PlaceRecord>> {
    (0..=max_count).prop_flat_map(|count| {
        (0..count).map(place_strategy).collect::<Vec<_>>()
    })
}

/// Strategy for a profile over a shuffled subset of activities.
pub fn profile_strategy() -> impl Strategy<Value = PreferenceProfile> {
    (
        prop::sample::subsequence(ACTIVITIES.to_vec(), 0..=ACTIVITIES.len()).prop_shuffle(),
        0.0_f64..3.0_f64,
        prop::option::of(0.0_f64..5.0_f64),
    )
        .prop_filter_map("valid profile", |(activities, max, min_rating)| {
            let profile = PreferenceProfile::new(activities, max).ok()?;
            match min_rating {
                Some(floor) => profile.with_min_rating(floor).ok(),
                None => Some(profile),
            }
        })
}

/// Strategy for non-negative weights, including zeros.
pub fn weights_strategy() -> impl Strategy<Value = WeightConfiguration> {
    (
        prop_oneof![Just(0.0_f64), 0.0_f64..10.0_f64],
        prop_oneof![Just(0.0_f64), 0.0_f64..10.0_f64],
        prop_oneof![Just(0.0_f64), 0.0_f64..10.0_f64],
    )
        .prop_map(|(activity, distance, rating)| {
            WeightConfiguration::new()
                .with_weight(Factor::Activity, activity)
                .with_weight(Factor::Distance, distance)
                .with_weight(Factor::Rating, rating)
        })
}

/// Recover the input position from a generated place name.
pub fn input_index(place: &PlaceRecord) -> Option<usize> {
    place.name().strip_prefix("place-")?.parse().ok()
}
