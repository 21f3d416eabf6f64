//! Deterministic place generation for ranking benchmarks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stopwise_core::PlaceRecord;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Activities cycled through when generating places.
const ACTIVITIES: [&str; 5] = ["park", "brewery", "sports", "museum", "bar"];

/// Furthest generated walking distance, in miles.
const MAX_DISTANCE: f64 = 2.0;

/// Generate `count` places with seeded distances and ratings.
///
/// Roughly one place in ten is unrated.
#[must_use]
pub fn generate_places(count: usize, seed: u64) -> Vec<PlaceRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    ACTIVITIES
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .filter_map(|(index, activity)| {
            let distance = rng.gen_range(0.0..MAX_DISTANCE);
            let rating = rng.gen_bool(0.9).then(|| rng.gen_range(1.0..5.0));
            PlaceRecord::new(format!("place-{index}"), *activity, Some(distance), rating).ok()
        })
        .collect()
}
