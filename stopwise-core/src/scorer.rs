//! Score places for a preference profile.
//!
//! The `Scorer` trait assigns a composite score to a
//! [`PlaceRecord`](crate::PlaceRecord) given a user's
//! [`PreferenceProfile`](crate::PreferenceProfile).

use crate::{PlaceRecord, PreferenceProfile};

/// Calculate a composite score for a place.
///
/// Higher scores indicate a better match. Implementations must be
/// thread-safe (`Send` + `Sync`) so one scorer can rank several profiles in
/// parallel. The method is infallible; implementers return `0.0` when no
/// information is available.
///
/// Implementations must produce finite, non-negative scores. Use
/// [`Scorer::sanitise`] to apply that guard.
///
/// # Examples
///
/// ```rust
/// use stopwise_core::{PlaceRecord, PreferenceProfile, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, _place: &PlaceRecord, _profile: &PreferenceProfile) -> f64 {
///         1.0
///     }
/// }
///
/// let place = PlaceRecord::new("Yards Park", "park", Some(0.2), None).unwrap();
/// let profile = PreferenceProfile::new(["park"], 1.0).unwrap();
/// assert_eq!(FlatScorer.score(&place, &profile), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `place` according to `profile`.
    fn score(&self, place: &PlaceRecord, profile: &PreferenceProfile) -> f64;

    /// Validate a raw score.
    ///
    /// Returns `0.0` for non-finite or negative values.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.max(0.0)
    }
}
