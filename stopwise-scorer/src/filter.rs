//! Membership and cutoff checks applied before scoring.
#![forbid(unsafe_code)]

use log::debug;
use stopwise_core::{PlaceRecord, PreferenceProfile};

/// Why a place was excluded from a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The place's activity is not in the preference list.
    ActivityNotPreferred,
    /// The place lies beyond the walking cutoff, or its distance is unknown.
    BeyondWalkingDistance,
    /// The place's rating, or `0.0` when unrated, is below the floor.
    BelowMinimumRating,
}

impl Rejection {
    /// Return a short lowercase description.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActivityNotPreferred => "activity not preferred",
            Self::BeyondWalkingDistance => "beyond walking distance",
            Self::BelowMinimumRating => "below minimum rating",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check `place` against every constraint in `profile`.
///
/// Constraints are checked in order: activity membership, walking distance,
/// then rating. The first failure is reported.
///
/// # Errors
/// Returns the [`Rejection`] for the first constraint `place` violates.
///
/// # Examples
/// ```
/// use stopwise_core::{PlaceRecord, PreferenceProfile};
/// use stopwise_scorer::{Rejection, check};
///
/// let profile = PreferenceProfile::new(["park"], 1.0).unwrap();
/// let near = PlaceRecord::new("Yards Park", "Park", Some(0.2), None).unwrap();
/// let unknown = PlaceRecord::new("Canal Park", "park", None, None).unwrap();
/// assert_eq!(check(&near, &profile), Ok(()));
/// assert_eq!(check(&unknown, &profile), Err(Rejection::BeyondWalkingDistance));
/// ```
pub fn check(place: &PlaceRecord, profile: &PreferenceProfile) -> Result<(), Rejection> {
    if !profile.prefers(place.activity_type()) {
        return Err(Rejection::ActivityNotPreferred);
    }
    if place.effective_walking_distance() > profile.max_walking_distance() {
        return Err(Rejection::BeyondWalkingDistance);
    }
    if let Some(floor) = profile.min_rating()
        && place.effective_rating() < floor
    {
        return Err(Rejection::BelowMinimumRating);
    }
    Ok(())
}

/// Report whether `place` survives filtering, logging the reason when not.
#[must_use]
pub fn admits(place: &PlaceRecord, profile: &PreferenceProfile) -> bool {
    check(place, profile)
        .inspect_err(|rejection| debug!("excluding {:?}: {rejection}", place.name()))
        .is_ok()
}
