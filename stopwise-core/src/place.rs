//! Candidate places near a transit stop.
//!
//! Upstream providers hand over [`RawPlaceRecord`] values in which every field
//! is optional. Validation into a [`PlaceRecord`] happens once, at the
//! boundary; everything downstream works with the fixed-shape record.

use thiserror::Error;

/// A validated candidate location.
///
/// `walking_distance` shares its unit with
/// [`PreferenceProfile::max_walking_distance`](crate::PreferenceProfile::max_walking_distance).
/// A missing distance means the place is unreachable; a missing rating counts
/// as `0.0` when scoring.
///
/// # Examples
/// ```
/// use stopwise_core::PlaceRecord;
///
/// # fn main() -> Result<(), stopwise_core::PlaceRecordError> {
/// let place = PlaceRecord::new("Diamond Teague Park", "park", Some(0.4), Some(4.6))?;
/// assert_eq!(place.activity_type(), "park");
/// assert_eq!(place.effective_walking_distance(), 0.4);
///
/// let unknown = PlaceRecord::new("Somewhere", "park", None, None)?;
/// assert!(unknown.effective_walking_distance().is_infinite());
/// assert_eq!(unknown.effective_rating(), 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPlaceRecord")
)]
pub struct PlaceRecord {
    name: String,
    activity_type: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    walking_distance: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    rating: Option<f64>,
}

/// Reasons a place record is rejected at the boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlaceRecordError {
    /// The record had no name, or only whitespace.
    #[error("place record is missing a name")]
    MissingName,
    /// The record had no activity type, or only whitespace.
    #[error("place record {name:?} is missing an activity type")]
    MissingActivityType {
        /// Name of the offending record.
        name: String,
    },
    /// The walking distance was negative or NaN.
    #[error("place record {name:?} has invalid walking distance {value}")]
    InvalidWalkingDistance {
        /// Name of the offending record.
        name: String,
        /// Distance supplied by the provider.
        value: f64,
    },
    /// The rating was negative or not finite.
    #[error("place record {name:?} has invalid rating {value}")]
    InvalidRating {
        /// Name of the offending record.
        name: String,
        /// Rating supplied by the provider.
        value: f64,
    },
}

impl PlaceRecord {
    /// Validate and construct a [`PlaceRecord`].
    ///
    /// An infinite walking distance is accepted and means "unreachable".
    ///
    /// # Errors
    /// Returns [`PlaceRecordError`] when the name or activity type is blank,
    /// the distance is negative or NaN, or the rating is negative or not
    /// finite.
    pub fn new(
        name: impl Into<String>,
        activity_type: impl Into<String>,
        walking_distance: Option<f64>,
        rating: Option<f64>,
    ) -> Result<Self, PlaceRecordError> {
        Self::validated(name.into(), activity_type.into(), walking_distance, rating)
    }

    fn validated(
        name: String,
        activity_type: String,
        walking_distance: Option<f64>,
        rating: Option<f64>,
    ) -> Result<Self, PlaceRecordError> {
        if name.trim().is_empty() {
            return Err(PlaceRecordError::MissingName);
        }
        if activity_type.trim().is_empty() {
            return Err(PlaceRecordError::MissingActivityType { name });
        }
        if let Some(value) = walking_distance
            && (value.is_nan() || value < 0.0)
        {
            return Err(PlaceRecordError::InvalidWalkingDistance { name, value });
        }
        if let Some(value) = rating
            && (!value.is_finite() || value < 0.0)
        {
            return Err(PlaceRecordError::InvalidRating { name, value });
        }
        Ok(Self {
            name,
            activity_type,
            walking_distance,
            rating,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Activity label as supplied by the provider.
    #[must_use]
    pub fn activity_type(&self) -> &str {
        &self.activity_type
    }

    /// Walking distance, if the provider knew it.
    #[must_use]
    pub const fn walking_distance(&self) -> Option<f64> {
        self.walking_distance
    }

    /// Rating, if the provider supplied one.
    #[must_use]
    pub const fn rating(&self) -> Option<f64> {
        self.rating
    }

    /// Walking distance used for filtering; unknown distances are infinite.
    #[must_use]
    pub fn effective_walking_distance(&self) -> f64 {
        self.walking_distance.unwrap_or(f64::INFINITY)
    }

    /// Rating used for filtering and scoring; unrated places count as `0.0`.
    #[must_use]
    pub fn effective_rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Report whether this place's activity matches `label`, ignoring case
    /// and surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use stopwise_core::PlaceRecord;
    ///
    /// let place = PlaceRecord::new("Bluejacket", "Brewery", Some(0.3), None).unwrap();
    /// assert!(place.has_activity(" brewery "));
    /// assert!(!place.has_activity("park"));
    /// ```
    #[must_use]
    pub fn has_activity(&self, label: &str) -> bool {
        same_activity(&self.activity_type, label)
    }
}

/// Compare two activity labels case-insensitively, ignoring outer whitespace.
pub(crate) fn same_activity(left: &str, right: &str) -> bool {
    left.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .eq(right.trim().chars().flat_map(char::to_lowercase))
}

/// A place record as delivered by an upstream provider, before validation.
///
/// Every field is optional so one malformed entry does not poison a whole
/// batch. The legacy provider key `type_of_activity` is accepted as an alias
/// for `activity_type` when deserializing.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawPlaceRecord {
    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Activity label.
    #[cfg_attr(feature = "serde", serde(default, alias = "type_of_activity"))]
    pub activity_type: Option<String>,
    /// Walking distance from the stop; `null` when the provider had none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub walking_distance: Option<f64>,
    /// Rating; `null` when the place is unrated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<f64>,
}

impl RawPlaceRecord {
    /// Validate a borrowed raw record without consuming it.
    ///
    /// # Errors
    /// Returns [`PlaceRecordError`] under the same rules as
    /// [`PlaceRecord::new`].
    pub fn validate(&self) -> Result<PlaceRecord, PlaceRecordError> {
        PlaceRecord::try_from(self.clone())
    }
}

impl TryFrom<RawPlaceRecord> for PlaceRecord {
    type Error = PlaceRecordError;

    fn try_from(raw: RawPlaceRecord) -> Result<Self, Self::Error> {
        let name = raw.name.ok_or(PlaceRecordError::MissingName)?;
        let activity_type = raw.activity_type.unwrap_or_default();
        Self::new(name, activity_type, raw.walking_distance, raw.rating)
    }
}

impl From<PlaceRecord> for RawPlaceRecord {
    fn from(place: PlaceRecord) -> Self {
        Self {
            name: Some(place.name),
            activity_type: Some(place.activity_type),
            walking_distance: place.walking_distance,
            rating: place.rating,
        }
    }
}

/// A place paired with the composite score from one ranking pass.
///
/// The wrapped record is carried through unchanged. When serialized the
/// record's fields are flattened next to `score`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredPlace {
    /// The ranked place.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub place: PlaceRecord,
    /// Composite score; higher is better.
    pub score: f64,
}

impl ScoredPlace {
    /// Attach a score to a place.
    #[must_use]
    pub const fn new(place: PlaceRecord, score: f64) -> Self {
        Self { place, score }
    }
}
