//! User-facing activity categories and their expansion into provider place
//! types.
//!
//! Categories overlap on purpose: `park` belongs to both [`Sporty`] and
//! [`Nature`], `cafe` to both [`Food`] and [`Social`]. Only the flattened
//! result of [`map_activity_types`] is deduplicated.
//!
//! [`Sporty`]: ActivityCategory::Sporty
//! [`Nature`]: ActivityCategory::Nature
//! [`Food`]: ActivityCategory::Food
//! [`Social`]: ActivityCategory::Social
//!
//! # Examples
//! ```
//! use stopwise_core::{ActivityCategory, map_activity_types};
//!
//! assert_eq!(ActivityCategory::Nature.as_str(), "nature");
//! let types = map_activity_types(["food", "nature"]);
//! assert!(types.contains("park"));
//! assert!(types.contains("bakery"));
//! ```

use std::collections::BTreeSet;

use log::debug;
use thiserror::Error;

const FOOD: &[&str] = &["restaurant", "cafe", "bakery", "takeaway", "delivery"];
const MUSEUMS_AND_MONUMENTS: &[&str] = &[
    "museum",
    "art_gallery",
    "historical_landmark",
    "tourist_attraction",
];
const SPORTY: &[&str] = &["gym", "stadium", "park", "sports_club"];
const SOCIAL: &[&str] = &["bar", "night_club", "cafe"];
const NATURE: &[&str] = &["park", "campground", "natural_feature"];

/// Broad activity categories offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActivityCategory {
    /// Places to eat.
    Food,
    /// Museums, galleries and landmarks.
    MuseumsAndMonuments,
    /// Gyms, stadiums and sports grounds.
    Sporty,
    /// Bars, clubs and cafes.
    Social,
    /// Parks and natural features.
    Nature,
}

/// Errors returned when parsing an [`ActivityCategory`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityCategoryError {
    /// The label does not name a known category.
    #[error("unknown activity category '{label}'")]
    Unknown {
        /// Label as supplied.
        label: String,
    },
}

impl ActivityCategory {
    /// Every category, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Food,
        Self::MuseumsAndMonuments,
        Self::Sporty,
        Self::Social,
        Self::Nature,
    ];

    /// Return the category key as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::MuseumsAndMonuments => "museums_and_monuments",
            Self::Sporty => "sporty",
            Self::Social => "social",
            Self::Nature => "nature",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::MuseumsAndMonuments => "Museums and Monuments",
            Self::Sporty => "Sporty",
            Self::Social => "Social",
            Self::Nature => "Nature",
        }
    }

    /// Provider place types this category expands to.
    ///
    /// # Examples
    /// ```
    /// use stopwise_core::ActivityCategory;
    ///
    /// assert_eq!(
    ///     ActivityCategory::Social.place_types(),
    ///     &["bar", "night_club", "cafe"]
    /// );
    /// ```
    #[must_use]
    pub const fn place_types(self) -> &'static [&'static str] {
        match self {
            Self::Food => FOOD,
            Self::MuseumsAndMonuments => MUSEUMS_AND_MONUMENTS,
            Self::Sporty => SPORTY,
            Self::Social => SOCIAL,
            Self::Nature => NATURE,
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActivityCategory {
    type Err = ActivityCategoryError;

    /// Parse a key (`museums_and_monuments`) or display label
    /// (`Museums and Monuments`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "food" => Ok(Self::Food),
            "museums_and_monuments" => Ok(Self::MuseumsAndMonuments),
            "sporty" => Ok(Self::Sporty),
            "social" => Ok(Self::Social),
            "nature" => Ok(Self::Nature),
            _ => Err(ActivityCategoryError::Unknown {
                label: s.to_owned(),
            }),
        }
    }
}

/// Expand user-facing category labels into the union of their place types.
///
/// Unrecognised labels are skipped. The result is deduplicated; its order
/// carries no meaning.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use stopwise_core::map_activity_types;
///
/// let food = map_activity_types(["food"]);
/// let expected = BTreeSet::from(["restaurant", "cafe", "bakery", "takeaway", "delivery"]);
/// assert_eq!(food, expected);
/// assert!(map_activity_types(["karaoke"]).is_empty());
/// ```
pub fn map_activity_types<I, S>(user_labels: I) -> BTreeSet<&'static str>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    user_labels
        .into_iter()
        .filter_map(|label| match label.as_ref().parse::<ActivityCategory>() {
            Ok(category) => Some(category),
            Err(err) => {
                debug!("ignoring label: {err}");
                None
            }
        })
        .flat_map(|category| category.place_types().iter().copied())
        .collect()
}
