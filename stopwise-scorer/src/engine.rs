//! Filter, score and order candidate places.

#![forbid(unsafe_code)]

use log::{debug, warn};
use serde::{Serialize, Serializer};
use stopwise_core::{
    PlaceRecord, PlaceRecordError, PreferenceProfile, RawPlaceRecord, ScoredPlace, Scorer,
    WeightConfiguration,
};

use crate::{WeightedScorer, filter::admits};

/// Ranks places through a pluggable [`Scorer`].
///
/// Ranking never mutates its input: surviving records are cloned into the
/// output. Ties keep their input order.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine<S = WeightedScorer> {
    scorer: S,
}

impl<S> RankingEngine<S> {
    /// Create an engine scoring through `scorer`.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Return the scorer in use.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }
}

impl RankingEngine<WeightedScorer> {
    /// Create an engine using [`WeightedScorer`] with `weights`.
    #[must_use]
    pub const fn with_weights(weights: WeightConfiguration) -> Self {
        Self::new(WeightedScorer::new(weights))
    }
}

impl<S: Scorer> RankingEngine<S> {
    /// Drop places that violate `profile`, score the rest and order them by
    /// descending score.
    ///
    /// Scores are sanitised, so a misbehaving scorer cannot inject `NaN` or
    /// negative values into the ordering.
    ///
    /// # Examples
    /// ```
    /// use stopwise_core::{PlaceRecord, PreferenceProfile, WeightConfiguration};
    /// use stopwise_scorer::RankingEngine;
    ///
    /// let places = vec![
    ///     PlaceRecord::new("Bluejacket", "brewery", Some(0.3), None).unwrap(),
    ///     PlaceRecord::new("Diamond Teague Park", "park", Some(0.4), None).unwrap(),
    /// ];
    /// let profile = PreferenceProfile::new(["park", "brewery"], 1.0).unwrap();
    /// let engine = RankingEngine::with_weights(WeightConfiguration::new());
    /// let ranked = engine.rank(&places, &profile);
    /// assert_eq!(ranked[0].place.name(), "Diamond Teague Park");
    /// ```
    #[must_use]
    pub fn rank(&self, places: &[PlaceRecord], profile: &PreferenceProfile) -> Vec<ScoredPlace> {
        let mut ranked: Vec<ScoredPlace> = places
            .iter()
            .filter(|place| admits(place, profile))
            .map(|place| {
                let score = S::sanitise(self.scorer.score(place, profile));
                ScoredPlace::new(place.clone(), score)
            })
            .collect();
        sort_by_score(&mut ranked);
        debug!("ranked {} of {} places", ranked.len(), places.len());
        ranked
    }

    /// Validate raw provider records, then rank the valid ones.
    ///
    /// Invalid records are skipped and reported with their position in
    /// `records`; one bad entry never aborts the batch.
    #[must_use]
    pub fn rank_records(
        &self,
        records: &[RawPlaceRecord],
        profile: &PreferenceProfile,
    ) -> RankingReport {
        let mut skipped = Vec::new();
        let places: Vec<PlaceRecord> = records
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                raw.validate()
                    .inspect_err(|reason| warn!("skipping place record {index}: {reason}"))
                    .map_err(|reason| skipped.push(SkippedRecord { index, reason }))
                    .ok()
            })
            .collect();
        RankingReport {
            ranked: self.rank(&places, profile),
            skipped,
        }
    }
}

/// Order scored places by descending score, keeping input order for ties.
pub(crate) fn sort_by_score(ranked: &mut [ScoredPlace]) {
    ranked.sort_by(|left, right| right.score.total_cmp(&left.score));
}

/// A raw record that failed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    /// Zero-based position in the input batch.
    pub index: usize,
    /// Why the record was rejected.
    #[serde(serialize_with = "serialize_display")]
    pub reason: PlaceRecordError,
}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Outcome of ranking a batch of raw records.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RankingReport {
    /// Places that passed validation and filtering, best first.
    #[serde(rename = "places")]
    pub ranked: Vec<ScoredPlace>,
    /// Records dropped during validation.
    pub skipped: Vec<SkippedRecord>,
}

impl RankingReport {
    /// Return at most `count` of the best places.
    #[must_use]
    pub fn top(&self, count: usize) -> &[ScoredPlace] {
        self.ranked
            .get(..count.min(self.ranked.len()))
            .unwrap_or_default()
    }

    /// Keep only the best `count` places.
    pub fn truncate(&mut self, count: usize) {
        self.ranked.truncate(count);
    }
}
