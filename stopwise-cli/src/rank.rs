//! Rank command implementation for the Stopwise CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use stopwise_core::{Factor, PreferenceProfile, RawPlaceRecord, WeightConfiguration};
use stopwise_scorer::{RankingEngine, RankingReport};

use crate::output::write_json;
use crate::{
    ARG_ACTIVITIES, ARG_ACTIVITY_WEIGHT, ARG_DISTANCE_WEIGHT, ARG_MAX_WALKING_DISTANCE,
    ARG_MIN_RATING, ARG_PLACES, ARG_RATING_WEIGHT, ARG_TOP, CliError, ENV_ACTIVITIES, ENV_PLACES,
};

/// Walking cutoff applied when none is configured.
pub(crate) const DEFAULT_MAX_WALKING_DISTANCE: f64 = 1.0;

/// Number of recommendations printed when none is configured.
pub(crate) const DEFAULT_TOP: usize = 5;

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the places listed in a JSON file against the user's \
                 preferred activities. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Filter and rank candidate places"
)]
#[ortho_config(prefix = "STOPWISE")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of place records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) places_path: Option<Utf8PathBuf>,
    /// Preferred activities, most preferred first, separated by commas.
    #[arg(long = ARG_ACTIVITIES, value_name = "list")]
    #[serde(default)]
    pub(crate) activities: Option<String>,
    /// Furthest acceptable walking distance (default 1.0).
    #[arg(long = ARG_MAX_WALKING_DISTANCE, value_name = "distance")]
    #[serde(default)]
    pub(crate) max_walking_distance: Option<f64>,
    /// Lowest acceptable rating; unrated places count as 0.
    #[arg(long = ARG_MIN_RATING, value_name = "rating")]
    #[serde(default)]
    pub(crate) min_rating: Option<f64>,
    /// Multiplier for activity preference (default 1).
    #[arg(long = ARG_ACTIVITY_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) activity_weight: Option<f64>,
    /// Multiplier for walking distance headroom (default 1).
    #[arg(long = ARG_DISTANCE_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) distance_weight: Option<f64>,
    /// Multiplier for rating above the floor (default 1).
    #[arg(long = ARG_RATING_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) rating_weight: Option<f64>,
    /// Number of places to print (default 5).
    #[arg(long = ARG_TOP, value_name = "count")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the JSON places file.
    pub(crate) places_path: Utf8PathBuf,
    /// Preferences the places are filtered and scored against.
    pub(crate) profile: PreferenceProfile,
    /// Factor weights; unset factors weigh 1.
    pub(crate) weights: WeightConfiguration,
    /// Number of places to keep.
    pub(crate) top: usize,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let places_path = args.places_path.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_PLACES,
        })?;
        let activities = args.activities.ok_or(CliError::MissingArgument {
            field: ARG_ACTIVITIES,
            env: ENV_ACTIVITIES,
        })?;

        let max_walking_distance = args
            .max_walking_distance
            .unwrap_or(DEFAULT_MAX_WALKING_DISTANCE);
        let mut profile =
            PreferenceProfile::new(split_activities(&activities), max_walking_distance)?;
        if let Some(min_rating) = args.min_rating {
            profile = profile.with_min_rating(min_rating)?;
        }

        let mut weights = WeightConfiguration::new();
        for (factor, weight) in [
            (Factor::Activity, args.activity_weight),
            (Factor::Distance, args.distance_weight),
            (Factor::Rating, args.rating_weight),
        ] {
            if let Some(value) = weight {
                weights.try_set_weight(factor, value)?;
            }
        }

        Ok(Self {
            places_path,
            profile,
            weights,
            top: args.top.unwrap_or(DEFAULT_TOP),
        })
    }
}

/// Split a comma-separated activity list, trimming and lower-casing entries.
pub(crate) fn split_activities(list: &str) -> Vec<String> {
    list.split(',')
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = execute_rank(args.into_config()?)?;
    write_json(writer, &report)
}

pub(crate) fn execute_rank(config: RankConfig) -> Result<RankingReport, CliError> {
    let records = load_places(&config.places_path)?;
    let engine = RankingEngine::with_weights(config.weights);
    let mut report = engine.rank_records(&records, &config.profile);
    info!(
        "ranked {} of {} records from {}",
        report.ranked.len(),
        records.len(),
        config.places_path
    );
    report.truncate(config.top);
    Ok(report)
}

/// Loads a JSON array of raw place records from disk.
pub(crate) fn load_places(path: &Utf8Path) -> Result<Vec<RawPlaceRecord>, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenPlaces {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlaces {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
