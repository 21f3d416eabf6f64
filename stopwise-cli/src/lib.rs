//! Command-line interface for ranking places near a transit stop.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod categories;
mod error;
mod output;
mod rank;

pub use error::CliError;

use categories::{CategoriesArgs, run_categories_with};
use rank::{RankArgs, run_rank_with};

pub(crate) const ARG_PLACES: &str = "places";
pub(crate) const ARG_ACTIVITIES: &str = "activities";
pub(crate) const ARG_MAX_WALKING_DISTANCE: &str = "max-walking-distance";
pub(crate) const ARG_MIN_RATING: &str = "min-rating";
pub(crate) const ARG_ACTIVITY_WEIGHT: &str = "activity-weight";
pub(crate) const ARG_DISTANCE_WEIGHT: &str = "distance-weight";
pub(crate) const ARG_RATING_WEIGHT: &str = "rating-weight";
pub(crate) const ARG_TOP: &str = "top";
pub(crate) const ENV_PLACES: &str = "STOPWISE_CMDS_RANK_PLACES_PATH";
pub(crate) const ENV_ACTIVITIES: &str = "STOPWISE_CMDS_RANK_ACTIVITIES";

/// Run the Stopwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, input
/// loading or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli, &mut stdout)
}

fn dispatch(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Rank(args) => run_rank_with(args, writer),
        Command::Categories(args) => run_categories_with(&args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "stopwise",
    about = "Rank places to visit near a transit stop",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter and rank candidate places against user preferences.
    Rank(RankArgs),
    /// Expand activity categories into provider place types.
    Categories(CategoriesArgs),
}

#[cfg(test)]
mod tests;
