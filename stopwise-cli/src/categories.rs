//! Categories command: expand user-facing categories into place types.

use std::io::Write;

use clap::Args;
use stopwise_core::map_activity_types;

use crate::CliError;
use crate::output::write_json;

/// CLI arguments for the `categories` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct CategoriesArgs {
    /// Category labels such as `food` or "Museums and Monuments".
    #[arg(value_name = "label", required = true)]
    pub(crate) labels: Vec<String>,
}

/// Print the sorted, de-duplicated place types for the requested categories.
///
/// Unknown labels contribute nothing.
pub(crate) fn run_categories_with(
    args: &CategoriesArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let place_types = map_activity_types(&args.labels);
    write_json(writer, &place_types)
}
