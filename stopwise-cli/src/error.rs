//! Error types emitted by the Stopwise CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use stopwise_core::{PreferenceProfileError, WeightError};
use thiserror::Error;

/// Errors emitted by the Stopwise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// Walking distance or rating cutoffs were rejected.
    #[error(transparent)]
    InvalidProfile(#[from] PreferenceProfileError),
    /// A factor weight was rejected.
    #[error(transparent)]
    InvalidWeight(#[from] WeightError),
    /// Opening the places file failed.
    #[error("failed to open places at {path:?}: {source}")]
    OpenPlaces {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The places file is not a JSON array of place records.
    #[error("failed to parse places JSON at {path:?}: {source}")]
    ParsePlaces {
        /// Path holding the malformed payload.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
