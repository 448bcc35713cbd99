//! Error types emitted by the atlas CLI.
//!
//! Keep this error type reasonably small, as every command returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use atlas_core::{GazetteerError, GuessParseError};
use atlas_game::GameError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the atlas CLI.
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
        field: &'static str,
        env: &'static str,
    },
    /// A numeric option exceeds its supported maximum.
    #[error("{field} must be at most {max}, got {value}")]
    ArgumentOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
    /// A guess looked like a pin but is not a valid coordinate.
    #[error("invalid {field} {value:?}: {source}")]
    InvalidGuess {
        field: &'static str,
        value: String,
        #[source]
        source: GuessParseError,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening an input file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An input file held malformed JSON.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Replacement reference tables were rejected.
    #[error("failed to load gazetteer from {path:?}: {source}")]
    LoadGazetteer {
        path: Utf8PathBuf,
        #[source]
        source: GazetteerError,
    },
    /// The game loop rejected the scripted game.
    #[error("game failed: {0}")]
    Game(#[from] GameError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
