//! Error types for blasetableslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while planning, transforming or emitting tables
#[derive(Error, Debug)]
pub enum BlasetablesError {
    /// Name style outside long/short/emoji
    #[error("unrecognized name style '{0}' (valid styles: long, short, emoji)")]
    UnknownNameStyle(String),

    /// Neither win/loss nor home/away orientation was requested
    #[error("no result orientation selected: enable either win/loss or home/away")]
    MissingOrientation,

    /// Category name not in the fixed enumeration
    #[error("reason '{name}' not recognized. Valid reasons: {valid}")]
    UnknownCategory { name: String, valid: String },

    /// Season label that is neither "all" nor a 1-based season number
    #[error("invalid season '{0}': expected 'all' or a season number starting at 1")]
    InvalidSeason(String),

    /// A field needed by the underdog annotation is absent
    #[error("row {row}: missing field '{field}' (columns: {})", .columns.join(", "))]
    MissingField {
        row: usize,
        field: String,
        columns: Vec<String>,
    },

    /// Emoji field that is not a hex-encoded code point
    #[error("invalid emoji code point '{0}'")]
    InvalidEmoji(String),

    /// Failed to read the game data file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Game data file is not valid JSON of the expected shape
    #[error("invalid game data in '{path}': {source}")]
    InvalidData {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Directory for the output file does not exist
    #[error("directory for output file ({0}) does not exist")]
    DirectoryNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BlasetablesError {
    /// Whether this error comes from invalid user options.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            BlasetablesError::UnknownNameStyle(_)
                | BlasetablesError::MissingOrientation
                | BlasetablesError::UnknownCategory { .. }
                | BlasetablesError::InvalidSeason(_)
        )
    }
}
