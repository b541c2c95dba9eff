//! Client error types

use crate::core::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Error fetching the server configuration
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Could not reach server: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Error reading server response: {0}")]
    ResponseRead(#[source] reqwest::Error),

    #[error("Server communication error (HTTP {status})")]
    Server { status: u16 },

    #[error("Invalid server configuration: {0}")]
    Parse(#[from] ParseError),
}

/// Error loading client settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("No server URL configured (set `url` in the settings file, PIPEDIFF_URL, or --url)")]
    MissingUrl,
}
