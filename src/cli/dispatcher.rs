//! Command dispatch
//!
//! Each command fetches one configuration snapshot and renders its whole
//! output before returning, so a failure never leaves partial output.

use crate::cli::output::{format_comparison, format_listing, Line};
use crate::cli::Command;
use crate::client::{ConfigSource, FetchError};
use crate::core::{compare_named, DiffError};
use thiserror::Error;
use tracing::{debug, info};

/// Error running a command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Diff(#[from] DiffError),
}

/// Routes commands to the listing and comparison logic
#[derive(Debug, Clone)]
pub struct Dispatcher<S> {
    source: S,
}

impl<S: ConfigSource> Dispatcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run a parsed command
    pub async fn run(&self, command: &Command) -> Result<Vec<Line>, CommandError> {
        match command {
            Command::List(_) => self.list().await,
            Command::Compare(cmd) => self.compare(&cmd.left, &cmd.right).await,
            Command::Diff(cmd) => self.diff(&cmd.left, &cmd.right).await,
        }
    }

    /// List every pipeline as `<group>: <name>`
    pub async fn list(&self) -> Result<Vec<Line>, CommandError> {
        let config = self.source.fetch_config().await?;
        debug!("Listing {} pipeline groups", config.groups().len());
        Ok(format_listing(&config))
    }

    /// Compare two pipelines, showing every variable
    pub async fn compare(&self, left: &str, right: &str) -> Result<Vec<Line>, CommandError> {
        self.comparison(left, right, false).await
    }

    /// Compare two pipelines, showing only differences
    pub async fn diff(&self, left: &str, right: &str) -> Result<Vec<Line>, CommandError> {
        self.comparison(left, right, true).await
    }

    async fn comparison(
        &self,
        left: &str,
        right: &str,
        diff_only: bool,
    ) -> Result<Vec<Line>, CommandError> {
        let config = self.source.fetch_config().await?;
        let comparison = compare_named(&config, left, right)?;
        info!(
            "{} vs {}: {} differences",
            left,
            right,
            comparison.difference_count()
        );
        Ok(format_comparison(&comparison, diff_only))
    }
}
