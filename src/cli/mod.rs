//! Command-line interface

pub mod commands;
pub mod dispatcher;
pub mod output;

use crate::client::Settings;
use clap::{Parser, Subcommand};
use commands::{CompareCommand, ListCommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Compare environment variables between GoCD pipelines
#[derive(Debug, Parser, Clone)]
#[command(name = "pipediff")]
#[command(author = "Pipediff Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Compare environment variables between GoCD pipelines", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to settings file (default: ~/.pipediff.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Server base URL, e.g. https://ci.example.com/go/
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, global = true)]
    pub password: Option<String>,
}

/// Available commands
#[derive(Debug, Subcommand, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all pipelines
    List(ListCommand),

    /// Compare two pipelines
    Compare(CompareCommand),

    /// Diff two pipelines (only show differences)
    Diff(CompareCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }

    /// Log filter directive: `--verbose` wins, then `RUST_LOG`, then `warn`
    pub fn log_directive(&self, rust_log: Option<String>) -> String {
        if self.verbose {
            return "debug".to_string();
        }
        rust_log
            .filter(|directive| !directive.trim().is_empty())
            .unwrap_or_else(|| "warn".to_string())
    }

    /// Settings given on the command line
    pub fn settings_overrides(&self) -> Settings {
        Settings {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            timeout_secs: None,
        }
    }
}
