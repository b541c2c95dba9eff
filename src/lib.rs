//! pipediff - compare environment variables between GoCD pipelines

pub mod cli;
pub mod client;
pub mod core;

// Re-export commonly used types
pub use cli::dispatcher::{CommandError, Dispatcher};
pub use client::{ClientConfig, ConfigSource, FetchError, GoCdClient, Settings, SettingsError};
pub use crate::core::{
    compare_named, compare_pipelines, compare_variable_sets, Configuration, DiffError, EnvVarSet,
    ParseError, Pipeline, PipelineComparison, Stage, VariableComparison, MISSING,
};
