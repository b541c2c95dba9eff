//! CLI command definitions

use clap::Args;

/// List all pipelines with their group
#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct ListCommand {}

/// Compare or diff two pipelines
#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct CompareCommand {
    /// First pipeline name
    pub left: String,

    /// Second pipeline name
    pub right: String,
}
