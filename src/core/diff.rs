//! Environment variable comparison between pipelines
//!
//! Comparisons keep declaration order: every variable of the left-hand set
//! comes first, followed by the variables that only exist on the right.
//! Stages are only compared when both pipelines have a stage of the same
//! name.

use crate::core::{Configuration, EnvVarSet, Pipeline};
use thiserror::Error;
use tracing::debug;

/// Placeholder shown for a variable that one side does not define
pub const MISSING: &str = "MISSING";

/// Error raised while selecting pipelines to compare
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiffError {
    #[error("Pipeline not found: {0}")]
    PipelineNotFound(String),
}

/// One variable name with its value on each side
///
/// `None` marks a side that does not define the variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableComparison {
    pub name: String,
    pub left: Option<String>,
    pub right: Option<String>,
}

impl VariableComparison {
    /// Both sides define the variable with the same value
    pub fn is_match(&self) -> bool {
        self.left.is_some() && self.left == self.right
    }

    /// Left value, or [`MISSING`]
    pub fn left_value(&self) -> &str {
        self.left.as_deref().unwrap_or(MISSING)
    }

    /// Right value, or [`MISSING`]
    pub fn right_value(&self) -> &str {
        self.right.as_deref().unwrap_or(MISSING)
    }
}

/// Variable comparison for a pair of same-named stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageComparison {
    pub name: String,
    pub variables: Vec<VariableComparison>,
}

/// Full comparison of two pipelines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineComparison {
    /// Name of the left-hand pipeline
    pub left: String,

    /// Name of the right-hand pipeline
    pub right: String,

    /// Pipeline-level variables
    pub variables: Vec<VariableComparison>,

    /// Same-named stages, in the left pipeline's stage order
    pub stages: Vec<StageComparison>,
}

impl PipelineComparison {
    /// Number of entries across all scopes that are not matches
    pub fn difference_count(&self) -> usize {
        self.variables
            .iter()
            .chain(self.stages.iter().flat_map(|stage| stage.variables.iter()))
            .filter(|comparison| !comparison.is_match())
            .count()
    }
}

/// Compare two variable sets
///
/// Each left variable is paired with the first right variable of the same
/// name. Right variables whose name never appears on the left follow, in
/// their own order. Duplicate names are not collapsed.
pub fn compare_variable_sets(left: &EnvVarSet, right: &EnvVarSet) -> Vec<VariableComparison> {
    let mut comparisons: Vec<VariableComparison> = left
        .iter()
        .map(|var| VariableComparison {
            name: var.name().to_string(),
            left: Some(var.value().to_string()),
            right: right.get(var.name()).map(|other| other.value().to_string()),
        })
        .collect();

    comparisons.extend(
        right
            .iter()
            .filter(|var| !left.contains(var.name()))
            .map(|var| VariableComparison {
                name: var.name().to_string(),
                left: None,
                right: Some(var.value().to_string()),
            }),
    );

    comparisons
}

/// Compare two pipelines and every stage name they share
///
/// Stages that exist on only one side produce no entry.
pub fn compare_pipelines(left: &Pipeline, right: &Pipeline) -> PipelineComparison {
    let stages = left
        .stages()
        .iter()
        .filter_map(|stage| {
            right.stage(stage.name()).map(|other| StageComparison {
                name: stage.name().to_string(),
                variables: compare_variable_sets(stage.env_vars(), other.env_vars()),
            })
        })
        .collect::<Vec<_>>();

    debug!(
        "Compared {} with {}: {} shared stages",
        left.name(),
        right.name(),
        stages.len()
    );

    PipelineComparison {
        left: left.name().to_string(),
        right: right.name().to_string(),
        variables: compare_variable_sets(left.env_vars(), right.env_vars()),
        stages,
    }
}

/// Look up two pipelines by name and compare them
///
/// # Errors
/// Returns [`DiffError::PipelineNotFound`] naming the first pipeline that
/// does not exist in `config`.
pub fn compare_named(
    config: &Configuration,
    left: &str,
    right: &str,
) -> Result<PipelineComparison, DiffError> {
    let left = config.pipeline(left)?;
    let right = config.pipeline(right)?;
    Ok(compare_pipelines(left, right))
}
