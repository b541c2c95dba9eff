//! Pipeline configuration domain model
//!
//! A [`Configuration`] is a read-only snapshot of the server's pipeline
//! groups. Every type here deserializes straight from the server's config
//! XML (see [`crate::core::config`]) and exposes accessors only, so a
//! snapshot can't be altered once it has been fetched.

use crate::core::diff::DiffError;
use serde::Deserialize;

/// Root of the server configuration: an ordered list of pipeline groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Configuration {
    #[serde(rename = "pipelines", default)]
    groups: Vec<PipelineGroup>,
}

/// A named group of pipelines
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PipelineGroup {
    #[serde(rename = "@group", default)]
    group: String,

    #[serde(rename = "pipeline", default)]
    pipelines: Vec<Pipeline>,
}

/// A pipeline with its own variables and an ordered list of stages
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Pipeline {
    #[serde(rename = "@name")]
    name: String,

    #[serde(rename = "environmentvariables", default)]
    env_vars: EnvVarSet,

    #[serde(rename = "stage", default)]
    stages: Vec<Stage>,
}

/// A stage within a pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Stage {
    #[serde(rename = "@name")]
    name: String,

    #[serde(rename = "environmentvariables", default)]
    env_vars: EnvVarSet,
}

/// Ordered environment variables of a pipeline or stage
///
/// Names are not required to be unique; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnvVarSet {
    #[serde(rename = "variable", default)]
    variables: Vec<Variable>,
}

/// A single environment variable definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Variable {
    #[serde(rename = "@name")]
    name: String,

    /// Secure variables only carry `encryptedValue`, which leaves this empty
    #[serde(default)]
    value: String,
}

impl Configuration {
    /// Create a configuration from already-built groups
    pub fn new(groups: Vec<PipelineGroup>) -> Self {
        Self { groups }
    }

    /// Pipeline groups in declaration order
    pub fn groups(&self) -> &[PipelineGroup] {
        &self.groups
    }

    /// Iterate `(group name, pipeline)` pairs in declaration order
    pub fn pipelines(&self) -> impl Iterator<Item = (&str, &Pipeline)> {
        self.groups
            .iter()
            .flat_map(|group| group.pipelines.iter().map(move |p| (group.name(), p)))
    }

    /// Find a pipeline by name
    ///
    /// Groups are searched in order and the first pipeline with a matching
    /// name wins.
    ///
    /// # Errors
    /// Returns [`DiffError::PipelineNotFound`] when no pipeline has that name.
    pub fn pipeline(&self, name: &str) -> Result<&Pipeline, DiffError> {
        self.pipelines()
            .map(|(_, pipeline)| pipeline)
            .find(|pipeline| pipeline.name == name)
            .ok_or_else(|| DiffError::PipelineNotFound(name.to_string()))
    }
}

impl PipelineGroup {
    pub fn new(group: impl Into<String>, pipelines: Vec<Pipeline>) -> Self {
        Self {
            group: group.into(),
            pipelines,
        }
    }

    /// Group name (empty when the server omits the attribute)
    pub fn name(&self) -> &str {
        &self.group
    }

    pub fn pipelines(&self) -> &[Pipeline] {
        &self.pipelines
    }
}

impl Pipeline {
    pub fn new(name: impl Into<String>, env_vars: EnvVarSet, stages: Vec<Stage>) -> Self {
        Self {
            name: name.into(),
            env_vars,
            stages,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pipeline-level environment variables
    pub fn env_vars(&self) -> &EnvVarSet {
        &self.env_vars
    }

    /// Stages in declaration order
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// First stage with the given name
    pub fn stage(&self, name: &str) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.name == name)
    }
}

impl Stage {
    pub fn new(name: impl Into<String>, env_vars: EnvVarSet) -> Self {
        Self {
            name: name.into(),
            env_vars,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn env_vars(&self) -> &EnvVarSet {
        &self.env_vars
    }
}

impl EnvVarSet {
    pub fn new(variables: Vec<Variable>) -> Self {
        Self { variables }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// First variable with the given name
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|var| var.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for EnvVarSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(name, value)| Variable::new(name, value))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a EnvVarSet {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Variable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
