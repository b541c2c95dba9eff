//! CLI output formatting
//!
//! Output is built as [`Line`]s of toned [`Segment`]s. Tones map to
//! terminal colors only when a line is displayed, so the layout can be
//! inspected as plain text.

use crate::core::{Configuration, PipelineComparison, VariableComparison};
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::time::Duration;

// Re-export style
pub use console::style;

pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");

/// Title of the pipeline-level scope in a comparison
pub const PIPELINE_SCOPE: &str = "Pipeline";

const MATCH_TAG: &str = "[MATCH] ";
const DIFF_TAG: &str = "[DIFF]  ";
const HEADER_BADGE: &str = "       ";

/// Semantic style of a piece of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Header,
    Match,
    Diff,
    Label,
    Plain,
}

impl Tone {
    fn paint(self, text: &str) -> String {
        match self {
            Tone::Header => style(text).black().on_blue().on_bright().bold().to_string(),
            Tone::Match => style(text).green().bold().to_string(),
            Tone::Diff => style(text).red().bold().to_string(),
            Tone::Label => style(text).blue().bright().bold().to_string(),
            Tone::Plain => text.to_string(),
        }
    }
}

/// A run of text with one tone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub tone: Tone,
    pub text: String,
}

/// One line of output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    segments: Vec<Segment>,
}

impl Line {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Append a segment
    pub fn push(mut self, tone: Tone, text: impl Into<String>) -> Self {
        self.segments.push(Segment {
            tone,
            text: text.into(),
        });
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_blank(&self) -> bool {
        self.segments.iter().all(|segment| segment.text.is_empty())
    }

    /// Whether any segment carries `tone`
    pub fn has_tone(&self, tone: Tone) -> bool {
        self.segments.iter().any(|segment| segment.tone == tone)
    }

    /// Text without styling
    pub fn plain(&self) -> String {
        self.segments.iter().map(|segment| segment.text.as_str()).collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.tone.paint(&segment.text))?;
        }
        Ok(())
    }
}

/// Format a `<group>: <pipeline>` listing entry
pub fn format_pipeline_entry(group: &str, name: &str) -> Line {
    Line::default()
        .push(Tone::Label, format!("{}: ", group))
        .push(Tone::Plain, name)
}

/// Format every pipeline of every group
pub fn format_listing(config: &Configuration) -> Vec<Line> {
    config
        .pipelines()
        .map(|(group, pipeline)| format_pipeline_entry(group, pipeline.name()))
        .collect()
}

/// Format a scope header, surrounded by blank lines
pub fn format_header(title: &str) -> Vec<Line> {
    vec![
        Line::blank(),
        Line::default()
            .push(Tone::Header, HEADER_BADGE)
            .push(Tone::Plain, format!("  {}", title)),
        Line::blank(),
    ]
}

/// Format one variable comparison
pub fn format_variable(comparison: &VariableComparison) -> Line {
    if comparison.is_match() {
        Line::default()
            .push(Tone::Match, MATCH_TAG)
            .push(Tone::Label, format!("{}: ", comparison.name))
            .push(Tone::Plain, comparison.left_value())
    } else {
        Line::default()
            .push(Tone::Diff, DIFF_TAG)
            .push(Tone::Label, format!("{}: ", comparison.name))
            .push(
                Tone::Plain,
                format!("{} -> {}", comparison.left_value(), comparison.right_value()),
            )
    }
}

/// Format a scope: header then one line per comparison
///
/// With `diff_only`, matching variables are left out. The header is always
/// shown.
pub fn format_scope(title: &str, comparisons: &[VariableComparison], diff_only: bool) -> Vec<Line> {
    let mut lines = format_header(title);
    lines.extend(
        comparisons
            .iter()
            .filter(|comparison| !(diff_only && comparison.is_match()))
            .map(format_variable),
    );
    lines
}

/// Format a full pipeline comparison: pipeline scope, then each shared stage
pub fn format_comparison(comparison: &PipelineComparison, diff_only: bool) -> Vec<Line> {
    let mut lines = format_scope(PIPELINE_SCOPE, &comparison.variables, diff_only);
    for stage in &comparison.stages {
        lines.extend(format_scope(&stage.name, &stage.variables, diff_only));
    }
    lines
}

/// Create a spinner shown while waiting on the server
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
