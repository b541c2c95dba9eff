//! Test utility functions for pipediff
#![allow(dead_code)]

use async_trait::async_trait;
use pipediff::cli::output::Line;
use pipediff::{ConfigSource, Configuration, FetchError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Server configuration with two similar pipelines and one outlier
pub const SERVER_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<cruise schemaVersion="139">
  <server serverId="test" />
  <pipelines group="payments">
    <pipeline name="payments-qa">
      <environmentvariables>
        <variable name="REGION"><value>eu-west-1</value></variable>
        <variable name="DB_HOST"><value>qa-db</value></variable>
        <variable name="FEATURE_FLAGS"><value>beta</value></variable>
      </environmentvariables>
      <materials><git url="https://example.com/payments.git" /></materials>
      <stage name="build">
        <environmentvariables>
          <variable name="GOFLAGS"><value>-mod=vendor</value></variable>
        </environmentvariables>
        <jobs><job name="compile" /></jobs>
      </stage>
      <stage name="test">
        <environmentvariables>
          <variable name="PARALLEL"><value>4</value></variable>
        </environmentvariables>
        <jobs><job name="unit" /></jobs>
      </stage>
    </pipeline>
    <pipeline name="payments-prod">
      <environmentvariables>
        <variable name="REGION"><value>eu-west-1</value></variable>
        <variable name="DB_HOST"><value>prod-db</value></variable>
        <variable name="PAGER"><value>on</value></variable>
      </environmentvariables>
      <materials><git url="https://example.com/payments.git" /></materials>
      <stage name="test">
        <environmentvariables>
          <variable name="PARALLEL"><value>4</value></variable>
        </environmentvariables>
        <jobs><job name="unit" /></jobs>
      </stage>
      <stage name="deploy">
        <jobs><job name="ship" /></jobs>
      </stage>
    </pipeline>
  </pipelines>
  <pipelines group="web">
    <pipeline name="storefront" />
  </pipelines>
</cruise>
"#;

/// Configuration source serving a fixed XML document
pub struct StaticSource {
    xml: String,
    fetches: Arc<AtomicUsize>,
}

impl StaticSource {
    pub fn new(xml: impl Into<String>) -> Self {
        Self {
            xml: xml.into(),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared counter of fetches, usable after the source moves into a dispatcher
    pub fn fetch_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.fetches)
    }
}

#[async_trait]
impl ConfigSource for StaticSource {
    async fn fetch_config(&self) -> Result<Configuration, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(Configuration::from_xml(&self.xml)?)
    }
}

/// Configuration source that always answers with a server error
pub struct FailingSource {
    pub status: u16,
}

#[async_trait]
impl ConfigSource for FailingSource {
    async fn fetch_config(&self) -> Result<Configuration, FetchError> {
        Err(FetchError::Server {
            status: self.status,
        })
    }
}

/// Plain text of rendered lines
pub fn plain_lines(lines: &[Line]) -> Vec<String> {
    lines.iter().map(Line::plain).collect()
}

/// Plain text of rendered lines, without blank lines
pub fn non_blank_lines(lines: &[Line]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !line.is_blank())
        .map(Line::plain)
        .collect()
}

/// Assert that an exact line is present
pub fn assert_has_line(lines: &[String], expected: &str) {
    assert!(
        lines.iter().any(|line| line == expected),
        "Expected line {:?} in output:\n{}",
        expected,
        lines.join("\n")
    );
}

/// Header titles in output order
pub fn scope_titles(lines: &[Line]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| line.has_tone(pipediff::cli::output::Tone::Header))
        .map(|line| line.plain().trim().to_string())
        .collect()
}
