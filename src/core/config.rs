//! Server configuration decoding from XML
//!
//! The server answers `admin/config_xml` with its full `cruise` document.
//! Only the parts describing pipeline groups, pipelines, stages and their
//! environment variables are decoded; every other element is skipped.
//! Content after the closing `</cruise>` is rejected.

use crate::core::Configuration;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;
use tracing::debug;

/// Name of the document's root element
pub const ROOT_ELEMENT: &str = "cruise";

/// Error decoding the configuration document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("configuration is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("malformed XML: {0}")]
    Syntax(String),

    #[error("configuration document is empty")]
    Empty,

    #[error("unexpected root element <{0}>, expected <cruise>")]
    UnexpectedRoot(String),

    #[error("unexpected {0} after </cruise>")]
    TrailingContent(String),

    #[error("configuration does not match the expected shape: {0}")]
    Schema(#[from] quick_xml::de::DeError),
}

impl Configuration {
    /// Decode a configuration from raw response bytes
    pub fn from_xml_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        Self::from_xml(std::str::from_utf8(bytes)?)
    }

    /// Decode a configuration from an XML string
    ///
    /// # Errors
    /// Returns [`ParseError`] when the document is malformed, its root is not
    /// `<cruise>`, or a pipeline, stage or variable lacks its `name`.
    pub fn from_xml(xml: &str) -> Result<Self, ParseError> {
        check_root(xml)?;
        let config: Configuration = quick_xml::de::from_str(xml)?;
        debug!(
            "Decoded configuration with {} groups and {} pipelines",
            config.groups().len(),
            config.pipelines().count()
        );
        Ok(config)
    }
}

/// Verify the document has exactly one `<cruise>` root and nothing after it
fn check_root(xml: &str) -> Result<(), ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut seen_root = false;
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if depth == 0 {
                    enter_top_level(&e, &mut seen_root)?;
                }
                depth += 1;
            }
            Ok(Event::Empty(e)) if depth == 0 => enter_top_level(&e, &mut seen_root)?,
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Text(_) | Event::CData(_)) if depth == 0 && seen_root => {
                return Err(ParseError::TrailingContent("text".to_string()));
            }
            Ok(Event::Eof) if seen_root => return Ok(()),
            Ok(Event::Eof) => return Err(ParseError::Empty),
            Err(e) => return Err(ParseError::Syntax(e.to_string())),
            _ => {}
        }
    }
}

/// Accept the first top-level element if it is the root, reject any later one
fn enter_top_level(e: &BytesStart<'_>, seen_root: &mut bool) -> Result<(), ParseError> {
    let local_name = e.local_name();
    let name = String::from_utf8_lossy(local_name.as_ref());
    if *seen_root {
        return Err(ParseError::TrailingContent(format!("<{}>", name)));
    }
    if name != ROOT_ELEMENT {
        return Err(ParseError::UnexpectedRoot(name.into_owned()));
    }
    *seen_root = true;
    Ok(())
}
