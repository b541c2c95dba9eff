//! Core domain models for pipeline comparison
//!
//! This module defines the configuration snapshot fetched from the server,
//! its XML decoding, and the comparison logic run over it.

pub mod config;
pub mod diff;
pub mod pipeline;

pub use config::ParseError;
pub use diff::*;
pub use pipeline::*;
