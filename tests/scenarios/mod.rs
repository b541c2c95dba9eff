//! Scenario-based tests for pipediff

mod compare;
mod listing;
