//! Data layer for logstat.
//!
//! Responsible for discovering and reading access-log files, feeding lines
//! through the parser, computing aggregate statistics and running the
//! top-level analysis pipeline.

pub mod analysis;
pub mod analyzer;
pub mod reader;

pub use logstat_core as core;
