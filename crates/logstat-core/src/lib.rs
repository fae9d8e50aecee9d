//! Core domain layer for logstat.
//!
//! Holds the parsed log record model, the access-log line parser, the
//! error taxonomy and the CLI settings. This crate performs no I/O.

pub mod error;
pub mod models;
pub mod parser;
pub mod settings;
