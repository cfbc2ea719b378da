//! Command-line front end: argument parsing, the interactive prompt and
//! rendering of query outcomes.

pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod report;
