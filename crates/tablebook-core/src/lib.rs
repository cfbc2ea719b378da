//! Shared configuration, error and policy types for the tablebook workspace.
//!
//! This crate carries no parsing or matching logic; it only holds the pieces
//! every other crate agrees on.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
