//! Shared utilities for wardrisk crates.
//!
//! This crate provides common utilities used across the wardrisk workspace,
//! including Polars DataFrame helpers and numeric cell parsing.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{column_names, format_numeric, is_missing_token, parse_numeric_cell};
