//! CLI library components for wardrisk.

pub mod config;
pub mod flags;
pub mod logging;
