// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for analyzing recorded pose streams.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the `analyze` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Analysis logic.
pub mod analyze;

/// Logging macros and verbosity.
pub mod logging;
