//! Command-line interface module
//!
//! This module handles CLI argument parsing, startup and the command handlers.

pub mod args;
pub mod commands;
pub mod startup;

pub use args::*;
pub use commands::*;
pub use startup::*;
