//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the synthgen binary.

mod commands;
mod generate;

pub use commands::{Cli, Commands, OutputArgs};
pub use generate::run;
