//! CLI module
//!
//! # Commands
//!
//! - `generate` - Infer classes from a JSON file and write source files
//! - `inspect` - Print the inferred class model as JSON

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
