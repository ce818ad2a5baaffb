//! Tooling & Integration Layer
//!
//! Command-line entry points for running an attribution pass.

pub mod cli;

pub use cli::{Cli, CliContext};
