//! CLI module for the PingCRM backend
//!
//! Provides the command-line interface:
//! - serve: Boot the HTTP server and serve the API

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliResult};
