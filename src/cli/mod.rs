//! CLI module for clientbook
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP API
//! - list: Print all client records
//! - add: Create one client record

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, ConfigArgs};
pub use commands::{add, list, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json;
