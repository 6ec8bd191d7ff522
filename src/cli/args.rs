//! CLI argument definitions using clap
//!
//! Commands:
//! - clientbook serve [--config <path>] [--host <host>] [--port <port>]
//! - clientbook list [--config <path>]
//! - clientbook add --name <name> [--email] [--phone] [--note] [--config <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// clientbook - client records over HTTP, stored in a spreadsheet
#[derive(Parser, Debug)]
#[command(name = "clientbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a JSON configuration file
    #[arg(long, env = "CLIENTBOOK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API
    Serve {
        #[command(flatten)]
        config: ConfigArgs,

        /// Address to bind (overrides config and HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print every client record as JSON
    List {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Create one client record and print it
    Add {
        #[command(flatten)]
        config: ConfigArgs,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_with_port() {
        let cli = Cli::try_parse_from(["clientbook", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Command::Serve { port, host, .. } => {
                assert_eq!(port, Some(8080));
                assert_eq!(host, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_add_fields() {
        let cli = Cli::try_parse_from([
            "clientbook",
            "add",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
        ])
        .unwrap();
        match cli.command {
            Command::Add { name, email, phone, .. } => {
                assert_eq!(name.as_deref(), Some("Jane Doe"));
                assert_eq!(email.as_deref(), Some("jane@example.com"));
                assert_eq!(phone, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["clientbook", "serve", "--port", "99999"]).is_err());
    }
}
