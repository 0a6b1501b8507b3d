//! CLI argument definitions using clap
//!
//! Commands:
//! - pingcrm serve [--host <addr>] [--port <port>]

use clap::{Parser, Subcommand};

/// PingCRM - CRUD backend for the PingCRM contact manager
#[derive(Parser, Debug)]
#[command(name = "pingcrm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the PingCRM HTTP server
    Serve {
        /// Host to bind to; overrides PINGCRM_HOST
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to; overrides PINGCRM_PORT
        #[arg(long)]
        port: Option<u16>,
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
    fn test_serve_defaults_to_env() {
        let cli = Cli::try_parse_from(["pingcrm", "serve"]).unwrap();
        let Command::Serve { host, port } = cli.command;
        assert!(host.is_none());
        assert!(port.is_none());
    }

    #[test]
    fn test_serve_flags_parse() {
        let cli =
            Cli::try_parse_from(["pingcrm", "serve", "--host", "127.0.0.1", "--port", "9000"])
                .unwrap();
        let Command::Serve { host, port } = cli.command;
        assert_eq!(host.as_deref(), Some("127.0.0.1"));
        assert_eq!(port, Some(9000));
    }

    #[test]
    fn test_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["pingcrm", "migrate"]).is_err());
    }
}
