//! CLI command implementations
//!
//! `serve` follows a fixed boot sequence:
//! 1. Load `.env` (missing file is fine)
//! 2. Read settings from the environment
//! 3. Initialize tracing
//! 4. Build the store client and router
//! 5. Bind and serve until interrupted

use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::http_server::HttpServer;
use crate::store::StoreClient;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Boot the HTTP server and serve until interrupted
pub fn serve(host: Option<String>, port: Option<u16>) -> CliResult<()> {
    // A .env file is a dev convenience; production sets real variables
    dotenvy::dotenv().ok();

    let mut settings = Settings::from_env()?;

    // CLI flags outrank the environment
    if let Some(host) = host {
        settings.http.host = host;
    }
    if let Some(port) = port {
        settings.http.port = port;
    }

    init_tracing();
    tracing::info!(
        store = %settings.supabase.rest_url(),
        bind = %settings.http.socket_addr(),
        "booting PingCRM backend"
    );

    let store = StoreClient::new(&settings.supabase)?;
    let server = HttpServer::new(settings.http, store);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(server.start())?;

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` with an `info` default
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
