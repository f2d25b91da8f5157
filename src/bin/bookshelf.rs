//! Bookshelf Interactive Binary
//!
//! Runs a menu-driven catalog session on the terminal.

use std::io;

use bookshelf::session::{SessionEnd, Shell};
use bookshelf::Config;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Bookshelf
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "Interactive catalog manager for a library's book collection")]
#[command(version)]
struct Args {
    /// Catalog CSV file (asked for interactively when omitted)
    #[arg(short, long)]
    catalog: Option<String>,

    /// Passcode that unlocks the librarian menu
    #[arg(short, long, env = "BOOKSHELF_PASSCODE", hide_env_values = true)]
    passcode: Option<String>,
}

fn main() {
    // Logs go to stderr so they never interleave with the menus on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Bookshelf v{}", bookshelf::VERSION);

    let mut builder = Config::builder();
    if let Some(path) = &args.catalog {
        builder = builder.catalog_path(path);
    }
    if let Some(passcode) = args.passcode {
        builder = builder.passcode(passcode);
    }

    let config = match builder.build() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    if config.passcode.is_none() {
        tracing::warn!("No passcode configured; the librarian menu is disabled");
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), config);

    match shell.run() {
        Ok(SessionEnd::Saved(path)) => {
            tracing::info!("Session ended, catalog saved to {}", path.display());
        }
        Ok(SessionEnd::NoCatalog) => {
            tracing::info!("Session ended without a catalog");
        }
        Err(e) => {
            tracing::error!("Session failed: {}", e);
            std::process::exit(1);
        }
    }
}
