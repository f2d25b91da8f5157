//! Bookshelf CLI
//!
//! One-shot command-line access to a catalog file, for scripting.

use std::path::PathBuf;
use std::process::ExitCode;

use bookshelf::session::script;
use bookshelf::{Command, Config, Outcome};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// Bookshelf CLI
#[derive(Parser, Debug)]
#[command(name = "bookshelf-cli")]
#[command(about = "Run a single command against a Bookshelf catalog file")]
struct Args {
    /// Catalog CSV file
    #[arg(short, long)]
    catalog: PathBuf,

    /// Configured librarian passcode
    #[arg(long, env = "BOOKSHELF_PASSCODE", hide_env_values = true)]
    passcode: Option<String>,

    /// Passcode attempt that unlocks librarian commands (add, remove, list)
    #[arg(short, long)]
    unlock: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search titles, authors, genres and ISBNs
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },

    /// Borrow a book
    Borrow {
        /// The ISBN of the book
        isbn: String,
    },

    /// Return a book
    Return {
        /// The ISBN of the book
        isbn: String,
    },

    /// Add a book (librarian)
    Add {
        /// The 13-digit ISBN (format 999-9999999999)
        isbn: String,

        /// The title
        title: String,

        /// The author
        author: String,

        /// The genre name, exactly as listed
        genre: String,
    },

    /// Remove a book (librarian)
    Remove {
        /// The ISBN of the book
        isbn: String,
    },

    /// Print the whole catalog (librarian)
    List,
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Search { query } => Command::Search { query },
            Commands::Borrow { isbn } => Command::Borrow { isbn },
            Commands::Return { isbn } => Command::Return { isbn },
            Commands::Add {
                isbn,
                title,
                author,
                genre,
            } => Command::Add {
                isbn,
                title,
                author,
                genre,
            },
            Commands::Remove { isbn } => Command::Remove { isbn },
            Commands::List => Command::List,
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(outcome) => {
            println!("{}", outcome);
            ExitCode::from(script::exit_code(&outcome))
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> bookshelf::Result<Outcome> {
    let mut builder = Config::builder().catalog_path(&args.catalog);
    if let Some(passcode) = args.passcode {
        builder = builder.passcode(passcode);
    }
    let config = builder.build()?;

    let role = script::resolve_role(&config, args.unlock.as_deref());
    script::run_once(&args.catalog, Command::from(args.command), role)
}
