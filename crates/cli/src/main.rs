use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mnemo_core::console::{Console, StdConsole};
use mnemo_core::{Config, logging};
use mnemo_session::{CreateSession, DeleteSession, EditSession, StudySession};
use mnemo_store::{Error as StoreError, Store};
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Mnemo - flashcard collections in your terminal
#[derive(Parser, Debug)]
#[command(name = "mnemo")]
#[command(about = "Create, edit and study flashcard collections", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to config.toml (default: ~/.mnemo/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Study a collection, recording each success and failure
    Study {
        /// The name of the collection
        collection: String,

        /// Practice without recording your scores
        #[arg(long)]
        do_not_remember: bool,
    },
    /// Create a new collection and add its first flashcards
    Create {
        /// The name of the collection
        collection: String,
    },
    /// Add, edit or delete flashcards in a collection
    Edit {
        /// The name of the collection
        collection: String,
    },
    /// Delete a collection and all its flashcards
    Delete {
        /// The name of the collection
        collection: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    logging::init_logging(&config).context("failed to initialize logging")?;

    let db_path = config.db_path().context("failed to resolve the database path")?;
    let store = Store::open(&db_path)?;

    let mut console = StdConsole::new();
    dispatch(cli.command, store, &mut console)
}

fn dispatch(command: Commands, store: Store, console: &mut dyn Console) -> Result<()> {
    match command {
        Commands::Study { collection, do_not_remember } => match store.get_collection(&collection) {
            Ok(loaded) => StudySession::new(loaded, !do_not_remember).run(console)?,
            Err(StoreError::CollectionNotFound(_)) => {
                console.print(&format!("Collection '{collection}' does not yet exist."));
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Edit { collection } => match store.get_collection(&collection) {
            Ok(loaded) => EditSession::new(loaded).run(console)?,
            Err(StoreError::CollectionNotFound(_)) => {
                console.print(&format!("Collection '{collection}' does not yet exist."));
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Create { collection } => CreateSession::new(store, collection).run(console)?,
        Commands::Delete { collection } => DeleteSession::new(store, collection).run(console)?,
    }
    Ok(())
}
