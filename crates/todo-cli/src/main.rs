mod app;
mod command;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use todo_core::{FileStore, ListManager, MemoryStore, Store};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::App;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Manage a todo list from the terminal")]
#[command(version)]
struct Cli {
    /// Path of the JSON file holding the list
    #[arg(long, env = "TODO_FILE")]
    file: Option<PathBuf>,

    /// Keep the list in memory only; takes priority over --file
    #[arg(long)]
    memory: bool,

    /// Enable debug logging
    #[arg(long, short, default_value = "false")]
    debug: bool,
}

impl Cli {
    fn store(&self) -> Box<dyn Store> {
        if self.memory {
            tracing::info!("Using in-memory store, nothing will be saved");
            return Box::new(MemoryStore::new());
        }

        let store = match &self.file {
            Some(path) => FileStore::new(path),
            None => FileStore::default_location(),
        };
        tracing::info!(path = %store.path().display(), "Using file store");
        Box::new(store)
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };

    // Logs go to stderr so they never mix with the prompt
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_line_number(debug),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let manager = ListManager::new(cli.store());
    let stdin = io::stdin();
    let mut app = App::new(manager, stdin.lock(), io::stdout());
    app.run()?;

    tracing::debug!(count = app.manager().len(), "Session ended");
    Ok(())
}
