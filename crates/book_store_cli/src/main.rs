//! Command-line probe for the book store.
//!
//! Lists the catalog from the configured SQLite file, optionally resetting it
//! to the bundled seed first.

use anyhow::{Context, Result};
use book_store_core::db::open_db;
use book_store_core::db::seed::reset_book_store;
use book_store_core::{
    default_log_level, init_logging, BookService, FileBookRepository, StoreConfig,
};
use clap::Parser;
use log::info;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "book_store")]
#[command(version, about = "List books with their authors")]
struct Cli {
    /// Path to the SQLite store (defaults to $BOOK_STORE_DB_PATH or the temp dir)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Reset books and authors to the bundled catalog before listing
    #[arg(long)]
    seed: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,
}

impl Cli {
    fn store_config(&self) -> StoreConfig {
        match &self.db {
            Some(path) => StoreConfig::new(path),
            None => StoreConfig::from_env(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let config = cli.store_config();
    info!(
        "event=cli_start module=cli status=ok db_path={} seed={}",
        config.db_path().display(),
        cli.seed
    );

    if cli.seed {
        let conn = open_db(config.db_path())
            .with_context(|| format!("failed to open {}", config.db_path().display()))?;
        reset_book_store(&conn).context("failed to seed book store")?;
    }

    let service = BookService::new(FileBookRepository::new(config));
    let books = service.all_books().context("failed to list books")?;

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &books)?;
        writeln!(out)?;
    } else {
        for book in &books {
            writeln!(out, "{book}")?;
        }
    }

    Ok(())
}
