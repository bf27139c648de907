//! zakupd — the zakup tender analytics server binary.
//!
//! `zakupd ingest <file>` loads a spreadsheet CSV export into the SQLite
//! store; `zakupd serve` exposes the read API and runs the report
//! scheduler. Ingestion is expected to run offline, before the read
//! service starts — nothing coordinates a reader with a concurrent ingest.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use zakup_core::store::TenderStore as _;
use zakup_server::{ServerConfig, report};
use zakup_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "zakup tender analytics service")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the read API and run the report scheduler.
  Serve {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
  },
  /// Ingest a spreadsheet CSV export into the store.
  Ingest {
    /// The CSV file to ingest.
    file: PathBuf,

    /// Path to the SQLite database.
    #[arg(long, default_value = "zakup.db")]
    db: PathBuf,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  match Cli::parse().command {
    Command::Serve { config } => serve(config).await,
    Command::Ingest { file, db } => ingest(file, db).await,
  }
}

async fn serve(config_path: PathBuf) -> anyhow::Result<()> {
  let settings = config::Config::builder()
    .add_source(config::File::from(config_path).required(false))
    .add_source(config::Environment::with_prefix("ZAKUP"))
    .build()
    .context("failed to read config")?;

  let cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let store = SqliteStore::open(&cfg.db_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.db_path))?;
  let store = Arc::new(store);

  // The scheduler shares the store with the API; per-subscriber failures
  // are isolated inside run().
  let scheduler_store = store.clone();
  let interval = std::time::Duration::from_secs(cfg.report_interval_secs);
  tokio::spawn(async move {
    report::run(scheduler_store.as_ref(), &report::LogSink, interval).await;
  });

  let app = axum::Router::new()
    .nest("/api", zakup_api::api_router(store))
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", cfg.host, cfg.port);
  tracing::info!("listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;
  Ok(())
}

async fn ingest(file: PathBuf, db: PathBuf) -> anyhow::Result<()> {
  let store = SqliteStore::open(&db)
    .await
    .with_context(|| format!("failed to open store at {db:?}"))?;

  let records = zakup_ingest::read_file(&file)
    .with_context(|| format!("failed to read {file:?}"))?;
  tracing::info!(rows = records.len(), "parsed source file");

  let stats = store.ingest_batch(records).await.context("ingest failed")?;
  tracing::info!(
    firms = stats.firms,
    sessions = stats.sessions,
    participations = stats.participations,
    classifications = stats.classifications,
    line_items = stats.line_items,
    "ingest committed",
  );

  Ok(())
}
