//! Operator CLI for the REMA company sync.
//!
//! # Usage
//!
//! ```bash
//! # List what the registry currently returns
//! cargo run -p company-sync -- --dry-run
//!
//! # Upsert into the database
//! cargo run -p company-sync -- --database-url postgres://localhost/afritrace
//! ```
//!
//! Exits 1 when any record failed to sync.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sea_orm::Database;

use afritrace_core::tracing::init_tracing;
use afritrace_registry::domain::repository::RemaRegistryPort;
use afritrace_registry::infra::db::DbCompanyRepository;
use afritrace_registry::infra::rema::RemaRegistry;
use afritrace_registry::usecase::sync::SyncCompaniesUseCase;

mod report;

#[derive(Parser)]
#[command(about = "Sync the REMA company registry into the AfriTrace database")]
struct Args {
    /// Postgres connection string; required unless --dry-run
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// REMA registry endpoint; the built-in list is used when unset
    #[arg(long, env = "REMA_API_URL")]
    rema_api_url: Option<String>,

    /// Fetch and print the companies without touching the database
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let source = RemaRegistry::from_url(args.rema_api_url);

    if args.dry_run {
        let companies = source
            .fetch_companies()
            .await
            .context("fetch REMA companies")?;
        print!("{}", report::format_companies(&companies));
        return Ok(());
    }

    let database_url = args
        .database_url
        .context("--database-url or DATABASE_URL is required unless --dry-run")?;
    let db = Database::connect(&database_url)
        .await
        .context("connect to database")?;

    let usecase = SyncCompaniesUseCase {
        companies: DbCompanyRepository { db: Arc::new(db) },
        source,
    };
    let outcome = usecase.execute().await.context("sync REMA companies")?;
    print!("{}", report::format_report(&outcome));

    if outcome.errors.is_empty() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}
