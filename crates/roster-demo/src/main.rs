//! Roster demo binary
//!
//! Loads database settings from `.env`, `roster.toml` and the
//! environment, then runs the CRUD demo sequence against the
//! `students` table, printing each stage to stdout.

use anyhow::{Context, Result};
use roster_config::DbConfig;
use roster_db::StudentStore;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    roster_obs::init("roster");

    let config = DbConfig::load().context("Failed to load database configuration")?;
    info!("Loaded configuration: {:?}", config);

    let store = StudentStore::new(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    roster_demo::run_demo(&store, &mut out)
        .await
        .context("Demo sequence failed")?;

    info!("Demo finished");
    Ok(())
}
