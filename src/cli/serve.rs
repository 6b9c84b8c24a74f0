use crate::db::SqlitePostStore;
use crate::services::seed;
use crate::{web, Config, Database};
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub async fn run(
    config_path: &Path,
    host: Option<String>,
    port: Option<u16>,
    no_seed: bool,
) -> Result<()> {
    let mut config = Config::load(config_path)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let db = Database::open(&config.database.path, config.database.pool_size)?;
    db.migrate()?;

    let store = SqlitePostStore::new(db);
    if config.content.seed_on_empty && !no_seed {
        if let Err(e) = seed::seed_if_empty(&store, config.content.excerpt_length) {
            tracing::warn!("Failed to seed database: {:#}", e);
        }
    }

    web::serve(config, Arc::new(store)).await?;

    Ok(())
}
