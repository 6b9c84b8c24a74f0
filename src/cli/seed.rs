use crate::db::SqlitePostStore;
use crate::services::seed;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path, config.database.pool_size)?;
    db.migrate()?;

    let store = SqlitePostStore::new(db);
    let created = seed::seed_if_empty(&store, config.content.excerpt_length)?;
    tracing::info!("Seeded {} post(s)", created);
    Ok(())
}
