pub mod cache;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Get the path to the cache database using the platform data directory.
pub fn get_db_path() -> Result<PathBuf> {
    let mut path = dirs::data_dir()
        .context("Unable to determine data directory for your platform")?;

    path.push("linescore-scout");

    std::fs::create_dir_all(&path)
        .context("Failed to create linescore-scout data directory")?;

    path.push("cache.db");
    Ok(path)
}

/// Create a connection pool to the cache database at the default location.
pub async fn create_pool() -> Result<SqlitePool> {
    let db_path = get_db_path()?;
    create_pool_at(&db_path).await
}

/// Create a pool against an explicit database path, running migrations.
pub async fn create_pool_at(db_path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("Failed to connect to cache database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}
