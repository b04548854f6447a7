//! Time-bounded game cache, keyed by (season, data-source mode).
//!
//! A store replaces whatever was cached for the key; a load returns `None`
//! when nothing is cached or the newest entry has aged past the TTL.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Row, SqlitePool};

use crate::game::{GameRecord, InningLine};

/// Matches the original dashboard's one-hour result cache.
pub const CACHE_TTL_SECS: i64 = 3600;

/// Where a batch of games came from. Part of the cache key, so live and
/// sample results for the same season never shadow each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Sample,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DataSource::Live => "live",
            DataSource::Sample => "sample",
        };
        write!(f, "{}", s)
    }
}

impl DataSource {
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "live" => Some(DataSource::Live),
            "sample" => Some(DataSource::Sample),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DataSource::Live => DataSource::Sample,
            DataSource::Sample => DataSource::Live,
        }
    }
}

fn serialize_innings(innings: &[InningLine]) -> String {
    serde_json::to_string(innings).unwrap_or_else(|_| "[]".to_string())
}

fn deserialize_innings(json: &str) -> Vec<InningLine> {
    serde_json::from_str(json).unwrap_or_default()
}

/// Replace the cached games for one (season, source) key.
pub async fn store_games(
    pool: &SqlitePool,
    season: i32,
    source: DataSource,
    games: &[GameRecord],
) -> Result<()> {
    let source_str = source.to_string();
    let fetched_at = Utc::now().to_rfc3339();

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM cached_games WHERE season = ? AND source = ?")
        .bind(season)
        .bind(&source_str)
        .execute(&mut *tx)
        .await
        .context("Failed to clear stale cache entries")?;

    for game in games {
        sqlx::query(
            r#"
            INSERT INTO cached_games
                (season, source, game_id, game_date, away_team, home_team,
                 away_score, home_score, innings, fetched_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(season)
        .bind(&source_str)
        .bind(game.game_id)
        .bind(game.date.format("%Y-%m-%d").to_string())
        .bind(&game.away_team)
        .bind(&game.home_team)
        .bind(game.away_score)
        .bind(game.home_score)
        .bind(serialize_innings(&game.innings))
        .bind(&fetched_at)
        .execute(&mut *tx)
        .await
        .context("Failed to cache game")?;
    }

    tx.commit().await?;
    Ok(())
}

/// Load cached games for a key, or `None` when absent or expired.
pub async fn load_games(
    pool: &SqlitePool,
    season: i32,
    source: DataSource,
) -> Result<Option<Vec<GameRecord>>> {
    let source_str = source.to_string();

    let rows = sqlx::query(
        r#"
        SELECT game_id, game_date, away_team, home_team,
               away_score, home_score, innings, fetched_at
        FROM cached_games
        WHERE season = ? AND source = ?
        ORDER BY id ASC
        "#,
    )
    .bind(season)
    .bind(&source_str)
    .fetch_all(pool)
    .await
    .context("Failed to read game cache")?;

    if rows.is_empty() {
        return Ok(None);
    }

    let fetched_at: String = rows[0].get("fetched_at");
    let age = DateTime::parse_from_rfc3339(&fetched_at)
        .map(|ts| Utc::now().signed_duration_since(ts.with_timezone(&Utc)))
        .ok();
    match age {
        Some(age) if age.num_seconds() <= CACHE_TTL_SECS => {}
        _ => return Ok(None),
    }

    let games = rows
        .into_iter()
        .map(|row| {
            let date_str: String = row.get("game_date");
            let innings_json: String = row.get("innings");
            GameRecord {
                game_id: row.get("game_id"),
                date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                    .unwrap_or_else(|_| Utc::now().date_naive()),
                away_team: row.get("away_team"),
                home_team: row.get("home_team"),
                away_score: row.get("away_score"),
                home_score: row.get("home_score"),
                innings: deserialize_innings(&innings_json),
            }
        })
        .collect();

    Ok(Some(games))
}

/// Drop expired entries across all keys.
pub async fn evict_expired(pool: &SqlitePool) -> Result<u64> {
    let cutoff = (Utc::now() - chrono::Duration::seconds(CACHE_TTL_SECS)).to_rfc3339();

    let result = sqlx::query("DELETE FROM cached_games WHERE fetched_at < ?")
        .bind(cutoff)
        .execute(pool)
        .await
        .context("Failed to evict expired cache entries")?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool_at;
    use crate::sample::sample_season;

    async fn test_pool() -> (tempfile::TempDir, SqlitePool) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool_at(&dir.path().join("cache.db")).await.unwrap();
        (dir, pool)
    }

    #[tokio::test]
    async fn test_store_and_load_round_trip() {
        let (_dir, pool) = test_pool().await;
        let games = sample_season(2024);

        store_games(&pool, 2024, DataSource::Sample, &games)
            .await
            .unwrap();

        let loaded = load_games(&pool, 2024, DataSource::Sample)
            .await
            .unwrap()
            .expect("fresh cache entry should load");

        assert_eq!(loaded, games);
    }

    #[tokio::test]
    async fn test_load_misses_on_other_key() {
        let (_dir, pool) = test_pool().await;
        let games = sample_season(2024);

        store_games(&pool, 2024, DataSource::Sample, &games)
            .await
            .unwrap();

        assert!(load_games(&pool, 2023, DataSource::Sample)
            .await
            .unwrap()
            .is_none());
        assert!(load_games(&pool, 2024, DataSource::Live)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_store_replaces_previous_entry() {
        let (_dir, pool) = test_pool().await;

        store_games(&pool, 2024, DataSource::Sample, &sample_season(2024))
            .await
            .unwrap();
        let replacement = sample_season(2023);
        store_games(&pool, 2024, DataSource::Sample, &replacement)
            .await
            .unwrap();

        let loaded = load_games(&pool, 2024, DataSource::Sample)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.len(), replacement.len());
        assert_eq!(loaded[0].game_id, replacement[0].game_id);
    }

    #[tokio::test]
    async fn test_empty_store_loads_as_miss() {
        let (_dir, pool) = test_pool().await;

        store_games(&pool, 2024, DataSource::Sample, &[])
            .await
            .unwrap();

        assert!(load_games(&pool, 2024, DataSource::Sample)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_expired_entries_miss_and_evict() {
        let (_dir, pool) = test_pool().await;
        let games = sample_season(2024);

        store_games(&pool, 2024, DataSource::Sample, &games)
            .await
            .unwrap();

        // Age every row past the TTL.
        let stale = (Utc::now() - chrono::Duration::seconds(CACHE_TTL_SECS + 60)).to_rfc3339();
        sqlx::query("UPDATE cached_games SET fetched_at = ?")
            .bind(&stale)
            .execute(&pool)
            .await
            .unwrap();

        assert!(load_games(&pool, 2024, DataSource::Sample)
            .await
            .unwrap()
            .is_none());

        assert_eq!(evict_expired(&pool).await.unwrap(), games.len() as u64);
        assert!(load_games(&pool, 2024, DataSource::Sample)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_evict_expired_keeps_fresh_entries() {
        let (_dir, pool) = test_pool().await;

        store_games(&pool, 2024, DataSource::Sample, &sample_season(2024))
            .await
            .unwrap();

        assert_eq!(evict_expired(&pool).await.unwrap(), 0);
        assert!(load_games(&pool, 2024, DataSource::Sample)
            .await
            .unwrap()
            .is_some());
    }
}
