//! Data collection and criteria analysis.

use crate::{
    api::StatsApi,
    criteria,
    db::cache::{self, DataSource},
    game::GameRecord,
    sample,
};

use super::super::{app::App, types::ViewMode};

/// Helper struct driving one analysis pass: cache lookup, data collection,
/// aggregation, cache refresh.
pub struct AnalyzeHandler<'a> {
    app: &'a mut App,
}

impl<'a> AnalyzeHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn run_analysis(&mut self) {
        let season = self.app.season;
        let source = self.app.source;
        self.app
            .log(format!("Analyzing {} season ({} data)...", season, source));

        let games = match self.load_cached(season, source) {
            Some(games) => {
                self.app
                    .log(format!("Using {} cached games for {}", games.len(), season));
                games
            }
            None => {
                let (games, cacheable) = self.collect_games(season, source);
                if cacheable {
                    self.store_cache(season, source, &games);
                }
                games
            }
        };

        if games.is_empty() {
            self.app.log("No games found for the selected season");
        }

        let result = criteria::aggregate(&games);
        self.app.log(format!(
            "Analyzed {} games: {} matches ({:.1}%), {} skipped",
            result.total_analyzed,
            result.match_count(),
            result.match_percentage(),
            result.skipped
        ));
        if result.integrity_faults > 0 {
            self.app.log(format!(
                "Flagged {} records with inconsistent run totals",
                result.integrity_faults
            ));
        }

        self.app.result = Some(result);
        self.app.analyzed_at = Some(chrono::Utc::now());
        self.app.view = ViewMode::Dashboard;
        self.app.page = 0;
        self.app.selected = None;
    }

    /// Collect games from the active source. The second value says whether
    /// the batch may be cached under that source's key; a live fetch that
    /// fell back to sample data must not be.
    fn collect_games(&mut self, season: i32, source: DataSource) -> (Vec<GameRecord>, bool) {
        match source {
            DataSource::Sample => (sample::sample_season(season), true),
            DataSource::Live => match self.collect_live(season) {
                Ok(games) => (games, true),
                Err(err) => {
                    self.app.log(format!("API error: {:#}", err));
                    self.app.log("Falling back to sample data...");
                    (sample::sample_season(season), false)
                }
            },
        }
    }

    fn collect_live(&mut self, season: i32) -> anyhow::Result<Vec<GameRecord>> {
        let api = StatsApi::new()?;
        let max_days = self.app.max_days;
        let logs = self.app.logs.clone();

        api.collect_season(season, max_days, |day, total, found| {
            logs.push(format!(
                "Processing day {}/{}... ({} games found)",
                day, total, found
            ));
        })
    }

    fn load_cached(&self, season: i32, source: DataSource) -> Option<Vec<GameRecord>> {
        let pool = self.app.db_pool.as_ref()?;
        match self
            .app
            .run_db_operation(cache::load_games(pool, season, source))
        {
            Ok(hit) => hit,
            Err(err) => {
                self.app.log(format!("Cache read failed: {:#}", err));
                None
            }
        }
    }

    fn store_cache(&self, season: i32, source: DataSource, games: &[GameRecord]) {
        let Some(pool) = self.app.db_pool.as_ref() else {
            return;
        };
        if let Err(err) = self
            .app
            .run_db_operation(cache::store_games(pool, season, source, games))
        {
            self.app.log(format!("Cache write failed: {:#}", err));
        }
    }
}
