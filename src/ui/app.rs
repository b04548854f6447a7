use std::{fmt::Display, io::Stdout, path::PathBuf};

use anyhow::Result;
use chrono::{DateTime, Datelike, Utc};
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use sqlx::SqlitePool;
use tracing::info;

use crate::criteria::AnalysisResult;
use crate::db::cache::DataSource;

use super::types::{LogBuffer, ViewMode};

pub const MIN_MAX_DAYS: u32 = 10;
pub const MAX_MAX_DAYS: u32 = 60;
pub const MIN_SEASON: i32 = 2015;

/// Main application state container.
pub struct App {
    pub(in crate::ui) season: i32,
    pub(in crate::ui) source: DataSource,
    pub(in crate::ui) max_days: u32,
    pub(in crate::ui) result: Option<AnalysisResult>,
    pub(in crate::ui) analyzed_at: Option<DateTime<Utc>>,
    pub(in crate::ui) view: ViewMode,
    pub(in crate::ui) page: usize,
    pub(in crate::ui) selected: Option<usize>,
    pub(in crate::ui) export_dir: PathBuf,
    pub(in crate::ui) logs: LogBuffer,
    /// Absent in unit tests; cache reads/writes are skipped without it.
    pub(in crate::ui) db_pool: Option<SqlitePool>,
}

impl App {
    pub fn new(
        season: i32,
        source: DataSource,
        max_days: u32,
        logs: LogBuffer,
        db_pool: Option<SqlitePool>,
    ) -> Self {
        Self {
            season,
            source,
            max_days,
            result: None,
            analyzed_at: None,
            view: ViewMode::Dashboard,
            page: 0,
            selected: None,
            export_dir: PathBuf::from("."),
            logs,
            db_pool,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log(format!(
            "Ready. Season {}, {} data. Ctrl+A to analyze.",
            self.season, self.source
        ));

        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = event::read()?;
            if let Event::Key(key) = event {
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    pub(in crate::ui) fn season_ceiling(&self) -> i32 {
        Utc::now().year()
    }

    /// Execute an async cache operation from sync context.
    pub(in crate::ui) fn run_db_operation<F, T>(&self, future: F) -> Result<T>
    where
        F: std::future::Future<Output = Result<T>>,
    {
        tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
    }
}
