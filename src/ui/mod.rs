mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{LogBuffer, ViewMode};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sqlx::SqlitePool;
use std::io::stdout;
use std::path::PathBuf;

use crate::db::cache::DataSource;

/// Entry point for running the dashboard.
pub fn run_ui(
    season: i32,
    source: DataSource,
    max_days: u32,
    export_dir: PathBuf,
    db_pool: SqlitePool,
) -> Result<()> {
    let logs = LogBuffer::new();

    let mut app = App::new(season, source, max_days, logs, Some(db_pool));
    app.export_dir = export_dir;

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
