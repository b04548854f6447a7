//! Keyboard dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::export;

use super::super::{
    app::{App, MAX_MAX_DAYS, MIN_MAX_DAYS, MIN_SEASON},
    types::ViewMode,
};
use super::{AnalyzeHandler, GamesHandler};

pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('a' | 'A'), KeyModifiers::CONTROL) => {
                AnalyzeHandler::new(self.app).run_analysis();
            }

            (KeyCode::Char('l' | 'L'), KeyModifiers::CONTROL) => {
                self.app.source = self.app.source.toggled();
                self.app.log(format!(
                    "Data source set to {}; Ctrl+A to re-run",
                    self.app.source
                ));
            }

            (KeyCode::Char('e' | 'E'), KeyModifiers::CONTROL) => {
                self.export_csv();
            }

            (KeyCode::Tab, _) => {
                GamesHandler::new(self.app).cycle_view();
            }

            (KeyCode::Char('+' | '='), _) => {
                if self.app.season < self.app.season_ceiling() {
                    self.app.season += 1;
                    self.app
                        .log(format!("Season set to {}; Ctrl+A to re-run", self.app.season));
                }
            }

            (KeyCode::Char('-'), _) => {
                if self.app.season > MIN_SEASON {
                    self.app.season -= 1;
                    self.app
                        .log(format!("Season set to {}; Ctrl+A to re-run", self.app.season));
                }
            }

            (KeyCode::Char(']'), _) => {
                if self.app.max_days < MAX_MAX_DAYS {
                    self.app.max_days += 10;
                    self.app
                        .log(format!("Will sample up to {} days", self.app.max_days));
                }
            }

            (KeyCode::Char('['), _) => {
                if self.app.max_days > MIN_MAX_DAYS {
                    self.app.max_days -= 10;
                    self.app
                        .log(format!("Will sample up to {} days", self.app.max_days));
                }
            }

            (KeyCode::PageDown, _) => {
                if self.app.view == ViewMode::List {
                    GamesHandler::new(self.app).next_page();
                }
            }

            (KeyCode::PageUp, _) => {
                if self.app.view == ViewMode::List {
                    GamesHandler::new(self.app).prev_page();
                }
            }

            (KeyCode::Char(c @ '0'..='9'), KeyModifiers::NONE) => {
                if self.app.view == ViewMode::List {
                    let digit = c.to_digit(10).unwrap() as usize;
                    // 1-9 select items 0-8; 0 selects the 10th item.
                    let index = if digit == 0 { 9 } else { digit - 1 };
                    GamesHandler::new(self.app).select_game_on_page(index);
                }
            }

            (KeyCode::Esc, _) => match self.app.view {
                ViewMode::Detail => GamesHandler::new(self.app).return_to_list(),
                ViewMode::List => GamesHandler::new(self.app).return_to_dashboard(),
                ViewMode::Dashboard => {}
            },

            _ => {}
        }
        false
    }

    fn export_csv(&mut self) {
        match &self.app.result {
            Some(result) if result.match_count() > 0 => {
                let path = self
                    .app
                    .export_dir
                    .join(export::default_file_name(self.app.season));
                match export::write_csv(&path, result) {
                    Ok(()) => self.app.log(format!(
                        "Exported {} matching games to {}",
                        result.match_count(),
                        path.display()
                    )),
                    Err(err) => self.app.log(format!("Export failed: {:#}", err)),
                }
            }
            Some(_) => self.app.log("No matching games to export"),
            None => self.app.log("Nothing to export; run an analysis first"),
        }
    }
}
