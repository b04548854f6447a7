//! Matching-game browsing: view cycling, pagination, selection.

use super::super::{
    app::App,
    types::{ViewMode, PAGE_SIZE},
};

pub struct GamesHandler<'a> {
    app: &'a mut App,
}

impl<'a> GamesHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    fn match_count(&self) -> usize {
        self.app
            .result
            .as_ref()
            .map(|r| r.match_count())
            .unwrap_or(0)
    }

    fn page_count(&self) -> usize {
        self.match_count().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn cycle_view(&mut self) {
        self.app.view = match self.app.view {
            ViewMode::Dashboard => ViewMode::List,
            ViewMode::List => {
                if self.app.selected.is_some() {
                    ViewMode::Detail
                } else {
                    ViewMode::Dashboard
                }
            }
            ViewMode::Detail => ViewMode::Dashboard,
        };
    }

    pub fn next_page(&mut self) {
        if self.app.page + 1 < self.page_count() {
            self.app.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.app.page > 0 {
            self.app.page -= 1;
        }
    }

    /// Select the nth game on the current page and open its detail view.
    pub fn select_game_on_page(&mut self, index: usize) {
        let absolute = self.app.page * PAGE_SIZE + index;
        if absolute < self.match_count() {
            self.app.selected = Some(absolute);
            self.app.view = ViewMode::Detail;
        }
    }

    pub fn return_to_list(&mut self) {
        self.app.selected = None;
        self.app.view = ViewMode::List;
    }

    pub fn return_to_dashboard(&mut self) {
        self.app.selected = None;
        self.app.page = 0;
        self.app.view = ViewMode::Dashboard;
    }
}
