mod chart;
pub(in crate::ui) mod games;
mod logs;
mod metrics;
mod status;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::ui::{app::App, types::ViewMode};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        // List and detail views take over the whole screen except the logs.
        if self.view != ViewMode::Dashboard {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(10), Constraint::Length(6)])
                .split(f.area());

            match self.view {
                ViewMode::List => self.draw_game_list(f, layout[0]),
                ViewMode::Detail => self.draw_game_detail(f, layout[0]),
                ViewMode::Dashboard => unreachable!(),
            }
            self.draw_logs(f, layout[1]);
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),  // criteria banner + controls
                Constraint::Length(7),  // metric cards
                Constraint::Min(10),    // charts
                Constraint::Length(8),  // latest matching games
                Constraint::Length(6),  // logs
            ])
            .split(f.area());

        self.draw_status(f, layout[0]);
        self.draw_metrics(f, layout[1]);

        let chart_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[2]);

        self.draw_match_split(f, chart_layout[0]);
        self.draw_inning_chart(f, chart_layout[1]);

        self.draw_recent_matches(f, layout[3]);
        self.draw_logs(f, layout[4]);
    }
}
