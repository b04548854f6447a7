use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::criteria::{MAX_TOTAL_RUNS, MIN_FIRST_FIVE_RUNS};
use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect) {
        let analyzed = match self.analyzed_at {
            Some(ts) => format!("last analyzed {}", ts.format("%H:%M:%S")),
            None => "not analyzed yet".to_string(),
        };

        let lines = vec![
            Line::from(Span::styled(
                format!(
                    "Criteria X: {}+ runs in first 5 innings AND under {} total runs",
                    MIN_FIRST_FIVE_RUNS, MAX_TOTAL_RUNS
                ),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "Season {}  |  {} data  |  up to {} days  |  {}",
                self.season, self.source, self.max_days, analyzed
            )),
            Line::from(Span::styled(
                "Ctrl+A analyze | Ctrl+L live/sample | Ctrl+E export | +/- season | [ ] days | Tab views | Ctrl+Q quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Baseball Criteria Analyzer"),
            ),
            area,
        );
    }
}
