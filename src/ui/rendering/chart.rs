use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::GameRecord;
use crate::ui::app::App;

const BAR_WIDTH: usize = 36;

impl App {
    /// Matching vs non-matching split, drawn as horizontal bars.
    pub(in crate::ui) fn draw_match_split(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from("")];

        if let Some(result) = &self.result {
            let matches = result.match_count();
            let others = result.total_analyzed.saturating_sub(matches);
            let max = matches.max(others).max(1);

            lines.push(bar_line("Matching", matches, max, Color::Green));
            lines.push(Line::from(""));
            lines.push(bar_line("Other   ", others, max, Color::Yellow));

            if result.skipped > 0 {
                lines.push(Line::from(""));
                lines.push(bar_line("Skipped ", result.skipped, max, Color::Red));
            }
        } else {
            lines.push(Line::from("  Run an analysis to populate this chart"));
        }

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Games Meeting Criteria X"),
            ),
            area,
        );
    }

    /// Runs by inning for a sample matching game (the first one, or the
    /// currently selected game when browsing).
    pub(in crate::ui) fn draw_inning_chart(&self, f: &mut Frame, area: Rect) {
        let game = self.result.as_ref().and_then(|r| {
            let index = self.selected.unwrap_or(0);
            r.matching_games.get(index).or_else(|| r.matching_games.first())
        });

        let (title, lines) = match game {
            Some(game) => (
                format!("Sample Game: {}", game.matchup()),
                inning_lines(game),
            ),
            None => (
                "Sample Game".to_string(),
                vec![
                    Line::from(""),
                    Line::from("  No matching games to chart yet"),
                ],
            ),
        };

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }
}

fn bar_line(label: &str, count: usize, max: usize, color: Color) -> Line<'static> {
    let width = (count as f64 / max as f64 * BAR_WIDTH as f64) as usize;
    Line::from(vec![
        Span::raw(format!("  {} ", label)),
        Span::styled("█".repeat(width), Style::default().fg(color)),
        Span::raw(format!(" {}", count)),
    ])
}

fn inning_lines(game: &GameRecord) -> Vec<Line<'static>> {
    let max_runs = game
        .innings
        .iter()
        .map(|line| line.combined())
        .max()
        .unwrap_or(0)
        .max(1);

    let mut lines = vec![Line::from("")];
    for (i, inning) in game.innings.iter().enumerate() {
        let runs = inning.combined();
        let width = (runs as f64 / max_runs as f64 * BAR_WIDTH as f64) as usize;
        // The first-five window is the interesting part; tint it differently.
        let color = if i < 5 { Color::Cyan } else { Color::DarkGray };

        lines.push(Line::from(vec![
            Span::raw(format!("  Inning {:<2} ", i + 1)),
            Span::styled("█".repeat(width), Style::default().fg(color)),
            Span::raw(format!(" {}", runs)),
        ]));
    }
    lines
}
