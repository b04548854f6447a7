use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_metrics(&self, f: &mut Frame, area: Rect) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let (total, matches, rate, skipped) = match &self.result {
            Some(r) => (
                r.total_analyzed.to_string(),
                r.match_count().to_string(),
                format!("{:.1}%", r.match_percentage()),
                r.skipped.to_string(),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string(), "-".to_string()),
        };

        draw_card(f, cards[0], "Total Games", &total, Color::Cyan);
        draw_card(f, cards[1], "Matching Games", &matches, Color::Green);
        draw_card(f, cards[2], "Match Rate", &rate, Color::Yellow);

        let skipped_color = match &self.result {
            Some(r) if r.skipped > 0 => Color::Red,
            _ => Color::Gray,
        };
        draw_card(f, cards[3], "Skipped Records", &skipped, skipped_color);
    }
}

fn draw_card(f: &mut Frame, area: Rect, label: &str, value: &str, color: Color) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", value),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(label)),
        area,
    );
}
