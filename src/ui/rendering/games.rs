use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::criteria::{MAX_TOTAL_RUNS, MIN_FIRST_FIVE_RUNS};
use crate::game::GameRecord;
use crate::ui::{app::App, types::PAGE_SIZE};

/// The n most recent games by date, newest first; ties keep input order.
pub(in crate::ui) fn latest_by_date(games: &[GameRecord], n: usize) -> Vec<&GameRecord> {
    let mut sorted: Vec<&GameRecord> = games.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

impl App {
    /// Dashboard panel: the latest matching games, most recent first.
    pub(in crate::ui) fn draw_recent_matches(&self, f: &mut Frame, area: Rect) {
        let games: &[GameRecord] = match &self.result {
            Some(r) => &r.matching_games,
            None => &[],
        };

        let recent = latest_by_date(games, PAGE_SIZE);
        let rows: Vec<Row> = recent.iter().map(|game| game_row(game)).collect();

        let title = match &self.result {
            Some(r) if r.match_count() > recent.len() => format!(
                "Matching Games (showing {} of {}; Tab for full list)",
                recent.len(),
                r.match_count()
            ),
            _ => "Matching Games".to_string(),
        };

        f.render_widget(game_table(rows, title), area);
    }

    /// Full-screen paginated list of matching games.
    pub(in crate::ui) fn draw_game_list(&self, f: &mut Frame, area: Rect) {
        let games: &[GameRecord] = match &self.result {
            Some(r) => &r.matching_games,
            None => &[],
        };

        if games.is_empty() {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No matching games",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("Run an analysis with Ctrl+A first."),
            ];
            f.render_widget(
                Paragraph::new(text)
                    .block(Block::default().borders(Borders::ALL).title("Matching Games")),
                area,
            );
            return;
        }

        let start = self.page * PAGE_SIZE;
        let page_games = &games[start.min(games.len())..(start + PAGE_SIZE).min(games.len())];

        let rows: Vec<Row> = page_games
            .iter()
            .enumerate()
            .map(|(i, game)| {
                let key = if i == 9 { 0 } else { i + 1 };
                numbered_game_row(key, game)
            })
            .collect();

        let pages = games.len().div_ceil(PAGE_SIZE);
        let title = format!(
            "Matching Games | page {}/{} | PgUp/PgDn pages | 1-9,0 detail | Esc back",
            self.page + 1,
            pages
        );

        f.render_widget(
            Table::new(
                rows,
                [
                    Constraint::Length(4),
                    Constraint::Length(12),
                    Constraint::Min(36),
                    Constraint::Length(8),
                    Constraint::Length(10),
                    Constraint::Length(7),
                ],
            )
            .header(
                Row::new(vec!["#", "Date", "Matchup", "Score", "First 5", "Total"])
                    .style(Style::default().add_modifier(Modifier::BOLD))
                    .bottom_margin(1),
            )
            .block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }

    /// Inning-by-inning breakdown of the selected matching game.
    pub(in crate::ui) fn draw_game_detail(&self, f: &mut Frame, area: Rect) {
        let game = self
            .result
            .as_ref()
            .zip(self.selected)
            .and_then(|(r, i)| r.matching_games.get(i));

        let Some(game) = game else {
            f.render_widget(
                Paragraph::new("No game selected")
                    .block(Block::default().borders(Borders::ALL).title("Game Detail")),
                area,
            );
            return;
        };

        let first_five = game.first_five_runs().unwrap_or(0);
        let total = game.total_runs();

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("  Date: "),
                Span::styled(
                    game.date.format("%Y-%m-%d").to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("    Final Score: "),
                Span::styled(
                    format!("{}-{}", game.away_score, game.home_score),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw(format!("  First 5 Innings: {} runs    ", first_five)),
                Span::raw(format!("Total: {} runs", total)),
            ]),
            Line::from(""),
            criterion_line(
                format!("{}+ in first 5", MIN_FIRST_FIVE_RUNS),
                first_five >= MIN_FIRST_FIVE_RUNS,
            ),
            criterion_line(format!("Under {} total", MAX_TOTAL_RUNS), total < MAX_TOTAL_RUNS),
            Line::from(""),
            Line::from(Span::styled(
                "  Inning   Away  Home  Total",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        for (i, inning) in game.innings.iter().enumerate() {
            let style = if i < 5 {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "  Inn {:<4} {:>4} {:>5} {:>6}",
                    i + 1,
                    inning.away,
                    inning.home,
                    inning.combined()
                ),
                style,
            )));
        }

        let title = format!("Game Detail: {} | Esc: back to list", game.matchup());
        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }
}

fn criterion_line(label: String, passed: bool) -> Line<'static> {
    let (mark, color) = if passed {
        ("pass", Color::Green)
    } else {
        ("fail", Color::Red)
    };
    Line::from(vec![
        Span::raw(format!("  {}: ", label)),
        Span::styled(mark, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

fn game_row(game: &GameRecord) -> Row<'static> {
    Row::new(vec![
        game.date.format("%Y-%m-%d").to_string(),
        game.matchup(),
        format!("{}-{}", game.away_score, game.home_score),
        game.first_five_runs().unwrap_or(0).to_string(),
        game.total_runs().to_string(),
    ])
}

fn numbered_game_row(key: usize, game: &GameRecord) -> Row<'static> {
    Row::new(vec![
        key.to_string(),
        game.date.format("%Y-%m-%d").to_string(),
        game.matchup(),
        format!("{}-{}", game.away_score, game.home_score),
        game.first_five_runs().unwrap_or(0).to_string(),
        game.total_runs().to_string(),
    ])
}

fn game_table(rows: Vec<Row<'static>>, title: String) -> Table<'static> {
    Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Min(36),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(7),
        ],
    )
    .header(
        Row::new(vec!["Date", "Matchup", "Score", "First 5", "Total"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1),
    )
    .block(Block::default().borders(Borders::ALL).title(title))
}
