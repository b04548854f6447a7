//! CSV export of matching games.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::criteria::AnalysisResult;
use crate::game::GameRecord;

const HEADER: [&str; 7] = [
    "Date",
    "Away Team",
    "Home Team",
    "Away Score",
    "Home Score",
    "First 5 Innings Runs",
    "Total Runs",
];

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer, quoting fields that need it.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

fn game_row(game: &GameRecord) -> Vec<String> {
    vec![
        game.date.format("%Y-%m-%d").to_string(),
        game.away_team.clone(),
        game.home_team.clone(),
        game.away_score.to_string(),
        game.home_score.to_string(),
        game.first_five_runs().unwrap_or(0).to_string(),
        game.total_runs().to_string(),
    ]
}

/// Render the matching games of an analysis as a CSV document with a header
/// line, one row per game.
pub fn to_csv_string(result: &AnalysisResult) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let header: Vec<String> = HEADER.iter().map(|s| s.to_string()).collect();
    let _ = write_row(&mut buf, &header);
    for game in &result.matching_games {
        let _ = write_row(&mut buf, &game_row(game));
    }

    String::from_utf8(buf).unwrap_or_default()
}

pub fn write_csv<P: AsRef<Path>>(path: P, result: &AnalysisResult) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_csv_string(result))
        .with_context(|| format!("failed to write CSV to {}", path.display()))
}

/// Default export file name, mirroring the season in the analysis request.
pub fn default_file_name(season: i32) -> String {
    format!("mlb_{}_criteria_x_games.csv", season)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::aggregate;
    use crate::game::{GameRecord, InningLine};
    use chrono::NaiveDate;

    fn matching_game(away_team: &str) -> GameRecord {
        let mut innings = vec![
            InningLine::new(2, 1),
            InningLine::new(1, 2),
            InningLine::new(1, 0),
            InningLine::new(0, 0),
            InningLine::new(0, 0),
        ];
        innings.extend(std::iter::repeat(InningLine::new(0, 0)).take(4));
        GameRecord {
            game_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            away_team: away_team.to_string(),
            home_team: "New York Yankees".to_string(),
            away_score: 4,
            home_score: 3,
            innings,
        }
    }

    #[test]
    fn test_csv_header_and_row() {
        let result = aggregate(&[matching_game("Boston Red Sox")]);
        let csv = to_csv_string(&result);

        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Away Team,Home Team,Away Score,Home Score,First 5 Innings Runs,Total Runs"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2024-05-15,Boston Red Sox,New York Yankees,4,3,7,7"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        let result = aggregate(&[matching_game("Red Sox, Boston")]);
        let csv = to_csv_string(&result);
        assert!(csv.contains("\"Red Sox, Boston\""));
    }

    #[test]
    fn test_csv_escapes_embedded_quotes() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["say \"hey\"".to_string(), "ok".to_string()]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"say \"\"hey\"\"\",ok\n");
    }

    #[test]
    fn test_csv_empty_result_is_header_only() {
        let result = aggregate(&[]);
        let csv = to_csv_string(&result);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_write_csv_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(default_file_name(2024));

        let result = aggregate(&[matching_game("Boston Red Sox")]);
        write_csv(&path, &result).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Date,"));
        assert_eq!(contents.lines().count(), 2);
    }
}
