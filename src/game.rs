use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How many innings must be fully recorded before the first-five window
/// can be judged.
pub const FIRST_FIVE: usize = 5;

/// Runs scored by each side in a single inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningLine {
    pub away: i32,
    pub home: i32,
}

impl InningLine {
    pub fn new(away: i32, home: i32) -> Self {
        Self { away, home }
    }

    pub fn combined(&self) -> i32 {
        self.away + self.home
    }
}

/// One completed game's line score, as consumed by the criteria evaluator.
///
/// Constructed once per fetched or sample game and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub game_id: i64,
    pub date: NaiveDate,
    pub away_team: String,
    pub home_team: String,
    pub away_score: i32,
    pub home_score: i32,
    /// Per-inning run lines in playing order (index 0 = inning 1).
    pub innings: Vec<InningLine>,
}

impl GameRecord {
    pub fn total_runs(&self) -> i32 {
        self.away_score + self.home_score
    }

    /// Combined runs over innings 1-5, or `None` when fewer than five
    /// innings were recorded (rain-shortened games and the like).
    pub fn first_five_runs(&self) -> Option<i32> {
        if self.innings.len() < FIRST_FIVE {
            return None;
        }
        Some(
            self.innings[..FIRST_FIVE]
                .iter()
                .map(InningLine::combined)
                .sum(),
        )
    }

    pub fn matchup(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(innings: Vec<InningLine>, away_score: i32, home_score: i32) -> GameRecord {
        GameRecord {
            game_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            away_team: "Boston Red Sox".to_string(),
            home_team: "New York Yankees".to_string(),
            away_score,
            home_score,
            innings,
        }
    }

    #[test]
    fn test_first_five_runs_sums_both_sides() {
        let innings = vec![
            InningLine::new(2, 1),
            InningLine::new(1, 2),
            InningLine::new(2, 0),
            InningLine::new(0, 0),
            InningLine::new(0, 0),
            InningLine::new(0, 0),
        ];
        let game = record(innings, 5, 3);

        assert_eq!(game.first_five_runs(), Some(8));
        assert_eq!(game.total_runs(), 8);
    }

    #[test]
    fn test_first_five_runs_short_game() {
        let innings = vec![
            InningLine::new(1, 0),
            InningLine::new(0, 0),
            InningLine::new(2, 1),
            InningLine::new(0, 0),
        ];
        let game = record(innings, 3, 1);

        assert_eq!(game.first_five_runs(), None);
    }

    #[test]
    fn test_first_five_ignores_later_innings() {
        let mut innings = vec![InningLine::new(1, 1); 5];
        innings.push(InningLine::new(4, 2));
        let game = record(innings, 9, 7);

        assert_eq!(game.first_five_runs(), Some(10));
    }
}
