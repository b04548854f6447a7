//! Sample-data fallback for offline use or when the live API is down.

use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::game::{GameRecord, InningLine};

static TEAMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Boston Red Sox",
        "New York Yankees",
        "Chicago Cubs",
        "St. Louis Cardinals",
        "Los Angeles Dodgers",
        "San Francisco Giants",
        "Atlanta Braves",
        "Philadelphia Phillies",
        "Houston Astros",
        "Seattle Mariners",
    ]
});

const GENERATED_GAMES: usize = 48;

/// Curated fixtures plus a generated fill of plausible games. Seeded off the
/// season year, so repeated runs for the same season see the same data.
pub fn sample_season(season: i32) -> Vec<GameRecord> {
    let mut games = curated_games(season);
    let mut rng = StdRng::seed_from_u64(season as u64);

    let opening_day = NaiveDate::from_ymd_opt(season, 4, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());

    for n in 0..GENERATED_GAMES {
        let date = opening_day + Duration::days(rng.gen_range(0..180));
        games.push(generate_game(&mut rng, season as i64 * 1000 + n as i64, date));
    }

    games
}

/// Two hand-written demo games, both loud early and quiet late.
fn curated_games(season: i32) -> Vec<GameRecord> {
    let may = NaiveDate::from_ymd_opt(season, 5, 15)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(2024, 5, 15).unwrap());
    let june = NaiveDate::from_ymd_opt(season, 6, 22)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(2024, 6, 22).unwrap());

    let mut quiet_finish = vec![
        InningLine::new(2, 1),
        InningLine::new(1, 2),
        InningLine::new(2, 0),
        InningLine::new(0, 0),
        InningLine::new(0, 0),
    ];
    quiet_finish.extend(std::iter::repeat(InningLine::new(0, 0)).take(4));

    let mut tied_late = vec![
        InningLine::new(2, 1),
        InningLine::new(1, 2),
        InningLine::new(1, 1),
        InningLine::new(0, 0),
        InningLine::new(0, 0),
    ];
    tied_late.extend(std::iter::repeat(InningLine::new(0, 0)).take(4));

    vec![
        GameRecord {
            game_id: 900_001,
            date: may,
            away_team: "Boston Red Sox".to_string(),
            home_team: "New York Yankees".to_string(),
            away_score: 5,
            home_score: 3,
            innings: quiet_finish,
        },
        GameRecord {
            game_id: 900_002,
            date: june,
            away_team: "Chicago Cubs".to_string(),
            home_team: "St. Louis Cardinals".to_string(),
            away_score: 4,
            home_score: 4,
            innings: tied_late,
        },
    ]
}

fn generate_game(rng: &mut StdRng, game_id: i64, date: NaiveDate) -> GameRecord {
    let away_idx = rng.gen_range(0..TEAMS.len());
    let mut home_idx = rng.gen_range(0..TEAMS.len());
    while home_idx == away_idx {
        home_idx = rng.gen_range(0..TEAMS.len());
    }

    let mut innings = Vec::with_capacity(9);
    let mut away_score = 0;
    let mut home_score = 0;

    for inning in 0..9 {
        // Front-load some games so a realistic share meets Criteria X.
        let ceiling = if inning < 5 && rng.gen_bool(0.35) { 3 } else { 1 };
        let away = rng.gen_range(0..=ceiling);
        let home = rng.gen_range(0..=ceiling);
        away_score += away;
        home_score += home;
        innings.push(InningLine::new(away, home));
    }

    GameRecord {
        game_id,
        date,
        away_team: TEAMS[away_idx].to_string(),
        home_team: TEAMS[home_idx].to_string(),
        away_score,
        home_score,
        innings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{self, SkipReason, Verdict};

    #[test]
    fn test_sample_season_size() {
        let games = sample_season(2024);
        assert_eq!(games.len(), 2 + GENERATED_GAMES);
    }

    #[test]
    fn test_sample_games_are_well_formed() {
        for game in sample_season(2024) {
            let verdict = criteria::check(&game);
            assert!(
                !matches!(
                    verdict,
                    Verdict::Skipped(SkipReason::NegativeRuns)
                        | Verdict::Skipped(SkipReason::RunTotalMismatch)
                ),
                "sample game {} should be internally consistent",
                game.game_id
            );

            let inning_total: i32 = game.innings.iter().map(|l| l.combined()).sum();
            assert_eq!(inning_total, game.total_runs());
        }
    }

    #[test]
    fn test_curated_games_meet_criteria() {
        let games = sample_season(2024);
        // Both curated fixtures score 8 through five innings and 8 total.
        assert_eq!(criteria::check(&games[0]), Verdict::Match);
        assert_eq!(criteria::check(&games[1]), Verdict::Match);
    }

    #[test]
    fn test_sample_is_deterministic_per_season() {
        let a = sample_season(2023);
        let b = sample_season(2023);
        assert_eq!(a, b);
    }
}
