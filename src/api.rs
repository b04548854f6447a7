//! MLB Stats API client.
//!
//! Pulls schedule + linescore data one day at a time and flattens it into
//! [`GameRecord`]s. Only games the API reports as Final are kept.

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::thread;
use std::time::Duration as StdDuration;
use tracing::warn;

use crate::game::{GameRecord, InningLine};

const SCHEDULE_URL: &str = "https://statsapi.mlb.com/api/v1/schedule";
const REQUEST_TIMEOUT_SECS: u64 = 10;
/// Sample every third day of the season, as a courtesy to the API.
const DAY_STRIDE: i64 = 3;
const REQUEST_PAUSE_MS: u64 = 100;

#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleDate {
    #[serde(default)]
    pub games: Vec<ApiGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGame {
    pub game_pk: Option<i64>,
    pub game_date: Option<String>,
    #[serde(default)]
    pub status: ApiStatus,
    #[serde(default)]
    pub teams: ApiTeams,
    pub linescore: Option<ApiLinescore>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatus {
    pub detailed_state: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiTeams {
    #[serde(default)]
    pub away: ApiTeamSide,
    #[serde(default)]
    pub home: ApiTeamSide,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiTeamSide {
    pub score: Option<i32>,
    #[serde(default)]
    pub team: ApiTeam,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiTeam {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiLinescore {
    #[serde(default)]
    pub innings: Vec<ApiInning>,
}

#[derive(Debug, Deserialize)]
pub struct ApiInning {
    #[serde(default)]
    pub away: ApiInningSide,
    #[serde(default)]
    pub home: ApiInningSide,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiInningSide {
    pub runs: Option<i32>,
}

impl ApiGame {
    pub fn is_final(&self) -> bool {
        self.status.detailed_state.as_deref() == Some("Final")
    }
}

/// Flatten one API game into a [`GameRecord`]. Returns `None` when the
/// linescore is missing entirely; individual missing run values count as 0,
/// matching how the upstream feed reports scoreless half-innings.
pub fn extract_game(game: &ApiGame) -> Option<GameRecord> {
    let linescore = game.linescore.as_ref()?;
    if linescore.innings.is_empty() {
        return None;
    }

    let date = game
        .game_date
        .as_deref()
        .and_then(|raw| raw.get(..10))
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())?;

    let innings = linescore
        .innings
        .iter()
        .map(|inning| {
            InningLine::new(
                inning.away.runs.unwrap_or(0),
                inning.home.runs.unwrap_or(0),
            )
        })
        .collect();

    Some(GameRecord {
        game_id: game.game_pk.unwrap_or(0),
        date,
        away_team: game
            .teams
            .away
            .team
            .name
            .clone()
            .unwrap_or_default(),
        home_team: game
            .teams
            .home
            .team
            .name
            .clone()
            .unwrap_or_default(),
        away_score: game.teams.away.score.unwrap_or(0),
        home_score: game.teams.home.score.unwrap_or(0),
        innings,
    })
}

pub struct StatsApi {
    client: Client,
}

impl StatsApi {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch every Final game scheduled on one calendar day.
    pub fn fetch_day(&self, date: NaiveDate) -> Result<Vec<GameRecord>> {
        let response: ScheduleResponse = self
            .client
            .get(SCHEDULE_URL)
            .query(&[
                ("sportId", "1".to_string()),
                ("date", date.format("%Y-%m-%d").to_string()),
                ("hydrate", "linescore".to_string()),
            ])
            .send()
            .with_context(|| format!("schedule request for {} failed", date))?
            .error_for_status()
            .with_context(|| format!("schedule request for {} rejected", date))?
            .json()
            .with_context(|| format!("malformed schedule response for {}", date))?;

        let games = response
            .dates
            .first()
            .map(|day| {
                day.games
                    .iter()
                    .filter(|game| game.is_final())
                    .filter_map(extract_game)
                    .collect()
            })
            .unwrap_or_default();

        Ok(games)
    }

    /// Walk a season starting April 1, [`DAY_STRIDE`] days at a time, for up
    /// to `max_days` requests. A failed day is logged and skipped so one bad
    /// response never sinks the whole collection.
    pub fn collect_season<F>(
        &self,
        season: i32,
        max_days: u32,
        mut progress: F,
    ) -> Result<Vec<GameRecord>>
    where
        F: FnMut(u32, u32, usize),
    {
        let start = NaiveDate::from_ymd_opt(season, 4, 1)
            .with_context(|| format!("invalid season year {}", season))?;

        let mut all_games = Vec::new();
        let mut current = start;

        for day in 0..max_days {
            if current.year() != season {
                break;
            }

            match self.fetch_day(current) {
                Ok(mut games) => all_games.append(&mut games),
                Err(err) => warn!("skipping {}: {:#}", current, err),
            }

            progress(day + 1, max_days, all_games.len());
            current = current + Duration::days(DAY_STRIDE);
            thread::sleep(StdDuration::from_millis(REQUEST_PAUSE_MS));
        }

        Ok(all_games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FINAL_GAME: &str = r#"{
        "gamePk": 745821,
        "gameDate": "2024-05-15T23:05:00Z",
        "status": { "detailedState": "Final" },
        "teams": {
            "away": { "score": 5, "team": { "name": "Boston Red Sox" } },
            "home": { "score": 3, "team": { "name": "New York Yankees" } }
        },
        "linescore": {
            "innings": [
                { "away": { "runs": 2 }, "home": { "runs": 1 } },
                { "away": { "runs": 1 }, "home": { "runs": 2 } },
                { "away": { "runs": 2 }, "home": {} },
                { "away": {}, "home": {} },
                { "away": { "runs": 0 }, "home": { "runs": 0 } }
            ]
        }
    }"#;

    #[test]
    fn test_extract_game_from_api_json() {
        let api_game: ApiGame = serde_json::from_str(FINAL_GAME).unwrap();
        assert!(api_game.is_final());

        let game = extract_game(&api_game).unwrap();
        assert_eq!(game.game_id, 745821);
        assert_eq!(game.date.to_string(), "2024-05-15");
        assert_eq!(game.away_team, "Boston Red Sox");
        assert_eq!(game.home_team, "New York Yankees");
        assert_eq!(game.total_runs(), 8);
        // Missing run fields read as 0.
        assert_eq!(game.innings[2].home, 0);
        assert_eq!(game.innings[3].away, 0);
        assert_eq!(game.first_five_runs(), Some(8));
    }

    #[test]
    fn test_extract_game_requires_linescore() {
        let raw = r#"{
            "gamePk": 1,
            "gameDate": "2024-05-15T23:05:00Z",
            "status": { "detailedState": "Final" },
            "teams": {
                "away": { "score": 2, "team": { "name": "A" } },
                "home": { "score": 1, "team": { "name": "B" } }
            }
        }"#;
        let api_game: ApiGame = serde_json::from_str(raw).unwrap();
        assert!(extract_game(&api_game).is_none());
    }

    #[test]
    fn test_non_final_games_filtered() {
        let raw = r#"{
            "gamePk": 2,
            "status": { "detailedState": "In Progress" }
        }"#;
        let api_game: ApiGame = serde_json::from_str(raw).unwrap();
        assert!(!api_game.is_final());
    }

    #[test]
    fn test_schedule_response_empty_dates() {
        let response: ScheduleResponse = serde_json::from_str(r#"{ "dates": [] }"#).unwrap();
        assert!(response.dates.is_empty());

        let response: ScheduleResponse = serde_json::from_str("{}").unwrap();
        assert!(response.dates.is_empty());
    }

    #[test]
    fn test_schedule_response_with_games() {
        let raw = format!(r#"{{ "dates": [ {{ "games": [ {} ] }} ] }}"#, FINAL_GAME);
        let response: ScheduleResponse = serde_json::from_str(&raw).unwrap();
        assert_eq!(response.dates[0].games.len(), 1);
    }
}
