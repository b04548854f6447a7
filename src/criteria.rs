//! Criteria X evaluation and aggregation.
//!
//! Criteria X: combined runs in innings 1-5 of at least
//! [`MIN_FIRST_FIVE_RUNS`] AND a full-game run total strictly under
//! [`MAX_TOTAL_RUNS`]. Everything here is a pure, single-pass
//! transformation over already-materialized records; no I/O, no state.

use crate::game::GameRecord;

/// Lower bound (inclusive) on combined runs through five innings.
pub const MIN_FIRST_FIVE_RUNS: i32 = 7;
/// Upper bound (exclusive) on full-game combined runs.
pub const MAX_TOTAL_RUNS: i32 = 9;

/// Why a record was excluded from evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No inning data at all.
    MissingInnings,
    /// Fewer than five recorded innings; the first-five window cannot be
    /// judged, so the game is excluded rather than extrapolated.
    ShortGame,
    /// A negative run count somewhere in the record.
    NegativeRuns,
    /// `total_runs` is lower than the first-five sum. The total covers every
    /// inning, so this can only mean the upstream record is corrupt.
    RunTotalMismatch,
}

/// Outcome of checking one record against Criteria X.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    NoMatch,
    Skipped(SkipReason),
}

/// Aggregate over one season/query worth of records.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    /// Records that produced a definitive Match/NoMatch verdict. Skipped
    /// records are deliberately not counted here; they are reported through
    /// `skipped` so the totals stay honest.
    pub total_analyzed: usize,
    /// Matching games, in input order.
    pub matching_games: Vec<GameRecord>,
    /// `matching_games.len() / total_analyzed`, 0.0 for empty input.
    pub match_rate: f64,
    /// Records excluded for any reason, integrity faults included.
    pub skipped: usize,
    /// Subset of `skipped` with `RunTotalMismatch`.
    pub integrity_faults: usize,
}

impl AnalysisResult {
    pub fn match_count(&self) -> usize {
        self.matching_games.len()
    }

    pub fn match_percentage(&self) -> f64 {
        self.match_rate * 100.0
    }
}

/// Pure Criteria X predicate. Assumes a record with at least five recorded
/// innings; use [`check`] when the record has not been validated.
pub fn meets_criteria(game: &GameRecord) -> bool {
    match game.first_five_runs() {
        Some(first_five) => {
            first_five >= MIN_FIRST_FIVE_RUNS && game.total_runs() < MAX_TOTAL_RUNS
        }
        None => false,
    }
}

/// Validate a record and judge it against Criteria X.
pub fn check(game: &GameRecord) -> Verdict {
    if game.innings.is_empty() {
        return Verdict::Skipped(SkipReason::MissingInnings);
    }

    let negative_line = game
        .innings
        .iter()
        .any(|line| line.away < 0 || line.home < 0);
    if negative_line || game.away_score < 0 || game.home_score < 0 {
        return Verdict::Skipped(SkipReason::NegativeRuns);
    }

    let first_five = match game.first_five_runs() {
        Some(runs) => runs,
        None => return Verdict::Skipped(SkipReason::ShortGame),
    };

    // Impossible by construction for a faithful record; flag, never aggregate.
    if game.total_runs() < first_five {
        return Verdict::Skipped(SkipReason::RunTotalMismatch);
    }

    if first_five >= MIN_FIRST_FIVE_RUNS && game.total_runs() < MAX_TOTAL_RUNS {
        Verdict::Match
    } else {
        Verdict::NoMatch
    }
}

/// Run [`check`] over a batch of records and fold the verdicts into an
/// [`AnalysisResult`]. Input order is preserved among matching games, and
/// identical input always produces identical output.
pub fn aggregate(games: &[GameRecord]) -> AnalysisResult {
    let mut result = AnalysisResult::default();

    for game in games {
        match check(game) {
            Verdict::Match => {
                result.total_analyzed += 1;
                result.matching_games.push(game.clone());
            }
            Verdict::NoMatch => {
                result.total_analyzed += 1;
            }
            Verdict::Skipped(reason) => {
                result.skipped += 1;
                if reason == SkipReason::RunTotalMismatch {
                    result.integrity_faults += 1;
                }
            }
        }
    }

    if result.total_analyzed > 0 {
        result.match_rate = result.matching_games.len() as f64 / result.total_analyzed as f64;
    }

    result
}
