//! Reconciliation: compare stored statistics with a fresh recomputation.
//!
//! Differences are reported, never patched; the ball history stays the source of truth.

use crate::error::{AggregationInconsistencyError, FieldMismatch};
use crate::models::{PlayerCareerStats, TournamentStanding};
use std::fmt::Display;

#[derive(Default)]
struct Mismatches(Vec<FieldMismatch>);

impl Mismatches {
    fn exact<T: PartialEq + Display>(&mut self, field: &str, stored: T, recomputed: T) {
        if stored != recomputed {
            self.push(field, stored.to_string(), recomputed.to_string());
        }
    }

    fn float(&mut self, field: &str, stored: f64, recomputed: f64, tolerance: f64) {
        if (stored - recomputed).abs() > tolerance {
            self.push(field, stored.to_string(), recomputed.to_string());
        }
    }

    fn opt_float(&mut self, field: &str, stored: Option<f64>, recomputed: Option<f64>, tolerance: f64) {
        match (stored, recomputed) {
            (Some(s), Some(r)) => self.float(field, s, r, tolerance),
            (None, None) => {}
            _ => self.push(field, format!("{stored:?}"), format!("{recomputed:?}")),
        }
    }

    fn push(&mut self, field: &str, stored: String, recomputed: String) {
        self.0.push(FieldMismatch {
            field: field.to_string(),
            stored,
            recomputed,
        });
    }

    fn into_result(self, subject: String) -> Result<(), AggregationInconsistencyError> {
        if self.0.is_empty() {
            return Ok(());
        }
        let err = AggregationInconsistencyError {
            subject,
            mismatches: self.0,
        };
        log::warn!("{}", err);
        Err(err)
    }
}

/// Check a stored career snapshot against `recomputed`. Floats compare within `tolerance`.
pub fn reconcile_career(
    stored: &PlayerCareerStats,
    recomputed: &PlayerCareerStats,
    tolerance: f64,
) -> Result<(), AggregationInconsistencyError> {
    let mut m = Mismatches::default();
    m.exact("matches_played", stored.matches_played, recomputed.matches_played);
    m.exact("innings_batted", stored.innings_batted, recomputed.innings_batted);
    m.exact("not_outs", stored.not_outs, recomputed.not_outs);
    m.exact("times_out", stored.times_out, recomputed.times_out);
    m.exact("total_runs", stored.total_runs, recomputed.total_runs);
    m.exact("balls_faced", stored.balls_faced, recomputed.balls_faced);
    m.exact("highest_score", stored.highest_score, recomputed.highest_score);
    m.float("batting_average", stored.batting_average, recomputed.batting_average, tolerance);
    m.float("strike_rate", stored.strike_rate, recomputed.strike_rate, tolerance);
    m.exact("centuries", stored.centuries, recomputed.centuries);
    m.exact("half_centuries", stored.half_centuries, recomputed.half_centuries);
    m.exact("innings_bowled", stored.innings_bowled, recomputed.innings_bowled);
    m.exact("balls_bowled", stored.balls_bowled, recomputed.balls_bowled);
    m.exact("runs_conceded", stored.runs_conceded, recomputed.runs_conceded);
    m.exact("total_wickets", stored.total_wickets, recomputed.total_wickets);
    m.opt_float("bowling_average", stored.bowling_average, recomputed.bowling_average, tolerance);
    m.opt_float("economy", stored.economy, recomputed.economy, tolerance);
    m.exact("five_wicket_hauls", stored.five_wicket_hauls, recomputed.five_wicket_hauls);
    m.exact(
        "best_bowling",
        stored.best_bowling_display().unwrap_or_default(),
        recomputed.best_bowling_display().unwrap_or_default(),
    );
    m.into_result(format!("player {}", recomputed.player_name))
}

/// Check a stored table against `recomputed`, row by team name.
pub fn reconcile_standings(
    stored: &[TournamentStanding],
    recomputed: &[TournamentStanding],
    tolerance: f64,
) -> Result<(), AggregationInconsistencyError> {
    let mut m = Mismatches::default();
    for fresh in recomputed {
        let team = &fresh.team_name;
        let Some(old) = stored.iter().find(|s| s.team_name == *team) else {
            m.push(&format!("{team}.row"), "missing".to_string(), "present".to_string());
            continue;
        };
        m.exact(&format!("{team}.played"), old.played, fresh.played);
        m.exact(&format!("{team}.won"), old.won, fresh.won);
        m.exact(&format!("{team}.lost"), old.lost, fresh.lost);
        m.exact(&format!("{team}.tied"), old.tied, fresh.tied);
        m.exact(&format!("{team}.no_result"), old.no_result, fresh.no_result);
        m.exact(&format!("{team}.points"), old.points, fresh.points);
        m.float(&format!("{team}.net_run_rate"), old.net_run_rate, fresh.net_run_rate, tolerance);
    }
    for old in stored {
        if !recomputed.iter().any(|r| r.team_name == old.team_name) {
            m.push(&format!("{}.row", old.team_name), "present".to_string(), "missing".to_string());
        }
    }
    let subject = recomputed
        .first()
        .or_else(|| stored.first())
        .map(|s| format!("tournament {}", s.tournament_id))
        .unwrap_or_else(|| "tournament".to_string());
    m.into_result(subject)
}
