//! Scoring rules for standings and reconciliation.
//! Defaults can be overridden with env: CRICKET_POINTS_PER_WIN, CRICKET_POINTS_PER_TIE,
//! CRICKET_POINTS_PER_NO_RESULT, CRICKET_STATS_TOLERANCE.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Points table and float tolerance used when aggregating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub points_per_win: u32,
    pub points_per_tie: u32,
    pub points_per_no_result: u32,
    /// Largest difference between stored and recomputed floats still treated as equal.
    pub stats_tolerance: f64,
}

fn default_points_per_win() -> u32 {
    2
}

fn default_points_per_tie() -> u32 {
    1
}

fn default_points_per_no_result() -> u32 {
    1
}

fn default_stats_tolerance() -> f64 {
    1e-6
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_per_win: default_points_per_win(),
            points_per_tie: default_points_per_tie(),
            points_per_no_result: default_points_per_no_result(),
            stats_tolerance: default_stats_tolerance(),
        }
    }
}

impl ScoringRules {
    /// Read rules from the environment; missing or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let rules = Self {
            points_per_win: env_or("CRICKET_POINTS_PER_WIN", default_points_per_win),
            points_per_tie: env_or("CRICKET_POINTS_PER_TIE", default_points_per_tie),
            points_per_no_result: env_or(
                "CRICKET_POINTS_PER_NO_RESULT",
                default_points_per_no_result,
            ),
            stats_tolerance: env_or("CRICKET_STATS_TOLERANCE", default_stats_tolerance),
        };
        log::debug!("Scoring rules: {:?}", rules);
        rules
    }

    /// Points for a record of wins, ties and no-results.
    pub fn points(&self, won: u32, tied: u32, no_result: u32) -> u32 {
        won * self.points_per_win + tied * self.points_per_tie + no_result * self.points_per_no_result
    }
}

fn env_or<T: FromStr>(key: &str, default: fn() -> T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_else(default)
}
