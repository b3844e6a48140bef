//! PlayerCareerStats and BowlingFigures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wickets and runs conceded in one bowling innings. Displays as "W/R".
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BowlingFigures {
    pub wickets: u32,
    pub runs: u32,
}

impl BowlingFigures {
    /// More wickets is better; equal wickets for fewer runs is better.
    pub fn is_better_than(&self, other: &BowlingFigures) -> bool {
        self.wickets > other.wickets || (self.wickets == other.wickets && self.runs < other.runs)
    }
}

impl fmt::Display for BowlingFigures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.wickets, self.runs)
    }
}

/// Career figures for one player, derived from completed matches.
///
/// Never updated in place: rebuild with `recompute_career` whenever the match set changes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerCareerStats {
    pub player_name: String,
    pub matches_played: u32,

    // Batting
    pub innings_batted: u32,
    pub not_outs: u32,
    pub times_out: u32,
    pub total_runs: u32,
    pub balls_faced: u32,
    pub highest_score: u32,
    /// Runs per dismissal; equals `total_runs` when never dismissed.
    pub batting_average: f64,
    /// Runs per 100 balls faced; 0 when no ball faced.
    pub strike_rate: f64,
    pub centuries: u32,
    /// Innings of 50-99.
    pub half_centuries: u32,

    // Bowling
    pub innings_bowled: u32,
    pub balls_bowled: u32,
    pub runs_conceded: u32,
    pub total_wickets: u32,
    /// Runs conceded per wicket; None without a wicket.
    pub bowling_average: Option<f64>,
    /// Runs conceded per over; None without a legal ball bowled.
    pub economy: Option<f64>,
    pub five_wicket_hauls: u32,
    pub best_bowling: Option<BowlingFigures>,
}

impl PlayerCareerStats {
    pub fn empty(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    /// Best bowling as "W/R", if the player has bowled.
    pub fn best_bowling_display(&self) -> Option<String> {
        self.best_bowling.map(|b| b.to_string())
    }
}
