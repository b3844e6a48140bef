//! Innings: ordered ball events plus the running totals derived from them.

use crate::models::ball::{BallEvent, BallPosition, BALLS_PER_OVER};
use crate::models::overs::Overs;
use serde::{Deserialize, Serialize};

/// Why an innings closed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InningsEnd {
    AllOut,
    OversExhausted,
    /// Chasing side passed the first-innings total.
    TargetReached,
}

/// One side's innings. Totals are only ever changed by folding ball events in
/// (see `logic::apply_ball`); once `end` is set no further event is accepted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Innings {
    /// 1 or 2.
    pub innings_number: u8,
    pub batting_team: String,
    pub bowling_team: String,
    pub overs_per_innings: u32,
    pub total_players: u32,
    /// First-innings total; set only on the chasing innings.
    pub first_innings_total: Option<u32>,
    pub total_runs: u32,
    pub wickets: u32,
    pub legal_balls: u32,
    pub extras: u32,
    /// None while the innings is in progress.
    pub end: Option<InningsEnd>,
    pub events: Vec<BallEvent>,
}

impl Innings {
    /// Empty first innings.
    pub fn first(
        batting_team: impl Into<String>,
        bowling_team: impl Into<String>,
        overs_per_innings: u32,
        total_players: u32,
    ) -> Self {
        Self {
            innings_number: 1,
            batting_team: batting_team.into(),
            bowling_team: bowling_team.into(),
            overs_per_innings,
            total_players,
            first_innings_total: None,
            total_runs: 0,
            wickets: 0,
            legal_balls: 0,
            extras: 0,
            end: None,
            events: Vec::new(),
        }
    }

    /// Empty second innings chasing `first_innings_total`.
    pub fn chase(
        batting_team: impl Into<String>,
        bowling_team: impl Into<String>,
        overs_per_innings: u32,
        total_players: u32,
        first_innings_total: u32,
    ) -> Self {
        Self {
            innings_number: 2,
            first_innings_total: Some(first_innings_total),
            ..Self::first(batting_team, bowling_team, overs_per_innings, total_players)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    pub fn overs(&self) -> Overs {
        Overs::from_balls(self.legal_balls)
    }

    /// Overs in scoreboard notation (19.4 = 19 overs, 4 balls).
    pub fn overs_completed(&self) -> f64 {
        self.overs().as_decimal()
    }

    /// Wickets that end the innings: one batsman is always left not out.
    pub fn max_wickets(&self) -> u32 {
        self.total_players.saturating_sub(1)
    }

    pub fn max_legal_balls(&self) -> u32 {
        self.overs_per_innings.saturating_mul(BALLS_PER_OVER)
    }

    pub fn balls_remaining(&self) -> u32 {
        self.max_legal_balls().saturating_sub(self.legal_balls)
    }

    /// Runs needed to win (first-innings total + 1); chasing innings only.
    pub fn target(&self) -> Option<u32> {
        self.first_innings_total.map(|t| t + 1)
    }

    pub fn runs_required(&self) -> Option<u32> {
        self.target().map(|t| t.saturating_sub(self.total_runs))
    }

    /// Slot the next delivery must carry.
    pub fn next_position(&self) -> BallPosition {
        BallPosition {
            over: self.legal_balls / BALLS_PER_OVER,
            ball: (self.legal_balls % BALLS_PER_OVER + 1) as u8,
        }
    }

    pub fn last_event(&self) -> Option<&BallEvent> {
        self.events.last()
    }

    pub fn run_rate(&self) -> f64 {
        self.overs().run_rate(self.total_runs)
    }

    /// Runs per over needed from here; None outside a live chase.
    pub fn required_run_rate(&self) -> Option<f64> {
        if self.is_complete() {
            return None;
        }
        let needed = self.runs_required()?;
        Some(Overs::from_balls(self.balls_remaining()).run_rate(needed))
    }
}
