//! Match (game): two innings, toss, status and result.

use crate::error::MatchError;
use crate::models::ball::BALLS_PER_OVER;
use crate::models::innings::Innings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Largest innings length whose ball count still fits in a `u32`.
pub const MAX_OVERS_PER_INNINGS: u32 = u32::MAX / BALLS_PER_OVER;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Match progress. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    NotStarted,
    FirstInnings,
    SecondInnings,
    Completed,
    /// Called off by the host; never decided by the engine.
    Abandoned,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::NotStarted => "not_started",
            MatchStatus::FirstInnings => "first_innings",
            MatchStatus::SecondInnings => "second_innings",
            MatchStatus::Completed => "completed",
            MatchStatus::Abandoned => "abandoned",
        }
    }

    /// Completed or abandoned.
    pub fn is_finished(self) -> bool {
        matches!(self, MatchStatus::Completed | MatchStatus::Abandoned)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TossDecision {
    Bat,
    Bowl,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Toss {
    pub winner: String,
    pub decision: TossDecision,
}

/// Final result of a match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MatchResult {
    /// Chasing side won with wickets in hand.
    WonByWickets { winner: String, wickets: u32 },
    /// Side batting first defended its total.
    WonByRuns { winner: String, runs: u32 },
    Tied,
    NoResult,
}

impl MatchResult {
    pub fn winner(&self) -> Option<&str> {
        match self {
            MatchResult::WonByWickets { winner, .. } | MatchResult::WonByRuns { winner, .. } => {
                Some(winner.as_str())
            }
            MatchResult::Tied | MatchResult::NoResult => None,
        }
    }

    /// Result line without the team name, e.g. "won by 7 wickets" or "Match tied".
    pub fn description(&self) -> String {
        match self {
            MatchResult::WonByWickets { wickets, .. } => {
                format!("won by {} {}", wickets, plural(*wickets, "wicket"))
            }
            MatchResult::WonByRuns { runs, .. } => format!("won by {} {}", runs, plural(*runs, "run")),
            MatchResult::Tied => "Match tied".to_string(),
            MatchResult::NoResult => "No result".to_string(),
        }
    }
}

fn plural(n: u32, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(winner) => write!(f, "{} {}", winner, self.description()),
            None => f.write_str(&self.description()),
        }
    }
}

/// A limited-overs match between two teams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub team_1: String,
    pub team_2: String,
    pub overs_per_innings: u32,
    /// Players per side.
    pub total_players: u32,
    pub toss: Option<Toss>,
    pub status: MatchStatus,
    /// Innings in batting order; the second is created only once the first is complete.
    pub innings: Vec<Innings>,
    /// Set together with `result`, once.
    pub winner: Option<String>,
    pub result: Option<MatchResult>,
    pub match_date: DateTime<Utc>,
}

impl Match {
    /// Create a match that has not started. Team names must be non-empty and distinct.
    pub fn new(
        team_1: impl Into<String>,
        team_2: impl Into<String>,
        overs_per_innings: u32,
        total_players: u32,
    ) -> Result<Self, MatchError> {
        let team_1 = team_1.into().trim().to_string();
        let team_2 = team_2.into().trim().to_string();
        if team_1.is_empty() || team_2.is_empty() {
            return Err(MatchError::InvalidSetup("team names must not be empty".into()));
        }
        if team_1.eq_ignore_ascii_case(&team_2) {
            return Err(MatchError::InvalidSetup("teams must be different".into()));
        }
        if overs_per_innings == 0 {
            return Err(MatchError::InvalidSetup("overs per innings must be at least 1".into()));
        }
        if overs_per_innings > MAX_OVERS_PER_INNINGS {
            return Err(MatchError::InvalidSetup(format!(
                "overs per innings must be at most {MAX_OVERS_PER_INNINGS}"
            )));
        }
        if total_players < 2 {
            return Err(MatchError::InvalidSetup("need at least 2 players per side".into()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            team_1,
            team_2,
            overs_per_innings,
            total_players,
            toss: None,
            status: MatchStatus::NotStarted,
            innings: Vec::new(),
            winner: None,
            result: None,
            match_date: Utc::now(),
        })
    }

    /// Stored spelling of a team name, matched case-insensitively.
    pub fn canonical_team(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        [&self.team_1, &self.team_2]
            .into_iter()
            .find(|t| t.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    /// The opponent of `team`, if `team` is playing.
    pub fn other_team(&self, team: &str) -> Option<&str> {
        let team = self.canonical_team(team)?;
        if team == self.team_1 {
            Some(self.team_2.as_str())
        } else {
            Some(self.team_1.as_str())
        }
    }

    /// Innings currently being played (or the last one, once finished).
    pub fn current_innings(&self) -> Option<&Innings> {
        self.innings.last()
    }

    /// Innings by number (1 or 2).
    pub fn innings(&self, number: u8) -> Option<&Innings> {
        self.innings.iter().find(|i| i.innings_number == number)
    }

    pub fn is_complete(&self) -> bool {
        self.status == MatchStatus::Completed
    }
}
