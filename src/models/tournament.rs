//! Tournament, TournamentMatch (fixtures) and TournamentStanding.

use crate::models::game::{Match, MatchId, MatchResult, MatchStatus};
use crate::models::overs::Overs;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    #[error("Not all fixtures have a result")]
    IncompleteResults,
    #[error("Need at least {required} teams")]
    NotEnoughTeams { required: usize },
    #[error("Invalid state for this action")]
    InvalidState,
    #[error("A team with this name already exists")]
    DuplicateTeamName,
    #[error("Team name must not be empty")]
    EmptyTeamName,
    #[error("Team {0} is not in this tournament")]
    UnknownTeam(String),
    #[error("Fixture not found")]
    FixtureNotFound(Uuid),
    #[error("Fixture already has a result")]
    AlreadyRecorded,
    #[error("Match has not finished")]
    MatchNotFinished,
    #[error("Match teams do not match the fixture")]
    TeamsMismatch,
    #[error("Knockout rounds need an even number of teams (got {0})")]
    OddNumberOfTeams(usize),
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    #[default]
    RoundRobin,
    Knockout,
}

/// A side's final score in a fixture. `overs` serialises in scoreboard notation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamScore {
    pub runs: u32,
    pub wickets: u32,
    pub overs: Overs,
}

impl TeamScore {
    pub fn new(runs: u32, wickets: u32, overs: Overs) -> Self {
        Self { runs, wickets, overs }
    }
}

/// How a completed fixture ended.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FixtureOutcome {
    Won { winner: String },
    Tied,
    NoResult,
}

/// A scheduled or played fixture between two tournament teams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentMatch {
    pub id: Uuid,
    pub tournament_id: TournamentId,
    /// Linked match once one has been played.
    pub match_id: Option<MatchId>,
    pub team_1: String,
    pub team_2: String,
    /// Knockout round (1-based); 0 for round-robin fixtures.
    pub round: u32,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub is_complete: bool,
    pub outcome: Option<FixtureOutcome>,
    pub team_1_score: TeamScore,
    pub team_2_score: TeamScore,
    /// Winner decided after a tie or no-result (super over, replay, toss).
    #[serde(default)]
    pub settled_by_tiebreak: bool,
}

impl TournamentMatch {
    pub fn new(
        tournament_id: TournamentId,
        team_1: impl Into<String>,
        team_2: impl Into<String>,
        round: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            match_id: None,
            team_1: team_1.into(),
            team_2: team_2.into(),
            round,
            scheduled_date: None,
            is_complete: false,
            outcome: None,
            team_1_score: TeamScore::default(),
            team_2_score: TeamScore::default(),
            settled_by_tiebreak: false,
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.team_1 == team || self.team_2 == team
    }

    /// Winning team, if the fixture was won.
    pub fn winner(&self) -> Option<&str> {
        match &self.outcome {
            Some(FixtureOutcome::Won { winner }) => Some(winner.as_str()),
            _ => None,
        }
    }

    /// Team that lost, if the fixture was won.
    pub fn loser(&self) -> Option<&str> {
        let winner = self.winner()?;
        if winner == self.team_1 {
            Some(self.team_2.as_str())
        } else {
            Some(self.team_1.as_str())
        }
    }

    /// Record an externally known result. Only once per fixture.
    pub fn complete_with(
        &mut self,
        outcome: FixtureOutcome,
        team_1_score: TeamScore,
        team_2_score: TeamScore,
    ) -> Result<(), TournamentError> {
        if self.is_complete {
            return Err(TournamentError::AlreadyRecorded);
        }
        if let FixtureOutcome::Won { winner } = &outcome {
            if !self.involves(winner) {
                return Err(TournamentError::UnknownTeam(winner.clone()));
            }
        }
        self.outcome = Some(outcome);
        self.team_1_score = team_1_score;
        self.team_2_score = team_2_score;
        self.is_complete = true;
        Ok(())
    }

    /// Name the winner of a tied or no-result fixture. Scores stay as played.
    pub fn settle_tie(&mut self, winner: &str) -> Result<(), TournamentError> {
        if !self.is_complete {
            return Err(TournamentError::MatchNotFinished);
        }
        if self.winner().is_some() {
            return Err(TournamentError::AlreadyRecorded);
        }
        let winner = [&self.team_1, &self.team_2]
            .into_iter()
            .find(|t| t.eq_ignore_ascii_case(winner.trim()))
            .cloned()
            .ok_or_else(|| TournamentError::UnknownTeam(winner.to_string()))?;
        self.outcome = Some(FixtureOutcome::Won { winner });
        self.settled_by_tiebreak = true;
        Ok(())
    }

    /// Copy the result and both scores of a finished match into this fixture.
    pub fn record_match(&mut self, m: &Match) -> Result<(), TournamentError> {
        if !m.status.is_finished() {
            return Err(TournamentError::MatchNotFinished);
        }
        let same_teams = (m.team_1.eq_ignore_ascii_case(&self.team_1)
            && m.team_2.eq_ignore_ascii_case(&self.team_2))
            || (m.team_1.eq_ignore_ascii_case(&self.team_2)
                && m.team_2.eq_ignore_ascii_case(&self.team_1));
        if !same_teams {
            return Err(TournamentError::TeamsMismatch);
        }

        let score_of = |team: &str| {
            m.innings
                .iter()
                .find(|i| i.batting_team.eq_ignore_ascii_case(team))
                .map(|i| TeamScore::new(i.total_runs, i.wickets, i.overs()))
                .unwrap_or_default()
        };
        let outcome = match &m.result {
            Some(MatchResult::Tied) => FixtureOutcome::Tied,
            Some(MatchResult::NoResult) | None => FixtureOutcome::NoResult,
            Some(result) => match result.winner() {
                Some(w) if w.eq_ignore_ascii_case(&self.team_1) => FixtureOutcome::Won {
                    winner: self.team_1.clone(),
                },
                Some(_) => FixtureOutcome::Won {
                    winner: self.team_2.clone(),
                },
                None => FixtureOutcome::NoResult,
            },
        };
        let (s1, s2) = (score_of(&self.team_1), score_of(&self.team_2));
        self.complete_with(outcome, s1, s2)?;
        self.match_id = Some(m.id);
        if m.status == MatchStatus::Abandoned {
            log::info!("Fixture {} recorded as no result (match {} abandoned)", self.id, m.id);
        }
        Ok(())
    }
}

/// One team's row in the table. Derived, never edited by hand.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentStanding {
    pub tournament_id: TournamentId,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub no_result: u32,
    pub points: u32,
    pub net_run_rate: f64,
    pub runs_for: u32,
    /// Legal balls faced in fixtures that count for net run rate.
    pub balls_faced: u32,
    pub runs_against: u32,
    pub balls_bowled: u32,
}

/// A tournament: teams plus fixtures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub format: TournamentFormat,
    pub teams: Vec<String>,
    pub fixtures: Vec<TournamentMatch>,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a tournament with no teams.
    pub fn new(name: impl Into<String>, format: TournamentFormat) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            teams: Vec::new(),
            fixtures: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a tournament and add each team in order.
    pub fn with_teams<I, S>(
        name: impl Into<String>,
        format: TournamentFormat,
        teams: I,
    ) -> Result<Self, TournamentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut t = Self::new(name, format);
        for team in teams {
            t.add_team(team)?;
        }
        Ok(t)
    }

    /// Add a team before any fixture exists. Names are unique (case-insensitive).
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<(), TournamentError> {
        if !self.fixtures.is_empty() {
            return Err(TournamentError::InvalidState);
        }
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyTeamName);
        }
        if self.canonical_team(name).is_some() {
            return Err(TournamentError::DuplicateTeamName);
        }
        self.teams.push(name.to_string());
        Ok(())
    }

    /// Remove a team before any fixture exists.
    pub fn remove_team(&mut self, name: &str) -> Result<(), TournamentError> {
        if !self.fixtures.is_empty() {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .teams
            .iter()
            .position(|t| t.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| TournamentError::UnknownTeam(name.to_string()))?;
        self.teams.remove(idx);
        Ok(())
    }

    /// Stored spelling of a team name, matched case-insensitively.
    pub fn canonical_team(&self, name: &str) -> Option<&str> {
        self.teams
            .iter()
            .find(|t| t.eq_ignore_ascii_case(name.trim()))
            .map(String::as_str)
    }

    pub fn fixture_mut(&mut self, fixture_id: Uuid) -> Option<&mut TournamentMatch> {
        self.fixtures.iter_mut().find(|f| f.id == fixture_id)
    }

    /// Fixtures with a recorded result.
    pub fn completed_fixtures(&self) -> impl Iterator<Item = &TournamentMatch> {
        self.fixtures.iter().filter(|f| f.is_complete)
    }

    /// Settle a tied knockout fixture so the bracket can move on.
    pub fn settle_knockout_tie(&mut self, fixture_id: Uuid, winner: &str) -> Result<(), TournamentError> {
        if self.format != TournamentFormat::Knockout {
            return Err(TournamentError::InvalidState);
        }
        self.fixture_mut(fixture_id)
            .ok_or(TournamentError::FixtureNotFound(fixture_id))?
            .settle_tie(winner)?;
        log::info!("Tournament {}: fixture {} settled for {}", self.id, fixture_id, winner.trim());
        Ok(())
    }

    /// Attach a finished match to one of this tournament's fixtures.
    pub fn record_match_result(&mut self, fixture_id: Uuid, m: &Match) -> Result<(), TournamentError> {
        self.fixture_mut(fixture_id)
            .ok_or(TournamentError::FixtureNotFound(fixture_id))?
            .record_match(m)
    }
}
