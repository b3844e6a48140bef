//! Data structures for cricket scoring: balls, innings, matches, careers, tournaments.

mod ball;
mod game;
mod innings;
mod overs;
mod player;
mod tournament;

pub use ball::{BallEvent, BallPosition, DismissalKind, ExtraKind, BALLS_PER_OVER, PENALTY_RUNS};
pub use game::{Match, MatchId, MAX_OVERS_PER_INNINGS, MatchResult, MatchStatus, Toss, TossDecision};
pub use innings::{Innings, InningsEnd};
pub use overs::Overs;
pub use player::{BowlingFigures, PlayerCareerStats};
pub use tournament::{
    FixtureOutcome, TeamScore, Tournament, TournamentError, TournamentFormat, TournamentId,
    TournamentMatch, TournamentStanding,
};
