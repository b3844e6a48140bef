//! Cricket scoring engine: ball-by-ball innings, match results, player careers and
//! tournament standings, all derived from the ball event history.

pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod store;

pub use config::ScoringRules;
pub use error::{
    AggregationInconsistencyError, FieldMismatch, IllegalTransitionError, InvalidEventError,
    MatchError, OversNotationError,
};
pub use logic::{
    abandon_match, append_ball, apply_ball, batting_average, build_scorecard, compare_standings,
    decide_result, generate_knockout_round, generate_round_robin_fixtures, knockout_champion,
    knockout_survivors, net_run_rate, players_in, rank_standings, reconcile_career,
    reconcile_standings, recompute_career, recompute_standings, record_ball, record_toss,
    replay_innings, start_second_innings, tournament_standings, validate_ball, BattingEntry,
    BowlingEntry, ExtrasBreakdown, Scorecard,
};
pub use models::{
    BallEvent, BallPosition, BowlingFigures, DismissalKind, ExtraKind, FixtureOutcome, Innings,
    InningsEnd, Match, MatchId, MatchResult, MatchStatus, Overs, PlayerCareerStats, TeamScore,
    Toss, TossDecision, Tournament, TournamentError, TournamentFormat, TournamentId,
    TournamentMatch, TournamentStanding, BALLS_PER_OVER, MAX_OVERS_PER_INNINGS, PENALTY_RUNS,
};
pub use store::{MatchBook, StoreError};
