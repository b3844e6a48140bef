//! Scoring business logic: validation, innings, match flow, careers, standings, fixtures.

mod accumulate;
mod career;
mod fixtures;
mod match_flow;
mod reconcile;
mod scorecard;
mod standings;
mod validate;

pub use accumulate::{append_ball, apply_ball, replay_innings};
pub use career::{batting_average, players_in, recompute_career};
pub use fixtures::{
    generate_knockout_round, generate_round_robin_fixtures, knockout_champion, knockout_survivors,
};
pub use match_flow::{abandon_match, decide_result, record_ball, record_toss, start_second_innings};
pub use reconcile::{reconcile_career, reconcile_standings};
pub use scorecard::{build_scorecard, BattingEntry, BowlingEntry, ExtrasBreakdown, Scorecard};
pub use standings::{
    compare_standings, net_run_rate, rank_standings, recompute_standings, tournament_standings,
};
pub use validate::validate_ball;
