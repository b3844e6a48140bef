//! Replay a ball-by-ball CSV through the scoring engine and print the result as JSON.
//! Run with: cargo run --bin scorecard -- balls.csv "Team A" "Team B" [overs] [players]
//! CSV header: over_number,ball_number,batsman,bowler,runs,extra,dismissal
//! (extra: wide|no_ball|bye|leg_bye, dismissal: bowled|caught|lbw|run_out|... ; blank for none).
//! Team A wins the toss and bats. Override defaults with env: OVERS (20), PLAYERS (11).

use cricket_scoreboard::{
    build_scorecard, players_in, recompute_career, record_ball, record_toss, BallEvent, Match,
    MatchStatus, PlayerCareerStats, Scorecard, TossDecision,
};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct Report<'a> {
    team_1: &'a str,
    team_2: &'a str,
    status: MatchStatus,
    result: Option<String>,
    scorecards: Vec<Scorecard>,
    careers: Vec<PlayerCareerStats>,
}

fn default_overs() -> u32 {
    20
}

fn default_players() -> u32 {
    11
}

fn arg_or_env(arg: Option<&String>, key: &str, default: fn() -> u32) -> u32 {
    arg.cloned()
        .or_else(|| std::env::var(key).ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_else(default)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, team_1, team_2) = match args.as_slice() {
        [path, team_1, team_2, ..] => (path, team_1, team_2),
        _ => {
            return Err("usage: scorecard <balls.csv> <team_1> <team_2> [overs] [players]".into());
        }
    };
    let overs = arg_or_env(args.get(3), "OVERS", default_overs);
    let players = arg_or_env(args.get(4), "PLAYERS", default_players);

    let mut m = Match::new(team_1.as_str(), team_2.as_str(), overs, players)?;
    record_toss(&mut m, team_1, TossDecision::Bat)?;

    let mut reader = csv::Reader::from_path(path)?;
    let mut applied = 0usize;
    for (line, row) in reader.deserialize::<BallEvent>().enumerate() {
        let ball = row?;
        if m.status.is_finished() {
            log::warn!("Match ended before row {}; ignoring the rest of the file", line + 2);
            break;
        }
        if let Err(e) = record_ball(&mut m, ball) {
            // Line numbers are 1-based and skip the header.
            return Err(format!("row {}: {}", line + 2, e).into());
        }
        applied += 1;
    }
    log::info!("Applied {} ball(s); match is {}", applied, m.status);

    let completed = std::slice::from_ref(&m);
    let report = Report {
        team_1: &m.team_1,
        team_2: &m.team_2,
        status: m.status,
        result: m.result.as_ref().map(ToString::to_string),
        scorecards: m.innings.iter().map(build_scorecard).collect(),
        careers: players_in(completed)
            .iter()
            .map(|p| recompute_career(p, completed))
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
