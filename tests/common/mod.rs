//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use cricket_scoreboard::{
    record_ball, record_toss, replay_innings, BallEvent, DismissalKind, Innings, Match,
    MatchStatus, TossDecision,
};

/// Match with Lions batting first.
pub fn started_match(overs: u32, players: u32) -> Match {
    let mut m = Match::new("Lions", "Tigers", overs, players).unwrap();
    record_toss(&mut m, "Lions", TossDecision::Bat).unwrap();
    m
}

/// A legal ball in the next slot of the innings in progress.
pub fn next_ball(m: &Match, batsman: &str, bowler: &str, runs: u32) -> BallEvent {
    let p = m.current_innings().unwrap().next_position();
    BallEvent::new(p.over, p.ball, batsman, bowler, runs)
}

pub fn bowl(m: &mut Match, batsman: &str, bowler: &str, runs: u32) -> MatchStatus {
    let ball = next_ball(m, batsman, bowler, runs);
    record_ball(m, ball).unwrap()
}

pub fn bowl_wicket(m: &mut Match, batsman: &str, bowler: &str, kind: DismissalKind) -> MatchStatus {
    let ball = next_ball(m, batsman, bowler, 0).with_dismissal(kind);
    record_ball(m, ball).unwrap()
}

/// Give each event the slot it would occupy when recorded in order.
pub fn positioned(events: Vec<BallEvent>) -> Vec<BallEvent> {
    let mut legal = 0u32;
    events
        .into_iter()
        .map(|mut e| {
            e.over_number = legal / 6;
            e.ball_number = (legal % 6 + 1) as u8;
            if e.is_legal() {
                legal += 1;
            }
            e
        })
        .collect()
}

/// Legal balls from `batsman` adding up to `runs`, in sixes then the remainder.
pub fn scoring(batsman: &str, bowler: &str, runs: u32) -> Vec<BallEvent> {
    let mut balls: Vec<BallEvent> = (0..runs / 6)
        .map(|_| BallEvent::new(0, 1, batsman, bowler, 6))
        .collect();
    if runs % 6 > 0 {
        balls.push(BallEvent::new(0, 1, batsman, bowler, runs % 6));
    }
    balls
}

pub fn wicket(batsman: &str, bowler: &str, kind: DismissalKind) -> BallEvent {
    BallEvent::new(0, 1, batsman, bowler, 0).with_dismissal(kind)
}

/// Innings replayed from `events` (positions are filled in).
pub fn innings_of(batting: &str, bowling: &str, events: Vec<BallEvent>) -> Innings {
    replay_innings(Innings::first(batting, bowling, 50, 11), positioned(events)).unwrap()
}

/// A match marked completed holding the given innings, for aggregation tests.
pub fn completed_match(innings: Vec<Innings>) -> Match {
    let mut m = Match::new("Lions", "Tigers", 50, 11).unwrap();
    m.innings = innings;
    m.status = MatchStatus::Completed;
    m
}
