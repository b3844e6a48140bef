//! Player career statistics, recomputed from ball history.

use crate::models::{BallEvent, BowlingFigures, Innings, Match, MatchStatus, Overs, PlayerCareerStats};
use std::collections::HashSet;

const CENTURY: u32 = 100;
const HALF_CENTURY: u32 = 50;
const FIVE_WICKETS: u32 = 5;

/// What one player did in one innings.
#[derive(Default)]
struct InningsContribution {
    batted: bool,
    runs: u32,
    balls_faced: u32,
    out: bool,
    bowled: bool,
    figures: BowlingFigures,
    balls_bowled: u32,
}

impl InningsContribution {
    fn collect(player: &str, innings: &Innings) -> Self {
        let mut c = Self::default();
        for ball in &innings.events {
            if ball.batsman == player {
                c.add_batting(ball);
            }
            if ball.bowler == player {
                c.add_bowling(ball);
            }
        }
        c
    }

    fn add_batting(&mut self, ball: &BallEvent) {
        self.batted = true;
        self.runs += ball.batsman_runs();
        if ball.is_faced() {
            self.balls_faced += 1;
        }
        if ball.is_wicket() {
            self.out = true;
        }
    }

    fn add_bowling(&mut self, ball: &BallEvent) {
        self.bowled = true;
        self.figures.runs += ball.runs_conceded();
        if ball.is_legal() {
            self.balls_bowled += 1;
        }
        if ball.is_bowler_wicket() {
            self.figures.wickets += 1;
        }
    }
}

/// Rebuild `player`'s career from the given matches. Only completed matches count.
///
/// Always starts from zero, so running it twice over the same matches gives identical output.
/// Players are matched by exact name. A match listed more than once counts once.
pub fn recompute_career(player: &str, matches: &[Match]) -> PlayerCareerStats {
    let mut stats = PlayerCareerStats::empty(player);
    let mut seen = HashSet::new();

    for m in matches
        .iter()
        .filter(|m| m.status == MatchStatus::Completed && seen.insert(m.id))
    {
        let mut appeared = false;
        for innings in &m.innings {
            let c = InningsContribution::collect(player, innings);
            if c.batted {
                add_batting_innings(&mut stats, &c);
            }
            if c.bowled {
                add_bowling_innings(&mut stats, &c);
            }
            appeared |= c.batted || c.bowled;
        }
        if appeared {
            stats.matches_played += 1;
        }
    }

    stats.batting_average = batting_average(stats.total_runs, stats.times_out);
    stats.strike_rate = if stats.balls_faced == 0 {
        0.0
    } else {
        stats.total_runs as f64 * 100.0 / stats.balls_faced as f64
    };
    stats.bowling_average = (stats.total_wickets > 0)
        .then(|| stats.runs_conceded as f64 / stats.total_wickets as f64);
    stats.economy = (stats.balls_bowled > 0)
        .then(|| Overs::from_balls(stats.balls_bowled).run_rate(stats.runs_conceded));
    stats
}

/// Runs per dismissal. A player never dismissed averages their total runs.
pub fn batting_average(total_runs: u32, times_out: u32) -> f64 {
    if times_out == 0 {
        total_runs as f64
    } else {
        total_runs as f64 / times_out as f64
    }
}

fn add_batting_innings(stats: &mut PlayerCareerStats, c: &InningsContribution) {
    stats.innings_batted += 1;
    stats.total_runs += c.runs;
    stats.balls_faced += c.balls_faced;
    if c.out {
        stats.times_out += 1;
    } else {
        stats.not_outs += 1;
    }
    stats.highest_score = stats.highest_score.max(c.runs);
    if c.runs >= CENTURY {
        stats.centuries += 1;
    } else if c.runs >= HALF_CENTURY {
        stats.half_centuries += 1;
    }
}

fn add_bowling_innings(stats: &mut PlayerCareerStats, c: &InningsContribution) {
    stats.innings_bowled += 1;
    stats.balls_bowled += c.balls_bowled;
    stats.runs_conceded += c.figures.runs;
    stats.total_wickets += c.figures.wickets;
    if c.figures.wickets >= FIVE_WICKETS {
        stats.five_wicket_hauls += 1;
    }
    let improves = stats
        .best_bowling
        .map_or(true, |best| c.figures.is_better_than(&best));
    if improves {
        stats.best_bowling = Some(c.figures);
    }
}

/// Every player named as batsman or bowler in the completed matches, sorted by name.
pub fn players_in(matches: &[Match]) -> Vec<String> {
    let mut names: Vec<String> = matches
        .iter()
        .filter(|m| m.status == MatchStatus::Completed)
        .flat_map(|m| m.innings.iter())
        .flat_map(|i| i.events.iter())
        .flat_map(|b| [b.batsman.clone(), b.bowler.clone()])
        .collect();
    names.sort();
    names.dedup();
    names
}
