//! Tournament standings: points table and net run rate.

use crate::config::ScoringRules;
use crate::models::{
    FixtureOutcome, Overs, TeamScore, Tournament, TournamentId, TournamentMatch, TournamentStanding,
};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Rebuild the table for `tournament_id` from its fixtures: one row per listed team, ranked.
///
/// Only complete fixtures of this tournament between two listed teams count. Net run rate uses
/// true fractional overs and skips no-result fixtures. Recomputes from zero on every call.
pub fn recompute_standings(
    tournament_id: TournamentId,
    teams: &[String],
    fixtures: &[TournamentMatch],
    rules: &ScoringRules,
) -> Vec<TournamentStanding> {
    let mut rows: Vec<TournamentStanding> = teams
        .iter()
        .map(|team| TournamentStanding {
            tournament_id,
            team_name: team.clone(),
            ..TournamentStanding::default()
        })
        .collect();
    let index: HashMap<&str, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, t)| (t.as_str(), i))
        .collect();

    for f in fixtures
        .iter()
        .filter(|f| f.tournament_id == tournament_id && f.is_complete)
    {
        let (Some(&i1), Some(&i2)) = (index.get(f.team_1.as_str()), index.get(f.team_2.as_str()))
        else {
            log::warn!(
                "Skipping fixture {} ({} v {}): team not in tournament {}",
                f.id,
                f.team_1,
                f.team_2,
                tournament_id
            );
            continue;
        };
        let Some(outcome) = &f.outcome else {
            continue;
        };

        for i in [i1, i2] {
            rows[i].played += 1;
        }
        match outcome {
            FixtureOutcome::Won { winner } => {
                let (w, l) = if *winner == f.team_1 { (i1, i2) } else { (i2, i1) };
                rows[w].won += 1;
                rows[l].lost += 1;
            }
            FixtureOutcome::Tied => {
                rows[i1].tied += 1;
                rows[i2].tied += 1;
            }
            FixtureOutcome::NoResult => {
                rows[i1].no_result += 1;
                rows[i2].no_result += 1;
                continue;
            }
        }
        add_run_rate_totals(&mut rows[i1], &f.team_1_score, &f.team_2_score);
        add_run_rate_totals(&mut rows[i2], &f.team_2_score, &f.team_1_score);
    }

    for row in &mut rows {
        row.points = rules.points(row.won, row.tied, row.no_result);
        row.net_run_rate = net_run_rate(row.runs_for, row.balls_faced, row.runs_against, row.balls_bowled);
    }
    rank_standings(&mut rows);
    rows
}

/// Standings for a tournament's own teams and fixtures.
pub fn tournament_standings(tournament: &Tournament, rules: &ScoringRules) -> Vec<TournamentStanding> {
    recompute_standings(tournament.id, &tournament.teams, &tournament.fixtures, rules)
}

fn add_run_rate_totals(row: &mut TournamentStanding, batting: &TeamScore, bowling: &TeamScore) {
    row.runs_for += batting.runs;
    row.balls_faced += batting.overs.legal_balls();
    row.runs_against += bowling.runs;
    row.balls_bowled += bowling.overs.legal_balls();
}

/// Runs per over scored minus runs per over conceded, with overs as legal balls / 6.
pub fn net_run_rate(runs_for: u32, balls_faced: u32, runs_against: u32, balls_bowled: u32) -> f64 {
    Overs::from_balls(balls_faced).run_rate(runs_for)
        - Overs::from_balls(balls_bowled).run_rate(runs_against)
}

/// Table order: points, then net run rate (both descending), then team name.
pub fn compare_standings(a: &TournamentStanding, b: &TournamentStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.net_run_rate.total_cmp(&a.net_run_rate))
        .then_with(|| a.team_name.cmp(&b.team_name))
}

pub fn rank_standings(rows: &mut [TournamentStanding]) {
    rows.sort_by(compare_standings);
}
