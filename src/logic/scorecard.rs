//! Innings scorecards: batting and bowling cards built from ball events.

use crate::models::{BallEvent, DismissalKind, ExtraKind, Innings, InningsEnd, Overs};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BattingEntry {
    pub batsman: String,
    pub runs: u32,
    pub balls: u32,
    /// None while not out.
    pub dismissal: Option<DismissalKind>,
    /// Bowler credited with the wicket, when they are.
    pub bowler: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BowlingEntry {
    pub bowler: String,
    pub overs: Overs,
    pub maidens: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub wides: u32,
    pub no_balls: u32,
}

/// Extras split by kind (runs, not deliveries).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ExtrasBreakdown {
    pub wides: u32,
    pub no_balls: u32,
    pub byes: u32,
    pub leg_byes: u32,
}

impl ExtrasBreakdown {
    pub fn total(&self) -> u32 {
        self.wides + self.no_balls + self.byes + self.leg_byes
    }
}

/// Everything a scoreboard shows for one innings. Batsmen and bowlers in order of appearance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub innings_number: u8,
    pub batting_team: String,
    pub bowling_team: String,
    pub total_runs: u32,
    pub wickets: u32,
    pub overs: Overs,
    pub run_rate: f64,
    pub end: Option<InningsEnd>,
    pub extras: ExtrasBreakdown,
    pub batting: Vec<BattingEntry>,
    pub bowling: Vec<BowlingEntry>,
}

pub fn build_scorecard(innings: &Innings) -> Scorecard {
    let mut batting: Vec<BattingEntry> = Vec::new();
    let mut bowling: Vec<BowlingEntry> = Vec::new();
    let mut extras = ExtrasBreakdown::default();
    // (bowler index, over) -> (legal balls, runs conceded)
    let mut overs_by_bowler: BTreeMap<(usize, u32), (u32, u32)> = BTreeMap::new();

    for ball in &innings.events {
        let bat = entry_for(&mut batting, &ball.batsman, |name| BattingEntry {
            batsman: name.to_string(),
            ..BattingEntry::default()
        });
        batting[bat].runs += ball.batsman_runs();
        if ball.is_faced() {
            batting[bat].balls += 1;
        }
        if let Some(kind) = ball.dismissal {
            batting[bat].dismissal = Some(kind);
            batting[bat].bowler = kind.credited_to_bowler().then(|| ball.bowler.clone());
        }

        let bowl = entry_for(&mut bowling, &ball.bowler, |name| BowlingEntry {
            bowler: name.to_string(),
            ..BowlingEntry::default()
        });
        add_to_bowling(&mut bowling[bowl], ball);
        let over = overs_by_bowler.entry((bowl, ball.over_number)).or_default();
        if ball.is_legal() {
            over.0 += 1;
        }
        over.1 += ball.runs_conceded();

        add_to_extras(&mut extras, ball);
    }

    for ((bowl, _), (legal, conceded)) in overs_by_bowler {
        if legal == crate::models::BALLS_PER_OVER && conceded == 0 {
            bowling[bowl].maidens += 1;
        }
    }

    Scorecard {
        innings_number: innings.innings_number,
        batting_team: innings.batting_team.clone(),
        bowling_team: innings.bowling_team.clone(),
        total_runs: innings.total_runs,
        wickets: innings.wickets,
        overs: innings.overs(),
        run_rate: innings.run_rate(),
        end: innings.end,
        extras,
        batting,
        bowling,
    }
}

/// Index of the entry named `name`, appending a fresh one the first time it is seen.
fn entry_for<T>(entries: &mut Vec<T>, name: &str, make: impl FnOnce(&str) -> T) -> usize
where
    T: Named,
{
    match entries.iter().position(|e| e.name() == name) {
        Some(i) => i,
        None => {
            entries.push(make(name));
            entries.len() - 1
        }
    }
}

trait Named {
    fn name(&self) -> &str;
}

impl Named for BattingEntry {
    fn name(&self) -> &str {
        &self.batsman
    }
}

impl Named for BowlingEntry {
    fn name(&self) -> &str {
        &self.bowler
    }
}

fn add_to_bowling(entry: &mut BowlingEntry, ball: &BallEvent) {
    if ball.is_legal() {
        entry.overs = Overs::from_balls(entry.overs.legal_balls() + 1);
    }
    entry.runs_conceded += ball.runs_conceded();
    if ball.is_bowler_wicket() {
        entry.wickets += 1;
    }
    match ball.extra {
        Some(ExtraKind::Wide) => entry.wides += 1,
        Some(ExtraKind::NoBall) => entry.no_balls += 1,
        _ => {}
    }
}

fn add_to_extras(extras: &mut ExtrasBreakdown, ball: &BallEvent) {
    let runs = ball.extra_runs();
    match ball.extra {
        Some(ExtraKind::Wide) => extras.wides += runs,
        Some(ExtraKind::NoBall) => extras.no_balls += runs,
        Some(ExtraKind::Bye) => extras.byes += runs,
        Some(ExtraKind::LegBye) => extras.leg_byes += runs,
        None => {}
    }
}
