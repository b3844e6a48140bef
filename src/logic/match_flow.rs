//! Match state machine: toss, innings changeover, result.
//!
//! not_started -> first_innings -> second_innings -> completed, with abandoned reachable from
//! any unfinished state when the host calls the match off.

use crate::error::{IllegalTransitionError, MatchError};
use crate::logic::accumulate::append_ball;
use crate::models::{
    BallEvent, Innings, Match, MatchResult, MatchStatus, Toss, TossDecision,
};

/// Record the toss and open the first innings (not_started -> first_innings).
pub fn record_toss(
    m: &mut Match,
    winner: &str,
    decision: TossDecision,
) -> Result<(), MatchError> {
    if m.status != MatchStatus::NotStarted {
        return Err(IllegalTransitionError {
            from: m.status,
            action: "record the toss",
        }
        .into());
    }
    let winner = m
        .canonical_team(winner)
        .ok_or_else(|| MatchError::UnknownTeam(winner.to_string()))?
        .to_string();
    let loser = m
        .other_team(&winner)
        .ok_or_else(|| MatchError::UnknownTeam(winner.clone()))?
        .to_string();
    let (batting, bowling) = match decision {
        TossDecision::Bat => (winner.clone(), loser),
        TossDecision::Bowl => (loser, winner.clone()),
    };

    log::info!(
        "Match {}: {} won the toss and chose to {:?}; {} bat first",
        m.id,
        winner,
        decision,
        batting
    );
    m.innings = vec![Innings::first(
        batting,
        bowling,
        m.overs_per_innings,
        m.total_players,
    )];
    m.toss = Some(Toss { winner, decision });
    m.status = MatchStatus::FirstInnings;
    Ok(())
}

/// Apply a ball to the innings in progress and advance the match when that innings closes.
/// Returns the match status after the ball. On error the match is unchanged.
pub fn record_ball(m: &mut Match, event: BallEvent) -> Result<MatchStatus, MatchError> {
    if matches!(m.status, MatchStatus::NotStarted | MatchStatus::Abandoned) {
        return Err(IllegalTransitionError {
            from: m.status,
            action: "record a ball",
        }
        .into());
    }
    let from = m.status;
    let current = m.innings.last_mut().ok_or(IllegalTransitionError {
        from,
        action: "record a ball",
    })?;
    append_ball(current, event)?;
    let closed = current.is_complete();
    let number = current.innings_number;

    if closed {
        match number {
            1 => start_second_innings(m)?,
            _ => complete_match(m)?,
        }
    }
    Ok(m.status)
}

/// Open the chasing innings with batting and bowling swapped (first_innings -> second_innings).
/// Only valid once the first innings is complete.
pub fn start_second_innings(m: &mut Match) -> Result<(), MatchError> {
    let illegal = IllegalTransitionError {
        from: m.status,
        action: "start the second innings",
    };
    if m.status != MatchStatus::FirstInnings || m.innings.len() != 1 {
        return Err(illegal.into());
    }
    let first = &m.innings[0];
    if !first.is_complete() {
        return Err(illegal.into());
    }

    let chase = Innings::chase(
        first.bowling_team.clone(),
        first.batting_team.clone(),
        m.overs_per_innings,
        m.total_players,
        first.total_runs,
    );
    log::info!(
        "Match {}: {} need {} to win",
        m.id,
        chase.batting_team,
        first.total_runs + 1
    );
    m.innings.push(chase);
    m.status = MatchStatus::SecondInnings;
    Ok(())
}

/// Close the match once the second innings is complete (second_innings -> completed).
/// Winner and result are set here and nowhere else.
fn complete_match(m: &mut Match) -> Result<(), MatchError> {
    let illegal = IllegalTransitionError {
        from: m.status,
        action: "complete the match",
    };
    if m.status != MatchStatus::SecondInnings || m.result.is_some() {
        return Err(illegal.into());
    }
    let (first, second) = match m.innings.as_slice() {
        [first, second] if second.is_complete() => (first, second),
        _ => return Err(illegal.into()),
    };

    let result = decide_result(first, second);
    log::info!("Match {} completed: {}", m.id, result);
    m.winner = result.winner().map(str::to_string);
    m.result = Some(result);
    m.status = MatchStatus::Completed;
    Ok(())
}

/// Result of a match from its two completed innings.
///
/// A chase that passes the total wins by the wickets left in hand; one that falls short loses
/// by the run difference; equal totals are a tie.
pub fn decide_result(first: &Innings, second: &Innings) -> MatchResult {
    if second.total_runs > first.total_runs {
        MatchResult::WonByWickets {
            winner: second.batting_team.clone(),
            wickets: second.max_wickets().saturating_sub(second.wickets),
        }
    } else if second.total_runs < first.total_runs {
        MatchResult::WonByRuns {
            winner: first.batting_team.clone(),
            runs: first.total_runs - second.total_runs,
        }
    } else {
        MatchResult::Tied
    }
}

/// Call off an unfinished match; it ends with no result.
pub fn abandon_match(m: &mut Match) -> Result<(), MatchError> {
    if m.status.is_finished() {
        return Err(IllegalTransitionError {
            from: m.status,
            action: "abandon the match",
        }
        .into());
    }
    log::info!("Match {} abandoned during {}", m.id, m.status);
    m.winner = None;
    m.result = Some(MatchResult::NoResult);
    m.status = MatchStatus::Abandoned;
    Ok(())
}
