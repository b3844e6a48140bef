//! Innings accumulation: fold validated ball events into innings totals.

use crate::error::InvalidEventError;
use crate::logic::validate::validate_ball;
use crate::models::{BallEvent, Innings, InningsEnd};

/// Apply one ball to `innings`, returning the new state. `innings` itself is left untouched,
/// so a rejected event never leaves a half-applied innings behind.
pub fn apply_ball(innings: &Innings, event: BallEvent) -> Result<Innings, InvalidEventError> {
    validate_ball(innings, &event)?;
    let mut next = innings.clone();
    fold_ball(&mut next, event);
    Ok(next)
}

/// Validate `event` and add it to `innings` in place. On error `innings` is unchanged.
pub fn append_ball(innings: &mut Innings, event: BallEvent) -> Result<(), InvalidEventError> {
    validate_ball(innings, &event)?;
    fold_ball(innings, event);
    Ok(())
}

/// Rebuild an innings from its stored ball history, starting from an empty `innings`.
pub fn replay_innings<I>(innings: Innings, events: I) -> Result<Innings, InvalidEventError>
where
    I: IntoIterator<Item = BallEvent>,
{
    events.into_iter().try_fold(innings, |mut state, event| {
        append_ball(&mut state, event)?;
        Ok(state)
    })
}

/// Add an already validated ball to the totals and check for completion.
fn fold_ball(innings: &mut Innings, event: BallEvent) {
    innings.total_runs += event.total_runs();
    innings.extras += event.extra_runs();
    if event.is_legal() {
        innings.legal_balls += 1;
    }
    if event.is_wicket() {
        innings.wickets += 1;
    }
    innings.events.push(event);
    innings.end = completion(innings);

    if let Some(end) = innings.end {
        log::debug!(
            "Innings {} ({}) closed: {:?} at {}/{} in {} overs",
            innings.innings_number,
            innings.batting_team,
            end,
            innings.total_runs,
            innings.wickets,
            innings.overs()
        );
    }
}

/// Checked after every ball. A successful chase ends the innings on the ball it happens,
/// even mid-over.
fn completion(innings: &Innings) -> Option<InningsEnd> {
    if innings
        .first_innings_total
        .map_or(false, |first| innings.total_runs > first)
    {
        return Some(InningsEnd::TargetReached);
    }
    if innings.wickets >= innings.max_wickets() {
        return Some(InningsEnd::AllOut);
    }
    if innings.legal_balls >= innings.max_legal_balls() {
        return Some(InningsEnd::OversExhausted);
    }
    None
}
