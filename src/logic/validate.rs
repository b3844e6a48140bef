//! Ball validation: reject events that must not touch the innings.

use crate::error::InvalidEventError;
use crate::models::{BallEvent, Innings, BALLS_PER_OVER};

/// Check `event` against the current innings. Pure; the caller applies it on success.
///
/// 1. The innings must still be open.
/// 2. Ball number must be 1-6.
/// 3. The event must sit in the innings' next slot. Earlier slots would rewrite history
///    (corrections go through a replay, not this path); later ones would skip balls.
///    Wides and no-balls occupy the slot without using it up.
/// 4. A wicket must leave at least one batsman not out, and must be possible off the extra.
pub fn validate_ball(innings: &Innings, event: &BallEvent) -> Result<(), InvalidEventError> {
    if innings.is_complete() {
        return Err(InvalidEventError::InningsClosed {
            innings_number: innings.innings_number,
        });
    }

    if event.ball_number == 0 || u32::from(event.ball_number) > BALLS_PER_OVER {
        return Err(InvalidEventError::BallNumberOutOfRange(event.ball_number));
    }

    let expected = innings.next_position();
    let found = event.position();
    if found != expected {
        return Err(InvalidEventError::OutOfSequence { expected, found });
    }

    if let Some(kind) = event.dismissal {
        if innings.wickets >= innings.max_wickets() {
            return Err(InvalidEventError::WicketOverflow {
                max: innings.max_wickets(),
            });
        }
        if let Some(extra) = event.extra {
            if !kind.possible_off(extra) {
                return Err(InvalidEventError::DismissalNotPossible { kind, extra });
            }
        }
    }

    Ok(())
}
