//! Errors returned by the scoring engine.

use crate::models::{BallPosition, DismissalKind, ExtraKind, MatchStatus};
use thiserror::Error;

/// A ball event that cannot be applied to the innings. Nothing is mutated when this is returned.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InvalidEventError {
    #[error("innings {innings_number} is already complete")]
    InningsClosed { innings_number: u8 },

    #[error("ball {found} is out of sequence (next delivery is {expected})")]
    OutOfSequence {
        expected: BallPosition,
        found: BallPosition,
    },

    #[error("ball number {0} is outside 1-6")]
    BallNumberOutOfRange(u8),

    #[error("wicket would exceed the {max} wickets available")]
    WicketOverflow { max: u32 },

    #[error("cannot be out {kind} off a {extra}")]
    DismissalNotPossible {
        kind: DismissalKind,
        extra: ExtraKind,
    },
}

impl InvalidEventError {
    /// True when the event tried to go back before what is already recorded.
    pub fn is_retroactive(&self) -> bool {
        matches!(self, InvalidEventError::OutOfSequence { expected, found } if found < expected)
    }
}

/// A match or innings transition attempted out of order.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("cannot {action} while match is {from}")]
pub struct IllegalTransitionError {
    pub from: MatchStatus,
    pub action: &'static str,
}

/// One field that differs between a stored snapshot and a fresh recomputation.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldMismatch {
    pub field: String,
    pub stored: String,
    pub recomputed: String,
}

/// Stored statistics no longer agree with what the ball history says.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("stored statistics for {subject} disagree with recomputation in {} field(s): {}", .mismatches.len(), field_list(.mismatches))]
pub struct AggregationInconsistencyError {
    pub subject: String,
    pub mismatches: Vec<FieldMismatch>,
}

fn field_list(mismatches: &[FieldMismatch]) -> String {
    mismatches
        .iter()
        .map(|m| format!("{} (stored {}, recomputed {})", m.field, m.stored, m.recomputed))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decimal overs whose ball digit is not 0-5, or that are negative.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("invalid overs notation {0}")]
pub struct OversNotationError(pub f64);

/// Anything that can go wrong driving a match.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MatchError {
    #[error(transparent)]
    InvalidEvent(#[from] InvalidEventError),

    #[error(transparent)]
    IllegalTransition(#[from] IllegalTransitionError),

    #[error("invalid match setup: {0}")]
    InvalidSetup(String),

    #[error("team {0} is not playing in this match")]
    UnknownTeam(String),
}
