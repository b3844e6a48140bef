//! Overs: legal-ball count with scoreboard (decimal) and true-fraction views.

use crate::error::OversNotationError;
use crate::models::ball::BALLS_PER_OVER;
use serde::{Deserialize, Serialize};
use std::fmt;

const NOTATION_EPSILON: f64 = 1e-6;

/// Overs bowled, held as a count of legal balls.
///
/// Scoreboards write overs as `completed.balls` (19.4 is nineteen overs and four balls), which is
/// not a number you can divide by. Rates go through [`Overs::as_fraction`] instead. Serialises as
/// the scoreboard form.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Overs {
    legal_balls: u32,
}

impl Overs {
    pub fn from_balls(legal_balls: u32) -> Self {
        Self { legal_balls }
    }

    /// A whole number of overs.
    pub fn full(overs: u32) -> Self {
        Self::from_balls(overs.saturating_mul(BALLS_PER_OVER))
    }

    /// Parse scoreboard notation: `48.2` is 48 overs and 2 balls (290 legal balls).
    pub fn from_decimal(value: f64) -> Result<Self, OversNotationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(OversNotationError(value));
        }
        // one digit after the point, and it counts balls
        let tenths = value * 10.0;
        let rounded = tenths.round();
        if (tenths - rounded).abs() > NOTATION_EPSILON {
            return Err(OversNotationError(value));
        }
        let whole = (rounded / 10.0).trunc();
        let digit = rounded - whole * 10.0;
        if digit >= BALLS_PER_OVER as f64 || whole > (u32::MAX / BALLS_PER_OVER - 1) as f64 {
            return Err(OversNotationError(value));
        }
        Ok(Self::from_balls(whole as u32 * BALLS_PER_OVER + digit as u32))
    }

    pub fn legal_balls(self) -> u32 {
        self.legal_balls
    }

    pub fn completed_overs(self) -> u32 {
        self.legal_balls / BALLS_PER_OVER
    }

    /// Balls bowled in the over in progress (0-5).
    pub fn balls_into_over(self) -> u32 {
        self.legal_balls % BALLS_PER_OVER
    }

    /// Scoreboard notation, e.g. 18.3.
    pub fn as_decimal(self) -> f64 {
        (self.completed_overs() as f64 * 10.0 + self.balls_into_over() as f64) / 10.0
    }

    /// True fractional overs for rate arithmetic, e.g. 18.3 overs is 18.5.
    pub fn as_fraction(self) -> f64 {
        self.legal_balls as f64 / BALLS_PER_OVER as f64
    }

    /// Runs per over. Zero when no legal ball has been bowled.
    pub fn run_rate(self, runs: u32) -> f64 {
        if self.legal_balls == 0 {
            return 0.0;
        }
        runs as f64 / self.as_fraction()
    }
}

impl TryFrom<f64> for Overs {
    type Error = OversNotationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Overs> for f64 {
    fn from(overs: Overs) -> Self {
        overs.as_decimal()
    }
}

impl fmt::Display for Overs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.completed_overs(), self.balls_into_over())
    }
}
