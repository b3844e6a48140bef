//! BallEvent: one delivery, with its extras and dismissal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Legal deliveries in one over.
pub const BALLS_PER_OVER: u32 = 6;

/// Penalty run added for every wide and no-ball.
pub const PENALTY_RUNS: u32 = 1;

/// Kind of extra on a delivery. A delivery has at most one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    Wide,
    NoBall,
    Bye,
    LegBye,
}

impl ExtraKind {
    /// Byes and leg-byes use up a ball of the over; wides and no-balls are re-bowled.
    pub fn is_legal(self) -> bool {
        matches!(self, ExtraKind::Bye | ExtraKind::LegBye)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExtraKind::Wide => "wide",
            ExtraKind::NoBall => "no_ball",
            ExtraKind::Bye => "bye",
            ExtraKind::LegBye => "leg_bye",
        }
    }
}

impl fmt::Display for ExtraKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a batsman was dismissed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissalKind {
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
    ObstructingField,
}

impl DismissalKind {
    /// Whether the bowler gets the wicket in their figures.
    pub fn credited_to_bowler(self) -> bool {
        match self {
            DismissalKind::Bowled
            | DismissalKind::Caught
            | DismissalKind::Lbw
            | DismissalKind::Stumped
            | DismissalKind::HitWicket => true,
            DismissalKind::RunOut | DismissalKind::ObstructingField => false,
        }
    }

    /// Whether this dismissal can happen off a delivery carrying `extra`.
    pub fn possible_off(self, extra: ExtraKind) -> bool {
        match extra {
            ExtraKind::Wide => matches!(
                self,
                DismissalKind::Stumped
                    | DismissalKind::RunOut
                    | DismissalKind::HitWicket
                    | DismissalKind::ObstructingField
            ),
            ExtraKind::NoBall => {
                matches!(self, DismissalKind::RunOut | DismissalKind::ObstructingField)
            }
            ExtraKind::Bye | ExtraKind::LegBye => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DismissalKind::Bowled => "bowled",
            DismissalKind::Caught => "caught",
            DismissalKind::Lbw => "lbw",
            DismissalKind::RunOut => "run_out",
            DismissalKind::Stumped => "stumped",
            DismissalKind::HitWicket => "hit_wicket",
            DismissalKind::ObstructingField => "obstructing_field",
        }
    }
}

impl fmt::Display for DismissalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a delivery sits in the innings: 0-based over, 1-based ball slot.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct BallPosition {
    pub over: u32,
    pub ball: u8,
}

impl fmt::Display for BallPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.over, self.ball)
    }
}

/// A single delivery. Immutable once recorded.
///
/// Wides and no-balls carry the slot of the next legal ball, since they do not use one up.
/// `runs` means runs off the bat, runs taken as byes/leg-byes, or runs run on a wide,
/// depending on `extra`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BallEvent {
    pub over_number: u32,
    pub ball_number: u8,
    pub batsman: String,
    pub bowler: String,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub extra: Option<ExtraKind>,
    /// Dismissal of the batsman on strike, if any.
    #[serde(default)]
    pub dismissal: Option<DismissalKind>,
}

impl BallEvent {
    /// A legal delivery with `runs` off the bat.
    pub fn new(
        over_number: u32,
        ball_number: u8,
        batsman: impl Into<String>,
        bowler: impl Into<String>,
        runs: u32,
    ) -> Self {
        Self {
            over_number,
            ball_number,
            batsman: batsman.into(),
            bowler: bowler.into(),
            runs,
            extra: None,
            dismissal: None,
        }
    }

    pub fn with_extra(mut self, extra: ExtraKind) -> Self {
        self.extra = Some(extra);
        self
    }

    pub fn with_dismissal(mut self, kind: DismissalKind) -> Self {
        self.dismissal = Some(kind);
        self
    }

    pub fn position(&self) -> BallPosition {
        BallPosition {
            over: self.over_number,
            ball: self.ball_number,
        }
    }

    /// Counts towards the six balls of the over.
    pub fn is_legal(&self) -> bool {
        self.extra.map_or(true, ExtraKind::is_legal)
    }

    pub fn is_wicket(&self) -> bool {
        self.dismissal.is_some()
    }

    /// Counts as a ball faced by the striker (everything except a wide).
    pub fn is_faced(&self) -> bool {
        self.extra != Some(ExtraKind::Wide)
    }

    /// Runs credited to the batsman.
    pub fn batsman_runs(&self) -> u32 {
        match self.extra {
            None | Some(ExtraKind::NoBall) => self.runs,
            Some(ExtraKind::Wide | ExtraKind::Bye | ExtraKind::LegBye) => 0,
        }
    }

    /// Runs that go to the extras column.
    pub fn extra_runs(&self) -> u32 {
        match self.extra {
            None => 0,
            Some(ExtraKind::Wide) => PENALTY_RUNS + self.runs,
            Some(ExtraKind::NoBall) => PENALTY_RUNS,
            Some(ExtraKind::Bye | ExtraKind::LegBye) => self.runs,
        }
    }

    /// Everything this delivery adds to the batting total.
    pub fn total_runs(&self) -> u32 {
        self.batsman_runs() + self.extra_runs()
    }

    /// Runs charged to the bowler: all but byes and leg-byes.
    pub fn runs_conceded(&self) -> u32 {
        match self.extra {
            Some(ExtraKind::Bye | ExtraKind::LegBye) => 0,
            _ => self.total_runs(),
        }
    }

    /// A wicket that goes into the bowler's figures.
    pub fn is_bowler_wicket(&self) -> bool {
        self.dismissal.map_or(false, DismissalKind::credited_to_bowler)
    }
}
