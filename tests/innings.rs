//! Integration tests for ball validation and innings accumulation.

mod common;

use common::positioned;
use cricket_scoreboard::{
    append_ball, apply_ball, replay_innings, validate_ball, BallEvent, BallPosition, DismissalKind, ExtraKind,
    Innings, InningsEnd, InvalidEventError, Overs,
};

fn fresh(overs: u32, players: u32) -> Innings {
    Innings::first("Lions", "Tigers", overs, players)
}

fn at(innings: &Innings, runs: u32) -> BallEvent {
    let p = innings.next_position();
    BallEvent::new(p.over, p.ball, "Ava", "Bo", runs)
}

#[test]
fn replay_matches_hand_tally() {
    let events = positioned(vec![
        BallEvent::new(0, 1, "Ava", "Bo", 4),
        BallEvent::new(0, 1, "Ava", "Bo", 0).with_extra(ExtraKind::Wide),
        BallEvent::new(0, 1, "Ava", "Bo", 1),
        BallEvent::new(0, 1, "Cy", "Bo", 2).with_extra(ExtraKind::NoBall),
        BallEvent::new(0, 1, "Cy", "Bo", 0).with_dismissal(DismissalKind::Caught),
        BallEvent::new(0, 1, "Di", "Bo", 3).with_extra(ExtraKind::LegBye),
        BallEvent::new(0, 1, "Di", "Bo", 6),
        BallEvent::new(0, 1, "Ava", "Bo", 1).with_extra(ExtraKind::Bye),
        BallEvent::new(0, 1, "Ava", "Ed", 2),
    ]);
    let innings = replay_innings(fresh(20, 11), events).unwrap();

    // bat: 4 + 1 + 2 + 6 + 2 = 15; extras: wide 1, no-ball 1, leg-byes 3, bye 1 = 6
    assert_eq!(innings.total_runs, 21);
    assert_eq!(innings.extras, 6);
    assert_eq!(innings.wickets, 1);
    assert_eq!(innings.legal_balls, 7);
    assert!((innings.overs_completed() - 1.1).abs() < 1e-9);
    assert_eq!(innings.events.len(), 9);
    assert!(!innings.is_complete());
}

#[test]
fn apply_leaves_input_untouched() {
    let innings = fresh(20, 11);
    let next = apply_ball(&innings, at(&innings, 4)).unwrap();
    assert_eq!(innings.total_runs, 0);
    assert!(innings.events.is_empty());
    assert_eq!(next.total_runs, 4);
}

#[test]
fn wide_and_no_ball_do_not_use_the_slot() {
    let innings = fresh(20, 11);
    let after_wide = apply_ball(&innings, at(&innings, 0).with_extra(ExtraKind::Wide)).unwrap();
    assert_eq!(after_wide.legal_balls, 0);
    assert_eq!(after_wide.total_runs, 1);
    assert_eq!(after_wide.next_position(), BallPosition { over: 0, ball: 1 });

    let after_nb = apply_ball(&after_wide, at(&after_wide, 4).with_extra(ExtraKind::NoBall)).unwrap();
    assert_eq!(after_nb.legal_balls, 0);
    assert_eq!(after_nb.total_runs, 6);
    assert_eq!(after_nb.extras, 2);
}

#[test]
fn byes_use_a_ball_and_go_to_extras() {
    let innings = fresh(20, 11);
    let next = apply_ball(&innings, at(&innings, 2).with_extra(ExtraKind::Bye)).unwrap();
    assert_eq!(next.legal_balls, 1);
    assert_eq!(next.extras, 2);
    assert_eq!(next.total_runs, 2);
}

#[test]
fn over_notation_rolls_after_six_legal_balls() {
    let mut innings = fresh(20, 11);
    for _ in 0..10 {
        innings = apply_ball(&innings, at(&innings, 1)).unwrap();
    }
    assert_eq!(innings.next_position(), BallPosition { over: 1, ball: 5 });
    assert_eq!(innings.overs(), Overs::from_balls(10));
    assert_eq!(innings.overs().to_string(), "1.4");
    assert!((innings.overs_completed() - 1.4).abs() < 1e-9);
}

#[test]
fn rejects_retroactive_and_skipped_balls() {
    let innings = fresh(20, 11);
    let innings = apply_ball(&innings, at(&innings, 0)).unwrap();

    let replayed = BallEvent::new(0, 1, "Ava", "Bo", 0);
    let err = validate_ball(&innings, &replayed).unwrap_err();
    assert!(err.is_retroactive());
    assert_eq!(
        err,
        InvalidEventError::OutOfSequence {
            expected: BallPosition { over: 0, ball: 2 },
            found: BallPosition { over: 0, ball: 1 },
        }
    );

    let skipped = BallEvent::new(0, 4, "Ava", "Bo", 0);
    let err = validate_ball(&innings, &skipped).unwrap_err();
    assert!(!err.is_retroactive());
}

#[test]
fn rejects_ball_number_outside_over() {
    let innings = fresh(20, 11);
    let err = apply_ball(&innings, BallEvent::new(0, 7, "Ava", "Bo", 0)).unwrap_err();
    assert_eq!(err, InvalidEventError::BallNumberOutOfRange(7));
}

#[test]
fn rejects_impossible_dismissal_off_extra() {
    let innings = fresh(20, 11);
    let lbw_off_wide = at(&innings, 0)
        .with_extra(ExtraKind::Wide)
        .with_dismissal(DismissalKind::Lbw);
    assert!(matches!(
        apply_ball(&innings, lbw_off_wide),
        Err(InvalidEventError::DismissalNotPossible { .. })
    ));

    let stumped_off_wide = at(&innings, 0)
        .with_extra(ExtraKind::Wide)
        .with_dismissal(DismissalKind::Stumped);
    let next = apply_ball(&innings, stumped_off_wide).unwrap();
    assert_eq!(next.wickets, 1);
    assert_eq!(next.legal_balls, 0);
}

#[test]
fn all_out_closes_innings() {
    let mut innings = fresh(20, 3);
    for _ in 0..2 {
        innings = apply_ball(&innings, at(&innings, 0).with_dismissal(DismissalKind::Bowled)).unwrap();
    }
    assert_eq!(innings.end, Some(InningsEnd::AllOut));

    let err = apply_ball(&innings, at(&innings, 1)).unwrap_err();
    assert_eq!(err, InvalidEventError::InningsClosed { innings_number: 1 });
}

#[test]
fn overs_exhausted_closes_innings() {
    let mut innings = fresh(1, 11);
    for _ in 0..6 {
        innings = apply_ball(&innings, at(&innings, 1)).unwrap();
    }
    assert_eq!(innings.end, Some(InningsEnd::OversExhausted));
    assert_eq!(innings.total_runs, 6);
}

#[test]
fn wicket_overflow_is_rejected() {
    // Stored state claiming ten wickets but still open.
    let mut innings = fresh(20, 11);
    innings.wickets = 10;
    let err = validate_ball(&innings, &at(&innings, 0).with_dismissal(DismissalKind::Caught)).unwrap_err();
    assert_eq!(err, InvalidEventError::WicketOverflow { max: 10 });
}

#[test]
fn chase_ends_mid_over_once_total_passed() {
    let mut chase = Innings::chase("Tigers", "Lions", 20, 11, 10);
    assert_eq!(chase.target(), Some(11));
    chase = apply_ball(&chase, at(&chase, 6)).unwrap();
    chase = apply_ball(&chase, at(&chase, 4)).unwrap();
    assert!(!chase.is_complete(), "level scores do not end the chase");
    assert_eq!(chase.runs_required(), Some(1));

    chase = apply_ball(&chase, at(&chase, 1)).unwrap();
    assert_eq!(chase.end, Some(InningsEnd::TargetReached));
    assert_eq!(chase.overs().to_string(), "0.3");
    assert!(matches!(
        apply_ball(&chase, at(&chase, 1)),
        Err(InvalidEventError::InningsClosed { innings_number: 2 })
    ));
}

#[test]
fn required_run_rate_uses_true_overs() {
    let mut chase = Innings::chase("Tigers", "Lions", 2, 11, 17);
    for _ in 0..3 {
        chase = apply_ball(&chase, at(&chase, 0)).unwrap();
    }
    // 18 needed from 9 balls (1.5 overs)
    let rrr = chase.required_run_rate().unwrap();
    assert!((rrr - 12.0).abs() < 1e-9);
}

#[test]
fn decimal_overs_convert_to_legal_balls() {
    assert_eq!(Overs::from_decimal(48.2).unwrap().legal_balls(), 290);
    assert_eq!(Overs::from_decimal(20.0).unwrap().legal_balls(), 120);
    assert!(Overs::from_decimal(18.7).is_err());
    assert!(Overs::from_decimal(-1.0).is_err());
    assert!(Overs::from_decimal(18.35).is_err());
    assert!(Overs::from_decimal(48.25).is_err());
    assert_eq!(Overs::from_decimal(0.5).unwrap().legal_balls(), 5);

    let overs = Overs::from_balls(111);
    assert!((overs.as_decimal() - 18.3).abs() < 1e-9);
    assert!((overs.as_fraction() - 18.5).abs() < 1e-9);
}

#[test]
fn overs_serialise_in_scoreboard_notation() {
    assert_eq!(serde_json::to_string(&Overs::from_balls(111)).unwrap(), "18.3");
    let parsed: Overs = serde_json::from_str("19.4").unwrap();
    assert_eq!(parsed.legal_balls(), 118);
    assert!(serde_json::from_str::<Overs>("19.6").is_err());
}

#[test]
fn append_in_place_matches_apply() {
    let mut innings = fresh(20, 11);
    let ev = at(&innings, 4);
    append_ball(&mut innings, ev).unwrap();
    let ev = at(&innings, 1).with_extra(ExtraKind::Wide);
    append_ball(&mut innings, ev).unwrap();
    let copied = apply_ball(&innings, at(&innings, 2)).unwrap();
    let ev = at(&innings, 2);
    append_ball(&mut innings, ev).unwrap();
    assert_eq!(innings, copied);

    let before = innings.clone();
    let stale = BallEvent::new(0, 1, "Ava", "Bo", 6);
    assert!(matches!(
        append_ball(&mut innings, stale),
        Err(InvalidEventError::OutOfSequence { .. })
    ));
    assert_eq!(innings, before);
}

#[test]
fn huge_overs_limit_does_not_overflow() {
    let mut innings = fresh(u32::MAX, 11);
    assert_eq!(innings.max_legal_balls(), u32::MAX);
    let ev = at(&innings, 1);
    append_ball(&mut innings, ev).unwrap();
    assert!(!innings.is_complete());
    assert_eq!(Overs::full(u32::MAX).legal_balls(), u32::MAX);
}
