//! Integration tests for innings scorecards.

mod common;

use common::{innings_of, wicket};
use cricket_scoreboard::{build_scorecard, BallEvent, DismissalKind, ExtraKind, Overs};

#[test]
fn batting_and_bowling_cards() {
    let mut events: Vec<BallEvent> = (0..6).map(|_| BallEvent::new(0, 1, "Ava", "Bo", 0)).collect();
    events.extend([
        BallEvent::new(0, 1, "Ava", "Cy", 4),
        BallEvent::new(0, 1, "Ava", "Cy", 0).with_extra(ExtraKind::Wide),
        BallEvent::new(0, 1, "Ava", "Cy", 2).with_extra(ExtraKind::LegBye),
        BallEvent::new(0, 1, "Ava", "Cy", 1).with_extra(ExtraKind::NoBall),
        wicket("Ava", "Cy", DismissalKind::Caught),
        BallEvent::new(0, 1, "Di", "Cy", 3).with_extra(ExtraKind::Bye),
        wicket("Di", "Cy", DismissalKind::RunOut),
    ]);
    let card = build_scorecard(&innings_of("Lions", "Tigers", events));

    assert_eq!(card.total_runs, 12);
    assert_eq!(card.wickets, 2);
    assert_eq!(card.overs, Overs::from_balls(11));
    assert_eq!(card.overs.to_string(), "1.5");

    assert_eq!(card.extras.wides, 1);
    assert_eq!(card.extras.no_balls, 1);
    assert_eq!(card.extras.byes, 3);
    assert_eq!(card.extras.leg_byes, 2);
    assert_eq!(card.extras.total(), 7);

    let names: Vec<&str> = card.batting.iter().map(|b| b.batsman.as_str()).collect();
    assert_eq!(names, vec!["Ava", "Di"]);
    let ava = &card.batting[0];
    assert_eq!((ava.runs, ava.balls), (5, 10));
    assert_eq!(ava.dismissal, Some(DismissalKind::Caught));
    assert_eq!(ava.bowler.as_deref(), Some("Cy"));
    let di = &card.batting[1];
    assert_eq!(di.dismissal, Some(DismissalKind::RunOut));
    assert_eq!(di.bowler, None);

    let bo = &card.bowling[0];
    assert_eq!(bo.bowler, "Bo");
    assert_eq!(bo.maidens, 1);
    assert_eq!(bo.overs.to_string(), "1.0");
    let cy = &card.bowling[1];
    assert_eq!(cy.overs.to_string(), "0.5");
    assert_eq!(cy.maidens, 0);
    assert_eq!((cy.wides, cy.no_balls), (1, 1));
    // 4 off the bat, wide 1, no-ball 2; byes and leg-byes excluded
    assert_eq!(cy.runs_conceded, 7);
    assert_eq!(cy.wickets, 1);
}
