//! Integration tests for round-robin and knockout fixture generation.

use cricket_scoreboard::{
    generate_knockout_round, generate_round_robin_fixtures, knockout_champion, knockout_survivors,
    FixtureOutcome, TeamScore, Tournament, TournamentError, TournamentFormat,
};
use std::collections::HashSet;

fn teams(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("T{i}")).collect()
}

fn settle_round(t: &mut Tournament, round: u32) {
    for f in t.fixtures.iter_mut().filter(|f| f.round == round) {
        let winner = f.team_1.clone();
        f.complete_with(
            FixtureOutcome::Won { winner },
            TeamScore::default(),
            TeamScore::default(),
        )
        .unwrap();
    }
}

#[test]
fn round_robin_pairs_every_team_once() {
    let mut t = Tournament::with_teams("League", TournamentFormat::RoundRobin, teams(5)).unwrap();
    generate_round_robin_fixtures(&mut t).unwrap();
    assert_eq!(t.fixtures.len(), 10);

    let pairs: HashSet<(String, String)> = t
        .fixtures
        .iter()
        .map(|f| {
            let mut p = [f.team_1.clone(), f.team_2.clone()];
            p.sort();
            (p[0].clone(), p[1].clone())
        })
        .collect();
    assert_eq!(pairs.len(), 10);
    assert!(t.fixtures.iter().all(|f| f.team_1 != f.team_2 && f.tournament_id == t.id));

    assert_eq!(generate_round_robin_fixtures(&mut t), Err(TournamentError::InvalidState));
    assert_eq!(t.add_team("Late"), Err(TournamentError::InvalidState));
}

#[test]
fn round_robin_needs_two_teams() {
    let mut t = Tournament::with_teams("League", TournamentFormat::RoundRobin, teams(1)).unwrap();
    assert_eq!(
        generate_round_robin_fixtures(&mut t),
        Err(TournamentError::NotEnoughTeams { required: 2 })
    );
}

#[test]
fn knockout_runs_to_a_champion() {
    let mut t = Tournament::with_teams("Cup", TournamentFormat::Knockout, teams(4)).unwrap();
    assert_eq!(generate_knockout_round(&mut t), Ok(1));
    assert_eq!(t.fixtures.len(), 2);
    assert_eq!(generate_knockout_round(&mut t), Err(TournamentError::IncompleteResults));
    assert_eq!(knockout_champion(&t), None);

    settle_round(&mut t, 1);
    assert_eq!(knockout_survivors(&t).len(), 2);
    assert_eq!(generate_knockout_round(&mut t), Ok(2));
    assert_eq!(t.fixtures.iter().filter(|f| f.round == 2).count(), 1);

    settle_round(&mut t, 2);
    let champion = knockout_champion(&t).unwrap();
    assert_eq!(knockout_survivors(&t), vec![champion]);
    assert_eq!(
        generate_knockout_round(&mut t),
        Err(TournamentError::NotEnoughTeams { required: 2 })
    );
}

#[test]
fn knockout_rejects_odd_field_and_wrong_format() {
    let mut t = Tournament::with_teams("Cup", TournamentFormat::Knockout, teams(3)).unwrap();
    assert_eq!(generate_knockout_round(&mut t), Err(TournamentError::OddNumberOfTeams(3)));

    let mut league = Tournament::with_teams("League", TournamentFormat::RoundRobin, teams(4)).unwrap();
    assert_eq!(generate_knockout_round(&mut league), Err(TournamentError::InvalidState));
}

#[test]
fn knockout_tie_must_be_settled() {
    let mut t = Tournament::with_teams("Cup", TournamentFormat::Knockout, teams(4)).unwrap();
    generate_knockout_round(&mut t).unwrap();
    let tied = t.fixtures[0].id;
    t.fixtures[0]
        .complete_with(FixtureOutcome::Tied, TeamScore::default(), TeamScore::default())
        .unwrap();
    let team_2 = t.fixtures[1].team_2.clone();
    t.fixtures[1]
        .complete_with(FixtureOutcome::Won { winner: team_2 }, TeamScore::default(), TeamScore::default())
        .unwrap();
    assert_eq!(generate_knockout_round(&mut t), Err(TournamentError::IncompleteResults));
    assert_eq!(
        t.fixtures[0].complete_with(FixtureOutcome::Tied, TeamScore::default(), TeamScore::default()),
        Err(TournamentError::AlreadyRecorded)
    );

    assert_eq!(
        t.settle_knockout_tie(tied, "Nobody"),
        Err(TournamentError::UnknownTeam("Nobody".into()))
    );
    let super_over_winner = t.fixtures[0].team_1.to_lowercase();
    t.settle_knockout_tie(tied, &super_over_winner).unwrap();
    assert_eq!(
        t.settle_knockout_tie(tied, &super_over_winner),
        Err(TournamentError::AlreadyRecorded)
    );
    let f = &t.fixtures[0];
    assert!(f.settled_by_tiebreak);
    assert_eq!(f.winner(), Some(f.team_1.as_str()));

    assert_eq!(generate_knockout_round(&mut t), Ok(2));
    assert_eq!(knockout_survivors(&t).len(), 2);
}

#[test]
fn only_finished_knockout_ties_can_be_settled() {
    let mut t = Tournament::with_teams("Cup", TournamentFormat::Knockout, teams(2)).unwrap();
    generate_knockout_round(&mut t).unwrap();
    let id = t.fixtures[0].id;
    assert_eq!(t.settle_knockout_tie(id, "T0"), Err(TournamentError::MatchNotFinished));
    assert!(matches!(
        t.settle_knockout_tie(uuid::Uuid::new_v4(), "T0"),
        Err(TournamentError::FixtureNotFound(_))
    ));

    let mut league = Tournament::with_teams("League", TournamentFormat::RoundRobin, teams(2)).unwrap();
    generate_round_robin_fixtures(&mut league).unwrap();
    let id = league.fixtures[0].id;
    assert_eq!(league.settle_knockout_tie(id, "T0"), Err(TournamentError::InvalidState));
}
