//! Fixture generation: round robin and knockout rounds.

use crate::models::{Tournament, TournamentError, TournamentFormat, TournamentMatch};
use rand::seq::SliceRandom;

/// Every pair of teams meets once, in shuffled order.
pub fn generate_round_robin_fixtures(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.format != TournamentFormat::RoundRobin || !tournament.fixtures.is_empty() {
        return Err(TournamentError::InvalidState);
    }
    if tournament.teams.len() < 2 {
        return Err(TournamentError::NotEnoughTeams { required: 2 });
    }

    let teams = &tournament.teams;
    let mut fixtures: Vec<TournamentMatch> = Vec::new();
    for (i, home) in teams.iter().enumerate() {
        for away in &teams[i + 1..] {
            fixtures.push(TournamentMatch::new(tournament.id, home.clone(), away.clone(), 0));
        }
    }
    fixtures.shuffle(&mut rand::thread_rng());

    log::info!(
        "Tournament {}: generated {} round-robin fixtures for {} teams",
        tournament.id,
        fixtures.len(),
        tournament.teams.len()
    );
    tournament.fixtures = fixtures;
    Ok(())
}

/// Teams that have not lost a knockout fixture yet, in tournament order.
pub fn knockout_survivors(tournament: &Tournament) -> Vec<String> {
    tournament
        .teams
        .iter()
        .filter(|team| {
            !tournament
                .completed_fixtures()
                .any(|f| f.loser() == Some(team.as_str()))
        })
        .cloned()
        .collect()
}

/// Pair the surviving teams at random for the next knockout round.
///
/// The previous round must be fully played and must have produced a winner in every fixture.
/// Returns the new round number.
pub fn generate_knockout_round(tournament: &mut Tournament) -> Result<u32, TournamentError> {
    if tournament.format != TournamentFormat::Knockout {
        return Err(TournamentError::InvalidState);
    }
    if tournament.fixtures.iter().any(|f| !f.is_complete) {
        return Err(TournamentError::IncompleteResults);
    }
    if tournament
        .completed_fixtures()
        .any(|f| f.winner().is_none())
    {
        // Ties and no-results go through `Tournament::settle_knockout_tie` first.
        return Err(TournamentError::IncompleteResults);
    }

    let mut survivors = knockout_survivors(tournament);
    if survivors.len() < 2 {
        return Err(TournamentError::NotEnoughTeams { required: 2 });
    }
    if survivors.len() % 2 != 0 {
        return Err(TournamentError::OddNumberOfTeams(survivors.len()));
    }

    survivors.shuffle(&mut rand::thread_rng());
    let round = tournament.fixtures.iter().map(|f| f.round).max().unwrap_or(0) + 1;
    let id = tournament.id;
    tournament.fixtures.extend(
        survivors
            .chunks_exact(2)
            .map(|pair| TournamentMatch::new(id, pair[0].clone(), pair[1].clone(), round)),
    );
    log::info!(
        "Tournament {}: knockout round {} with {} teams",
        tournament.id,
        round,
        survivors.len()
    );
    Ok(round)
}

/// The knockout champion, once a single team is left unbeaten and every fixture is played.
pub fn knockout_champion(tournament: &Tournament) -> Option<String> {
    if tournament.format != TournamentFormat::Knockout
        || tournament.fixtures.is_empty()
        || tournament.fixtures.iter().any(|f| !f.is_complete)
    {
        return None;
    }
    let mut survivors = knockout_survivors(tournament);
    if survivors.len() == 1 {
        survivors.pop()
    } else {
        None
    }
}
