//! In-memory match book for hosts: one writer per match, matches independent of each other.

use crate::error::MatchError;
use crate::logic::{abandon_match, record_ball, record_toss};
use crate::models::{BallEvent, Match, MatchId, MatchStatus, TossDecision};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No match {0}")]
    NotFound(MatchId),
    #[error("lock error")]
    LockPoisoned,
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Matches by id, each behind its own mutex.
///
/// Writes to one match are serialised by that match's mutex; the outer lock is held only long
/// enough to find the entry. Every write runs against a copy and is committed only if the engine
/// accepts it, so a ball is committed at most once and a rejected one leaves no trace.
#[derive(Default)]
pub struct MatchBook {
    matches: RwLock<HashMap<MatchId, Arc<Mutex<Match>>>>,
}

impl MatchBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, m: Match) -> Result<MatchId, StoreError> {
        let id = m.id;
        let mut g = self.matches.write().map_err(|_| StoreError::LockPoisoned)?;
        g.insert(id, Arc::new(Mutex::new(m)));
        Ok(id)
    }

    fn entry(&self, id: MatchId) -> Result<Arc<Mutex<Match>>, StoreError> {
        let g = self.matches.read().map_err(|_| StoreError::LockPoisoned)?;
        g.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Run `f` on a copy of the match and commit the copy only if `f` succeeds.
    fn mutate<T>(
        &self,
        id: MatchId,
        f: impl FnOnce(&mut Match) -> Result<T, MatchError>,
    ) -> Result<T, StoreError> {
        let entry = self.entry(id)?;
        let mut current = entry.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut draft = current.clone();
        let out = f(&mut draft)?;
        *current = draft;
        Ok(out)
    }

    pub fn record_toss(&self, id: MatchId, winner: &str, decision: TossDecision) -> Result<(), StoreError> {
        self.mutate(id, |m| record_toss(m, winner, decision))
    }

    /// Submit one ball to the match's innings in progress.
    pub fn submit_ball(&self, id: MatchId, event: BallEvent) -> Result<MatchStatus, StoreError> {
        self.mutate(id, |m| record_ball(m, event))
    }

    pub fn abandon(&self, id: MatchId) -> Result<(), StoreError> {
        self.mutate(id, abandon_match)
    }

    /// Consistent copy of one match.
    pub fn snapshot(&self, id: MatchId) -> Result<Match, StoreError> {
        let entry = self.entry(id)?;
        let m = entry.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(m.clone())
    }

    /// Copies of all completed matches, for career and standings aggregation.
    pub fn completed(&self) -> Result<Vec<Match>, StoreError> {
        let entries: Vec<_> = {
            let g = self.matches.read().map_err(|_| StoreError::LockPoisoned)?;
            g.values().cloned().collect()
        };
        let mut out = Vec::new();
        for entry in entries {
            let m = entry.lock().map_err(|_| StoreError::LockPoisoned)?;
            if m.status == MatchStatus::Completed {
                out.push(m.clone());
            }
        }
        out.sort_by_key(|m| m.match_date);
        Ok(out)
    }

    pub fn len(&self) -> usize {
        self.matches.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
