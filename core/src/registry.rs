//! Process-wide registry of active sessions.
//!
//! Mutated only on session start/stop; read concurrently by the outgoing
//! audio filter. Always passed around as an explicit `Arc`, never reached
//! through a global. The write lock over a whole `tick_all` pass is what
//! guarantees at most one tick per session executes at a time.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::session::{SneakSession, TickOutcome};

#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<i64, SneakSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means some session panicked mid-tick; the map
    // itself is still sound, so recover the guard instead of propagating.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<i64, SneakSession>> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<i64, SneakSession>> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether the player has an open session. This is the read-side query
    /// the audio filter runs per outgoing event.
    pub fn is_active(&self, player_id: i64) -> bool {
        self.read().contains_key(&player_id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn active_players(&self) -> Vec<i64> {
        self.read().keys().copied().collect()
    }

    /// Open a session for the player unless one already exists. The factory
    /// runs under the write lock, so at most one session per player can ever
    /// be registered. Returns whether a session was opened.
    pub fn start_with(&self, player_id: i64, make: impl FnOnce() -> SneakSession) -> bool {
        let mut sessions = self.write();
        if sessions.contains_key(&player_id) {
            return false;
        }
        sessions.insert(player_id, make());
        true
    }

    /// Remove the player's session, handing it back for teardown.
    pub fn remove(&self, player_id: i64) -> Option<SneakSession> {
        self.write().remove(&player_id)
    }

    /// Tick every session, dropping those that stopped themselves.
    pub fn tick_all(&self) {
        self.write()
            .retain(|_, session| session.tick() == TickOutcome::Continue);
    }

    /// Remove and return every session (reload/shutdown path).
    pub fn drain(&self) -> Vec<SneakSession> {
        self.write().drain().map(|(_, session)| session).collect()
    }
}
