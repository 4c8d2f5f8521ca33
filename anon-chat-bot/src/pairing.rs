//! Pairing engine: FIFO waiting queue, symmetric partner map and last-partner map.
//!
//! All three live behind one [`tokio::sync::Mutex`]; every operation checks and mutates under a
//! single lock acquisition, so a user can never be both queued and paired, and the same user can
//! never be queued twice. The lock is never held across a network call: callers get an outcome
//! back and notify users afterwards.
//!
//! State is process-local and lost on restart.

use std::collections::{HashMap, VecDeque};

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// Informational failures; every one is turned into a plain reply to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingError {
    #[error("user is already in a chat")]
    AlreadyPaired,

    #[error("user is already waiting for a partner")]
    AlreadyWaiting,

    #[error("user is neither in a chat nor in the queue")]
    NotInChatOrQueue,

    #[error("user has no active partner")]
    NoActivePartner,
}

/// Result of [`PairingEngine::request_pairing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// Paired with the user who waited longest.
    Paired { partner: i64 },
    /// Queue was empty; the user is now waiting.
    Waiting,
}

/// Result of [`PairingEngine::leave`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    LeftQueue,
    /// The pairing ended; `partner` should be told.
    LeftChat { partner: i64 },
}

/// Point-in-time counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairingStats {
    pub waiting: usize,
    pub active_pairs: usize,
}

#[derive(Default)]
struct PairingState {
    waiting: VecDeque<i64>,
    partners: HashMap<i64, i64>,
    last_partner: HashMap<i64, i64>,
}

#[derive(Default)]
pub struct PairingEngine {
    state: Mutex<PairingState>,
}

impl PairingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs `user` with the head of the queue, or enqueues them when nobody is waiting.
    #[instrument(skip(self))]
    pub async fn request_pairing(&self, user: i64) -> Result<PairOutcome, PairingError> {
        let mut state = self.state.lock().await;

        if state.partners.contains_key(&user) {
            debug!(user_id = user, "Pairing refused: already paired");
            return Err(PairingError::AlreadyPaired);
        }
        if state.waiting.contains(&user) {
            debug!(user_id = user, "Pairing refused: already waiting");
            return Err(PairingError::AlreadyWaiting);
        }

        match state.waiting.pop_front() {
            Some(partner) => {
                state.partners.insert(user, partner);
                state.partners.insert(partner, user);
                state.last_partner.insert(user, partner);
                state.last_partner.insert(partner, user);
                info!(user_id = user, partner_id = partner, "Users paired");
                Ok(PairOutcome::Paired { partner })
            }
            None => {
                state.waiting.push_back(user);
                info!(user_id = user, "User waiting for a partner");
                Ok(PairOutcome::Waiting)
            }
        }
    }

    /// Removes `user` from the queue, or ends their pairing.
    #[instrument(skip(self))]
    pub async fn leave(&self, user: i64) -> Result<LeaveOutcome, PairingError> {
        let mut state = self.state.lock().await;

        if let Some(pos) = state.waiting.iter().position(|&u| u == user) {
            state.waiting.remove(pos);
            info!(user_id = user, "User left the queue");
            return Ok(LeaveOutcome::LeftQueue);
        }

        match state.partners.remove(&user) {
            Some(partner) => {
                state.partners.remove(&partner);
                state.last_partner.insert(user, partner);
                info!(user_id = user, partner_id = partner, "Pairing ended");
                Ok(LeaveOutcome::LeftChat { partner })
            }
            None => Err(PairingError::NotInChatOrQueue),
        }
    }

    pub async fn partner_of(&self, user: i64) -> Option<i64> {
        self.state.lock().await.partners.get(&user).copied()
    }

    /// Most recent partner, kept after the pairing ends. May be stale.
    pub async fn last_partner_of(&self, user: i64) -> Option<i64> {
        self.state.lock().await.last_partner.get(&user).copied()
    }

    pub async fn is_waiting(&self, user: i64) -> bool {
        self.state.lock().await.waiting.contains(&user)
    }

    pub async fn snapshot(&self) -> PairingStats {
        let state = self.state.lock().await;
        PairingStats {
            waiting: state.waiting.len(),
            active_pairs: state.partners.len() / 2,
        }
    }
}
