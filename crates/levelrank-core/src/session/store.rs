//! TTL-bounded disambiguation sessions

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::resolve::Candidate;
use crate::session::clock::MonotonicClock;
use crate::session::error::{SessionError, SessionResult};
use crate::session::memory::MemoryBackend;
use crate::session::traits::{Clock, SessionBackend};

/// How long a requester has to pick a candidate (5 minutes)
pub const DEFAULT_SESSION_TTL_MS: i64 = 300_000;

/// Candidates offered to one requester, awaiting a numeric selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub created_at_ms: i64,
    pub candidates: Vec<Candidate>,
}

/// Decides when a session is too old to honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryPolicy {
    pub ttl_ms: i64,
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self {
            ttl_ms: DEFAULT_SESSION_TTL_MS,
        }
    }
}

impl ExpiryPolicy {
    pub fn new(ttl_ms: i64) -> Self {
        Self { ttl_ms }
    }

    /// A session is expired once strictly more than `ttl_ms` has elapsed.
    pub fn is_expired(&self, created_at_ms: i64, now_ms: i64) -> bool {
        now_ms.saturating_sub(created_at_ms) > self.ttl_ms
    }
}

/// Per-requester disambiguation sessions.
///
/// Expiry is enforced when a session is read: an expired session is evicted
/// on access and reported as absent. Nothing runs in the background; call
/// [`SessionStore::sweep_expired`] to purge eagerly.
///
/// Writes for the same requester are last-writer-wins. Removals only ever
/// delete the session that was read, so a concurrent newer write survives.
#[derive(Debug)]
pub struct SessionStore<B = MemoryBackend, C = MonotonicClock> {
    backend: B,
    clock: C,
    policy: ExpiryPolicy,
}

impl SessionStore {
    /// In-process store on a monotonic clock with the default TTL.
    pub fn in_memory() -> Self {
        Self::new(
            MemoryBackend::new(),
            MonotonicClock::new(),
            ExpiryPolicy::default(),
        )
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<B: SessionBackend, C: Clock> SessionStore<B, C> {
    pub fn new(backend: B, clock: C, policy: ExpiryPolicy) -> Self {
        Self {
            backend,
            clock,
            policy,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn policy(&self) -> ExpiryPolicy {
        self.policy
    }

    /// Open a session for `requester`, replacing any existing one.
    pub fn put(&self, requester: &str, candidates: Vec<Candidate>) {
        let session = Session {
            created_at_ms: self.clock.now_ms(),
            candidates,
        };
        debug!(
            requester = %requester,
            candidates = session.candidates.len(),
            "opened selection session"
        );
        self.backend.store(requester, session);
    }

    /// The live session for `requester`, if any.
    pub fn get(&self, requester: &str) -> Option<Session> {
        match self.load_live(requester) {
            Live::Active(session) => Some(session),
            Live::Missing | Live::Expired => None,
        }
    }

    /// Pick candidate `index` (1-based) and close the session.
    ///
    /// An out-of-range index leaves the session in place so the requester
    /// can try again. If a newer list replaced the session while the
    /// selection was being checked, the newer list is kept and
    /// `Superseded` is returned.
    pub fn consume_selection(&self, requester: &str, index: usize) -> SessionResult<Candidate> {
        let session = match self.load_live(requester) {
            Live::Active(session) => session,
            Live::Missing => return Err(SessionError::NotFound(requester.to_string())),
            Live::Expired => return Err(SessionError::Expired(requester.to_string())),
        };

        let available = session.candidates.len();
        if index == 0 || index > available {
            return Err(SessionError::InvalidSelection {
                requester: requester.to_string(),
                index,
                available,
            });
        }

        if !self.backend.remove_if_unchanged(requester, &session) {
            debug!(requester = %requester, "selection raced a newer session");
            return Err(SessionError::Superseded(requester.to_string()));
        }

        let mut candidates = session.candidates;
        let chosen = candidates.swap_remove(index - 1);

        debug!(requester = %requester, index, name = %chosen.name, "consumed selection");
        Ok(chosen)
    }

    /// Evict every expired session now. Returns how many were removed.
    pub fn sweep_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let policy = self.policy;
        let removed = self
            .backend
            .retain(&mut |_, session| !policy.is_expired(session.created_at_ms, now));
        if removed > 0 {
            debug!(removed, "swept expired sessions");
        }
        removed
    }

    fn load_live(&self, requester: &str) -> Live {
        loop {
            let Some(session) = self.backend.load(requester) else {
                return Live::Missing;
            };

            if !self
                .policy
                .is_expired(session.created_at_ms, self.clock.now_ms())
            {
                return Live::Active(session);
            }

            if self.backend.remove_if_unchanged(requester, &session) {
                debug!(requester = %requester, "evicted expired session");
                return Live::Expired;
            }
            // Replaced since the load; judge the replacement instead.
        }
    }
}

enum Live {
    Active(Session),
    Missing,
    Expired,
}
