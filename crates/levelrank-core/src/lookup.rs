//! Lookup entry point
//!
//! Ties the resolver to the session store the way a `!rank <name>` command
//! uses them: a bare number answers the requester's pending list, anything
//! else is resolved, and ambiguous results open a new pending list.

use serde::Serialize;
use tracing::debug;

use crate::config::LevelRankConfig;
use crate::error::LookupError;
use crate::index::LevelIndex;
use crate::resolve::{Candidate, Outcome, Resolver};
use crate::session::{Clock, MemoryBackend, MonotonicClock, SessionBackend, SessionStore};

/// What a lookup produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum LookupReply {
    /// The requester picked an entry from their pending list
    Selected(Candidate),
    /// The query went through the resolver
    Resolved(Outcome),
}

/// Resolver plus per-requester sessions.
#[derive(Debug)]
pub struct LevelLookup<B = MemoryBackend, C = MonotonicClock> {
    resolver: Resolver,
    sessions: SessionStore<B, C>,
}

impl LevelLookup {
    /// Default resolver and an in-memory session store.
    pub fn new() -> Self {
        Self::from_config(&LevelRankConfig::default())
    }

    pub fn from_config(config: &LevelRankConfig) -> Self {
        Self::with_parts(
            Resolver::with_config(config.resolver.clone()),
            SessionStore::new(
                MemoryBackend::new(),
                MonotonicClock::new(),
                config.session.expiry_policy(),
            ),
        )
    }
}

impl Default for LevelLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: SessionBackend, C: Clock> LevelLookup<B, C> {
    pub fn with_parts(resolver: Resolver, sessions: SessionStore<B, C>) -> Self {
        Self { resolver, sessions }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn sessions(&self) -> &SessionStore<B, C> {
        &self.sessions
    }

    /// Handle one query from `requester` against the current snapshot.
    ///
    /// A query made only of digits is a selection when the requester has a
    /// live pending list; an out-of-range number is an error and leaves the
    /// list in place. Without a live list the digits are resolved like any
    /// other name.
    pub fn lookup(
        &self,
        requester: &str,
        index: &LevelIndex,
        query: &str,
    ) -> Result<LookupReply, LookupError> {
        let query = query.trim();

        if is_selection(query) && self.sessions.get(requester).is_some() {
            // Digits too long for usize are simply out of range.
            let choice = query.parse::<usize>().unwrap_or(usize::MAX);
            let candidate = self.sessions.consume_selection(requester, choice)?;
            return Ok(LookupReply::Selected(candidate));
        }

        let outcome = self.resolver.resolve(index, query)?;

        if let Outcome::Ambiguous { candidates, tier } = &outcome {
            debug!(
                requester = %requester,
                tier = %tier,
                candidates = candidates.len(),
                "awaiting selection"
            );
            self.sessions.put(requester, candidates.clone());
        }

        Ok(LookupReply::Resolved(outcome))
    }
}

fn is_selection(query: &str) -> bool {
    !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit())
}
