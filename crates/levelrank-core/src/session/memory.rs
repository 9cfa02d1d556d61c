//! In-memory session backend
//!
//! A lock-guarded hash map. Sessions live only as long as the process,
//! which is all a five-minute selection window needs.

use ahash::AHashMap;
use parking_lot::Mutex;

use crate::session::traits::SessionBackend;
use crate::session::Session;

/// In-memory session backend.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    sessions: Mutex<AHashMap<String, Session>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(AHashMap::new()),
        }
    }

    /// Requester ids with a stored session (for testing).
    pub fn requesters(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.sessions.lock().keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self, requester: &str) -> Option<Session> {
        self.sessions.lock().get(requester).cloned()
    }

    fn store(&self, requester: &str, session: Session) {
        self.sessions.lock().insert(requester.to_string(), session);
    }

    fn remove_if_unchanged(&self, requester: &str, expected: &Session) -> bool {
        let mut sessions = self.sessions.lock();
        if sessions.get(requester) == Some(expected) {
            sessions.remove(requester);
            true
        } else {
            false
        }
    }

    fn retain(&self, keep: &mut dyn FnMut(&str, &Session) -> bool) -> usize {
        let mut sessions = self.sessions.lock();
        let before = sessions.len();
        sessions.retain(|requester, session| keep(requester, session));
        before - sessions.len()
    }

    fn len(&self) -> usize {
        self.sessions.lock().len()
    }
}
