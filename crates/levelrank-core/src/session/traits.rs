//! Session backend and clock abstractions

use crate::session::Session;

/// Key-value storage for disambiguation sessions, keyed by requester id.
///
/// Backends know nothing about expiry; [`super::SessionStore`] applies the
/// TTL policy on top. Methods take `&self` so a single backend can be shared
/// between concurrent requests.
pub trait SessionBackend {
    /// Fetch the session for a requester.
    fn load(&self, requester: &str) -> Option<Session>;

    /// Store a session, replacing any existing one.
    fn store(&self, requester: &str, session: Session);

    /// Delete the requester's session only if it still equals `expected`.
    ///
    /// Returns false when the session is gone or was replaced since it was
    /// loaded; a replacement must survive. The compare and the delete must
    /// be atomic.
    fn remove_if_unchanged(&self, requester: &str, expected: &Session) -> bool;

    /// Keep only sessions for which `keep` returns true.
    ///
    /// Returns the number of sessions removed.
    fn retain(&self, keep: &mut dyn FnMut(&str, &Session) -> bool) -> usize;

    /// Number of stored sessions, expired ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Millisecond clock used to stamp and age sessions.
pub trait Clock {
    fn now_ms(&self) -> i64;
}
