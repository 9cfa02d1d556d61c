//! Disambiguation sessions
//!
//! When a query is ambiguous the candidates are parked here, keyed by the
//! requester, so that a follow-up numeric reply can pick one. The pieces are
//! injected separately:
//!
//! - **Backend**: where sessions live (`SessionBackend`, `MemoryBackend`)
//! - **Clock**: how sessions are stamped and aged (`Clock`, `MonotonicClock`,
//!   `SystemClock`, `ManualClock`)
//! - **Policy**: when a session is too old (`ExpiryPolicy`, 5 minutes by
//!   default)
//!
//! # Example
//!
//! ```rust
//! use levelrank_core::resolve::Candidate;
//! use levelrank_core::session::SessionStore;
//!
//! let store = SessionStore::in_memory();
//! store.put(
//!     "user-42",
//!     vec![
//!         Candidate { name: "Realistic Variation".into(), top: 5 },
//!         Candidate { name: "Reckless Velocity".into(), top: 7 },
//!     ],
//! );
//!
//! let chosen = store.consume_selection("user-42", 2).unwrap();
//! assert_eq!(chosen.top, 7);
//! assert!(store.get("user-42").is_none());
//! ```

mod clock;
mod error;
mod memory;
mod store;
mod traits;

pub use clock::{ManualClock, MonotonicClock, SystemClock};
pub use error::{SessionError, SessionResult};
pub use memory::MemoryBackend;
pub use store::{ExpiryPolicy, Session, SessionStore, DEFAULT_SESSION_TTL_MS};
pub use traits::{Clock, SessionBackend};
