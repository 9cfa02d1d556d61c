//! levelrank core engine
//!
//! Resolves a free-form, user-typed level name against a ranked level list
//! supplied by an external source, and keeps the short-lived per-requester
//! state needed to disambiguate with a numeric follow-up.
//!
//! Fetching the list, talking to the chat platform, and rendering replies
//! are the caller's job; this crate only decides.
//!
//! # Modules
//!
//! - `text` - normalization, acronyms, edit-distance similarity
//! - `index` - record enrichment (`LevelIndex`)
//! - `resolve` - the tiered resolution pipeline (`Resolver`)
//! - `session` - TTL-bounded selection sessions (`SessionStore`)
//! - `lookup` - both of the above behind one call (`LevelLookup`)
//! - `config` - defaults and `LEVELRANK_*` environment overrides
//!
//! # Example
//!
//! ```rust
//! use levelrank_core::{LevelIndex, LevelLookup, LevelRecord, LookupReply, Outcome};
//!
//! let index = LevelIndex::build(&[
//!     LevelRecord::new("Realistic Variation", 5),
//!     LevelRecord::new("Reckless Velocity", 7),
//! ]);
//! let lookup = LevelLookup::new();
//!
//! // Two levels share the acronym, so the requester gets a list...
//! let reply = lookup.lookup("user-42", &index, "rv").unwrap();
//! assert!(matches!(reply, LookupReply::Resolved(Outcome::Ambiguous { .. })));
//!
//! // ...and answers with a number.
//! let reply = lookup.lookup("user-42", &index, "2").unwrap();
//! assert!(matches!(reply, LookupReply::Selected(c) if c.name == "Reckless Velocity"));
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod lookup;
pub mod resolve;
pub mod session;
pub mod text;

// Re-export main types at crate root
pub use config::{LevelRankConfig, SessionConfig};
pub use error::{LookupError, ResolveError, ResolveResult};
pub use index::{enrich, EnrichedLevel, LevelIndex, LevelRecord};
pub use lookup::{LevelLookup, LookupReply};
pub use resolve::{
    resolve, AcronymAmbiguity, Candidate, MatchTier, Outcome, Resolved, Resolver, ResolverConfig,
};
pub use session::{
    Clock, ExpiryPolicy, ManualClock, MemoryBackend, MonotonicClock, Session, SessionBackend,
    SessionError, SessionStore, SystemClock,
};
