//! Query resolution
//!
//! Tiered matching of a free-form query against an enriched level snapshot.
//! Each tier is only consulted when every tier before it came up empty:
//!
//! 1. Exact normalized name (exact)
//! 2. Acronym subsequence (exact)
//! 3. Mixed tokens: words, acronym fragments, dotted version prefixes
//! 4. Strict multiword: literal words, `v`-prefixed version prefixes
//! 5. Fuzzy similarity >= 0.72 (typos only)
//!
//! Tiers 3 and 4 break ties between several qualifiers with the version
//! number found in the query, if any.
//!
//! # Example
//!
//! ```rust
//! use levelrank_core::index::{LevelIndex, LevelRecord};
//! use levelrank_core::resolve::{Outcome, Resolver};
//!
//! let index = LevelIndex::build(&[
//!     LevelRecord::new("Generator v1.6.5", 3),
//!     LevelRecord::new("Generator v2.0", 9),
//! ]);
//!
//! let outcome = Resolver::new().resolve(&index, "generator v1.6").unwrap();
//! assert_eq!(outcome.resolved().unwrap().level.top, 3);
//!
//! let outcome = Resolver::new().resolve(&index, "generator").unwrap();
//! assert!(matches!(outcome, Outcome::Ambiguous { .. }));
//! ```

mod engine;
mod outcome;
mod tiers;

pub use engine::{resolve, AcronymAmbiguity, Resolver, ResolverConfig, DEFAULT_FUZZY_THRESHOLD};
pub use outcome::{Candidate, MatchTier, Outcome, Resolved};
