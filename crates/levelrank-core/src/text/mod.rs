//! Text primitives shared by the indexer and the resolver
//!
//! - **normalize**: lowercasing, punctuation stripping, tokenization and
//!   version extraction
//! - **acronym**: acronym construction and ordered-subsequence matching
//! - **similarity**: edit-distance similarity for typo tolerance
//!
//! # Example
//!
//! ```rust
//! use levelrank_core::text::{generate_acronym, matches_acronym_query, normalize};
//!
//! assert_eq!(normalize("Hopeless Pursuit!"), "hopeless pursuit");
//! assert_eq!(generate_acronym("Hopeless Pursuit"), "HP");
//! assert!(matches_acronym_query("HPRVNPG", "HP"));
//! ```

mod acronym;
mod normalize;
mod similarity;

pub use acronym::{generate_acronym, matches_acronym_query};
pub use normalize::{
    extract_version, is_alphabetic, is_dotted_number, is_version_token, normalize, tokenize,
};
pub use similarity::similarity;
