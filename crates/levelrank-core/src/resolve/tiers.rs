//! Matching tiers
//!
//! Each tier reports the levels that qualify under its own rule; the engine
//! decides what a given number of qualifiers means.

use crate::index::EnrichedLevel;
use crate::text::{
    extract_version, is_alphabetic, is_dotted_number, is_version_token, matches_acronym_query,
    similarity,
};

/// Levels whose normalized name equals the normalized query
pub fn exact_hits<'a>(
    levels: &'a [EnrichedLevel],
    normalized_query: &str,
) -> Vec<&'a EnrichedLevel> {
    levels
        .iter()
        .filter(|level| level.normalized_name == normalized_query)
        .collect()
}

/// Levels whose acronym contains the query letters as a subsequence.
///
/// Returns `None` when the tier does not apply: the query, with whitespace
/// removed, must be purely alphabetic.
pub fn acronym_hits<'a>(
    levels: &'a [EnrichedLevel],
    query: &str,
) -> Option<Vec<&'a EnrichedLevel>> {
    let letters: String = query.chars().filter(|c| !c.is_whitespace()).collect();
    if !is_alphabetic(&letters) {
        return None;
    }

    Some(
        levels
            .iter()
            .filter(|level| matches_acronym_query(&level.acronym, &letters))
            .collect(),
    )
}

/// Mixed-token rule for a single query token.
///
/// - dotted numbers must prefix the level's version
/// - words of two or more letters may hit a word or the acronym
/// - anything else must be a literal word
#[inline]
pub fn mixed_token_accepts(level: &EnrichedLevel, token: &str) -> bool {
    if is_dotted_number(token) {
        level.version_starts_with(token)
    } else if is_alphabetic(token) && token.len() >= 2 {
        level.has_word(token) || matches_acronym_query(&level.acronym, token)
    } else {
        level.has_word(token)
    }
}

/// Strict rule for a single query token: a literal word, or for version
/// strings (`v1.6`, `1.6`) a prefix of the level's version.
#[inline]
pub fn strict_token_accepts(level: &EnrichedLevel, token: &str) -> bool {
    if level.has_word(token) {
        return true;
    }
    if is_version_token(token) {
        if let Some(digits) = extract_version(token) {
            return level.version_starts_with(&digits);
        }
    }
    false
}

/// Levels accepting every token under the mixed-token rule
pub fn mixed_token_hits<'a>(
    levels: &'a [EnrichedLevel],
    tokens: &[&str],
) -> Vec<&'a EnrichedLevel> {
    qualifying(levels, tokens, mixed_token_accepts)
}

/// Levels accepting every token under the strict rule
pub fn strict_multiword_hits<'a>(
    levels: &'a [EnrichedLevel],
    tokens: &[&str],
) -> Vec<&'a EnrichedLevel> {
    qualifying(levels, tokens, strict_token_accepts)
}

fn qualifying<'a>(
    levels: &'a [EnrichedLevel],
    tokens: &[&str],
    accepts: fn(&EnrichedLevel, &str) -> bool,
) -> Vec<&'a EnrichedLevel> {
    if tokens.is_empty() {
        return Vec::new();
    }
    levels
        .iter()
        .filter(|level| tokens.iter().all(|token| accepts(level, token)))
        .collect()
}

/// Highest-similarity level; the first one wins ties.
pub fn best_fuzzy<'a>(
    levels: &'a [EnrichedLevel],
    normalized_query: &str,
) -> Option<(&'a EnrichedLevel, f64)> {
    let mut best: Option<(&EnrichedLevel, f64)> = None;
    for level in levels {
        let score = similarity(normalized_query, &level.normalized_name);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((level, score));
        }
    }
    best
}

/// Among several qualifiers, the first whose version starts with
/// `query_version`.
pub fn version_tiebreak<'a>(
    hits: &[&'a EnrichedLevel],
    query_version: &str,
) -> Option<&'a EnrichedLevel> {
    hits.iter()
        .copied()
        .find(|level| level.version_starts_with(query_version))
}
