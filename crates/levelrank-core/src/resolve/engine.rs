//! Resolver - tiered query resolution

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::outcome::{MatchTier, Outcome};
use super::tiers;
use crate::error::{ResolveError, ResolveResult};
use crate::index::{EnrichedLevel, LevelIndex, LevelRecord};
use crate::text::{extract_version, normalize};

/// Minimum similarity for a fuzzy match
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.72;

/// What the acronym tier does when several levels share the query letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcronymAmbiguity {
    /// Report the hits as candidates, like the token tiers do
    #[default]
    Surface,
    /// Report no match
    Collapse,
}

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub fuzzy_threshold: f64,
    pub acronym_ambiguity: AcronymAmbiguity,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            acronym_ambiguity: AcronymAmbiguity::Surface,
        }
    }
}

/// Resolves free-form queries against a [`LevelIndex`].
///
/// Tiers, tried in order until one yields a result:
///
/// 1. exact normalized name
/// 2. acronym subsequence (alphabetic queries only)
/// 3. mixed tokens: words, acronym fragments, version prefixes
/// 4. strict multiword: literal words and `v`-prefixed versions
/// 5. fuzzy edit-distance similarity
///
/// The resolver holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `query` against an enriched snapshot.
    ///
    /// Blank queries are rejected before any tier runs. A query that
    /// normalizes to nothing, such as `?!`, still reaches the exact tier so
    /// that punctuation-only names stay reachable.
    pub fn resolve(&self, index: &LevelIndex, query: &str) -> ResolveResult<Outcome> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ResolveError::InputRejected("empty query".to_string()));
        }

        let normalized = normalize(query);
        let outcome = self.run_tiers(index.levels(), query, &normalized);

        debug!(
            fingerprint = %index.fingerprint(),
            query = %normalized,
            tier = ?outcome.tier(),
            candidates = outcome.candidates().len(),
            "resolved query"
        );

        Ok(outcome)
    }

    fn run_tiers(&self, levels: &[EnrichedLevel], query: &str, normalized: &str) -> Outcome {
        // 1. Exact
        match tiers::exact_hits(levels, normalized).as_slice() {
            [] => {}
            [only] => return Outcome::unique(only, true, MatchTier::Exact),
            many => return Outcome::ambiguous(many, MatchTier::Exact),
        }

        // 2. Acronym
        if let Some(hits) = tiers::acronym_hits(levels, query) {
            match hits.as_slice() {
                [] => {}
                [only] => return Outcome::unique(only, true, MatchTier::Acronym),
                many => {
                    return match self.config.acronym_ambiguity {
                        AcronymAmbiguity::Surface => Outcome::ambiguous(many, MatchTier::Acronym),
                        AcronymAmbiguity::Collapse => Outcome::NoMatch,
                    }
                }
            }
        }

        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        let query_version = extract_version(query);

        // 3. Mixed tokens
        let hits = tiers::mixed_token_hits(levels, &tokens);
        if !hits.is_empty() {
            return settle(&hits, query_version.as_deref(), MatchTier::MixedToken);
        }

        // 4. Strict multiword
        let hits = tiers::strict_multiword_hits(levels, &tokens);
        if !hits.is_empty() {
            return settle(&hits, query_version.as_deref(), MatchTier::StrictMultiword);
        }

        // 5. Fuzzy
        match tiers::best_fuzzy(levels, normalized) {
            Some((level, score)) if score >= self.config.fuzzy_threshold => {
                debug!(name = %level.name, score, "fuzzy match");
                Outcome::unique(level, false, MatchTier::Fuzzy)
            }
            _ => Outcome::NoMatch,
        }
    }
}

/// One qualifier wins outright; several are narrowed by the query's version
/// if it has one, and otherwise returned as candidates.
fn settle(hits: &[&EnrichedLevel], query_version: Option<&str>, tier: MatchTier) -> Outcome {
    if let [only] = hits {
        return Outcome::unique(only, false, tier);
    }
    if let Some(level) = query_version.and_then(|version| tiers::version_tiebreak(hits, version)) {
        return Outcome::unique(level, false, tier);
    }
    Outcome::ambiguous(hits, tier)
}

/// Resolve `query` against a fresh index of `records` with the default
/// configuration.
pub fn resolve(records: &[LevelRecord], query: &str) -> ResolveResult<Outcome> {
    if query.trim().is_empty() {
        return Err(ResolveError::InputRejected("empty query".to_string()));
    }
    Resolver::new().resolve(&LevelIndex::build(records), query)
}
