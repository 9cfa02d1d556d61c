//! Resolution outcomes

use serde::{Deserialize, Serialize};

use crate::index::EnrichedLevel;

/// Pipeline stage that produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Acronym,
    MixedToken,
    StrictMultiword,
    Fuzzy,
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Acronym => write!(f, "acronym"),
            Self::MixedToken => write!(f, "mixed_token"),
            Self::StrictMultiword => write!(f, "strict_multiword"),
            Self::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// A name and rank offered to the requester for disambiguation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub top: i64,
}

impl From<&EnrichedLevel> for Candidate {
    fn from(level: &EnrichedLevel) -> Self {
        Self {
            name: level.name.clone(),
            top: level.top,
        }
    }
}

/// A single confident match.
///
/// `exact` is false when the match was inferred (partial words, version
/// tiebreak, typo tolerance) and the front end should phrase it as a guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub level: EnrichedLevel,
    pub exact: bool,
    pub tier: MatchTier,
}

/// Result of resolving one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Unique(Resolved),
    Ambiguous {
        candidates: Vec<Candidate>,
        tier: MatchTier,
    },
    NoMatch,
}

impl Outcome {
    pub(crate) fn unique(level: &EnrichedLevel, exact: bool, tier: MatchTier) -> Self {
        Self::Unique(Resolved {
            level: level.clone(),
            exact,
            tier,
        })
    }

    pub(crate) fn ambiguous(levels: &[&EnrichedLevel], tier: MatchTier) -> Self {
        Self::Ambiguous {
            candidates: levels.iter().map(|level| Candidate::from(*level)).collect(),
            tier,
        }
    }

    /// The single match, if there is one.
    pub fn resolved(&self) -> Option<&Resolved> {
        match self {
            Self::Unique(resolved) => Some(resolved),
            _ => None,
        }
    }

    /// Candidates awaiting a selection; empty unless ambiguous.
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            Self::Ambiguous { candidates, .. } => candidates,
            _ => &[],
        }
    }

    pub fn tier(&self) -> Option<MatchTier> {
        match self {
            Self::Unique(resolved) => Some(resolved.tier),
            Self::Ambiguous { tier, .. } => Some(*tier),
            Self::NoMatch => None,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}
