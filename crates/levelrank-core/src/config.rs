//! Runtime configuration
//!
//! Defaults can be overridden from the environment:
//! - `LEVELRANK_FUZZY_THRESHOLD`: minimum fuzzy similarity 0.0-1.0 (default: 0.72)
//! - `LEVELRANK_ACRONYM_AMBIGUITY`: `surface` or `collapse` (default: surface)
//! - `LEVELRANK_SESSION_TTL_MS`: selection window in ms (default: 300000)
//!
//! Hosts that keep their own config file can embed [`LevelRankConfig`]
//! directly; every section deserializes with defaults for missing fields.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::resolve::{AcronymAmbiguity, ResolverConfig};
use crate::session::{ExpiryPolicy, DEFAULT_SESSION_TTL_MS};

pub const ENV_FUZZY_THRESHOLD: &str = "LEVELRANK_FUZZY_THRESHOLD";
pub const ENV_ACRONYM_AMBIGUITY: &str = "LEVELRANK_ACRONYM_AMBIGUITY";
pub const ENV_SESSION_TTL_MS: &str = "LEVELRANK_SESSION_TTL_MS";

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub ttl_ms: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_ms: DEFAULT_SESSION_TTL_MS,
        }
    }
}

impl SessionConfig {
    pub fn expiry_policy(&self) -> ExpiryPolicy {
        ExpiryPolicy::new(self.ttl_ms)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelRankConfig {
    pub resolver: ResolverConfig,
    pub session: SessionConfig,
}

impl LevelRankConfig {
    /// Defaults overridden by `LEVELRANK_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// Values that fail to parse, or fall outside their valid range, are
    /// logged and ignored.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(threshold) = parse_var::<f64>(&lookup, ENV_FUZZY_THRESHOLD) {
            if (0.0..=1.0).contains(&threshold) {
                config.resolver.fuzzy_threshold = threshold;
            } else {
                warn!(
                    key = ENV_FUZZY_THRESHOLD,
                    value = threshold,
                    "fuzzy threshold must be within 0.0-1.0, keeping default"
                );
            }
        }

        if let Some(policy) = parse_var::<AcronymAmbiguity>(&lookup, ENV_ACRONYM_AMBIGUITY) {
            config.resolver.acronym_ambiguity = policy;
        }

        if let Some(ttl_ms) = parse_var::<i64>(&lookup, ENV_SESSION_TTL_MS) {
            if ttl_ms >= 0 {
                config.session.ttl_ms = ttl_ms;
            } else {
                warn!(
                    key = ENV_SESSION_TTL_MS,
                    value = ttl_ms,
                    "session TTL cannot be negative, keeping default"
                );
            }
        }

        config
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, value = %raw, error = %e, "ignoring invalid setting");
            None
        }
    }
}

/// Unrecognized acronym ambiguity policy name
#[derive(Debug, Clone, Error, PartialEq)]
#[error("unknown acronym ambiguity policy '{0}' (expected 'surface' or 'collapse')")]
pub struct UnknownPolicy(pub String);

impl FromStr for AcronymAmbiguity {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "surface" => Ok(Self::Surface),
            "collapse" => Ok(Self::Collapse),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
