//! Level indexing
//!
//! Turns the raw ranked records handed over by the data source into the
//! enriched, searchable form the resolver works on. An index is a pure
//! function of one record snapshot: build a new one whenever the records
//! change, and never mutate one while matching.

use std::hash::{Hash, Hasher};

use ahash::AHasher;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ResolveError, ResolveResult};
use crate::text::{extract_version, generate_acronym, normalize};

/// A ranked record as delivered by the external list.
///
/// Only `name` and `top` are read; any other field is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub top: i64,
}

impl LevelRecord {
    pub fn new(name: impl Into<String>, top: i64) -> Self {
        Self {
            name: Some(name.into()),
            top,
        }
    }

    /// A record whose name is missing from the payload.
    pub fn unnamed(top: i64) -> Self {
        Self { name: None, top }
    }
}

/// A record with its precomputed matching keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedLevel {
    pub name: String,
    pub top: i64,
    pub normalized_name: String,
    pub normalized_words: Vec<String>,
    /// One uppercase letter per normalized word, in word order
    pub acronym: String,
    /// Digits of the first version number in the name (`"1.6.5"`)
    pub version: Option<String>,
}

impl EnrichedLevel {
    fn from_named(name: &str, top: i64) -> Self {
        let normalized_name = normalize(name);
        let normalized_words: Vec<String> = normalized_name
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let acronym = generate_acronym(&normalized_name);
        let version = extract_version(name);

        Self {
            name: name.to_string(),
            top,
            normalized_name,
            normalized_words,
            acronym,
            version,
        }
    }

    /// Literal membership in the word list.
    pub fn has_word(&self, token: &str) -> bool {
        self.normalized_words.iter().any(|w| w == token)
    }

    /// True when `prefix` is a string prefix of this level's version.
    pub fn version_starts_with(&self, prefix: &str) -> bool {
        self.version
            .as_deref()
            .is_some_and(|version| version.starts_with(prefix))
    }
}

/// Enrich records, dropping those without a usable name.
///
/// Input order is preserved.
pub fn enrich(records: &[LevelRecord]) -> Vec<EnrichedLevel> {
    records
        .iter()
        .filter_map(|record| match record.name.as_deref() {
            Some(name) if !name.is_empty() => Some(EnrichedLevel::from_named(name, record.top)),
            _ => None,
        })
        .collect()
}

/// An enriched snapshot of the record list.
#[derive(Debug, Clone, Serialize)]
pub struct LevelIndex {
    levels: Vec<EnrichedLevel>,
    fingerprint: String,
}

impl LevelIndex {
    /// Enrich a record snapshot.
    pub fn build(records: &[LevelRecord]) -> Self {
        let levels = enrich(records);
        let fingerprint = compute_fingerprint(records);

        debug!(
            fingerprint = %fingerprint,
            records = records.len(),
            levels = levels.len(),
            "built level index"
        );

        Self {
            levels,
            fingerprint,
        }
    }

    /// Build from a decoded JSON payload.
    ///
    /// The payload must be an array of objects with an integer `top` and a
    /// string (or null, or missing) `name`. Anything else is a contract break
    /// with the data source and is reported rather than skipped.
    pub fn from_json(payload: &Value) -> ResolveResult<Self> {
        let records = records_from_json(payload).inspect_err(|e| {
            warn!(error = %e, "rejected record payload");
        })?;
        Ok(Self::build(&records))
    }

    /// Build from a raw JSON document.
    pub fn from_json_str(payload: &str) -> ResolveResult<Self> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| ResolveError::MalformedRecordSet(format!("invalid JSON: {}", e)))?;
        Self::from_json(&value)
    }

    pub fn levels(&self) -> &[EnrichedLevel] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Hex hash of the record snapshot, for log correlation.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn records_from_json(payload: &Value) -> ResolveResult<Vec<LevelRecord>> {
    let items = payload.as_array().ok_or_else(|| {
        ResolveError::MalformedRecordSet(format!("expected an array, found {}", kind_of(payload)))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            if !item.is_object() {
                return Err(ResolveError::MalformedRecordSet(format!(
                    "element {} is {}, expected an object",
                    idx,
                    kind_of(item)
                )));
            }
            LevelRecord::deserialize(item)
                .map_err(|e| ResolveError::MalformedRecordSet(format!("element {}: {}", idx, e)))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn compute_fingerprint(records: &[LevelRecord]) -> String {
    let mut hasher = AHasher::default();
    for record in records {
        record.name.hash(&mut hasher);
        record.top.hash(&mut hasher);
    }
    format!("{:016x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_enrich_computes_keys() {
        let levels = enrich(&[LevelRecord::new("Generator v1.6.5", 3)]);
        assert_eq!(
            levels,
            vec![EnrichedLevel {
                name: "Generator v1.6.5".to_string(),
                top: 3,
                normalized_name: "generator v1.6.5".to_string(),
                normalized_words: vec!["generator".to_string(), "v1.6.5".to_string()],
                acronym: "GV".to_string(),
                version: Some("1.6.5".to_string()),
            }]
        );
    }

    #[test]
    fn test_enrich_drops_unnamed_and_keeps_order() {
        let records = vec![
            LevelRecord::new("Bravo", 2),
            LevelRecord::unnamed(1),
            LevelRecord::new("", 4),
            LevelRecord::new("Alpha", 3),
        ];
        let enriched = enrich(&records);
        let names: Vec<&str> = enriched.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Bravo", "Alpha"]);
    }

    #[test]
    fn test_enrich_is_deterministic() {
        let records = vec![LevelRecord::new("Hopeless Pursuit", 1)];
        assert_eq!(enrich(&records), enrich(&records));
        assert_eq!(
            LevelIndex::build(&records).fingerprint(),
            LevelIndex::build(&records).fingerprint()
        );
    }

    #[test]
    fn test_fingerprint_tracks_changes() {
        let a = LevelIndex::build(&[LevelRecord::new("Hopeless Pursuit", 1)]);
        let b = LevelIndex::build(&[LevelRecord::new("Hopeless Pursuit", 2)]);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_from_json_ignores_extra_fields() {
        let payload = json!([
            {"name": "Hopeless Pursuit", "top": 1, "creator": "someone"},
            {"name": null, "top": 2},
            {"top": 3}
        ]);
        let index = LevelIndex::from_json(&payload).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.levels()[0].name, "Hopeless Pursuit");
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let err = LevelIndex::from_json(&json!({"levels": []})).unwrap_err();
        assert!(matches!(err, ResolveError::MalformedRecordSet(_)));
    }

    #[test]
    fn test_from_json_rejects_non_object_element() {
        let err = LevelIndex::from_json(&json!([{"name": "A", "top": 1}, ["B", 2]])).unwrap_err();
        assert_eq!(
            err,
            ResolveError::MalformedRecordSet("element 1 is an array, expected an object".into())
        );
    }

    #[test]
    fn test_from_json_rejects_bad_top() {
        let err = LevelIndex::from_json(&json!([{"name": "A", "top": "first"}])).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::MalformedRecordSet(msg) if msg.starts_with("element 0")
        ));
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        assert!(LevelIndex::from_json_str("not json").is_err());
        assert!(LevelIndex::from_json_str("[]").unwrap().is_empty());
    }
}
