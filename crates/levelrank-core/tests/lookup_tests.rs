//! End-to-end lookup tests: resolution feeding the session store

use levelrank_core::{
    Candidate, ExpiryPolicy, LevelIndex, LevelLookup, LevelRankConfig, LevelRecord, LookupError,
    LookupReply, ManualClock, MatchTier, MemoryBackend, Outcome, ResolveError, Resolver,
    SessionError, SessionStore,
};
use pretty_assertions::assert_eq;

const TTL_MS: i64 = 300_000;

/// Helper to create a lookup on a manual clock
fn create_lookup() -> LevelLookup<MemoryBackend, ManualClock> {
    LevelLookup::with_parts(
        Resolver::new(),
        SessionStore::new(
            MemoryBackend::new(),
            ManualClock::new(0),
            ExpiryPolicy::new(TTL_MS),
        ),
    )
}

fn create_index() -> LevelIndex {
    LevelIndex::build(&[
        LevelRecord::new("Generator v1.6.5", 3),
        LevelRecord::new("Realistic Variation", 5),
        LevelRecord::new("Reckless Velocity", 7),
        LevelRecord::new("Generator v2.0", 9),
        LevelRecord::new("42", 11),
    ])
}

fn candidate(name: &str, top: i64) -> Candidate {
    Candidate {
        name: name.to_string(),
        top,
    }
}

#[test]
fn test_ambiguous_then_select() {
    let lookup = create_lookup();
    let index = create_index();

    let reply = lookup.lookup("alice", &index, "generator").unwrap();
    assert_eq!(
        reply,
        LookupReply::Resolved(Outcome::Ambiguous {
            candidates: vec![candidate("Generator v1.6.5", 3), candidate("Generator v2.0", 9)],
            tier: MatchTier::MixedToken,
        })
    );

    let reply = lookup.lookup("alice", &index, " 2 ").unwrap();
    assert_eq!(reply, LookupReply::Selected(candidate("Generator v2.0", 9)));
    assert!(lookup.sessions().get("alice").is_none());
}

#[test]
fn test_unique_match_opens_no_session() {
    let lookup = create_lookup();
    let index = create_index();

    let reply = lookup.lookup("alice", &index, "generator v1.6").unwrap();
    match reply {
        LookupReply::Resolved(Outcome::Unique(resolved)) => {
            assert_eq!(resolved.level.top, 3);
            assert!(!resolved.exact);
        }
        other => panic!("expected a unique match, got {:?}", other),
    }
    assert!(lookup.sessions().get("alice").is_none());
}

#[test]
fn test_out_of_range_selection_keeps_list() {
    let lookup = create_lookup();
    let index = create_index();
    lookup.lookup("alice", &index, "rv").unwrap();

    let err = lookup.lookup("alice", &index, "5").unwrap_err();
    assert_eq!(
        err,
        LookupError::Session(SessionError::InvalidSelection {
            requester: "alice".into(),
            index: 5,
            available: 2,
        })
    );

    let err = lookup
        .lookup("alice", &index, "99999999999999999999999999")
        .unwrap_err();
    assert!(matches!(
        err,
        LookupError::Session(SessionError::InvalidSelection { .. })
    ));

    let reply = lookup.lookup("alice", &index, "1").unwrap();
    assert_eq!(reply, LookupReply::Selected(candidate("Realistic Variation", 5)));
}

#[test]
fn test_number_without_session_is_resolved() {
    let lookup = create_lookup();
    let index = create_index();

    let reply = lookup.lookup("alice", &index, "42").unwrap();
    match reply {
        LookupReply::Resolved(Outcome::Unique(resolved)) => {
            assert_eq!(resolved.level.name, "42");
            assert!(resolved.exact);
        }
        other => panic!("expected the level named 42, got {:?}", other),
    }
}

#[test]
fn test_expired_session_falls_back_to_resolution() {
    let lookup = create_lookup();
    let index = create_index();
    lookup.lookup("alice", &index, "generator").unwrap();

    lookup.sessions().clock().advance(TTL_MS + 1);

    // "2" is no longer a selection; as text it is a version prefix.
    let reply = lookup.lookup("alice", &index, "2").unwrap();
    match reply {
        LookupReply::Resolved(Outcome::Unique(resolved)) => {
            assert_eq!(resolved.level.name, "Generator v2.0");
        }
        other => panic!("expected a resolved version match, got {:?}", other),
    }
    assert!(lookup.sessions().backend().requesters().is_empty());
}

#[test]
fn test_sessions_are_per_requester() {
    let lookup = create_lookup();
    let index = create_index();
    lookup.lookup("alice", &index, "generator").unwrap();
    lookup.lookup("bob", &index, "rv").unwrap();

    assert_eq!(
        lookup.lookup("bob", &index, "2").unwrap(),
        LookupReply::Selected(candidate("Reckless Velocity", 7))
    );
    assert_eq!(
        lookup.lookup("alice", &index, "1").unwrap(),
        LookupReply::Selected(candidate("Generator v1.6.5", 3))
    );
}

#[test]
fn test_newer_ambiguity_replaces_pending_list() {
    let lookup = create_lookup();
    let index = create_index();
    lookup.lookup("alice", &index, "generator").unwrap();
    lookup.lookup("alice", &index, "rv").unwrap();

    assert_eq!(
        lookup.lookup("alice", &index, "1").unwrap(),
        LookupReply::Selected(candidate("Realistic Variation", 5))
    );
}

#[test]
fn test_empty_query_touches_nothing() {
    let lookup = create_lookup();
    let index = create_index();

    let err = lookup.lookup("alice", &index, "   ").unwrap_err();
    assert!(matches!(
        err,
        LookupError::Resolve(ResolveError::InputRejected(_))
    ));
    assert!(lookup.sessions().backend().requesters().is_empty());
}

#[test]
fn test_from_config_applies_policy() {
    let config = LevelRankConfig::from_vars(|key| match key {
        "LEVELRANK_ACRONYM_AMBIGUITY" => Some("collapse".to_string()),
        _ => None,
    });
    let lookup = LevelLookup::from_config(&config);

    let reply = lookup.lookup("alice", &create_index(), "rv").unwrap();
    assert_eq!(reply, LookupReply::Resolved(Outcome::NoMatch));
    assert!(lookup.sessions().get("alice").is_none());
}
