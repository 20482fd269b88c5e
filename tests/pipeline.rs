//! Scenario tests for the ranking pipeline, using the public library API.

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use revu::models::{Candidate, CommitRecord, FileHistory, IgnoreList, Selection};
use revu::{rank, sample};

fn record(commits: u32, identity: &str) -> CommitRecord {
    CommitRecord {
        commits,
        identity: identity.to_string(),
    }
}

fn candidates(pairs: &[(&str, u32)]) -> Vec<Candidate> {
    pairs
        .iter()
        .map(|(identity, commits)| Candidate::new(*identity, *commits))
        .collect()
}

// ---------------------------------------------------------------------------
// Selection scenarios
// ---------------------------------------------------------------------------

#[test]
fn top_two_with_truncated_others() {
    let ranked = candidates(&[("alice", 10), ("bob", 7), ("carol", 7), ("dave", 1)]);
    let Selection { selected, others } = rank::select(ranked, 2, false);

    assert_eq!(selected, candidates(&[("alice", 10), ("bob", 7)]));
    assert_eq!(others, candidates(&[("carol", 7), ("dave", 1)]));
}

#[test]
fn selection_length_properties() {
    let ranked = candidates(&[
        ("a", 9),
        ("b", 8),
        ("c", 7),
        ("d", 6),
        ("e", 5),
        ("f", 4),
        ("g", 3),
        ("h", 2),
        ("i", 1),
    ]);

    for num in 0..=ranked.len() + 2 {
        let selection = rank::select(ranked.clone(), num, false);
        let expected_selected = num.min(ranked.len());
        assert_eq!(selection.selected.len(), expected_selected);
        assert_eq!(
            selection.others.len(),
            (ranked.len() - expected_selected).min(5)
        );

        let selection = rank::select(ranked.clone(), num, true);
        assert_eq!(selection.others.len(), ranked.len() - expected_selected);
    }
}

// ---------------------------------------------------------------------------
// Aggregation scenarios
// ---------------------------------------------------------------------------

#[test]
fn per_file_records_aggregate_with_encounter_order_tiebreak() {
    // a.js: alice×3; b.js: alice×2, bob×5. Both total 5, but alice's
    // group was formed first, so alice ranks first on the tie.
    let histories = vec![
        FileHistory::Records(vec![record(3, "alice")]),
        FileHistory::Records(vec![record(2, "alice"), record(5, "bob")]),
    ];
    let ranked = rank::aggregate(&histories, &IgnoreList::new("", vec![]));

    assert_eq!(ranked, candidates(&[("alice", 5), ("bob", 5)]));
}

#[test]
fn ignore_terms_exclude_by_substring() {
    let histories = vec![FileHistory::Records(vec![
        record(4, "alice-test"),
        record(2, "bob"),
    ])];
    let ignore = IgnoreList::new("someone-else", vec!["alice".to_string()]);
    let ranked = rank::aggregate(&histories, &ignore);

    assert_eq!(ranked, candidates(&[("bob", 2)]));
    for term in ignore.terms() {
        for candidate in &ranked {
            assert!(!candidate.identity.contains(term.as_str()));
        }
    }
}

#[test]
fn aggregation_twice_yields_identical_output() {
    let histories = vec![
        FileHistory::Records(vec![record(3, "alice"), record(3, "carol")]),
        FileHistory::QueryFailed("file removed".to_string()),
        FileHistory::Records(vec![record(5, "bob"), record(1, "alice")]),
    ];
    let ignore = IgnoreList::new("me", vec![]);

    assert_eq!(
        rank::aggregate(&histories, &ignore),
        rank::aggregate(&histories, &ignore)
    );
}

#[test]
fn ranked_counts_are_descending() {
    let histories = vec![FileHistory::Records(vec![
        record(1, "dave"),
        record(10, "alice"),
        record(7, "bob"),
        record(7, "carol"),
    ])];
    let ranked = rank::aggregate(&histories, &IgnoreList::new("", vec![]));

    for pair in ranked.windows(2) {
        assert!(pair[0].commits >= pair[1].commits);
    }
}

// ---------------------------------------------------------------------------
// Sampling properties
// ---------------------------------------------------------------------------

#[test]
fn small_change_sets_pass_through_in_order() {
    let files: Vec<String> = (0..100).map(|i| format!("f{i}")).collect();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(sample::sample(&files, 150, &mut rng), files);
}

#[test]
fn large_change_sets_are_capped_without_duplicates() {
    let files: Vec<String> = (0..400).map(|i| format!("f{i}")).collect();
    let mut rng = StdRng::seed_from_u64(0);
    let sampled = sample::sample(&files, 150, &mut rng);

    assert_eq!(sampled.len(), 150);
    let unique: std::collections::HashSet<_> = sampled.iter().collect();
    assert_eq!(unique.len(), sampled.len());
    assert!(sampled.iter().all(|f| files.contains(f)));
}
