//! Invariant tests for the index and the three search strategies
//!
//! These verify the algebraic properties every record set must satisfy:
//! postings exactness, ALL as a subset of ANY, NONE as the ascending
//! complement of ANY, idempotent evaluation, and duplicate-free results.

use std::collections::HashSet;

use linedex::{tokenize, InvertedIndex, RecordId, SearchService, SearchStrategy};

const STRATEGIES: [SearchStrategy; 3] = [
    SearchStrategy::All,
    SearchStrategy::Any,
    SearchStrategy::None,
];

fn fixture_records() -> Vec<String> {
    [
        "red apple",
        "green apple tart",
        "red red wine",
        "quiet green hills",
        "apple wine cellar",
        "hills of andalusia",
        "",
        "RED Apple APPLE",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

fn fixture_queries() -> Vec<&'static str> {
    vec![
        "apple",
        "red apple",
        "green hills wine",
        "zebra",
        "",
        "apple zebra",
        "RED WINE",
        "of",
    ]
}

fn setup_service() -> SearchService {
    SearchService::new(fixture_records())
}

#[test]
fn test_postings_contain_exactly_matching_records() {
    let records = fixture_records();
    let index = InvertedIndex::build(records.clone());

    let corpus_tokens: HashSet<String> =
        records.iter().flat_map(|record| tokenize(record)).collect();
    assert!(!corpus_tokens.is_empty());

    for token in &corpus_tokens {
        let posted: HashSet<RecordId> = index.postings(token).iter().copied().collect();
        let expected: HashSet<RecordId> = (0..records.len())
            .filter(|&i| tokenize(&records[i]).contains(token))
            .map(|i| i as RecordId)
            .collect();

        assert_eq!(posted, expected, "postings for token '{}'", token);
    }
}

#[test]
fn test_postings_ids_are_in_range() {
    let records = fixture_records();
    let index = InvertedIndex::build(records.clone());

    let corpus_tokens: HashSet<String> =
        records.iter().flat_map(|record| tokenize(record)).collect();

    for token in &corpus_tokens {
        for &id in index.postings(token) {
            assert!(
                (id as usize) < records.len(),
                "id {} out of range for token '{}'",
                id,
                token
            );
        }
    }
}

#[test]
fn test_all_results_are_subset_of_any() {
    let service = setup_service();

    for query in fixture_queries() {
        let all: HashSet<RecordId> = service
            .find_ids(query, SearchStrategy::All)
            .into_iter()
            .collect();
        let any: HashSet<RecordId> = service
            .find_ids(query, SearchStrategy::Any)
            .into_iter()
            .collect();

        assert!(all.is_subset(&any), "ALL not within ANY for '{}'", query);
    }
}

#[test]
fn test_none_is_ascending_complement_of_any() {
    let service = setup_service();
    let record_count = service.record_count() as RecordId;

    for query in fixture_queries() {
        let any: HashSet<RecordId> = service
            .find_ids(query, SearchStrategy::Any)
            .into_iter()
            .collect();
        let none = service.find_ids(query, SearchStrategy::None);

        let expected: Vec<RecordId> = (0..record_count).filter(|id| !any.contains(id)).collect();
        assert_eq!(none, expected, "NONE complement for '{}'", query);
    }
}

#[test]
fn test_results_are_duplicate_free() {
    let service = setup_service();

    for query in fixture_queries() {
        for strategy in STRATEGIES {
            let ids = service.find_ids(query, strategy);
            let distinct: HashSet<RecordId> = ids.iter().copied().collect();

            assert_eq!(
                distinct.len(),
                ids.len(),
                "{} repeated an id for '{}'",
                strategy,
                query
            );
        }
    }
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let service = setup_service();

    for query in fixture_queries() {
        for strategy in STRATEGIES {
            let first = service.find_ids(query, strategy);
            let second = service.find_ids(query, strategy);

            assert_eq!(first, second, "{} not stable for '{}'", strategy, query);
        }
    }
}

#[test]
fn test_results_map_back_to_original_text() {
    let service = setup_service();
    let records = fixture_records();

    for query in fixture_queries() {
        for strategy in STRATEGIES {
            let ids = service.find_ids(query, strategy);
            let texts = service.find(query, strategy);

            let expected: Vec<&str> = ids.iter().map(|&id| records[id as usize].as_str()).collect();
            assert_eq!(texts, expected, "{} text mapping for '{}'", strategy, query);
        }
    }
}
