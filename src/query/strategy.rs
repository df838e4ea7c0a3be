//! Tagged strategy enum and the pure evaluation behind it
//!
//! Strategies carry no state of their own, so dispatch is a plain enum
//! match instead of a trait-object hierarchy. Postings lists can repeat a
//! record id (one append per occurrence at build time); every result here
//! is deduplicated with a stable, deterministic order.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LinedexError;
use crate::index::{InvertedIndex, RecordId};

/// How per-token postings lists combine into one result set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchStrategy {
    /// Matching records contain every recognized query token (intersection)
    All,
    /// Matching records contain at least one recognized query token (union)
    Any,
    /// Matching records contain none of the recognized query tokens
    None,
}

impl SearchStrategy {
    /// Evaluate this strategy for a tokenized query against the index
    ///
    /// The returned ids are duplicate-free. Ordering:
    /// - `All` follows the first recognized token's postings order;
    /// - `Any` is left-to-right first-occurrence order across the lists;
    /// - `None` is always ascending over `0..record_count`, so an empty or
    ///   fully-unrecognized query returns every record ("show everything
    ///   not excluded").
    pub fn evaluate(&self, tokens: &[String], index: &InvertedIndex) -> Vec<RecordId> {
        let lists = collect_postings(tokens, index);
        match self {
            SearchStrategy::All => intersect(&lists),
            SearchStrategy::Any => union(&lists),
            SearchStrategy::None => complement(&union(&lists), index.record_count()),
        }
    }

    /// Canonical selector name, as typed at the console
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStrategy::All => "ALL",
            SearchStrategy::Any => "ANY",
            SearchStrategy::None => "NONE",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStrategy {
    type Err = LinedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(SearchStrategy::All),
            "any" => Ok(SearchStrategy::Any),
            "none" => Ok(SearchStrategy::None),
            _ => Err(LinedexError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Look up each query token's postings list, in query order
///
/// Tokens the index has never seen are dropped entirely rather than treated
/// as empty lists: under `All` a dropped token leaves the remaining
/// intersection untouched, and a query with no recognized token yields no
/// lists at all (an empty result for `All`/`Any`, everything for `None`).
pub fn collect_postings<'a>(tokens: &[String], index: &'a InvertedIndex) -> Vec<&'a [RecordId]> {
    tokens
        .iter()
        .filter_map(|token| index.lookup(token))
        .collect()
}

/// Pairwise left-to-right intersection; order follows the first list
fn intersect(lists: &[&[RecordId]]) -> Vec<RecordId> {
    let (first, rest) = match lists.split_first() {
        Some(parts) => parts,
        None => return Vec::new(),
    };

    let mut survivors = dedup_in_order(first);
    for list in rest {
        let members: HashSet<RecordId> = list.iter().copied().collect();
        survivors.retain(|id| members.contains(id));
    }
    survivors
}

/// Left-to-right union, keeping each id at its first occurrence
fn union(lists: &[&[RecordId]]) -> Vec<RecordId> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for list in lists {
        for &id in *list {
            if seen.insert(id) {
                result.push(id);
            }
        }
    }
    result
}

/// Ascending complement of `matched` over the universe `0..record_count`
fn complement(matched: &[RecordId], record_count: usize) -> Vec<RecordId> {
    let matched: HashSet<RecordId> = matched.iter().copied().collect();
    (0..record_count as RecordId)
        .filter(|id| !matched.contains(id))
        .collect()
}

fn dedup_in_order(list: &[RecordId]) -> Vec<RecordId> {
    let mut seen = HashSet::with_capacity(list.len());
    list.iter().copied().filter(|id| seen.insert(*id)).collect()
}
