//! Search orchestration: tokenize, evaluate, map ids back to text

use tracing::debug;

use crate::index::{InvertedIndex, RecordId};
use crate::query::SearchStrategy;
use crate::tokenizer::tokenize;

/// Front door for queries; owns the index for the process lifetime
///
/// `find` is pure with respect to the service: nothing is mutated, and the
/// same query and strategy always produce the same ordered result. There are
/// no error paths; an unparseable strategy selector never reaches this
/// type, because the console boundary rejects it first.
#[derive(Debug)]
pub struct SearchService {
    index: InvertedIndex,
}

impl SearchService {
    /// Build the service and its index from the startup record set
    pub fn new(records: Vec<String>) -> Self {
        Self {
            index: InvertedIndex::build(records),
        }
    }

    /// Matching record lines, in the strategy's output order
    pub fn find(&self, query: &str, strategy: SearchStrategy) -> Vec<&str> {
        self.find_ids(query, strategy)
            .into_iter()
            .filter_map(|id| self.index.record(id))
            .collect()
    }

    /// Matching record ids, in the strategy's output order
    ///
    /// An empty query is evaluated like any other: it matches nothing under
    /// `All`/`Any` and everything under `None`.
    pub fn find_ids(&self, query: &str, strategy: SearchStrategy) -> Vec<RecordId> {
        let tokens = tokenize(query);
        let matches = strategy.evaluate(&tokens, &self.index);
        debug!(
            "{} query with {} token(s) matched {} record(s)",
            strategy,
            tokens.len(),
            matches.len()
        );
        matches
    }

    /// Number of records the service searches over
    pub fn record_count(&self) -> usize {
        self.index.record_count()
    }

    /// Read-only access to the underlying index
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}
