use std::collections::HashMap;

use crate::tokenizer::tokenize;

/// Record identifier: the zero-based position of the line in the input
pub type RecordId = u32;

/// Word-level inverted index mapping each token to the records containing it
///
/// Construction walks the records in order and appends the record's id to a
/// token's postings list once per occurrence of that token in the record, so
/// a raw postings list can hold the same id more than once when a record
/// repeats a word. Postings stay in build encounter order (ascending record
/// position). Consumers that need set semantics deduplicate on their side.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// token → postings list (record ids in first-seen order)
    postings: HashMap<String, Vec<RecordId>>,
    /// The record text, addressed by `RecordId`; never mutated after build
    records: Vec<String>,
}

impl InvertedIndex {
    /// Build the index from the full record set, taking ownership of it
    pub fn build(records: Vec<String>) -> Self {
        debug_assert!(
            records.len() <= RecordId::MAX as usize,
            "record positions must fit in a RecordId"
        );
        let mut postings: HashMap<String, Vec<RecordId>> = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            for token in tokenize(record) {
                postings.entry(token).or_default().push(position as RecordId);
            }
        }
        Self { postings, records }
    }

    /// Postings list for a token; empty slice if the token is unknown
    pub fn postings(&self, token: &str) -> &[RecordId] {
        self.lookup(token).unwrap_or(&[])
    }

    /// Postings list for a token, or `None` if the token never occurred
    ///
    /// Match collection uses this form because an unknown token is dropped
    /// from the computation outright rather than contributing an empty set.
    pub fn lookup(&self, token: &str) -> Option<&[RecordId]> {
        self.postings.get(token).map(Vec::as_slice)
    }

    /// Number of records the index was built from
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Record text by id, if the id is in range
    pub fn record(&self, id: RecordId) -> Option<&str> {
        self.records.get(id as usize).map(String::as_str)
    }

    /// All records in their original order
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Number of distinct tokens seen during the build
    pub fn distinct_tokens(&self) -> usize {
        self.postings.len()
    }

    /// True if the index was built from an empty record set
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
