//! In-memory inverted index over line records
//!
//! The index is built exactly once from the full record set and is
//! read-only afterwards. It owns both the postings map and the record
//! text, so every lookup and every id-to-text mapping goes through it.

mod inverted;

pub use inverted::{InvertedIndex, RecordId};
