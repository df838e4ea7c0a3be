//! Boolean matching strategies over the inverted index
//!
//! This module turns a tokenized query into a set of matching record ids,
//! supporting three ways of combining per-token postings lists:
//! - ALL: intersection of the recognized tokens' postings
//! - ANY: union of the recognized tokens' postings
//! - NONE: complement of ANY over the whole record range
//!
//! Evaluation is pure: no state survives a call, and the same query against
//! the same index always produces the same ordered result.

pub mod strategy;

pub use strategy::{collect_postings, SearchStrategy};
