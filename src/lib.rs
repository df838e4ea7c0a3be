pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod repl;
pub mod service;
pub mod tokenizer;

pub use config::RecordSource;
pub use error::{LinedexError, Result};
pub use index::{InvertedIndex, RecordId};
pub use query::SearchStrategy;
pub use service::SearchService;
pub use tokenizer::tokenize;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
