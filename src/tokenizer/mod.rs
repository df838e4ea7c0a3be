mod tokenizer;

pub use tokenizer::tokenize;
