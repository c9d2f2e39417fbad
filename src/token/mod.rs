//! Tokenization: raw text to a token frequency table

mod tokenizer;

pub use tokenizer::{strip_punctuation, tokenize, FrequencyTable};
