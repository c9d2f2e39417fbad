//! The round-parameterized digest function

mod engine;

pub use engine::{DigestEngine, DEFAULT_ROUNDS, DEFAULT_WIDTH};
