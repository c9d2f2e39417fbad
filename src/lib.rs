//! # huffmark
//!
//! Frequency-weighted merkle fingerprints for text.
//!
//! huffmark tokenizes an input into weighted units and greedily merges them
//! into a binary tree with a custom round-parameterized digest, producing a
//! single authenticating fingerprint (the root digest). Compact inclusion
//! proofs can be extracted for any token and verified against that
//! fingerprint, and a collision harness probes the digest function for
//! weaknesses.
//!
//! ## Core Concepts
//!
//! - **Tokens**: punctuation-stripped words, split on literal spaces, with
//!   their frequencies as weights
//! - **Tree**: a Huffman-style merge tree where the two lowest-weight
//!   pending nodes combine first, so frequent tokens sit near the root
//! - **Root digest**: the digest of the final merge, fingerprinting the
//!   whole input
//! - **Proofs**: ordered sibling-digest paths that recompute the root from
//!   a single token
//!
//! ## Example
//!
//! ```ignore
//! use huffmark::Encoder;
//!
//! let encoder = Encoder::from_text("the cat sat on the mat")?;
//! let root = encoder.root_digest().to_string();
//! let proof = encoder.derive_path("cat").unwrap();
//! assert!(encoder.verify("cat", &proof, &root));
//! ```

pub mod attack;
pub mod digest;
pub mod token;
pub mod tree;

mod encoder;
mod error;

pub use attack::{random_probe, scan_files, ProbeConfig, ProbeOutcome, ScanReport};
pub use digest::{DigestEngine, DEFAULT_ROUNDS, DEFAULT_WIDTH};
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use token::{strip_punctuation, tokenize, FrequencyTable};
pub use tree::{Direction, NodeId, NodeLabel, ProofPath, ProofStep, Tree, WeightedNode};
