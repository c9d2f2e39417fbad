//! Per-input encoding pipeline
//!
//! An [`Encoder`] owns everything derived from one input: the stripped
//! text, its frequency table, and the built tree. One input, one instance,
//! one root digest.

use crate::digest::DigestEngine;
use crate::token::{strip_punctuation, tokenize, FrequencyTable};
use crate::tree::{self, ProofPath, Tree};
use crate::{Error, Result};
use std::path::Path;

/// Text fingerprinting pipeline: tokenize, build, digest
#[derive(Debug)]
pub struct Encoder {
    engine: DigestEngine,
    text: String,
    table: FrequencyTable,
    tree: Tree,
}

impl Encoder {
    /// Encode a string with the default engine
    pub fn from_text(text: &str) -> Result<Self> {
        Self::with_engine(DigestEngine::new(), text)
    }

    /// Encode a string with a specific engine
    pub fn with_engine(engine: DigestEngine, text: &str) -> Result<Self> {
        let stripped = strip_punctuation(text);
        let table = tokenize(&stripped)?;
        let tree = tree::build(&table, &engine);
        Ok(Encoder {
            engine,
            text: stripped,
            table,
            tree,
        })
    }

    /// Encode a file's full contents with the default engine
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with_engine(DigestEngine::new(), path)
    }

    /// Encode a file's full contents with a specific engine
    pub fn from_file_with_engine(engine: DigestEngine, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::with_engine(engine, &content)
    }

    /// The root digest, the input's fingerprint
    pub fn root_digest(&self) -> &str {
        self.tree.root_digest()
    }

    /// The input as stored: punctuation-stripped, spacing intact
    pub fn original_text(&self) -> &str {
        &self.text
    }

    /// Token frequencies for the input
    pub fn frequency_table(&self) -> &FrequencyTable {
        &self.table
    }

    /// The built tree
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The digest engine this encoder was built with
    pub fn engine(&self) -> DigestEngine {
        self.engine
    }

    /// Derive the inclusion proof for a token, if it is a leaf
    pub fn derive_path(&self, label: &str) -> Option<ProofPath> {
        self.tree.derive_path(label)
    }

    /// Verify a data chunk against a proof and a root digest
    pub fn verify(&self, chunk: &str, path: &ProofPath, root_digest: &str) -> bool {
        tree::verify(&self.engine, chunk, path, root_digest)
    }
}
