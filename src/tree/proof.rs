//! Inclusion proofs: derivation and verification
//!
//! A proof is the ordered list of sibling digests along the path from the
//! root down to a leaf. Each step carries the sibling's digest and the side
//! of the parent that sibling sits on. Steps are stored root-to-leaf as
//! derived; verification folds them leaf-most first, so the recomputation
//! climbs back up to the root.

use super::{NodeId, Tree};
use crate::digest::DigestEngine;
use serde::{Deserialize, Serialize};

/// Which side of the parent the recorded sibling occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

/// One step of an inclusion proof
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub direction: Direction,
    pub sibling: String,
}

/// An inclusion proof path, root-to-leaf order
///
/// The number of steps equals the leaf's depth, which the Huffman-style
/// build ties inversely to the leaf's frequency weight.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProofPath {
    steps: Vec<ProofStep>,
}

impl ProofPath {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    #[cfg(test)]
    pub(crate) fn steps_mut(&mut self) -> &mut Vec<ProofStep> {
        &mut self.steps
    }
}

impl Tree {
    /// Derive the inclusion proof for a leaf token
    ///
    /// Depth-first, left subtree before right, with an explicit stack so
    /// adversarially deep trees cannot exhaust the call stack. Returns
    /// `None` when no leaf carries the label; absence is not an error.
    pub fn derive_path(&self, label: &str) -> Option<ProofPath> {
        // Each entry remembers how long the path was before entering the
        // node, plus the step taken to enter it; truncating on pop undoes
        // abandoned branches.
        let mut stack: Vec<(NodeId, usize, Option<ProofStep>)> = vec![(self.root(), 0, None)];
        let mut steps: Vec<ProofStep> = Vec::new();

        while let Some((id, depth, entry)) = stack.pop() {
            steps.truncate(depth);
            if let Some(step) = entry {
                steps.push(step);
            }

            let node = self.node(id);
            match (node.left, node.right) {
                (None, None) => {
                    if node.token() == Some(label) {
                        return Some(ProofPath { steps });
                    }
                }
                (Some(left), Some(right)) => {
                    let here = steps.len();
                    // Right is pushed first so the left subtree is searched
                    // first. Entering a child records the *other* child as
                    // the sibling, tagged with the side it sits on.
                    stack.push((
                        right,
                        here,
                        Some(ProofStep {
                            direction: Direction::Left,
                            sibling: self.node(left).digest.clone(),
                        }),
                    ));
                    stack.push((
                        left,
                        here,
                        Some(ProofStep {
                            direction: Direction::Right,
                            sibling: self.node(right).digest.clone(),
                        }),
                    ));
                }
                // Build invariant: zero or two children
                _ => unreachable!("node has exactly zero or two children"),
            }
        }

        None
    }
}

/// Recompute a root digest from a leaf's raw data and its proof
///
/// Steps are applied leaf-most first (reverse of derivation order): a
/// sibling on the left is concatenated in front of the running digest, a
/// sibling on the right behind it. Returns whether the recomputed digest
/// matches `root_digest`.
pub fn verify(engine: &DigestEngine, chunk: &str, path: &ProofPath, root_digest: &str) -> bool {
    let mut current = engine.digest(chunk);
    for step in path.steps().iter().rev() {
        current = match step.direction {
            Direction::Left => engine.digest(&format!("{}{}", step.sibling, current)),
            Direction::Right => engine.digest(&format!("{}{}", current, step.sibling)),
        };
    }
    current == root_digest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use crate::token::tokenize;

    fn scenario() -> (DigestEngine, Tree) {
        let engine = DigestEngine::new();
        let tree = build(&tokenize("the cat sat on the mat").unwrap(), &engine);
        (engine, tree)
    }

    #[test]
    fn test_round_trip_every_leaf() {
        let (engine, tree) = scenario();
        for token in ["the", "cat", "sat", "on", "mat"] {
            let path = tree.derive_path(token).unwrap();
            assert!(
                verify(&engine, token, &path, tree.root_digest()),
                "round trip failed for {token:?}"
            );
        }
    }

    #[test]
    fn test_absent_label_is_none_not_error() {
        let (_, tree) = scenario();
        assert!(tree.derive_path("dog").is_none());
        assert!(tree.derive_path("").is_none());
    }

    #[test]
    fn test_higher_frequency_means_shorter_path() {
        let (_, tree) = scenario();
        let the = tree.derive_path("the").unwrap();
        let cat = tree.derive_path("cat").unwrap();
        assert!(the.len() < cat.len());
    }

    #[test]
    fn test_tampered_sibling_fails() {
        let (engine, tree) = scenario();
        let mut path = tree.derive_path("cat").unwrap();
        let sibling = &mut path.steps_mut()[0].sibling;
        let flipped = if sibling.starts_with('0') { "1" } else { "0" };
        sibling.replace_range(0..1, flipped);
        assert!(!verify(&engine, "cat", &path, tree.root_digest()));
    }

    #[test]
    fn test_wrong_chunk_fails() {
        let (engine, tree) = scenario();
        let path = tree.derive_path("cat").unwrap();
        assert!(!verify(&engine, "dog", &path, tree.root_digest()));
    }

    #[test]
    fn test_singleton_path_is_empty() {
        let engine = DigestEngine::new();
        let tree = build(&tokenize("hello").unwrap(), &engine);
        let path = tree.derive_path("hello").unwrap();
        assert!(path.is_empty());
        assert!(verify(&engine, "hello", &path, tree.root_digest()));
    }

    #[test]
    fn test_two_leaf_directions() {
        let engine = DigestEngine::new();
        let tree = build(&tokenize("x y").unwrap(), &engine);

        // "x" is the left child: its one step records the right sibling
        let px = tree.derive_path("x").unwrap();
        assert_eq!(px.steps()[0].direction, Direction::Right);
        assert_eq!(px.steps()[0].sibling, engine.digest("y"));

        let py = tree.derive_path("y").unwrap();
        assert_eq!(py.steps()[0].direction, Direction::Left);
        assert_eq!(py.steps()[0].sibling, engine.digest("x"));
    }

    #[test]
    fn test_empty_token_is_provable() {
        // "a  b" has an empty token between the two spaces
        let engine = DigestEngine::new();
        let tree = build(&tokenize("a  b").unwrap(), &engine);
        let path = tree.derive_path("").unwrap();
        assert!(verify(&engine, "", &path, tree.root_digest()));
    }

    #[test]
    fn test_path_serializes_as_json() {
        let (_, tree) = scenario();
        let path = tree.derive_path("cat").unwrap();
        let json = serde_json::to_string(&path).unwrap();
        let back: ProofPath = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
        assert!(json.contains("\"L\"") || json.contains("\"R\""));
    }
}
