//! Weighted tree node types
//!
//! Nodes live in an arena owned by the tree; `NodeId` is an index into it.
//! The arena index doubles as the creation sequence number: nodes are only
//! ever appended, so a smaller index means an earlier construction, and the
//! merge schedule breaks weight ties on it.

use std::fmt;

/// Index of a node in the tree arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position in the arena (also the creation sequence number)
    pub fn index(&self) -> usize {
        self.0
    }
}

/// What a node stands for
///
/// Internal nodes are a separate variant rather than a sentinel string, so
/// no input token can ever collide with them during proof lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeLabel {
    /// A leaf carrying one token from the input
    Token(String),
    /// A merge of two children
    Internal,
}

impl NodeLabel {
    /// The token, if this labels a leaf
    pub fn as_token(&self) -> Option<&str> {
        match self {
            NodeLabel::Token(token) => Some(token),
            NodeLabel::Internal => None,
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLabel::Token(token) => write!(f, "{:?}", token),
            NodeLabel::Internal => write!(f, "(internal)"),
        }
    }
}

/// A node in the weighted merge tree
///
/// `weight` is the token frequency for a leaf and the sum of the children's
/// weights for an internal node. `digest` is fixed at construction: the
/// token's digest for a leaf, the digest of the concatenated child digests
/// for a merge. Every node has either zero or two children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedNode {
    pub weight: u64,
    pub label: NodeLabel,
    pub digest: String,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl WeightedNode {
    /// Create a leaf for a token
    pub fn leaf(token: String, weight: u64, digest: String) -> Self {
        WeightedNode {
            weight,
            label: NodeLabel::Token(token),
            digest,
            left: None,
            right: None,
        }
    }

    /// Create an internal node over two children
    pub fn internal(weight: u64, digest: String, left: NodeId, right: NodeId) -> Self {
        WeightedNode {
            weight,
            label: NodeLabel::Internal,
            digest,
            left: Some(left),
            right: Some(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The token, if this is a leaf
    pub fn token(&self) -> Option<&str> {
        self.label.as_token()
    }
}

impl fmt::Display for WeightedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} w={} {}", self.label, self.weight, self.digest)
    }
}
