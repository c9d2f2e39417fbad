//! The weighted merge tree: nodes, builder, and inclusion proofs

mod builder;
mod node;
mod proof;

pub use builder::{build, Tree};
pub use node::{NodeId, NodeLabel, WeightedNode};
pub use proof::{verify, Direction, ProofPath, ProofStep};
