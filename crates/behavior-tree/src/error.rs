//! Error types raised while assembling a tree with [`TreeBuilder`](crate::TreeBuilder).
//!
//! Ticking never fails; these only cover construction mistakes.

use thiserror::Error;

/// Interior node kinds that open a scope in the builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    Selector,
    Sequence,
    Inverter,
    Condition,
}

/// Errors surfaced by [`TreeBuilder::build`](crate::TreeBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("{kind} closed without a child")]
    MissingChild { kind: NodeKind },

    #[error("{kind} already has a child")]
    ExtraChild { kind: NodeKind },

    #[error("end() called with no open scope")]
    UnbalancedEnd,

    #[error("{kind} still open at depth {depth}")]
    UnclosedScope { kind: NodeKind, depth: usize },

    #[error("tree has no root node")]
    EmptyTree,

    #[error("tree has {count} root nodes, expected exactly one")]
    MultipleRoots { count: usize },
}

pub type Result<T> = std::result::Result<T, BuildError>;
