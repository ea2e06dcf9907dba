//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Both tick their children strictly in construction order and stop at the
//! first child that decides the outcome. The child list is fixed once the
//! composite is built.

use crate::{Behavior, Node, Status};

/// Executes child behaviors in order until one doesn't succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure` or `Running`, the sequence **stops immediately**
///   and returns that status
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation. A
/// sequence without children returns `Success`, the identity of AND.
pub struct Sequence {
    children: Vec<Node>,
}

impl Sequence {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// An empty list is allowed.
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the sequence has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Behavior for Sequence {
    fn tick(&mut self) -> Status {
        for (index, child) in self.children.iter_mut().enumerate() {
            match child.tick() {
                Status::Success => continue, // Move to next child
                status => {
                    tracing::trace!(index, ?status, "sequence short-circuited");
                    return status;
                }
            }
        }
        // All children succeeded
        tracing::trace!(children = self.children.len(), "sequence completed");
        Status::Success
    }
}

/// Executes child behaviors in order until one doesn't fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops immediately**
///   and returns that status
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. A
/// selector without children returns `Failure`, the identity of OR.
pub struct Selector {
    children: Vec<Node>,
}

impl Selector {
    /// Creates a new selector with the given child behaviors.
    ///
    /// An empty list is allowed.
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the selector has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Behavior for Selector {
    fn tick(&mut self) -> Status {
        for (index, child) in self.children.iter_mut().enumerate() {
            match child.tick() {
                Status::Failure => continue, // Try next child
                status => {
                    tracing::trace!(index, ?status, "selector short-circuited");
                    return status;
                }
            }
        }
        // All children failed
        tracing::trace!(children = self.children.len(), "selector exhausted");
        Status::Failure
    }
}
