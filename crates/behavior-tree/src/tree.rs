//! Fluent, scope-based tree assembly.
//!
//! [`TreeBuilder`] is an alternative to the nested calls of
//! [`builder`](crate::builder): interior nodes are opened, filled and closed
//! in reading order. Misuse (a decorator without a child, unbalanced scopes)
//! is reported as a [`BuildError`] when the tree is built, never at tick time.
//!
//! ```rust
//! use behavior_tree::builder::{always_fail, always_succeed};
//! use behavior_tree::{Behavior, Status, TreeBuilder};
//!
//! let mut root = TreeBuilder::new()
//!     .selector()
//!         .leaf(always_fail())
//!         .inverter()
//!             .leaf(always_fail())
//!         .end()
//!     .end()
//!     .build()?;
//!
//! assert_eq!(root.tick(), Status::Success);
//! # Ok::<(), behavior_tree::BuildError>(())
//! ```

use crate::error::{BuildError, NodeKind, Result};
use crate::{Condition, Inverter, Node, Selector, Sequence};

enum Scope {
    Composite {
        kind: NodeKind,
        children: Vec<Node>,
    },
    Inverter {
        child: Option<Node>,
    },
    Condition {
        predicate: Box<dyn FnMut() -> bool>,
        child: Option<Node>,
    },
}

impl Scope {
    fn kind(&self) -> NodeKind {
        match self {
            Scope::Composite { kind, .. } => *kind,
            Scope::Inverter { .. } => NodeKind::Inverter,
            Scope::Condition { .. } => NodeKind::Condition,
        }
    }

    fn push(&mut self, node: Node) -> Result<()> {
        let kind = self.kind();
        match self {
            Scope::Composite { children, .. } => {
                children.push(node);
                Ok(())
            }
            Scope::Inverter { child } | Scope::Condition { child, .. } => {
                if child.is_some() {
                    return Err(BuildError::ExtraChild { kind });
                }
                *child = Some(node);
                Ok(())
            }
        }
    }

    fn finish(self) -> Result<Node> {
        let kind = self.kind();
        match self {
            Scope::Composite { kind, children } => {
                let node: Node = match kind {
                    NodeKind::Selector => Box::new(Selector::new(children)),
                    _ => Box::new(Sequence::new(children)),
                };
                Ok(node)
            }
            Scope::Inverter { child } => {
                let child = child.ok_or(BuildError::MissingChild { kind })?;
                Ok(Box::new(Inverter::new(child)))
            }
            Scope::Condition { predicate, child } => {
                let child = child.ok_or(BuildError::MissingChild { kind })?;
                Ok(Box::new(Condition::new(predicate, child)))
            }
        }
    }
}

/// Builds a tree by opening and closing interior nodes in reading order.
///
/// Every method consumes and returns the builder. The first error is kept
/// and returned by [`build`](Self::build); later calls are ignored.
#[derive(Default)]
#[must_use]
pub struct TreeBuilder {
    stack: Vec<Scope>,
    roots: Vec<Node>,
    error: Option<BuildError>,
}

impl TreeBuilder {
    /// Creates an empty builder with no open scopes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a finished node to the innermost open scope.
    pub fn leaf(mut self, node: Node) -> Self {
        self.attach(node);
        self
    }

    /// Opens a selector scope.
    pub fn selector(self) -> Self {
        self.open(Scope::Composite {
            kind: NodeKind::Selector,
            children: Vec::new(),
        })
    }

    /// Opens a sequence scope.
    pub fn sequence(self) -> Self {
        self.open(Scope::Composite {
            kind: NodeKind::Sequence,
            children: Vec::new(),
        })
    }

    /// Opens an inverter scope. Exactly one child must be added before `end`.
    pub fn inverter(self) -> Self {
        self.open(Scope::Inverter { child: None })
    }

    /// Opens a condition scope guarded by `predicate`. Exactly one child must
    /// be added before `end`.
    pub fn condition<P>(self, predicate: P) -> Self
    where
        P: FnMut() -> bool + 'static,
    {
        self.open(Scope::Condition {
            predicate: Box::new(predicate),
            child: None,
        })
    }

    /// Closes the innermost open scope and attaches the finished node to its
    /// parent scope.
    pub fn end(mut self) -> Self {
        if self.error.is_some() {
            return self;
        }
        let Some(scope) = self.stack.pop() else {
            self.fail(BuildError::UnbalancedEnd);
            return self;
        };
        match scope.finish() {
            Ok(node) => self.attach(node),
            Err(err) => self.fail(err),
        }
        self
    }

    /// Returns the single root node.
    pub fn build(mut self) -> Result<Node> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if let Some(scope) = self.stack.last() {
            return Err(BuildError::UnclosedScope {
                kind: scope.kind(),
                depth: self.stack.len(),
            });
        }
        match self.roots.len() {
            0 => Err(BuildError::EmptyTree),
            1 => self.roots.pop().ok_or(BuildError::EmptyTree),
            count => Err(BuildError::MultipleRoots { count }),
        }
    }

    fn open(mut self, scope: Scope) -> Self {
        if self.error.is_none() {
            self.stack.push(scope);
        }
        self
    }

    fn attach(&mut self, node: Node) {
        if self.error.is_some() {
            return;
        }
        match self.stack.last_mut() {
            Some(scope) => {
                if let Err(err) = scope.push(node) {
                    self.fail(err);
                }
            }
            None => self.roots.push(node),
        }
    }

    fn fail(&mut self, err: BuildError) {
        tracing::debug!(error = %err, "tree builder rejected input");
        self.error.get_or_insert(err);
    }
}
