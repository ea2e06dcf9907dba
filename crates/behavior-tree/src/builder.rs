//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`. Every function
//! takes ownership of the children it is given and returns a [`Node`].
//!
//! ```rust
//! use behavior_tree::builder::*;
//! use behavior_tree::{Behavior, Status};
//!
//! let mut root = sequence(vec![
//!     always_succeed(),
//!     selector(vec![always_fail(), always_succeed()]),
//! ]);
//! assert_eq!(root.tick(), Status::Success);
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::{
    AlwaysFail, AlwaysSucceed, Condition, Functor, Inverter, Node, Selector, Sequence, Status,
    Traced,
};

/// Creates an always-succeed leaf.
#[inline]
pub fn always_succeed() -> Node {
    Box::new(AlwaysSucceed)
}

/// Creates an always-fail leaf.
#[inline]
pub fn always_fail() -> Node {
    Box::new(AlwaysFail)
}

/// Creates a functor leaf.
///
/// Shorthand for `Box::new(Functor::new(func))`.
#[inline]
pub fn functor<F>(func: F) -> Node
where
    F: FnMut() -> Status + 'static,
{
    Box::new(Functor::new(func))
}

/// Creates a functor leaf from a fallible closure.
///
/// Shorthand for `Box::new(Functor::fallible(func))`.
#[inline]
pub fn try_functor<F, E>(func: F) -> Node
where
    F: FnMut() -> Result<Status, E> + 'static,
    E: fmt::Display,
{
    Box::new(Functor::fallible(func))
}

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence(children: Vec<Node>) -> Node {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector(children: Vec<Node>) -> Node {
    Box::new(Selector::new(children))
}

/// Creates a condition node.
///
/// Shorthand for `Box::new(Condition::new(predicate, child))`.
#[inline]
pub fn condition<P>(predicate: P, child: Node) -> Node
where
    P: FnMut() -> bool + 'static,
{
    Box::new(Condition::new(predicate, child))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter(child: Node) -> Node {
    Box::new(Inverter::new(child))
}

/// Creates a traced node.
///
/// Shorthand for `Box::new(Traced::new(label, child))`.
#[inline]
pub fn traced(label: impl Into<Cow<'static, str>>, child: Node) -> Node {
    Box::new(Traced::new(label, child))
}
