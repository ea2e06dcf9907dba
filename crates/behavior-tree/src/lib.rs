//! Minimal behavior tree library for reactive decision logic.
//!
//! A tree is assembled once, bottom-up, and ticked repeatedly against
//! changing external conditions (game AI, robotics control). Every tick is a
//! plain synchronous recursion that deterministically yields a [`Status`].
//!
//! - **Three statuses**: `Success`, `Running`, `Failure`
//! - **Exclusive ownership**: every node owns its children, dropping the root
//!   drops the tree
//! - **No error channel**: ticking always yields a status
//! - **No shared state**: leaves read the outside world through the closures
//!   they capture
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes, [`Node`] is its owning handle
//! - [`Status`]: Success, Running or Failure
//! - Action nodes: [`AlwaysSucceed`], [`AlwaysFail`], [`Functor`]
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Condition`], [`Inverter`], [`Traced`]
//! - Construction: [`builder`] functions and the fluent [`TreeBuilder`]
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use behavior_tree::builder::*;
//! use behavior_tree::{Behavior, Status};
//!
//! let door_open = Rc::new(Cell::new(false));
//! let sensor = Rc::clone(&door_open);
//!
//! let mut root = selector(vec![
//!     always_fail(),
//!     inverter(always_succeed()),
//!     functor(|| Status::Failure),
//!     condition(move || sensor.get(), always_succeed()),
//! ]);
//!
//! assert_eq!(root.tick(), Status::Failure);
//! door_open.set(true);
//! assert_eq!(root.tick(), Status::Success);
//! ```
//!
//! # Threading
//!
//! Nodes are not required to be `Send` or `Sync`. State shared between
//! leaves, or between a tree and the rest of the program, is the leaf
//! author's responsibility to synchronise.
//!
//! # Panics
//!
//! A panic raised by a user closure during `tick` propagates to the caller;
//! the tree never catches it.

pub mod action;
pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use action::{AlwaysFail, AlwaysSucceed, Functor};
pub use behavior::{Behavior, Node};
pub use composite::{Selector, Sequence};
pub use decorator::{Condition, Inverter, Traced};
pub use error::{BuildError, NodeKind};
pub use status::Status;
pub use tree::TreeBuilder;
