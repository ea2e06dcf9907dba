//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the single capability every
//! tree node exposes, and [`Node`], the owning handle composites and
//! decorators store their children in.

use crate::Status;

/// A behavior tree node.
///
/// Implement this for custom leaves. The trait carries no `Send`/`Sync`
/// bound: nodes may capture non-thread-safe state (`Rc<Cell<_>>` and the
/// like), and synchronising shared state across threads is up to the leaf.
pub trait Behavior {
    /// Evaluate this node once.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Running` if it needs to be ticked again on a later cycle
    /// - `Status::Failure` if the behavior failed
    fn tick(&mut self) -> Status;
}

/// Type-erased owning handle to a node.
///
/// Each node has exactly one owner; dropping a handle drops its subtree.
pub type Node = Box<dyn Behavior>;

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior>` to also implement `Behavior`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<B: Behavior + ?Sized> Behavior for Box<B> {
    #[inline]
    fn tick(&mut self) -> Status {
        (**self).tick()
    }
}
