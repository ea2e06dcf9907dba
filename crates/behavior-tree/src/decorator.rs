//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and gate or modify its result.
//! This module provides [`Condition`] (guarded execution), [`Inverter`]
//! (NOT logic) and [`Traced`] (logs the child's status).

use std::borrow::Cow;
use std::fmt;

use crate::{Behavior, Node, Status};

/// Ticks its child only while a predicate holds.
///
/// # Semantics
///
/// - If the predicate returns `false`, the condition returns `Failure` and the
///   child is **not ticked**
/// - If the predicate returns `true`, the condition returns the child's status
///   unmodified
///
/// The predicate is evaluated exactly once per tick, before the child.
pub struct Condition {
    predicate: Box<dyn FnMut() -> bool>,
    child: Node,
}

impl Condition {
    /// Creates a condition guarding the given child behavior.
    pub fn new<P>(predicate: P, child: Node) -> Self
    where
        P: FnMut() -> bool + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            child,
        }
    }
}

impl Behavior for Condition {
    fn tick(&mut self) -> Status {
        if (self.predicate)() {
            self.child.tick()
        } else {
            tracing::trace!("condition rejected, child skipped");
            Status::Failure
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition").finish_non_exhaustive()
    }
}

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - If the child returns `Running`, the inverter returns `Running`
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter {
    child: Node,
}

impl Inverter {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Node) -> Self {
        Self { child }
    }
}

impl Behavior for Inverter {
    fn tick(&mut self) -> Status {
        self.child.tick().invert()
    }
}

/// Ticks its child and logs the resulting status under a label.
///
/// The status is passed through unchanged. Events are emitted at `debug`
/// level on the `behavior_tree::decorator` target, so instrumenting a subtree
/// costs nothing unless a subscriber enables them.
pub struct Traced {
    label: Cow<'static, str>,
    child: Node,
}

impl Traced {
    /// Creates a traced wrapper that logs under `label`.
    pub fn new(label: impl Into<Cow<'static, str>>, child: Node) -> Self {
        Self {
            label: label.into(),
            child,
        }
    }

    /// The label events are logged under.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Behavior for Traced {
    fn tick(&mut self) -> Status {
        let status = self.child.tick();
        tracing::debug!(node = %self.label, ?status, "ticked");
        status
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::{AlwaysFail, AlwaysSucceed, Functor};

    fn fixed(status: Status) -> Node {
        Box::new(Functor::new(move || status))
    }

    #[test]
    fn inverter_inverts_success() {
        let mut inverter = Inverter::new(Box::new(AlwaysSucceed));
        assert_eq!(inverter.tick(), Status::Failure);
    }

    #[test]
    fn inverter_inverts_failure() {
        let mut inverter = Inverter::new(Box::new(AlwaysFail));
        assert_eq!(inverter.tick(), Status::Success);
    }

    #[test]
    fn inverter_passes_running_through() {
        let mut inverter = Inverter::new(fixed(Status::Running));
        assert_eq!(inverter.tick(), Status::Running);
    }

    #[test]
    fn condition_false_skips_child() {
        let ticks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ticks);
        let mut condition = Condition::new(
            || false,
            Box::new(Functor::new(move || {
                counter.set(counter.get() + 1);
                Status::Success
            })),
        );

        assert_eq!(condition.tick(), Status::Failure);
        assert_eq!(condition.tick(), Status::Failure);
        assert_eq!(ticks.get(), 0);
    }

    #[test]
    fn condition_true_returns_child_status() {
        for expected in [Status::Success, Status::Running, Status::Failure] {
            let mut condition = Condition::new(|| true, fixed(expected));
            assert_eq!(condition.tick(), expected);
        }
    }

    #[test]
    fn condition_reads_captured_flag_each_tick() {
        let flag = Rc::new(Cell::new(false));
        let guard = Rc::clone(&flag);
        let mut condition = Condition::new(move || guard.get(), Box::new(AlwaysSucceed));

        assert_eq!(condition.tick(), Status::Failure);
        flag.set(true);
        assert_eq!(condition.tick(), Status::Success);
    }

    #[test]
    fn traced_passes_status_through() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();

        for expected in [Status::Success, Status::Running, Status::Failure] {
            let mut traced = Traced::new("patrol", fixed(expected));
            assert_eq!(traced.label(), "patrol");
            assert_eq!(traced.tick(), expected);
        }
    }
}
