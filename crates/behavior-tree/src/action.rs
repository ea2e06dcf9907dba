//! Action (leaf) nodes.
//!
//! Leaves produce a status directly. [`AlwaysSucceed`] and [`AlwaysFail`] are
//! constants; [`Functor`] runs an arbitrary closure and is the extension point
//! for custom logic that doesn't warrant its own node type.

use std::fmt;

use crate::{Behavior, Status};

/// Always returns `Success`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSucceed;

impl Behavior for AlwaysSucceed {
    #[inline]
    fn tick(&mut self) -> Status {
        Status::Success
    }
}

/// Always returns `Failure`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFail;

impl Behavior for AlwaysFail {
    #[inline]
    fn tick(&mut self) -> Status {
        Status::Failure
    }
}

/// Runs a closure and returns its status verbatim.
///
/// The closure may capture and mutate external state; it is called exactly
/// once per tick.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Behavior, Functor, Status};
///
/// let mut remaining = 2;
/// let mut countdown = Functor::new(move || {
///     if remaining == 0 {
///         return Status::Success;
///     }
///     remaining -= 1;
///     Status::Running
/// });
///
/// assert_eq!(countdown.tick(), Status::Running);
/// assert_eq!(countdown.tick(), Status::Running);
/// assert_eq!(countdown.tick(), Status::Success);
/// ```
pub struct Functor {
    func: Box<dyn FnMut() -> Status>,
}

impl Functor {
    /// Creates a functor from a status-producing closure.
    pub fn new<F>(func: F) -> Self
    where
        F: FnMut() -> Status + 'static,
    {
        Self {
            func: Box::new(func),
        }
    }

    /// Creates a functor from a fallible closure.
    ///
    /// An `Err` is logged at `warn` level and reported as `Failure`; the tree
    /// itself has no error channel.
    pub fn fallible<F, E>(mut func: F) -> Self
    where
        F: FnMut() -> Result<Status, E> + 'static,
        E: fmt::Display,
    {
        Self::new(move || match func() {
            Ok(status) => status,
            Err(err) => {
                tracing::warn!(error = %err, "functor failed, reporting failure");
                Status::Failure
            }
        })
    }
}

impl Behavior for Functor {
    #[inline]
    fn tick(&mut self) -> Status {
        (self.func)()
    }
}

impl fmt::Debug for Functor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Functor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn constant_leaves() {
        assert_eq!(AlwaysSucceed.tick(), Status::Success);
        assert_eq!(AlwaysFail.tick(), Status::Failure);
    }

    #[test]
    fn functor_returns_closure_result_verbatim() {
        for expected in [Status::Success, Status::Running, Status::Failure] {
            let mut leaf = Functor::new(move || expected);
            assert_eq!(leaf.tick(), expected);
        }
    }

    #[test]
    fn functor_calls_closure_once_per_tick() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut leaf = Functor::new(move || {
            counter.set(counter.get() + 1);
            Status::Success
        });

        leaf.tick();
        leaf.tick();
        leaf.tick();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn fallible_functor_maps_error_to_failure() {
        let mut attempts = 0;
        let mut leaf = Functor::fallible(move || {
            attempts += 1;
            if attempts == 1 {
                Err("sensor offline")
            } else {
                Ok(Status::Success)
            }
        });

        assert_eq!(leaf.tick(), Status::Failure);
        assert_eq!(leaf.tick(), Status::Success);
    }
}
