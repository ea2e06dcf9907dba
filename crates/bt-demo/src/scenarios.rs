//! Demo trees ticked by the binary.

use std::cell::Cell;
use std::rc::Rc;

use behavior_tree::builder::*;
use behavior_tree::{Behavior, Node, Status};

use crate::config::DemoConfig;

/// Selector over three failing branches and a flag-guarded success.
pub fn reference_tree(flag: Rc<Cell<bool>>) -> Node {
    selector(vec![
        traced("always_fail", always_fail()),
        traced("inverted_success", inverter(always_succeed())),
        traced("failing_functor", functor(|| Status::Failure)),
        traced("flag_guard", condition(move || flag.get(), always_succeed())),
    ])
}

/// Ticks the reference tree `config.ticks` times, raising the flag from tick
/// `config.flag_after` on.
pub fn run_reference(config: &DemoConfig) -> Vec<Status> {
    let flag = Rc::new(Cell::new(false));
    let mut root = reference_tree(Rc::clone(&flag));

    (0..config.ticks)
        .map(|tick| {
            flag.set(tick >= config.flag_after);
            let status = root.tick();
            tracing::info!(tick, flag = flag.get(), ?status, "reference tree");
            status
        })
        .collect()
}

/// Sequence of a setup step, `work_units` ticks of work and a completion
/// step.
pub fn worker_tree(work_units: u32, completed: Rc<Cell<u32>>) -> Node {
    let mut remaining = work_units;
    sequence(vec![
        always_succeed(),
        traced(
            "work",
            functor(move || {
                if remaining == 0 {
                    return Status::Success;
                }
                remaining -= 1;
                tracing::debug!(remaining, "working");
                Status::Running
            }),
        ),
        functor(move || {
            completed.set(completed.get() + 1);
            Status::Success
        }),
    ])
}

/// Ticks the worker tree until it stops reporting `Running`.
pub fn run_worker(config: &DemoConfig) -> Vec<Status> {
    let completed = Rc::new(Cell::new(0));
    let mut root = worker_tree(config.work_units, Rc::clone(&completed));

    let mut statuses = Vec::new();
    loop {
        let status = root.tick();
        tracing::info!(tick = statuses.len(), ?status, "worker tree");
        statuses.push(status);
        if !status.is_running() {
            break;
        }
    }
    tracing::info!(completed = completed.get(), "worker finished");
    statuses
}
