use std::cell::Cell;
use std::rc::Rc;

use behavior_tree::builder::*;
use behavior_tree::{Behavior, Node, Status, TreeBuilder};

/// Leaf returning `status` that counts its ticks.
fn counted(status: Status) -> (Node, Rc<Cell<u32>>) {
    let ticks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&ticks);
    let node = functor(move || {
        counter.set(counter.get() + 1);
        status
    });
    (node, ticks)
}

/// Reference tree: a selector whose first three children always fail and
/// whose fourth only succeeds once the flag is raised.
#[test]
fn reference_tree_follows_the_flag() {
    let flag = Rc::new(Cell::new(false));
    let guard = Rc::clone(&flag);

    let mut root = selector(vec![
        always_fail(),
        inverter(always_succeed()),
        functor(|| Status::Failure),
        condition(move || guard.get(), always_succeed()),
    ]);

    assert_eq!(root.tick(), Status::Failure);

    flag.set(true);
    assert_eq!(root.tick(), Status::Success);

    flag.set(false);
    assert_eq!(root.tick(), Status::Failure);
}

#[test]
fn reference_tree_built_fluently_behaves_the_same() {
    let flag = Rc::new(Cell::new(false));
    let guard = Rc::clone(&flag);

    let mut root = TreeBuilder::new()
        .selector()
        .leaf(always_fail())
        .inverter()
        .leaf(always_succeed())
        .end()
        .leaf(functor(|| Status::Failure))
        .condition(move || guard.get())
        .leaf(always_succeed())
        .end()
        .end()
        .build()
        .expect("reference tree is well formed");

    assert_eq!(root.tick(), Status::Failure);
    flag.set(true);
    assert_eq!(root.tick(), Status::Success);
}

#[test]
fn nested_sequence_of_selector_succeeds() {
    let mut root = sequence(vec![
        always_succeed(),
        selector(vec![always_fail(), always_succeed()]),
    ]);

    assert_eq!(root.tick(), Status::Success);
}

#[test]
fn selector_stops_at_first_non_failure() {
    for decisive in [Status::Success, Status::Running] {
        let (first, first_ticks) = counted(Status::Failure);
        let (second, second_ticks) = counted(decisive);
        let (third, third_ticks) = counted(Status::Success);

        let mut root = selector(vec![first, second, third]);

        assert_eq!(root.tick(), decisive);
        assert_eq!(first_ticks.get(), 1);
        assert_eq!(second_ticks.get(), 1);
        assert_eq!(third_ticks.get(), 0, "ticked past {decisive:?}");
    }
}

#[test]
fn sequence_stops_at_first_non_success() {
    for decisive in [Status::Failure, Status::Running] {
        let (first, first_ticks) = counted(Status::Success);
        let (second, second_ticks) = counted(decisive);
        let (third, third_ticks) = counted(Status::Success);

        let mut root = sequence(vec![first, second, third]);

        assert_eq!(root.tick(), decisive);
        assert_eq!(first_ticks.get(), 1);
        assert_eq!(second_ticks.get(), 1);
        assert_eq!(third_ticks.get(), 0, "ticked past {decisive:?}");
    }
}

#[test]
fn false_condition_never_reaches_subtree() {
    let (leaf, ticks) = counted(Status::Success);
    let mut root = condition(|| false, sequence(vec![always_succeed(), leaf]));

    for _ in 0..5 {
        assert_eq!(root.tick(), Status::Failure);
    }
    assert_eq!(ticks.get(), 0);
}

#[test]
fn inverter_mapping() {
    let cases = [
        (Status::Success, Status::Failure),
        (Status::Failure, Status::Success),
        (Status::Running, Status::Running),
    ];
    for (child, expected) in cases {
        let mut root = inverter(functor(move || child));
        assert_eq!(root.tick(), expected, "inverting {child:?}");
    }
}

#[test]
fn deterministic_tree_is_stable_across_ticks() {
    let mut root = selector(vec![
        sequence(vec![always_succeed(), always_fail()]),
        inverter(selector(vec![])),
        sequence(vec![]),
    ]);

    let first = root.tick();
    assert_eq!(first, Status::Success);
    for _ in 0..10 {
        assert_eq!(root.tick(), first);
    }
}

/// A leaf that reports `Running` for a few ticks keeps its own progress and
/// lets the enclosing sequence resume from the top on each cycle.
#[test]
fn running_leaf_resumes_on_later_ticks() {
    let mut remaining = 2;
    let work = functor(move || {
        if remaining == 0 {
            Status::Success
        } else {
            remaining -= 1;
            Status::Running
        }
    });

    let (after, after_ticks) = counted(Status::Success);
    let mut root = sequence(vec![always_succeed(), work, after]);

    assert_eq!(root.tick(), Status::Running);
    assert_eq!(root.tick(), Status::Running);
    assert_eq!(after_ticks.get(), 0);
    assert_eq!(root.tick(), Status::Success);
    assert_eq!(after_ticks.get(), 1);
}

#[test]
fn fallible_leaf_failure_lets_selector_fall_back() {
    let mut root = selector(vec![
        try_functor(|| Err::<Status, _>("lost connection")),
        always_succeed(),
    ]);

    assert_eq!(root.tick(), Status::Success);
}

#[test]
fn dropping_the_root_drops_every_node() {
    struct DropFlag(Rc<Cell<u32>>);
    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    struct Leaf(#[allow(dead_code)] DropFlag);
    impl Behavior for Leaf {
        fn tick(&mut self) -> Status {
            Status::Success
        }
    }

    let dropped = Rc::new(Cell::new(0));
    let leaf = |d: &Rc<Cell<u32>>| -> Node { Box::new(Leaf(DropFlag(Rc::clone(d)))) };

    let mut root = sequence(vec![
        leaf(&dropped),
        inverter(leaf(&dropped)),
        selector(vec![leaf(&dropped), condition(|| true, leaf(&dropped))]),
    ]);
    root.tick();
    assert_eq!(dropped.get(), 0);

    drop(root);
    assert_eq!(dropped.get(), 4);
}
