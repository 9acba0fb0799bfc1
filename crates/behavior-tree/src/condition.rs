//! Guarded execution.

use crate::error::{BuildError, Result};
use crate::{Behavior, Node, Parallel, Selector, Sequence, Status};

/// Runs a guarded node only while its guard succeeds.
///
/// # Semantics
///
/// - The guard is ticked first
/// - If the guard returns `Success` and a guarded node is attached, the
///   guarded node's status is returned
/// - Otherwise the guard's own status is returned: `Failure`, `Pending`, or
///   `Success` when nothing is attached
///
/// The guard is re-evaluated on every tick, so a pending guarded branch is
/// abandoned as soon as the guard stops succeeding.
pub struct Condition {
    guard: Box<Node>,
    guarded: Option<Box<Node>>,
}

impl Condition {
    /// Creates a condition with nothing attached yet.
    pub fn new(guard: impl Into<Node>) -> Self {
        Self {
            guard: Box::new(guard.into()),
            guarded: None,
        }
    }

    /// Creates a condition from a guard that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingCondition`] if `guard` is `None`.
    pub fn try_new(guard: Option<Node>) -> Result<Self> {
        guard.map(Self::new).ok_or(BuildError::MissingCondition)
    }

    /// Attaches the node to run when the guard succeeds, replacing any
    /// previous one. Passing `None` leaves the condition unchanged.
    pub fn then(&mut self, node: impl Into<Option<Node>>) -> &mut Self {
        if let Some(node) = node.into() {
            self.guarded = Some(Box::new(node));
        }
        self
    }

    /// Attaches an empty [`Sequence`] as the guarded node and returns it.
    pub fn then_sequence(&mut self) -> &mut Sequence {
        self.attach(Node::Sequence(Sequence::new()), Node::as_sequence_mut)
    }

    /// Attaches an empty [`Selector`] as the guarded node and returns it.
    pub fn then_selector(&mut self) -> &mut Selector {
        self.attach(Node::Selector(Selector::new()), Node::as_selector_mut)
    }

    /// Attaches an empty [`Parallel`] as the guarded node and returns it.
    pub fn then_parallel(&mut self) -> &mut Parallel {
        self.attach(Node::Parallel(Parallel::new()), Node::as_parallel_mut)
    }

    /// Returns `true` once a guarded node has been attached.
    pub fn is_guarding(&self) -> bool {
        self.guarded.is_some()
    }

    fn attach<T>(&mut self, node: Node, project: fn(&mut Node) -> Option<&mut T>) -> &mut T {
        let slot = self.guarded.insert(Box::new(node));
        match project(&mut **slot) {
            Some(inner) => inner,
            None => unreachable!("guarded node changed kind"),
        }
    }
}

impl Behavior for Condition {
    fn tick(&mut self) -> Status {
        let status = self.guard.tick();
        match (&mut self.guarded, status) {
            (Some(guarded), Status::Success) => guarded.tick(),
            _ => status,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::{Action, Container};

    fn guard(status: Status) -> Node {
        Node::from(Action::new((), move |_: &mut ()| status))
    }

    fn counting(calls: &Rc<Cell<u32>>, status: Status) -> Node {
        Node::from(Action::new(Rc::clone(calls), move |c: &mut Rc<Cell<u32>>| {
            c.set(c.get() + 1);
            status
        }))
    }

    #[test]
    fn failing_guard_skips_guarded_node() {
        let calls = Rc::new(Cell::new(0));
        let mut condition = Condition::new(guard(Status::Failure));
        condition.then(counting(&calls, Status::Success));

        assert_eq!(condition.tick(), Status::Failure);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn pending_guard_skips_guarded_node() {
        let calls = Rc::new(Cell::new(0));
        let mut condition = Condition::new(guard(Status::Pending));
        condition.then(counting(&calls, Status::Success));

        assert_eq!(condition.tick(), Status::Pending);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn succeeding_guard_without_guarded_node_succeeds() {
        let mut condition = Condition::new(guard(Status::Success));
        assert!(!condition.is_guarding());
        assert_eq!(condition.tick(), Status::Success);
    }

    #[test]
    fn succeeding_guard_returns_guarded_status() {
        let calls = Rc::new(Cell::new(0));
        let mut condition = Condition::new(guard(Status::Success));
        condition.then(counting(&calls, Status::Failure));

        assert_eq!(condition.tick(), Status::Failure);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn then_none_keeps_existing_guarded_node() {
        let calls = Rc::new(Cell::new(0));
        let mut condition = Condition::new(guard(Status::Success));
        condition
            .then(counting(&calls, Status::Pending))
            .then(None::<Node>);

        assert_eq!(condition.tick(), Status::Pending);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn then_sequence_builds_into_guarded_branch() {
        let calls = Rc::new(Cell::new(0));
        let mut condition = Condition::new(guard(Status::Success));
        condition
            .then_sequence()
            .node(counting(&calls, Status::Success))
            .node(counting(&calls, Status::Success));

        assert!(condition.is_guarding());
        assert_eq!(condition.tick(), Status::Success);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn try_new_requires_guard() {
        assert_eq!(
            Condition::try_new(None).err(),
            Some(BuildError::MissingCondition)
        );
        assert!(Condition::try_new(Some(guard(Status::Success))).is_ok());
    }
}
