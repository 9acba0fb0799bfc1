//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors:
//! [`Sequence`] (AND logic), [`Selector`] (OR logic) and [`Parallel`]
//! (run everything). Sequence and selector remember which child returned
//! [`Status::Pending`] and resume there on the next tick.

use crate::{Behavior, Container, Node, Status};

/// Ticks `children` from `cursor` until `stop` matches a child's status.
///
/// The result is the status of the last child ticked, or `Success` if no child
/// was ticked. The cursor parks on a pending child and returns to 0 otherwise.
fn tick_resumable(
    kind: &'static str,
    children: &mut [Node],
    cursor: &mut usize,
    stop: fn(Status) -> bool,
) -> Status {
    let resumed_at = *cursor;
    let mut status = Status::Success;

    while let Some(child) = children.get_mut(*cursor) {
        status = child.tick();
        if stop(status) {
            break;
        }
        *cursor += 1;
    }

    if status.is_pending() {
        tracing::debug!(
            kind,
            resumed_at,
            parked_at = *cursor,
            "composite parked on pending child"
        );
    } else {
        *cursor = 0;
    }

    tracing::trace!(kind, resumed_at, ?status, "composite ticked");
    status
}

/// Executes child behaviors in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Pending`, the sequence stops, returns `Pending` and
///   **resumes at that child** on the next tick
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation. An empty
/// sequence returns `Success`.
#[derive(Default)]
pub struct Sequence {
    children: Vec<Node>,
    cursor: usize,
}

impl Sequence {
    /// Creates an empty sequence; add children through [`Container`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the child the next tick starts at.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Container for Sequence {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

impl Behavior for Sequence {
    fn tick(&mut self) -> Status {
        tick_resumable("sequence", &mut self.children, &mut self.cursor, |status| {
            !status.is_success()
        })
    }
}

/// Executes child behaviors in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Pending`, the selector stops, returns `Pending` and
///   **resumes at that child** on the next tick
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. An empty
/// selector returns `Success`, same as an empty sequence.
#[derive(Default)]
pub struct Selector {
    children: Vec<Node>,
    cursor: usize,
}

impl Selector {
    /// Creates an empty selector; add children through [`Container`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the child the next tick starts at.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Container for Selector {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

impl Behavior for Selector {
    fn tick(&mut self) -> Status {
        tick_resumable("selector", &mut self.children, &mut self.cursor, |status| {
            !status.is_failure()
        })
    }
}

/// Ticks every child on every tick.
///
/// # Semantics
///
/// - All children run in order, regardless of what earlier children returned
/// - Returns `Pending` if any child returned `Pending` this tick
/// - Otherwise returns `Success`; a child's `Failure` does not change the result
///
/// There is no memory between ticks.
#[derive(Default)]
pub struct Parallel {
    children: Vec<Node>,
}

impl Parallel {
    /// Creates an empty parallel node; add children through [`Container`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl Container for Parallel {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

impl Behavior for Parallel {
    fn tick(&mut self) -> Status {
        let mut any_pending = false;
        for child in &mut self.children {
            // Failure is absorbed; only Pending affects the aggregate.
            if child.tick().is_pending() {
                any_pending = true;
            }
        }

        let status = if any_pending {
            Status::Pending
        } else {
            Status::Success
        };
        tracing::trace!(children = self.children.len(), ?status, "parallel ticked");
        status
    }
}
