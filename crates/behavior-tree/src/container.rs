//! Fluent tree assembly shared by every composite.
//!
//! [`Container`] is implemented by [`Sequence`], [`Selector`] and
//! [`Parallel`]. Operations that add a composite or a condition return `&mut`
//! to the new child so building can continue depth-first:
//!
//! ```rust
//! use behavior_tree::{Behavior, Container, Selector, Status};
//!
//! let mut root = Selector::new();
//! root.when(3u32, |ammo: &mut u32| {
//!     if *ammo > 0 { Status::Success } else { Status::Failure }
//! })
//! .then_sequence()
//! .action((), |_: &mut ()| Status::Success)
//! .action((), |_: &mut ()| Status::Success);
//! root.action((), |_: &mut ()| Status::Failure);
//!
//! assert_eq!(root.tick(), Status::Success);
//! ```

use crate::{
    Action, AlwaysSucceed, Behavior, Condition, Inverter, Node, Parallel, Selector, Sequence,
    Status,
};

/// A node owning an ordered, append-only list of children.
///
/// Insertion order is evaluation order. There is no removal operation.
pub trait Container: Sized {
    /// Children in evaluation order.
    fn children(&self) -> &[Node];

    /// Mutable access to the child list, used by the provided builder methods.
    fn children_mut(&mut self) -> &mut Vec<Node>;

    /// Number of direct children.
    fn len(&self) -> usize {
        self.children().len()
    }

    fn is_empty(&self) -> bool {
        self.children().is_empty()
    }

    /// Appends an already built node.
    ///
    /// Passing `None` is a no-op, which keeps optional branches terse:
    ///
    /// ```rust
    /// use behavior_tree::{Container, Node, Sequence};
    ///
    /// let debug_overlay: Option<Node> = None;
    /// let mut root = Sequence::new();
    /// root.node(debug_overlay);
    /// assert!(root.is_empty());
    /// ```
    fn node(&mut self, node: impl Into<Option<Node>>) -> &mut Self {
        if let Some(node) = node.into() {
            self.children_mut().push(node);
        }
        self
    }

    /// Appends a caller-defined leaf behavior.
    fn behavior(&mut self, behavior: impl Behavior + 'static) -> &mut Self {
        self.node(Node::leaf(behavior))
    }

    /// Appends an [`Action`] built from a context and its callback.
    fn action<C, F>(&mut self, context: C, callback: F) -> &mut Self
    where
        C: 'static,
        F: FnMut(&mut C) -> Status + 'static,
    {
        self.node(Node::from(Action::new(context, callback)))
    }

    /// Appends an empty [`Sequence`] and returns it for further building.
    fn sequence(&mut self) -> &mut Sequence {
        attach(
            self.children_mut(),
            Node::Sequence(Sequence::new()),
            Node::as_sequence_mut,
        )
    }

    /// Appends an empty [`Selector`] and returns it for further building.
    fn selector(&mut self) -> &mut Selector {
        attach(
            self.children_mut(),
            Node::Selector(Selector::new()),
            Node::as_selector_mut,
        )
    }

    /// Appends an empty [`Parallel`] and returns it for further building.
    fn parallel(&mut self) -> &mut Parallel {
        attach(
            self.children_mut(),
            Node::Parallel(Parallel::new()),
            Node::as_parallel_mut,
        )
    }

    /// Appends a [`Condition`] guarded by an action and returns it so the
    /// guarded branch can be attached with [`Condition::then`].
    fn when<C, F>(&mut self, context: C, callback: F) -> &mut Condition
    where
        C: 'static,
        F: FnMut(&mut C) -> Status + 'static,
    {
        self.when_node(Action::new(context, callback))
    }

    /// Appends a [`Condition`] guarded by an existing node.
    fn when_node(&mut self, guard: impl Into<Node>) -> &mut Condition {
        attach(
            self.children_mut(),
            Node::Condition(Condition::new(guard)),
            Node::as_condition_mut,
        )
    }

    /// Appends `node` wrapped in an [`Inverter`].
    fn invert(&mut self, node: impl Into<Node>) -> &mut Self {
        self.node(Node::Inverter(Inverter::new(node)))
    }

    /// Appends `node` wrapped in [`AlwaysSucceed`].
    fn always_succeed(&mut self, node: impl Into<Node>) -> &mut Self {
        self.node(Node::AlwaysSucceed(AlwaysSucceed::new(node)))
    }
}

/// Pushes `node` and hands back the typed node that was just stored.
pub(crate) fn attach<T>(
    children: &mut Vec<Node>,
    node: Node,
    project: fn(&mut Node) -> Option<&mut T>,
) -> &mut T {
    let index = children.len();
    children.push(node);
    match project(&mut children[index]) {
        Some(inner) => inner,
        None => unreachable!("inserted node changed kind"),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn counting(calls: &Rc<Cell<u32>>, status: Status) -> Node {
        Node::from(Action::new(Rc::clone(calls), move |c: &mut Rc<Cell<u32>>| {
            c.set(c.get() + 1);
            status
        }))
    }

    #[test]
    fn node_ignores_none() {
        let mut root = Sequence::new();
        root.node(None::<Node>)
            .node(Node::from(Sequence::new()))
            .node(None::<Node>);
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn nested_containers_are_returned_for_building() {
        let calls = Rc::new(Cell::new(0));

        let mut root = Sequence::new();
        root.selector()
            .node(counting(&calls, Status::Failure))
            .node(counting(&calls, Status::Success));
        root.parallel()
            .node(counting(&calls, Status::Success))
            .node(counting(&calls, Status::Success));

        assert_eq!(root.len(), 2);
        assert_eq!(root.tick(), Status::Success);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn when_returns_condition_for_chaining() {
        let calls = Rc::new(Cell::new(0));

        let mut root = Sequence::new();
        root.when(true, |open: &mut bool| {
            if *open { Status::Success } else { Status::Failure }
        })
        .then(counting(&calls, Status::Pending));

        assert_eq!(root.tick(), Status::Pending);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn decorators_wrap_appended_nodes() {
        let mut root = Sequence::new();
        root.invert(Action::new((), |_: &mut ()| Status::Failure))
            .always_succeed(Action::new((), |_: &mut ()| Status::Failure));

        assert_eq!(root.len(), 2);
        assert_eq!(root.tick(), Status::Success);
    }

    #[test]
    fn contexts_of_different_types_are_siblings() {
        struct Sensor {
            range: f32,
        }

        let mut root = Parallel::new();
        root.action(Sensor { range: 4.0 }, |s: &mut Sensor| {
            if s.range > 1.0 { Status::Success } else { Status::Failure }
        })
        .action(String::from("idle"), |label: &mut String| {
            label.push('!');
            Status::Success
        });

        assert_eq!(root.tick(), Status::Success);
    }
}
