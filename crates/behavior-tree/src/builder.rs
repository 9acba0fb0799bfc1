//! Builder utilities for ergonomic behavior tree construction.
//!
//! These helpers return ready [`Node`]s, which is handy when passing a subtree
//! to [`Container::node`](crate::Container::node) or
//! [`Condition::then`](crate::Condition::then). For depth-first building into
//! a parent, use the [`Container`](crate::Container) methods instead.

use crate::{
    Action, AlwaysSucceed, Condition, Inverter, Node, Parallel, Selector, Sequence, Status,
};

/// Creates an empty sequence node.
#[inline]
pub fn sequence() -> Node {
    Node::Sequence(Sequence::new())
}

/// Creates an empty selector node.
#[inline]
pub fn selector() -> Node {
    Node::Selector(Selector::new())
}

/// Creates an empty parallel node.
#[inline]
pub fn parallel() -> Node {
    Node::Parallel(Parallel::new())
}

/// Creates an action node.
///
/// Shorthand for `Node::from(Action::new(context, callback))`.
#[inline]
pub fn action<C, F>(context: C, callback: F) -> Node
where
    C: 'static,
    F: FnMut(&mut C) -> Status + 'static,
{
    Node::from(Action::new(context, callback))
}

/// Creates a condition node guarding `then`.
#[inline]
pub fn condition(guard: impl Into<Node>, then: impl Into<Node>) -> Node {
    let then: Node = then.into();
    let mut condition = Condition::new(guard);
    condition.then(then);
    Node::Condition(condition)
}

/// Creates an inverter node.
///
/// Shorthand for `Node::Inverter(Inverter::new(child))`.
#[inline]
pub fn inverter(child: impl Into<Node>) -> Node {
    Node::Inverter(Inverter::new(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Node::AlwaysSucceed(AlwaysSucceed::new(child))`.
#[inline]
pub fn always_succeed(child: impl Into<Node>) -> Node {
    Node::AlwaysSucceed(AlwaysSucceed::new(child))
}
