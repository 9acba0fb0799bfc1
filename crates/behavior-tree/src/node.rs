//! The closed set of node kinds a tree is made of.

use crate::{
    Action, AlwaysSucceed, Behavior, Condition, Inverter, Parallel, Selector, Sequence, Status,
};

/// A node owned by a container, condition or decorator.
///
/// Composites and decorators are stored inline so the builder can hand back
/// `&mut` access to them after insertion. Leaves are boxed trait objects,
/// which erases their context type: an action over one context can be a
/// sibling of an action over another.
pub enum Node {
    /// A leaf, typically an [`Action`] or a caller-defined [`Behavior`].
    Action(Box<dyn Behavior>),
    Sequence(Sequence),
    Selector(Selector),
    Parallel(Parallel),
    Condition(Condition),
    Inverter(Inverter),
    AlwaysSucceed(AlwaysSucceed),
}

impl Node {
    /// Wraps any leaf behavior.
    pub fn leaf(behavior: impl Behavior + 'static) -> Self {
        Node::Action(Box::new(behavior))
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Sequence> {
        match self {
            Node::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    pub fn as_selector_mut(&mut self) -> Option<&mut Selector> {
        match self {
            Node::Selector(selector) => Some(selector),
            _ => None,
        }
    }

    pub fn as_parallel_mut(&mut self) -> Option<&mut Parallel> {
        match self {
            Node::Parallel(parallel) => Some(parallel),
            _ => None,
        }
    }

    pub fn as_condition_mut(&mut self) -> Option<&mut Condition> {
        match self {
            Node::Condition(condition) => Some(condition),
            _ => None,
        }
    }
}

impl Behavior for Node {
    fn tick(&mut self) -> Status {
        match self {
            Node::Action(leaf) => leaf.tick(),
            Node::Sequence(sequence) => sequence.tick(),
            Node::Selector(selector) => selector.tick(),
            Node::Parallel(parallel) => parallel.tick(),
            Node::Condition(condition) => condition.tick(),
            Node::Inverter(inverter) => inverter.tick(),
            Node::AlwaysSucceed(always) => always.tick(),
        }
    }
}

impl<C, F> From<Action<C, F>> for Node
where
    C: 'static,
    F: FnMut(&mut C) -> Status + 'static,
{
    fn from(action: Action<C, F>) -> Self {
        Node::leaf(action)
    }
}

impl From<Box<dyn Behavior>> for Node {
    fn from(behavior: Box<dyn Behavior>) -> Self {
        Node::Action(behavior)
    }
}

impl From<Sequence> for Node {
    fn from(sequence: Sequence) -> Self {
        Node::Sequence(sequence)
    }
}

impl From<Selector> for Node {
    fn from(selector: Selector) -> Self {
        Node::Selector(selector)
    }
}

impl From<Parallel> for Node {
    fn from(parallel: Parallel) -> Self {
        Node::Parallel(parallel)
    }
}

impl From<Condition> for Node {
    fn from(condition: Condition) -> Self {
        Node::Condition(condition)
    }
}

impl From<Inverter> for Node {
    fn from(inverter: Inverter) -> Self {
        Node::Inverter(inverter)
    }
}

impl From<AlwaysSucceed> for Node {
    fn from(always: AlwaysSucceed) -> Self {
        Node::AlwaysSucceed(always)
    }
}
