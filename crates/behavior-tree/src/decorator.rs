//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result.
//! This module provides [`Inverter`] (NOT logic) and [`AlwaysSucceed`] (error suppression).
//! Both let `Pending` through untouched so resumption above them keeps working.

use crate::{Behavior, Node, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - If the child returns `Pending`, the inverter returns `Pending`
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter {
    child: Box<Node>,
}

impl Inverter {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: impl Into<Node>) -> Self {
        Self {
            child: Box::new(child.into()),
        }
    }
}

impl Behavior for Inverter {
    fn tick(&mut self) -> Status {
        self.child.tick().invert()
    }
}

/// Returns `Success` once its child finishes, whatever the child's outcome.
///
/// # Semantics
///
/// - If the child returns `Success`, returns `Success`
/// - If the child returns `Failure`, **still returns `Success`**
/// - If the child returns `Pending`, returns `Pending`
///
/// This is useful for:
/// - Optional behaviors that shouldn't cause a sequence to fail
/// - Logging/debugging nodes that observe state without affecting control flow
pub struct AlwaysSucceed {
    child: Box<Node>,
}

impl AlwaysSucceed {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: impl Into<Node>) -> Self {
        Self {
            child: Box::new(child.into()),
        }
    }
}

impl Behavior for AlwaysSucceed {
    fn tick(&mut self) -> Status {
        match self.child.tick() {
            Status::Pending => Status::Pending,
            Status::Success | Status::Failure => Status::Success,
        }
    }
}
