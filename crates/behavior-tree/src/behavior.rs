//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the single operation every
//! behavior tree node implements. The trait carries no context type: leaves
//! capture their own context (see [`Action`](crate::Action)), so subtrees
//! driven by different context types can sit side by side under one parent.

use crate::Status;

/// A behavior tree node that can be ticked.
///
/// Ticking must be safe to repeat any number of times, including right after
/// the node returned [`Status::Pending`]. Failing is a regular outcome and is
/// reported as [`Status::Failure`], never as an error.
pub trait Behavior {
    /// Process one tick of this node.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Pending` if the behavior needs more ticks to finish
    fn tick(&mut self) -> Status;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior>` to also implement `Behavior`,
/// enabling dynamic dispatch and heterogeneous collections of leaves.
impl Behavior for Box<dyn Behavior> {
    #[inline]
    fn tick(&mut self) -> Status {
        (**self).tick()
    }
}
