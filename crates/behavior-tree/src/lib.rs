//! Behavior tree engine with resumable pending actions.
//!
//! This library walks a tree of nodes once per tick, runs exactly the nodes
//! that the previous tick's progress calls for, and reports an aggregate
//! [`Status`].
//!
//! - **Pending is data**: an unfinished action returns [`Status::Pending`] and
//!   the caller ticks again later; there is no suspension inside the engine
//! - **Resumption**: [`Sequence`] and [`Selector`] remember the pending child
//!   and continue from it on the next tick instead of restarting
//! - **Context erasure**: leaves capture their own context, so branches driven
//!   by different context types can share a parent
//! - **Single-threaded**: ticking takes `&mut self`; the caller owns the loop
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Pending
//! - [`Node`]: The closed set of node kinds stored in a tree
//! - Leaf node: [`Action`]
//! - Composite nodes: [`Sequence`], [`Selector`], [`Parallel`]
//! - Guard node: [`Condition`]
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`]
//! - [`Container`]: Fluent builder shared by the composites
//!
//! # Example
//!
//! ```rust
//! use behavior_tree::{Behavior, Container, Sequence, Status};
//!
//! let mut root = Sequence::new();
//! root.action(2u32, |steps_left: &mut u32| {
//!     if *steps_left == 0 {
//!         return Status::Success;
//!     }
//!     *steps_left -= 1;
//!     Status::Pending
//! })
//! .action((), |_: &mut ()| Status::Success);
//!
//! assert_eq!(root.tick(), Status::Pending);
//! assert_eq!(root.tick(), Status::Pending);
//! assert_eq!(root.tick(), Status::Success);
//! ```

pub mod action;
pub mod behavior;
pub mod builder;
pub mod composite;
pub mod condition;
pub mod container;
pub mod decorator;
pub mod error;
pub mod node;
pub mod status;

// Re-export core types for ergonomic API
pub use action::{Action, ActionBuilder};
pub use behavior::Behavior;
pub use composite::{Parallel, Selector, Sequence};
pub use condition::Condition;
pub use container::Container;
pub use decorator::{AlwaysSucceed, Inverter};
pub use error::BuildError;
pub use node::Node;
pub use status::Status;
