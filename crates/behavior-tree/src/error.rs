//! Error types raised while assembling a tree.
//!
//! Only construction can fail. A node that does not achieve its goal reports
//! [`Status::Failure`](crate::Status::Failure) instead.

use thiserror::Error;

/// Errors surfaced by fallible node constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("action requires a context")]
    MissingContext,

    #[error("action requires a callback")]
    MissingCallback,

    #[error("condition requires a guard node")]
    MissingCondition,
}

pub type Result<T> = std::result::Result<T, BuildError>;
