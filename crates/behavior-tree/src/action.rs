//! Leaf action nodes.
//!
//! An [`Action`] pairs a caller-owned context with a callback. Ticking the
//! action hands the context to the callback and returns whatever it reports.
//! Any memory of in-progress work lives in the context or in the closure.

use crate::error::{BuildError, Result};
use crate::{Behavior, Status};

/// Leaf node delegating every tick to a callback.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, Behavior, Status};
///
/// let mut countdown = Action::new(2u32, |remaining: &mut u32| {
///     if *remaining == 0 {
///         Status::Success
///     } else {
///         *remaining -= 1;
///         Status::Pending
///     }
/// });
///
/// assert_eq!(countdown.tick(), Status::Pending);
/// assert_eq!(countdown.tick(), Status::Pending);
/// assert_eq!(countdown.tick(), Status::Success);
/// ```
pub struct Action<C, F> {
    context: C,
    callback: F,
}

impl<C, F> Action<C, F>
where
    F: FnMut(&mut C) -> Status,
{
    /// Creates an action from a context and the callback that drives it.
    pub fn new(context: C, callback: F) -> Self {
        Self { context, callback }
    }

    /// Starts a builder for call sites where the context or callback is optional.
    pub fn builder() -> ActionBuilder<C, F> {
        ActionBuilder::new()
    }

    /// Returns the context handed to the callback.
    pub fn context(&self) -> &C {
        &self.context
    }
}

impl<C, F> Behavior for Action<C, F>
where
    F: FnMut(&mut C) -> Status,
{
    #[inline]
    fn tick(&mut self) -> Status {
        (self.callback)(&mut self.context)
    }
}

/// Fallible builder for [`Action`].
///
/// Both parts are required; [`ActionBuilder::build`] reports the first one
/// missing so the mistake surfaces before the tree is ever ticked.
pub struct ActionBuilder<C, F> {
    context: Option<C>,
    callback: Option<F>,
}

impl<C, F> ActionBuilder<C, F>
where
    F: FnMut(&mut C) -> Status,
{
    pub fn new() -> Self {
        Self {
            context: None,
            callback: None,
        }
    }

    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    pub fn callback(mut self, callback: F) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Builds the action.
    ///
    /// # Errors
    ///
    /// - [`BuildError::MissingContext`] if no context was supplied
    /// - [`BuildError::MissingCallback`] if no callback was supplied
    pub fn build(self) -> Result<Action<C, F>> {
        let context = self.context.ok_or(BuildError::MissingContext)?;
        let callback = self.callback.ok_or(BuildError::MissingCallback)?;
        Ok(Action::new(context, callback))
    }
}

impl<C, F> Default for ActionBuilder<C, F>
where
    F: FnMut(&mut C) -> Status,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    fn is_positive(ctx: &mut TestContext) -> Status {
        if ctx.value > 0 {
            Status::Success
        } else {
            Status::Failure
        }
    }

    #[test]
    fn returns_callback_status_unchanged() {
        let mut pending = Action::new(TestContext { value: 0 }, |_: &mut TestContext| {
            Status::Pending
        });
        assert_eq!(pending.tick(), Status::Pending);

        let mut check = Action::new(TestContext { value: -3 }, is_positive);
        assert_eq!(check.tick(), Status::Failure);
    }

    #[test]
    fn pure_callback_is_idempotent() {
        let mut check = Action::new(TestContext { value: 4 }, is_positive);
        let first = check.tick();
        let second = check.tick();
        assert_eq!(first, Status::Success);
        assert_eq!(first, second);
    }

    #[test]
    fn callback_mutates_context() {
        let mut increment = Action::new(TestContext { value: 0 }, |ctx: &mut TestContext| {
            ctx.value += 1;
            Status::Success
        });
        increment.tick();
        increment.tick();
        assert_eq!(increment.context().value, 2);
    }

    #[test]
    fn builder_requires_callback() {
        let result = ActionBuilder::<TestContext, fn(&mut TestContext) -> Status>::new()
            .context(TestContext { value: 1 })
            .build();
        assert_eq!(result.err(), Some(BuildError::MissingCallback));
    }

    #[test]
    fn builder_requires_context() {
        let result = Action::builder()
            .callback(is_positive as fn(&mut TestContext) -> Status)
            .build();
        assert_eq!(result.err(), Some(BuildError::MissingContext));
    }

    #[test]
    fn builder_with_both_parts_builds() {
        let mut action = Action::builder()
            .context(TestContext { value: 7 })
            .callback(is_positive as fn(&mut TestContext) -> Status)
            .build()
            .expect("context and callback supplied");
        assert_eq!(action.tick(), Status::Success);
    }
}
