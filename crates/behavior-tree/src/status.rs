//! Status returned by behavior nodes.

/// The result of ticking a behavior node.
///
/// # Tick Semantics
///
/// A node either finishes within the tick or reports that it is still working:
/// - Conditions usually evaluate immediately (e.g., "Is an intruder visible?")
/// - Actions may span several ticks (e.g., "Walk to the next waypoint") and
///   report [`Status::Pending`] until they are done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished its work.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be carried out.
    Failure,

    /// The behavior has not finished yet.
    ///
    /// The caller is expected to tick the tree again later; composites resume
    /// at the pending child instead of starting over.
    Pending,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Pending`.
    #[inline]
    pub fn is_pending(self) -> bool {
        matches!(self, Status::Pending)
    }

    /// Inverts a finished status: Success becomes Failure and vice versa.
    ///
    /// `Pending` is returned unchanged, an unfinished node has no outcome to
    /// negate yet.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Pending => Status::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_swaps_finished_statuses() {
        assert_eq!(Status::Success.invert(), Status::Failure);
        assert_eq!(Status::Failure.invert(), Status::Success);
    }

    #[test]
    fn invert_keeps_pending() {
        assert_eq!(Status::Pending.invert(), Status::Pending);
    }

    #[test]
    fn predicates_match_variant() {
        assert!(Status::Success.is_success());
        assert!(Status::Failure.is_failure());
        assert!(Status::Pending.is_pending());
        assert!(!Status::Pending.is_success());
        assert!(!Status::Success.is_failure());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&Status::Pending).unwrap();
        assert_eq!(json, "\"Pending\"");
        let status: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(status, Status::Pending);
    }
}
