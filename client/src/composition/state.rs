//! Observable state of a query or mutation handle.

use crate::domain::OperationError;

/// What a handle currently shows to its observers.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationState<T> {
    /// Never invoked.
    Idle,
    /// The latest invocation has not answered yet.
    InFlight {
        /// Number of the pending invocation.
        sequence: u64,
    },
    /// The latest invocation answered.
    Resolved {
        /// Number of the invocation that produced `outcome`.
        sequence: u64,
        /// Typed data or the structured failure.
        outcome: Result<T, OperationError>,
    },
}

impl<T> OperationState<T> {
    /// Whether a request is pending.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    /// Number of the invocation shown, `None` while idle.
    #[must_use]
    pub const fn sequence(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::InFlight { sequence } | Self::Resolved { sequence, .. } => Some(*sequence),
        }
    }

    /// Resolved data, if the latest invocation succeeded.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Resolved {
                outcome: Ok(data), ..
            } => Some(data),
            _ => None,
        }
    }

    /// Resolved failure, if the latest invocation failed.
    #[must_use]
    pub const fn error(&self) -> Option<&OperationError> {
        match self {
            Self::Resolved {
                outcome: Err(error),
                ..
            } => Some(error),
            _ => None,
        }
    }
}

impl<T> Default for OperationState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Result of one invocation as seen by its caller.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    /// The invocation was the latest one and its result is now visible.
    Completed(Result<T, OperationError>),
    /// A newer invocation was issued before this one answered; its result
    /// was dropped.
    Superseded {
        /// Number of the dropped invocation.
        sequence: u64,
        /// Number of the newest invocation at the time of the drop.
        latest: u64,
    },
}

impl<T> LoadOutcome<T> {
    /// Whether the result was dropped.
    #[must_use]
    pub const fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded { .. })
    }

    /// The applied result, `None` when superseded.
    #[must_use]
    pub fn into_result(self) -> Option<Result<T, OperationError>> {
        match self {
            Self::Completed(result) => Some(result),
            Self::Superseded { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Accessor coverage for handle state.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::idle(OperationState::Idle, false, None)]
    #[case::in_flight(OperationState::InFlight { sequence: 3 }, true, Some(3))]
    #[case::resolved(
        OperationState::Resolved { sequence: 4, outcome: Ok(7) },
        false,
        Some(4)
    )]
    fn reports_loading_and_sequence(
        #[case] state: OperationState<u32>,
        #[case] loading: bool,
        #[case] sequence: Option<u64>,
    ) {
        assert_eq!(state.is_loading(), loading);
        assert_eq!(state.sequence(), sequence);
    }

    #[test]
    fn exposes_data_and_error() {
        let ok: OperationState<u32> = OperationState::Resolved {
            sequence: 1,
            outcome: Ok(7),
        };
        assert_eq!(ok.data(), Some(&7));
        assert!(ok.error().is_none());

        let failed: OperationState<u32> = OperationState::Resolved {
            sequence: 2,
            outcome: Err(OperationError::decode("bad shape")),
        };
        assert!(failed.data().is_none());
        assert_eq!(failed.error(), Some(&OperationError::decode("bad shape")));
    }

    #[test]
    fn superseded_outcome_has_no_result() {
        let outcome: LoadOutcome<u32> = LoadOutcome::Superseded {
            sequence: 1,
            latest: 2,
        };
        assert!(outcome.is_superseded());
        assert!(outcome.into_result().is_none());
    }
}
