//! Sequence-guarded state cell shared by query and mutation handles.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::debug;

use super::state::{LoadOutcome, OperationState};
use crate::domain::OperationError;

/// Watch channel plus the number of the latest issued invocation.
///
/// Issue and resolution both run inside the channel's write lock, so a
/// resolution compares against the sequence counter without racing a
/// concurrent issue.
#[derive(Debug)]
pub(super) struct SequencedState<T> {
    state: watch::Sender<OperationState<T>>,
    latest: AtomicU64,
}

impl<T: Clone> SequencedState<T> {
    pub(super) fn new() -> Self {
        let (state, _) = watch::channel(OperationState::Idle);
        Self {
            state,
            latest: AtomicU64::new(0),
        }
    }

    pub(super) fn subscribe(&self) -> watch::Receiver<OperationState<T>> {
        self.state.subscribe()
    }

    pub(super) fn snapshot(&self) -> OperationState<T> {
        self.state.borrow().clone()
    }

    /// Issue the next sequence number and mark it in flight.
    pub(super) fn begin(&self) -> u64 {
        let mut issued = 0;
        self.state.send_modify(|state| {
            issued = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            *state = OperationState::InFlight { sequence: issued };
        });
        issued
    }

    /// Publish `outcome` if `sequence` is still the latest invocation.
    pub(super) fn resolve(
        &self,
        operation: &'static str,
        sequence: u64,
        outcome: Result<T, OperationError>,
    ) -> LoadOutcome<T> {
        let mut latest = sequence;
        let applied = self.state.send_if_modified(|state| {
            latest = self.latest.load(Ordering::SeqCst);
            if latest != sequence {
                return false;
            }
            *state = OperationState::Resolved {
                sequence,
                outcome: outcome.clone(),
            };
            true
        });

        if applied {
            LoadOutcome::Completed(outcome)
        } else {
            debug!(operation, sequence, latest, "discarding superseded response");
            LoadOutcome::Superseded { sequence, latest }
        }
    }
}
