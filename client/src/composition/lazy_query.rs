//! Lazily executed query handle.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::execute::execute_operation;
use super::sequenced::SequencedState;
use super::state::{LoadOutcome, OperationState};
use crate::catalog::QueryOperation;
use crate::domain::ports::GraphqlTransport;

/// A query bound to a transport, executed only when [`Self::load`] runs.
///
/// Calling `load` again while a request is pending starts a new request;
/// the pending one keeps running but its result is discarded.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use client::catalog::tags::{FilterTags, FilterTagsVariables};
/// use client::composition::LazyQuery;
/// use client::domain::ports::FixtureGraphqlTransport;
///
/// # async fn demo() {
/// let query = LazyQuery::<FilterTags>::new(Arc::new(FixtureGraphqlTransport::default()));
/// assert!(!query.is_loading());
/// let _outcome = query
///     .load(FilterTagsVariables { filter: "mus".to_owned() })
///     .await;
/// # }
/// ```
pub struct LazyQuery<O: QueryOperation> {
    transport: Arc<dyn GraphqlTransport>,
    state: SequencedState<O::Data>,
    operation: PhantomData<fn() -> O>,
}

impl<O> LazyQuery<O>
where
    O: QueryOperation,
    O::Data: Clone,
{
    /// Bind `O` to `transport` without sending anything.
    pub fn new(transport: Arc<dyn GraphqlTransport>) -> Self {
        Self {
            transport,
            state: SequencedState::new(),
            operation: PhantomData,
        }
    }

    /// Execute the query and publish its result if no newer load started.
    pub async fn load(&self, variables: O::Variables) -> LoadOutcome<O::Data> {
        let sequence = self.state.begin();
        debug!(operation = O::NAME, sequence, "query load started");
        let result = execute_operation::<O>(self.transport.as_ref(), &variables).await;
        self.state.resolve(O::NAME, sequence, result)
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> OperationState<O::Data> {
        self.state.snapshot()
    }

    /// Whether the latest load is still pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    /// Receiver notified on every visible state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<OperationState<O::Data>> {
        self.state.subscribe()
    }
}

impl<O: QueryOperation> fmt::Debug for LazyQuery<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyQuery")
            .field("operation", &O::NAME)
            .finish_non_exhaustive()
    }
}
