//! Mutation handle.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::execute::{execute_operation, execute_upload};
use super::sequenced::SequencedState;
use super::state::{LoadOutcome, OperationState};
use crate::catalog::MutationOperation;
use crate::domain::ports::{GraphqlTransport, UploadFile};

/// A mutation bound to a transport, executed on each [`Self::mutate`].
///
/// Shares the sequencing rules of [`super::LazyQuery`]: only the latest
/// invocation updates the visible state.
pub struct Mutation<O: MutationOperation> {
    transport: Arc<dyn GraphqlTransport>,
    state: SequencedState<O::Data>,
    operation: PhantomData<fn() -> O>,
}

impl<O> Mutation<O>
where
    O: MutationOperation,
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

    /// Run the mutation.
    pub async fn mutate(&self, variables: O::Variables) -> LoadOutcome<O::Data> {
        let sequence = self.state.begin();
        debug!(operation = O::NAME, sequence, "mutation started");
        let result = execute_operation::<O>(self.transport.as_ref(), &variables).await;
        self.state.resolve(O::NAME, sequence, result)
    }

    /// Run the mutation with a file attached as a multipart part.
    pub async fn mutate_with_file(
        &self,
        variables: O::Variables,
        file: UploadFile,
    ) -> LoadOutcome<O::Data> {
        let sequence = self.state.begin();
        debug!(operation = O::NAME, sequence, "upload mutation started");
        let result = execute_upload::<O>(self.transport.as_ref(), &variables, &file).await;
        self.state.resolve(O::NAME, sequence, result)
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> OperationState<O::Data> {
        self.state.snapshot()
    }

    /// Whether the latest invocation is still pending.
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

impl<O: MutationOperation> fmt::Debug for Mutation<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutation")
            .field("operation", &O::NAME)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    //! Mutation execution and state publication.

    use serde_json::json;

    use super::*;
    use crate::catalog::push::{UnregisterPush, UnregisterPushVariables};
    use crate::domain::GraphqlError;
    use crate::domain::ports::{GraphqlResponse, MockGraphqlTransport};

    #[tokio::test]
    async fn publishes_domain_errors() {
        let mut transport = MockGraphqlTransport::new();
        transport.expect_execute().times(1).returning(|_| {
            Ok(GraphqlResponse::with_errors(vec![
                GraphqlError::new("Unknown endpoint").with_field("endpoint"),
            ]))
        });
        let mutation = Mutation::<UnregisterPush>::new(Arc::new(transport));
        let mut receiver = mutation.subscribe();

        let outcome = mutation
            .mutate(UnregisterPushVariables {
                endpoint: "https://push.example/abc".to_owned(),
            })
            .await;

        let error = outcome
            .into_result()
            .expect("latest mutation applies")
            .expect_err("domain error expected");
        assert_eq!(error.field_violations().len(), 1);
        assert!(receiver.has_changed().expect("sender alive"));
        assert!(receiver.borrow_and_update().error().is_some());
    }

    #[tokio::test]
    async fn resolves_acknowledgement() {
        let mut transport = MockGraphqlTransport::new();
        transport.expect_execute().returning(|_| {
            Ok(GraphqlResponse::with_data(json!({ "unregisterPush": "OK" })))
        });
        let mutation = Mutation::<UnregisterPush>::new(Arc::new(transport));

        let outcome = mutation
            .mutate(UnregisterPushVariables {
                endpoint: "https://push.example/abc".to_owned(),
            })
            .await;
        assert!(matches!(outcome, LoadOutcome::Completed(Ok(_))));
        assert_eq!(
            mutation.state().data().and_then(|data| data.unregister_push.as_deref()),
            Some("OK")
        );
    }
}
