//! Driven port for sending GraphQL operations to the remote API.
//!
//! The domain owns the request and response envelope so accessors stay
//! independent of the HTTP adapter.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::define_port_error;
use crate::domain::GraphqlError;

/// One operation ready to be sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    /// Operation name declared in the document.
    pub operation_name: &'static str,
    /// Full GraphQL document, fragments included.
    pub query: &'static str,
    /// Serialised operation variables (a JSON object).
    pub variables: Value,
}

/// File attached to an upload mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Variable of the operation that references the file.
    pub variable: String,
    /// File name reported to the server.
    pub file_name: String,
    /// MIME type of the content.
    pub content_type: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

/// Decoded response envelope.
///
/// `errors` holds domain errors; a missing array decodes as empty.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GraphqlResponse {
    /// The `data` member, `None` when absent or `null`.
    #[serde(default)]
    pub data: Option<Value>,
    /// The `errors` member.
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    /// Successful response carrying `data`.
    #[must_use]
    pub const fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Response carrying only domain errors.
    #[must_use]
    pub const fn with_errors(errors: Vec<GraphqlError>) -> Self {
        Self { data: None, errors }
    }

    /// Decode a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Decode`] when the body is not a GraphQL
    /// response envelope.
    pub fn from_slice(body: &[u8]) -> Result<Self, TransportError> {
        serde_json::from_slice(body).map_err(|error| {
            TransportError::decode(format!("invalid GraphQL response envelope: {error}"))
        })
    }
}

define_port_error! {
    /// Errors surfaced while talking to the GraphQL endpoint.
    pub enum TransportError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "graphql transport failed: {message}",
        /// The request exceeded its timeout.
        Timeout { message: String } =>
            "graphql request timed out: {message}",
        /// The endpoint answered with a non-success status.
        Status { status: u16, message: String } =>
            "graphql endpoint returned {status}: {message}",
        /// The response body was not a GraphQL envelope.
        Decode { message: String } =>
            "graphql response decode failed: {message}",
        /// The adapter refused to send the request.
        InvalidRequest { message: String } =>
            "graphql request invalid: {message}",
    }
}

impl TransportError {
    /// Whether the endpoint rejected the caller's credentials.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

/// Port for executing GraphQL operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// Send one operation and return the decoded envelope.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use client::domain::ports::{FixtureGraphqlTransport, GraphqlRequest, GraphqlTransport};
    ///
    /// let transport = FixtureGraphqlTransport::default();
    /// let response = transport
    ///     .execute(&GraphqlRequest {
    ///         operation_name: "Statistics",
    ///         query: "query Statistics { statistics { numberOfUsers } }",
    ///         variables: serde_json::json!({}),
    ///     })
    ///     .await?;
    /// assert!(response.data.is_none());
    /// # Ok::<(), client::domain::ports::TransportError>(())
    /// ```
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, TransportError>;

    /// Send one operation together with a file part.
    async fn upload(
        &self,
        request: &GraphqlRequest,
        file: &UploadFile,
    ) -> Result<GraphqlResponse, TransportError>;
}

/// Fixture transport answering from canned responses keyed by operation name.
///
/// Unknown operations receive an empty envelope.
#[derive(Debug, Clone, Default)]
pub struct FixtureGraphqlTransport {
    responses: BTreeMap<&'static str, GraphqlResponse>,
}

impl FixtureGraphqlTransport {
    /// Register the response returned for `operation_name`.
    #[must_use]
    pub fn with_response(mut self, operation_name: &'static str, response: GraphqlResponse) -> Self {
        self.responses.insert(operation_name, response);
        self
    }

    fn respond(&self, operation_name: &str) -> GraphqlResponse {
        self.responses
            .get(operation_name)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl GraphqlTransport for FixtureGraphqlTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, TransportError> {
        Ok(self.respond(request.operation_name))
    }

    async fn upload(
        &self,
        request: &GraphqlRequest,
        _file: &UploadFile,
    ) -> Result<GraphqlResponse, TransportError> {
        Ok(self.respond(request.operation_name))
    }
}
