//! Reqwest-backed GraphQL transport.
//!
//! This adapter owns transport details only: request serialisation,
//! credentials, timeout and HTTP error mapping, and decoding of the response
//! envelope. Interpreting `data` and `errors` is left to the caller.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use tracing::debug;

use crate::domain::ports::{
    GraphqlRequest, GraphqlResponse, GraphqlTransport, TransportError, UploadFile,
};

const DEFAULT_USER_AGENT: &str = concat!("events-client/", env!("CARGO_PKG_VERSION"));

/// Outbound identity sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphqlHttpIdentity {
    /// HTTP user-agent.
    pub user_agent: String,
    /// Bearer token of the signed-in user, if any.
    pub access_token: Option<String>,
}

impl Default for GraphqlHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            access_token: None,
        }
    }
}

/// GraphQL transport that POSTs operations to one endpoint.
#[derive(Clone)]
pub struct HttpGraphqlTransport {
    client: Client,
    endpoint: Url,
    user_agent: String,
    access_token: Option<String>,
}

impl HttpGraphqlTransport {
    /// Build an anonymous transport with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(endpoint, timeout, GraphqlHttpIdentity::default())
    }

    /// Build a transport with an explicit identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        endpoint: Url,
        timeout: Duration,
        identity: GraphqlHttpIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: identity.user_agent,
            access_token: identity
                .access_token
                .filter(|token| !token.trim().is_empty()),
        })
    }

    /// Endpoint operations are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn post(&self) -> RequestBuilder {
        let builder = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json");
        match self.access_token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(
        &self,
        operation: &str,
        builder: RequestBuilder,
    ) -> Result<GraphqlResponse, TransportError> {
        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(
            operation,
            status = status.as_u16(),
            bytes = body.len(),
            "graphql response received"
        );
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        GraphqlResponse::from_slice(body.as_ref())
    }
}

#[async_trait]
impl GraphqlTransport for HttpGraphqlTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, TransportError> {
        let builder = self.post().json(request);
        self.send(request.operation_name, builder).await
    }

    async fn upload(
        &self,
        request: &GraphqlRequest,
        file: &UploadFile,
    ) -> Result<GraphqlResponse, TransportError> {
        let form = build_upload_form(request, file)?;
        let builder = self.post().multipart(form);
        self.send(request.operation_name, builder).await
    }
}

/// Multipart body with the operation fields and one file part.
///
/// The upload variable must already hold the part name.
fn build_upload_form(request: &GraphqlRequest, file: &UploadFile) -> Result<Form, TransportError> {
    let bound = request
        .variables
        .get(&file.variable)
        .and_then(|value| value.as_str());
    if bound != Some(file.variable.as_str()) {
        return Err(TransportError::invalid_request(format!(
            "variable `{}` must name the file part",
            file.variable
        )));
    }

    let part = Part::bytes(file.bytes.clone())
        .file_name(file.file_name.clone())
        .mime_str(&file.content_type)
        .map_err(|error| {
            TransportError::invalid_request(format!(
                "invalid content type `{}`: {error}",
                file.content_type
            ))
        })?;

    Ok(Form::new()
        .text("query", request.query)
        .text("operationName", request.operation_name)
        .text("variables", request.variables.to_string())
        .part(file.variable.clone(), part))
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::timeout(error.to_string())
    } else {
        TransportError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> TransportError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            TransportError::timeout(message)
        }
        _ => TransportError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
