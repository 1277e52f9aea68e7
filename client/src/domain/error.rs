//! Domain-level error types.
//!
//! A GraphQL call can fail in two ways. Transport failures (no response, a
//! non-2xx status, an unreadable body) are [`TransportError`]s raised by the
//! transport port. Domain failures arrive inside a successful response as
//! entries of the `errors` array and decode into [`GraphqlError`].
//! [`OperationError`] is what a single operation reports to its caller.

use serde::Deserialize;
use thiserror::Error;

use super::ports::TransportError;

/// Stable machine-readable code attached to a GraphQL error.
///
/// Codes the client does not recognise decode as [`ErrorCode::Unknown`],
/// so consumers always match on a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request needs an authenticated user.
    Unauthenticated,
    /// The user may not perform this action.
    Unauthorized,
    /// The targeted object does not exist.
    NotFound,
    /// An argument failed server-side validation.
    Validation,
    /// The instance does not accept new registrations.
    RegistrationClosed,
    /// The session must be re-established.
    NeedToLogin,
    /// Any code this client does not know about.
    #[serde(other)]
    Unknown,
}

impl ErrorCode {
    /// Wire spelling of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::RegistrationClosed => "registration_closed",
            Self::NeedToLogin => "need_to_login",
            Self::Unknown => "unknown",
        }
    }
}

/// One segment of the response path an error refers to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Object field name.
    Field(String),
    /// List index.
    Index(u64),
}

/// A domain error returned inside a successful GraphQL response.
///
/// `field`, `code` and `status_code` are optional extensions the server
/// adds for domain-specific violations; `field` names the input a form
/// should highlight.
///
/// # Examples
/// ```
/// use client::domain::{ErrorCode, GraphqlError};
///
/// let error: GraphqlError = serde_json::from_str(
///     r#"{"message": "Event not found", "code": "not_found", "status_code": 404}"#,
/// )
/// .expect("valid error");
/// assert!(error.is_not_found());
/// assert_eq!(error.code(), Some(ErrorCode::NotFound));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Error)]
#[error("{message}")]
pub struct GraphqlError {
    message: String,
    #[serde(default)]
    field: Option<String>,
    #[serde(default)]
    code: Option<ErrorCode>,
    #[serde(default)]
    status_code: Option<u16>,
    #[serde(default)]
    path: Vec<PathSegment>,
}

impl GraphqlError {
    /// Build an error carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
            code: None,
            status_code: None,
            path: Vec::new(),
        }
    }

    /// Attach the input field this error refers to.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attach a machine-readable code.
    #[must_use]
    pub const fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach an HTTP-like status code.
    #[must_use]
    pub const fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Input field the error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Machine-readable code, if any.
    #[must_use]
    pub const fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// HTTP-like status code, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Response path the error refers to.
    #[must_use]
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Whether the server rejected the caller's credentials.
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status_code, Some(401 | 403))
            || matches!(
                self.code,
                Some(ErrorCode::Unauthenticated | ErrorCode::Unauthorized)
            )
    }

    /// Whether the targeted object does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(404) || self.code == Some(ErrorCode::NotFound)
    }
}

/// A field-level validation message extracted from a GraphQL error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Input field name.
    pub field: String,
    /// Message to display next to the field.
    pub message: String,
}

/// Failure of one GraphQL operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// The request never produced a usable HTTP response.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The server answered with domain errors.
    #[error("operation failed: {}", summarise(.0))]
    Graphql(Vec<GraphqlError>),
    /// The response did not match the expected shape.
    #[error("response decode failed: {message}")]
    Decode {
        /// Description of the mismatch.
        message: String,
    },
    /// The operation variables could not be serialised.
    #[error("invalid operation variables: {message}")]
    InvalidVariables {
        /// Description of the serialisation failure.
        message: String,
    },
}

impl OperationError {
    /// Convenience constructor for [`OperationError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Domain errors carried by this failure; empty for other kinds.
    #[must_use]
    pub fn graphql_errors(&self) -> &[GraphqlError] {
        match self {
            Self::Graphql(errors) => errors,
            Self::Transport(_) | Self::Decode { .. } | Self::InvalidVariables { .. } => &[],
        }
    }

    /// Field-level messages suitable for form validation display.
    #[must_use]
    pub fn field_violations(&self) -> Vec<FieldViolation> {
        self.graphql_errors()
            .iter()
            .filter_map(|error| {
                error.field().map(|field| FieldViolation {
                    field: field.to_owned(),
                    message: error.message().to_owned(),
                })
            })
            .collect()
    }

    /// Whether the failure stems from missing or rejected credentials.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::Transport(error) => error.is_auth_failure(),
            Self::Graphql(errors) => errors.iter().any(GraphqlError::is_auth_error),
            Self::Decode { .. } | Self::InvalidVariables { .. } => false,
        }
    }

    /// Whether the server reported that the target does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.graphql_errors().iter().any(GraphqlError::is_not_found)
    }
}

fn summarise(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(GraphqlError::message)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests;
