//! One-shot execution of a catalog operation against a transport.

use serde_json::Value;
use tracing::{Instrument, debug, info_span, warn};

use crate::catalog::{MutationOperation, Operation};
use crate::domain::OperationError;
use crate::domain::ports::{GraphqlRequest, GraphqlResponse, GraphqlTransport, UploadFile};

/// Send `O` with `variables` and decode its data.
///
/// A response carrying a non-empty `errors` array fails with
/// [`OperationError::Graphql`] even when partial data is present.
///
/// # Errors
///
/// Returns [`OperationError`] when the variables cannot be serialised, the
/// transport fails, the server reports domain errors, or the data does not
/// match `O::Data`.
pub async fn execute_operation<O: Operation>(
    transport: &dyn GraphqlTransport,
    variables: &O::Variables,
) -> Result<O::Data, OperationError> {
    let request = build_request::<O>(variables)?;
    let span = info_span!("graphql_operation", operation = O::NAME);
    async {
        let response = transport.execute(&request).await.inspect_err(|error| {
            warn!(%error, "graphql transport failed");
        })?;
        decode_response::<O>(response)
    }
    .instrument(span)
    .await
}

/// Send mutation `O` together with `file`.
///
/// # Errors
///
/// As for [`execute_operation`].
pub async fn execute_upload<O: MutationOperation>(
    transport: &dyn GraphqlTransport,
    variables: &O::Variables,
    file: &UploadFile,
) -> Result<O::Data, OperationError> {
    let request = build_request::<O>(variables)?;
    let span = info_span!(
        "graphql_upload",
        operation = O::NAME,
        file_name = %file.file_name,
        bytes = file.bytes.len()
    );
    async {
        let response = transport.upload(&request, file).await.inspect_err(|error| {
            warn!(%error, "graphql upload failed");
        })?;
        decode_response::<O>(response)
    }
    .instrument(span)
    .await
}

fn build_request<O: Operation>(variables: &O::Variables) -> Result<GraphqlRequest, OperationError> {
    let variables = serde_json::to_value(variables).map_err(|error| {
        OperationError::InvalidVariables {
            message: error.to_string(),
        }
    })?;
    if !variables.is_object() {
        return Err(OperationError::InvalidVariables {
            message: format!("{} variables must serialise to an object", O::NAME),
        });
    }
    Ok(GraphqlRequest {
        operation_name: O::NAME,
        query: O::DOCUMENT,
        variables,
    })
}

fn decode_response<O: Operation>(response: GraphqlResponse) -> Result<O::Data, OperationError> {
    let GraphqlResponse { data, errors } = response;
    if !errors.is_empty() {
        debug!(count = errors.len(), "graphql response carried errors");
        return Err(OperationError::Graphql(errors));
    }
    let data = match data {
        Some(Value::Null) | None => {
            return Err(OperationError::decode(format!(
                "{} response carried neither data nor errors",
                O::NAME
            )));
        }
        Some(data) => data,
    };
    serde_json::from_value(data).map_err(|error| {
        warn!(%error, "graphql data did not match the expected shape");
        OperationError::decode(format!("{}: {error}", O::NAME))
    })
}
