//! Behaviour of the transport port types and fixture.

use super::*;
use rstest::rstest;
use serde_json::json;

fn request(operation_name: &'static str) -> GraphqlRequest {
    GraphqlRequest {
        operation_name,
        query: "query Tags { tags { id } }",
        variables: json!({}),
    }
}

#[test]
fn request_serialises_with_wire_names() {
    let body = serde_json::to_value(request("Tags")).expect("request should serialise");
    assert_eq!(
        body,
        json!({
            "operationName": "Tags",
            "query": "query Tags { tags { id } }",
            "variables": {}
        })
    );
}

#[test]
fn envelope_without_errors_member_decodes() {
    let response = GraphqlResponse::from_slice(br#"{"data": {"tags": []}}"#)
        .expect("envelope should decode");
    assert_eq!(response.data, Some(json!({ "tags": [] })));
    assert!(response.errors.is_empty());
}

#[test]
fn envelope_with_null_data_and_errors_decodes() {
    let response = GraphqlResponse::from_slice(
        br#"{"data": null, "errors": [{"message": "nope", "status_code": 403}]}"#,
    )
    .expect("envelope should decode");
    assert!(response.data.is_none());
    assert_eq!(response.errors.len(), 1);
}

#[test]
fn non_json_body_is_a_decode_error() {
    let error = GraphqlResponse::from_slice(b"<html>502</html>").expect_err("must fail");
    assert!(matches!(error, TransportError::Decode { .. }));
}

#[rstest]
#[case::unauthorized(401, true)]
#[case::forbidden(403, true)]
#[case::server_error(500, false)]
fn status_errors_classify_auth_failures(#[case] status: u16, #[case] expected: bool) {
    assert_eq!(TransportError::status(status, "x").is_auth_failure(), expected);
}

#[tokio::test]
async fn fixture_answers_registered_operations() {
    let transport = FixtureGraphqlTransport::default().with_response(
        "Tags",
        GraphqlResponse::with_data(json!({ "tags": [] })),
    );

    let known = transport.execute(&request("Tags")).await.expect("fixture never fails");
    let unknown = transport
        .execute(&request("Statistics"))
        .await
        .expect("fixture never fails");

    assert_eq!(known.data, Some(json!({ "tags": [] })));
    assert_eq!(unknown, GraphqlResponse::default());
}
