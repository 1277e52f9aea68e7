//! Tests for GraphQL and operation error types.

use super::*;
use rstest::rstest;
use serde_json::json;

#[test]
fn decodes_extension_fields() {
    let error: GraphqlError = serde_json::from_value(json!({
        "message": "Email already used",
        "field": "email",
        "code": "validation",
        "status_code": 422,
        "locations": [{ "line": 2, "column": 3 }],
        "path": ["createUser", 0]
    }))
    .expect("error should decode");

    assert_eq!(error.message(), "Email already used");
    assert_eq!(error.field(), Some("email"));
    assert_eq!(error.code(), Some(ErrorCode::Validation));
    assert_eq!(error.status_code(), Some(422));
    assert_eq!(
        error.path(),
        &[
            PathSegment::Field("createUser".to_owned()),
            PathSegment::Index(0)
        ]
    );
}

#[test]
fn unrecognised_codes_decode_as_unknown() {
    let error: GraphqlError =
        serde_json::from_value(json!({ "message": "odd", "code": "brand_new_code" }))
            .expect("error should decode");
    assert_eq!(error.code(), Some(ErrorCode::Unknown));
}

#[test]
fn message_is_required() {
    let result = serde_json::from_value::<GraphqlError>(json!({ "code": "not_found" }));
    assert!(result.is_err(), "errors without a message must not decode");
}

#[rstest]
#[case::unauthenticated_status(GraphqlError::new("x").with_status_code(401), true)]
#[case::forbidden_status(GraphqlError::new("x").with_status_code(403), true)]
#[case::unauthorized_code(GraphqlError::new("x").with_code(ErrorCode::Unauthorized), true)]
#[case::not_found(GraphqlError::new("x").with_status_code(404), false)]
#[case::plain(GraphqlError::new("x"), false)]
fn classifies_auth_errors(#[case] error: GraphqlError, #[case] expected: bool) {
    assert_eq!(error.is_auth_error(), expected);
}

#[test]
fn field_violations_keep_only_field_errors() {
    let error = OperationError::Graphql(vec![
        GraphqlError::new("too short").with_field("name"),
        GraphqlError::new("server exploded"),
    ]);

    assert_eq!(
        error.field_violations(),
        vec![FieldViolation {
            field: "name".to_owned(),
            message: "too short".to_owned(),
        }]
    );
}

#[test]
fn transport_failures_carry_no_domain_errors() {
    let error = OperationError::from(TransportError::timeout("slow"));
    assert!(error.graphql_errors().is_empty());
    assert!(error.field_violations().is_empty());
    assert!(!error.is_not_found());
}

#[test]
fn auth_failure_considers_both_error_kinds() {
    let transport = OperationError::from(TransportError::status(401_u16, "denied"));
    let domain = OperationError::Graphql(vec![GraphqlError::new("x").with_status_code(403)]);
    let decode = OperationError::decode("bad");

    assert!(transport.is_auth_failure());
    assert!(domain.is_auth_failure());
    assert!(!decode.is_auth_failure());
}

#[test]
fn display_joins_domain_messages() {
    let error = OperationError::Graphql(vec![GraphqlError::new("a"), GraphqlError::new("b")]);
    assert_eq!(error.to_string(), "operation failed: a; b");
}

#[test]
fn error_codes_render_wire_spelling() {
    assert_eq!(ErrorCode::RegistrationClosed.as_str(), "registration_closed");
    assert_eq!(ErrorCode::NeedToLogin.as_str(), "need_to_login");
}
