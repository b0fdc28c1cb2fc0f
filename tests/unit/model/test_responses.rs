use serde_json::{Value, json};
use servicetrade_client::model::responses::{Attachment, AuthSession, unwrap_data};

#[test]
fn unwrap_data_returns_nested_payload() {
    let body = json!({"data": {"jobs": [{"id": 1}]}});
    let payload: Option<Value> = unwrap_data(body).unwrap();
    assert_eq!(payload.unwrap()["jobs"][0]["id"], 1);
}

#[test]
fn unwrap_data_missing_field_yields_none() {
    let body = json!({"meta": {"page": 1}});
    let payload: Option<Value> = unwrap_data(body).unwrap();
    assert!(payload.is_none());
}

#[test]
fn unwrap_data_null_field_yields_none() {
    let body = json!({"data": null});
    let payload: Option<Value> = unwrap_data(body).unwrap();
    assert!(payload.is_none());
}

#[test]
fn unwrap_data_non_object_body_yields_none() {
    let body = json!([1, 2, 3]);
    let payload: Option<Value> = unwrap_data(body).unwrap();
    assert!(payload.is_none());
}

#[test]
fn unwrap_data_scalar_payload_deserializes_into_target_type() {
    let body = json!({"data": 42});
    let payload: Option<i64> = unwrap_data(body).unwrap();
    assert_eq!(payload, Some(42));
}

#[test]
fn unwrap_data_mismatched_payload_type_fails() {
    let body = json!({"data": "not a number"});
    let result: Result<Option<i64>, _> = unwrap_data(body);
    assert!(result.is_err());
}

#[test]
fn auth_session_deserializes_camel_case() {
    let session: AuthSession = serde_json::from_value(json!({
        "authenticated": true,
        "authToken": "abcd1234wxyz",
        "user": {"id": 9, "name": "Test User"}
    }))
    .unwrap();

    assert!(session.authenticated);
    assert_eq!(session.auth_token.as_deref(), Some("abcd1234wxyz"));
    assert_eq!(session.user.unwrap()["id"], 9);
}

#[test]
fn auth_session_optional_fields_default() {
    let session: AuthSession = serde_json::from_value(json!({"authenticated": false})).unwrap();
    assert!(!session.authenticated);
    assert!(session.auth_token.is_none());
    assert!(session.user.is_none());
}

#[test]
fn attachment_deserializes_descriptor() {
    let attachment: Attachment = serde_json::from_value(json!({
        "id": 77,
        "uri": "/api/attachment/77",
        "fileName": "whatever.pdf"
    }))
    .unwrap();

    assert_eq!(attachment.id, 77);
    assert_eq!(attachment.uri, "/api/attachment/77");
    assert_eq!(attachment.file_name, "whatever.pdf");
}
