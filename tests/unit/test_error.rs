use reqwest::StatusCode;
use servicetrade_client::error::AppError;

#[test]
fn test_app_error_display_authentication() {
    let error = AppError::Authentication {
        status: StatusCode::FORBIDDEN,
        body: "denied".to_string(),
    };
    let message = error.to_string();
    assert!(message.starts_with("authentication failed"));
    assert!(message.contains("403"));
    assert!(message.contains("denied"));
}

#[test]
fn test_app_error_display_request() {
    let error = AppError::Request {
        status: StatusCode::NOT_FOUND,
        body: "no such job".to_string(),
    };
    let message = error.to_string();
    assert!(message.starts_with("request failed"));
    assert!(message.contains("404"));
    assert!(message.contains("no such job"));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("not a file path: /".to_string());
    assert_eq!(error.to_string(), "invalid input: not a file path: /");
}

#[test]
fn test_app_error_status_accessor() {
    let auth = AppError::Authentication {
        status: StatusCode::FORBIDDEN,
        body: String::new(),
    };
    assert_eq!(auth.status(), Some(StatusCode::FORBIDDEN));

    let request = AppError::Request {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: String::new(),
    };
    assert_eq!(request.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));

    let input = AppError::InvalidInput("bad".to_string());
    assert_eq!(input.status(), None);
}

#[test]
fn test_app_error_body_accessor() {
    let request = AppError::Request {
        status: StatusCode::BAD_REQUEST,
        body: "missing field".to_string(),
    };
    assert_eq!(request.body(), Some("missing field"));

    let input = AppError::InvalidInput("bad".to_string());
    assert_eq!(input.body(), None);
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}
