use reddit_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_invalid_url() {
    let error = AppError::InvalidUrl("relative URL without a base".to_string());
    assert_eq!(error.to_string(), "invalid url: relative URL without a base");
}

#[test]
fn test_app_error_display_http_status() {
    let error = AppError::HttpStatus {
        status: StatusCode::NOT_FOUND,
        body: "no such thing".to_string(),
    };
    assert!(error.to_string().contains("404"));
    assert!(error.to_string().contains("no such thing"));
}

#[test]
fn test_app_error_display_unexpected_shape() {
    let error = AppError::UnexpectedShape { expected: "listing" };
    assert_eq!(
        error.to_string(),
        "unexpected response shape: expected listing"
    );
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("query too long".to_string());
    assert_eq!(error.to_string(), "invalid input: query too long");
}

// Note: reqwest::Error cannot be easily constructed in tests.
// The Network conversion is exercised through the transport tests.

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
fn test_app_error_from_url_parse() {
    let parse_error = url::Url::parse("not a url").unwrap_err();
    let app_error: AppError = parse_error.into();

    match app_error {
        AppError::InvalidUrl(_) => (),
        _ => panic!("Expected InvalidUrl error"),
    }
}

#[test]
fn test_json_error_keeps_source() {
    use std::error::Error;
    let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(app_error.source().is_some());
}
