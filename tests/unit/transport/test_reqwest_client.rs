use crate::common::test_session;
use assert_json_diff::assert_json_eq;
use mockito::Matcher;
use reddit_client::application::interfaces::ActionService;
use reddit_client::application::services::ActionServiceImpl;
use reddit_client::config::Config;
use reddit_client::error::AppError;
use reddit_client::model::VoteDirection;
use reddit_client::transport::{ApiRequest, RedditHttpClient, ReqwestHttpClient, response};
use serde_json::json;
use std::sync::Arc;

fn client_for(url: &str) -> ReqwestHttpClient {
    ReqwestHttpClient::new(Arc::new(Config::with_base_url(url))).expect("client builds")
}

#[tokio::test]
async fn bearer_token_is_sent_on_every_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/me")
        .match_header("authorization", "bearer test-token")
        .with_status(200)
        .with_body(r#"{"kind": "t2", "data": {}}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let raw = client
        .execute(&test_session(), ApiRequest::get("/api/v1/me"))
        .await
        .unwrap();

    assert_eq!(raw.status.as_u16(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn rate_limit_counters_follow_response_headers() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/first")
        .with_status(200)
        .with_header("x-ratelimit-used", "5")
        .with_header("x-ratelimit-remaining", "95")
        .with_header("x-ratelimit-reset", "600")
        .with_body("{}")
        .create_async()
        .await;
    server
        .mock("GET", "/second")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server.url());
    let session = test_session();

    client
        .execute(&session, ApiRequest::get("/first"))
        .await
        .unwrap();
    let limit = session.rate_limit();
    assert_eq!(limit.used, 5);
    assert_eq!(limit.remaining, 95);
    assert_eq!(limit.reset, 600);

    // A response without the headers leaves the counters untouched.
    client
        .execute(&session, ApiRequest::get("/second"))
        .await
        .unwrap();
    let limit = session.rate_limit();
    assert_eq!(limit.used, 5);
    assert_eq!(limit.remaining, 95);
}

#[tokio::test]
async fn non_success_status_decodes_to_http_status_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body("no such thing")
        .create_async()
        .await;

    let client = client_for(&server.url());
    let raw = client
        .execute(&test_session(), ApiRequest::get("/missing"))
        .await
        .unwrap();
    let err = response::json_value(raw).unwrap_err();

    match err {
        AppError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, "no such thing");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // Nothing listens on the discard port; the dispatch itself fails and no
    // decode stage ever runs.
    let client = client_for("http://127.0.0.1:9");

    let err = client
        .execute(&test_session(), ApiRequest::get("/api/v1/me"))
        .await
        .unwrap_err();

    match err {
        AppError::Network(_) => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn vote_form_body_reaches_the_wire() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/vote")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("dir".into(), "1".into()),
            Matcher::UrlEncoded("id".into(), "t3_abc".into()),
        ]))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = Arc::new(client_for(&server.url()));
    let service = ActionServiceImpl::new(client);
    service
        .vote(&test_session(), VoteDirection::Up, "t3_abc")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn get_query_reaches_the_wire_and_body_decodes() {
    let mut server = mockito::Server::new_async().await;
    let payload = json!({"kind": "Listing", "data": {"children": []}});
    server
        .mock("GET", "/api/info")
        .match_query(Matcher::UrlEncoded("id".into(), "t3_abc,t3_def".into()))
        .with_status(200)
        .with_body(payload.to_string())
        .create_async()
        .await;

    let client = client_for(&server.url());
    let raw = client
        .execute(
            &test_session(),
            ApiRequest::get("/api/info").with_param("id", "t3_abc,t3_def"),
        )
        .await
        .unwrap();
    let value = response::json_value(raw).unwrap();

    assert_json_eq!(value, payload);
}
