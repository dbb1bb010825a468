use crate::common::{MockHttpClient, listing_body, test_session};
use reddit_client::application::interfaces::ListingService;
use reddit_client::application::services::ListingServiceImpl;
use reddit_client::error::AppError;
use reddit_client::model::{CommentSort, LinkSort, Paginator, SearchSort, UserContent};
use std::sync::Arc;

fn service_with(client: Arc<MockHttpClient>) -> ListingServiceImpl<MockHttpClient> {
    ListingServiceImpl::new(client)
}

#[tokio::test]
async fn get_links_builds_subreddit_path_and_merges_paginator() {
    let client = Arc::new(MockHttpClient::with_json(&listing_body("")));
    let service = service_with(client.clone());
    let paginator = Paginator::new().with_after("t3_zzz").with_limit(25);

    service
        .get_links(&test_session(), LinkSort::Hot, Some("rust"), &paginator)
        .await
        .unwrap();

    let request = client.last_request();
    assert_eq!(request.path(), "/r/rust/hot");
    assert_eq!(request.param("after"), Some("t3_zzz"));
    assert_eq!(request.param("limit"), Some("25"));
}

#[tokio::test]
async fn get_links_without_subreddit_uses_sitewide_path() {
    let client = Arc::new(MockHttpClient::with_json(&listing_body("")));
    let service = service_with(client.clone());

    service
        .get_links(&test_session(), LinkSort::New, None, &Paginator::new())
        .await
        .unwrap();

    assert_eq!(client.last_request().path(), "/new");
}

#[tokio::test]
async fn comment_thread_sends_tree_parameters_and_takes_second_element() {
    let link_listing = listing_body(r#"{"kind": "t3", "data": {"id": "abc"}}"#);
    let comment_listing = listing_body(r#"{"kind": "t1", "data": {"id": "c1"}}"#);
    let body = format!("[{link_listing}, {comment_listing}]");
    let client = Arc::new(MockHttpClient::with_json(&body));
    let service = service_with(client.clone());
    let focus = vec!["c1".to_string(), "c2".to_string()];

    let listing = service
        .get_comment_thread(&test_session(), "abc", CommentSort::Top, Some(&focus))
        .await
        .unwrap();

    assert_eq!(listing.children.len(), 1);
    assert_eq!(listing.children[0].kind, "t1");

    let request = client.last_request();
    assert_eq!(request.path(), "/comments/abc");
    assert_eq!(request.param("sort"), Some("top"));
    assert_eq!(request.param("depth"), Some("4"));
    assert_eq!(request.param("showmore"), Some("True"));
    assert_eq!(request.param("limit"), Some("100"));
    assert_eq!(request.param("comment"), Some("c1,c2"));
}

#[tokio::test]
async fn comment_thread_with_single_object_is_a_shape_error() {
    let client = Arc::new(MockHttpClient::with_json(&listing_body("")));
    let service = service_with(client);

    let err = service
        .get_comment_thread(&test_session(), "abc", CommentSort::New, None)
        .await
        .unwrap_err();

    match err {
        AppError::UnexpectedShape { .. } => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn more_children_sends_joined_children() {
    let client = Arc::new(MockHttpClient::with_json("{}"));
    let service = service_with(client.clone());
    let children = vec!["c1".to_string(), "c2".to_string(), "c3".to_string()];

    service
        .get_more_children(&test_session(), &children, "t3_abc", CommentSort::Confidence)
        .await
        .unwrap();

    let request = client.last_request();
    assert_eq!(request.path(), "/api/morechildren");
    assert_eq!(request.param("children"), Some("c1,c2,c3"));
    assert_eq!(request.param("link_id"), Some("t3_abc"));
    assert_eq!(request.param("sort"), Some("confidence"));
    assert_eq!(request.param("api_type"), Some("json"));
}

#[tokio::test]
async fn get_user_content_builds_user_path() {
    let client = Arc::new(MockHttpClient::with_json(&listing_body("")));
    let service = service_with(client.clone());

    service
        .get_user_content(&test_session(), "spez", UserContent::Overview, None)
        .await
        .unwrap();

    assert_eq!(client.last_request().path(), "/user/spez/overview");
}

#[tokio::test]
async fn get_info_joins_fullnames() {
    let client = Arc::new(MockHttpClient::with_json(&listing_body("")));
    let service = service_with(client.clone());
    let names = vec!["t3_abc".to_string(), "t1_def".to_string()];

    service.get_info(&test_session(), &names).await.unwrap();

    let request = client.last_request();
    assert_eq!(request.path(), "/api/info");
    assert_eq!(request.param("id"), Some("t3_abc,t1_def"));
}

#[tokio::test]
async fn search_links_builds_query_and_path() {
    let client = Arc::new(MockHttpClient::with_json(&listing_body("")));
    let service = service_with(client.clone());
    let paginator = Paginator::new().with_limit(10);

    service
        .search_links(
            &test_session(),
            Some("rust"),
            "async runtime",
            SearchSort::Top,
            Some(&paginator),
        )
        .await
        .unwrap();

    let request = client.last_request();
    assert_eq!(request.path(), "/r/rust/search");
    assert_eq!(request.param("q"), Some("async runtime"));
    assert_eq!(request.param("sort"), Some("top"));
    assert_eq!(request.param("limit"), Some("10"));
}

#[tokio::test]
async fn search_links_rejects_oversized_query_without_dispatching() {
    let client = Arc::new(MockHttpClient::with_json(&listing_body("")));
    let service = service_with(client.clone());
    // 100 two-byte characters encode to 600 percent-encoded bytes.
    let query = "ä".repeat(100);

    let err = service
        .search_links(&test_session(), None, &query, SearchSort::Relevance, None)
        .await
        .unwrap_err();

    match err {
        AppError::InvalidInput(_) => {}
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(client.request_count(), 0);
}

#[tokio::test]
async fn get_random_selects_path_from_subreddit() {
    let client = Arc::new(MockHttpClient::with_json("{}"));
    let service = service_with(client.clone());

    tokio_test::assert_ok!(service.get_random(&test_session(), Some("rust")).await);
    assert_eq!(client.last_request().path(), "/r/rust/random");

    tokio_test::assert_ok!(service.get_random(&test_session(), None).await);
    assert_eq!(client.last_request().path(), "/random");
}
