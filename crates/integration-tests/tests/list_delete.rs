//! List and delete flow against a mocked backend.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quillpress_admin::PostList;
use quillpress_client::{ContentStore, RestContentStore};
use quillpress_core::{PostId, PostStatus};
use quillpress_integration_tests::{client_for, post_json};

fn store_for(server_uri: &str) -> (Arc<dyn ContentStore>, tempfile::TempDir) {
    let (client, dir) = client_for(server_uri);
    (Arc::new(RestContentStore::new(client)), dir)
}

fn three_posts() -> serde_json::Value {
    serde_json::json!([
        post_json(1, "first", "published"),
        post_json(2, "second", "draft"),
        post_json(3, "third", "published"),
    ])
}

#[tokio::test]
async fn confirmed_delete_removes_record_preserving_order() {
    let server = MockServer::start().await;
    let (store, _dir) = store_for(&server.uri());

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(three_posts()))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/posts/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut list = PostList::open(store).await.unwrap();
    assert_eq!(list.posts().len(), 3);

    assert!(list.request_delete(PostId::new(2)));
    list.confirm_delete().await.unwrap();

    // removed in place, no re-fetch, order preserved
    let slugs: Vec<_> = list.posts().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["first", "third"]);
}

#[tokio::test]
async fn failed_delete_leaves_list_unchanged() {
    let server = MockServer::start().await;
    let (store, _dir) = store_for(&server.uri());

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(three_posts()))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/posts/2"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"message": "storage failure"})),
        )
        .mount(&server)
        .await;

    let mut list = PostList::open(store).await.unwrap();
    assert!(list.request_delete(PostId::new(2)));
    assert!(list.confirm_delete().await.is_err());

    assert_eq!(list.posts().len(), 3);
    assert_eq!(list.notice(), Some("Failed to delete post: storage failure"));
}

#[tokio::test]
async fn unconfirmed_delete_sends_nothing() {
    let server = MockServer::start().await;
    let (store, _dir) = store_for(&server.uri());

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(three_posts()))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let mut list = PostList::open(store).await.unwrap();
    assert!(list.request_delete(PostId::new(1)));
    list.cancel_delete();
    list.confirm_delete().await.unwrap();

    assert_eq!(list.posts().len(), 3);
}

#[tokio::test]
async fn filter_change_refetches_with_query_param() {
    let server = MockServer::start().await;
    let (store, _dir) = store_for(&server.uri());

    // mounted first so it wins over the unfiltered mock below
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("status", "draft"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([post_json(2, "second", "draft")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(three_posts()))
        .mount(&server)
        .await;

    let mut list = PostList::open(store).await.unwrap();
    list.set_filter(Some(PostStatus::Draft)).await.unwrap();

    let slugs: Vec<_> = list.posts().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["second"]);
}
