//! Read API tests over the router backed by the in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use clubwire::api;
use clubwire::models::NewsItem;
use clubwire::storage::{MemoryStore, NewsStore};

fn item(id: i32, title: &str, last_update: &str) -> NewsItem {
    NewsItem {
        news_article_id: id,
        title: title.to_string(),
        article_url: format!("https://example.com/news/{id}"),
        thumbnail_image_url: String::new(),
        teaser_text: String::new(),
        taxonomies: String::new(),
        publish_date: String::new(),
        last_update_date: last_update.to_string(),
        opta_match_id: String::new(),
        is_published: "True".to_string(),
    }
}

async fn seeded_router() -> axum::Router {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_many(&[
            item(1, "Match Report", "2024-01-01 10:00:00"),
            item(2, "New Signing", "2024-01-02 11:30:00"),
        ])
        .await
        .unwrap();
    api::router(store)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn all_news_returns_full_collection() {
    let app = seeded_router().await;

    let response = app
        .oneshot(Request::builder().uri("/all-news").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["news_article_id"], 1);
    assert_eq!(items[1]["title"], "New Signing");
}

#[tokio::test]
async fn all_news_on_empty_store_returns_empty_array() {
    let app = api::router(Arc::new(MemoryStore::new()));

    let response = app
        .oneshot(Request::builder().uri("/all-news").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn news_by_id_returns_item() {
    let app = seeded_router().await;

    let response = app
        .oneshot(Request::builder().uri("/news?id=2").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["news_article_id"], 2);
    assert_eq!(json["last_update_date"], "2024-01-02 11:30:00");
}

#[tokio::test]
async fn news_by_unknown_id_is_not_found() {
    let app = seeded_router().await;

    let response = app
        .oneshot(Request::builder().uri("/news?id=999").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn news_with_bad_id_is_rejected() {
    let app = seeded_router().await;

    for uri in ["/news", "/news?id=abc"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri {uri}");
    }
}
