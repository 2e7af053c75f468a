mod common;

use axum::http::StatusCode;
use serde_json::Value;
use shortlink::domain::repositories::LinkRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_redirect_success() {
    let (server, repo) = common::memory_server();
    common::seed(&repo, "mylink1", "https://example.com").await;

    let response = server.get("/mylink1").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_records_click() {
    let (server, repo) = common::memory_server();
    common::seed(&repo, "mylink1", "https://example.com").await;

    server
        .get("/mylink1")
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);

    let body = server.get("/api/links/mylink1").await.json::<Value>();
    assert_eq!(body["totalClicks"], 1);
    assert!(body["lastClicked"].is_string());
}

#[tokio::test]
async fn test_redirect_counts_every_visit() {
    let (server, repo) = common::memory_server();
    common::seed(&repo, "count01", "https://example.com").await;

    for _ in 0..5 {
        server
            .get("/count01")
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    let link = repo.find_by_code("count01").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, 5);
    assert!(link.last_clicked.is_some());
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (server, repo) = common::memory_server();
    common::seed(&repo, "AbCdEf", "https://example.com").await;

    server.get("/abcdef").await.assert_status_not_found();

    let link = repo.find_by_code("AbCdEf").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, 0);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repo) = common::memory_server();

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();
    assert!(response.headers().get("location").is_none());
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_after_delete_is_not_found() {
    let (server, repo) = common::memory_server();
    common::seed(&repo, "gone01", "https://example.com").await;

    server.delete("/api/links/gone01").await.assert_status_ok();

    server.get("/gone01").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_fails_when_click_cannot_be_recorded() {
    let failing = common::FailingWritesRepository::default();
    failing
        .inner
        .create(shortlink::domain::entities::NewLink {
            code: "mylink1".to_string(),
            target_url: "https://example.com".to_string(),
        })
        .await
        .unwrap();

    let server = common::server_with(Arc::new(failing));

    let response = server.get("/mylink1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get("location").is_none());
    assert_eq!(response.json::<Value>()["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_redirect_unsendable_target_counts_no_click() {
    let (server, repo) = common::memory_server();
    common::seed(&repo, "nl0001", "https://example.com/a\nb").await;

    let response = server.get("/nl0001").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get("location").is_none());
    assert_eq!(response.json::<Value>()["error"]["code"], "internal_error");

    let link = repo.find_by_code("nl0001").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, 0);
    assert!(link.last_clicked.is_none());
}
