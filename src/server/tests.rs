//! Router tests driven through a real listener.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::build_router;
use crate::config::{DisplayDefaults, RepoSettings, RepositoryDirectory};
use crate::github::{MockIssueTrackerGateway, TrackerItem};
use crate::slash::SlashCommandHandler;

async fn spawn_test_server(gateway: MockIssueTrackerGateway) -> (SocketAddr, JoinHandle<()>) {
    let settings = RepoSettings {
        token: String::from("s3cret"),
        username: None,
        icon_url: None,
    };
    let directory = RepositoryDirectory::from_entries([("octo/repo", settings)])
        .expect("directory should build");
    let handler = SlashCommandHandler::new(
        Arc::new(directory),
        Arc::new(gateway),
        DisplayDefaults::default(),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral listener");
    let addr = listener.local_addr().expect("resolve listener addr");
    let app = build_router(Arc::new(handler));
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    (addr, handle)
}

fn issue_gateway() -> MockIssueTrackerGateway {
    let mut gateway = MockIssueTrackerGateway::new();
    gateway.expect_item().times(1).returning(|_, number| {
        Ok(TrackerItem {
            number: number.get(),
            html_url: Some(String::from("https://github.com/octo/repo/issues/42")),
            title: Some(String::from("Crash on start")),
            state: String::from("closed"),
            author: Some(String::from("octocat")),
            author_url: Some(String::from("https://github.com/octocat")),
            ..TrackerItem::default()
        })
    });
    gateway
}

#[tokio::test]
async fn health_probe_answers_ok() {
    let (addr, handle) = spawn_test_server(MockIssueTrackerGateway::new()).await;

    let response = reqwest::get(format!("http://{addr}/health"))
        .await
        .expect("send health probe");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.expect("read body"), "ok");
    handle.abort();
}

#[tokio::test]
async fn get_reads_parameters_from_query_string() {
    let (addr, handle) = spawn_test_server(issue_gateway()).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/octo/repo"))
        .query(&[("token", "s3cret"), ("text", "#42")])
        .send()
        .await
        .expect("send command");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("decode body");
    assert_eq!(body["response_type"], "in_channel");
    assert_eq!(
        body["text"],
        " * [Issue #42](https://github.com/octo/repo/issues/42) \
         [octocat](https://github.com/octocat) (closed): Crash on start"
    );
    handle.abort();
}

#[tokio::test]
async fn post_reads_parameters_from_form_body() {
    let (addr, handle) = spawn_test_server(issue_gateway()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/octo/repo"))
        .form(&[("token", "s3cret"), ("text", "42")])
        .send()
        .await
        .expect("send command");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("decode body");
    assert_eq!(body["username"], "GitHub");
    handle.abort();
}

#[tokio::test]
async fn rejected_requests_answer_bad_request() {
    let (addr, handle) = spawn_test_server(MockIssueTrackerGateway::new()).await;
    let client = reqwest::Client::new();

    for (path, token, text) in [
        ("octo/repo", "wrong", "42"),
        ("octo/unknown", "s3cret", "42"),
        ("octo/repo", "s3cret", ""),
    ] {
        let response = client
            .get(format!("http://{addr}/{path}"))
            .query(&[("token", token), ("text", text)])
            .send()
            .await
            .expect("send command");

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "expected 400 for {path} token={token} text={text:?}"
        );
    }
    handle.abort();
}

#[tokio::test]
async fn missing_parameters_are_rejected() {
    let (addr, handle) = spawn_test_server(MockIssueTrackerGateway::new()).await;

    let response = reqwest::get(format!("http://{addr}/octo/repo"))
        .await
        .expect("send command");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    handle.abort();
}

#[tokio::test]
async fn post_reads_parameters_from_query_string() {
    let (addr, handle) = spawn_test_server(issue_gateway()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/octo/repo"))
        .query(&[("token", "s3cret"), ("text", "42")])
        .send()
        .await
        .expect("send command");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("decode body");
    assert_eq!(body["response_type"], "in_channel");
    handle.abort();
}

#[tokio::test]
async fn post_merges_query_and_body_with_query_first() {
    let (addr, handle) = spawn_test_server(issue_gateway()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/octo/repo"))
        .query(&[("text", "42")])
        .form(&[("token", "s3cret"), ("text", "not-a-number")])
        .send()
        .await
        .expect("send command");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("decode body");
    assert_eq!(body["response_type"], "in_channel");
    handle.abort();
}

#[tokio::test]
async fn body_with_other_content_type_is_ignored() {
    let (addr, handle) = spawn_test_server(issue_gateway()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/octo/repo"))
        .query(&[("token", "s3cret"), ("text", "42")])
        .json(&serde_json::json!({ "token": "wrong" }))
        .send()
        .await
        .expect("send command");

    assert_eq!(response.status(), StatusCode::OK);
    handle.abort();
}

#[tokio::test]
async fn other_content_type_without_query_is_bad_request() {
    let (addr, handle) = spawn_test_server(MockIssueTrackerGateway::new()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/octo/repo"))
        .json(&serde_json::json!({ "token": "s3cret", "text": "42" }))
        .send()
        .await
        .expect("send command");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.expect("read body"), "Bad Request");
    handle.abort();
}

#[tokio::test]
async fn unreadable_form_body_is_bad_request() {
    let (addr, handle) = spawn_test_server(MockIssueTrackerGateway::new()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/octo/repo"))
        .header(
            reqwest::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body("token=s3cret&token=again&text=42")
        .send()
        .await
        .expect("send command");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.expect("read body"), "Bad Request");
    handle.abort();
}

#[tokio::test]
async fn unreadable_query_string_is_bad_request() {
    let (addr, handle) = spawn_test_server(MockIssueTrackerGateway::new()).await;

    let response = reqwest::get(format!(
        "http://{addr}/octo/repo?token=s3cret&token=again&text=42"
    ))
    .await
    .expect("send command");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.expect("read body"), "Bad Request");
    handle.abort();
}
