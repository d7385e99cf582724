//! Tests for the HTTP transport

use super::client::{backoff_delay, MAX_BACKOFF};
use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig::builder()
        .base_url(base_url)
        .timeout_secs(5)
        .max_retries(2)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"kind": "youtube#videoListResponse"})))
        .mount(&server)
        .await;

    let client = HttpClient::new(test_config(&server.uri())).unwrap();
    let body = client.get_json("/videos", &[]).await.unwrap();

    assert_eq!(body["kind"], "youtube#videoListResponse");
}

#[tokio::test]
async fn test_api_key_sent_as_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("key", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .base_url(server.uri())
        .api_key("secret-key")
        .build()
        .unwrap();
    let client = HttpClient::new(config).unwrap();

    client.get_json("/channels", &[]).await.unwrap();
}

#[tokio::test]
async fn test_bearer_token_sent_as_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists"))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .base_url(server.uri())
        .access_token("tok-123")
        .build()
        .unwrap();
    let client = HttpClient::new(config).unwrap();

    client.get_json("/playlists", &[]).await.unwrap();
}

#[tokio::test]
async fn test_retry_on_500_then_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let client = HttpClient::new(test_config(&server.uri())).unwrap();
    let body = client.get_json("/flaky", &[]).await.unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_client_error_decodes_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "errors": [{"reason": "quotaExceeded", "domain": "youtube.quota"}]
            }
        })))
        .mount(&server)
        .await;

    let client = HttpClient::new(test_config(&server.uri())).unwrap();
    let err = client.get_json("/videos", &[]).await.unwrap_err();

    match err {
        Error::Api {
            status,
            reason,
            message,
        } => {
            assert_eq!(status, 403);
            assert_eq!(reason.as_deref(), Some("quotaExceeded"));
            assert!(message.contains("exceeded your quota"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_error_without_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let client = HttpClient::new(test_config(&server.uri())).unwrap();
    let err = client.get_json("/videos", &[]).await.unwrap_err();

    match err {
        Error::Api { status, reason, .. } => {
            assert_eq!(status, 404);
            assert!(reason.is_none());
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_retries_exhausted_surface_last_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = HttpClient::new(test_config(&server.uri())).unwrap();
    let err = client.get_json("/down", &[]).await.unwrap_err();

    match err {
        Error::Api { status, .. } => assert_eq!(status, 503),
        other => panic!("expected Api error, got {other:?}"),
    }
    // 1 initial attempt + 2 retries
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_delete_with_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/videos"))
        .and(query_param("id", "abc"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = HttpClient::new(test_config(&server.uri())).unwrap();
    client
        .delete("/videos", &[("id".to_string(), "abc".to_string())])
        .await
        .unwrap();
}

#[test]
fn test_backoff_delay_caps() {
    assert_eq!(backoff_delay(0), Duration::from_millis(100));
    assert_eq!(backoff_delay(1), Duration::from_millis(200));
    assert_eq!(backoff_delay(3), Duration::from_millis(800));
    assert_eq!(backoff_delay(30), MAX_BACKOFF);
}

#[test]
fn test_endpoint_join() {
    let client = HttpClient::new(test_config("https://example.test/v3/")).unwrap();
    assert_eq!(client.endpoint("videos"), "https://example.test/v3/videos");
    assert_eq!(client.endpoint("/videos"), "https://example.test/v3/videos");
    assert_eq!(
        client.endpoint("https://other.test/x"),
        "https://other.test/x"
    );
}
