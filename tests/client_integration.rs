//! Integration tests using a mock HTTP server
//!
//! Exercises the full flow: request building → validation → paged HTTP
//! fetches → envelope normalization → aggregation.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};
use ytdata::model::PlaylistItem;
use ytdata::{ApiClient, ClientConfig, Error, ListRequest};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .api_key("test-key")
        .timeout_secs(5)
        .max_retries(2)
        .build()
        .unwrap();
    ApiClient::new(config).unwrap()
}

fn playlist_page(start: usize, count: usize, next: Option<&str>) -> serde_json::Value {
    let mut page = json!({
        "kind": "youtube#playlistItemListResponse",
        "etag": format!("etag-{start}"),
        "pageInfo": {"totalResults": 13, "resultsPerPage": count},
        "items": (start..start + count).map(|i| json!({
            "id": format!("pi-{i}"),
            "snippet": {
                "title": format!("video {i}"),
                "playlistId": "PL1",
                "position": i,
                "resourceId": {"kind": "youtube#video", "videoId": format!("v-{i}")}
            }
        })).collect::<Vec<_>>(),
    });
    if let Some(token) = next {
        page["nextPageToken"] = json!(token);
    }
    page
}

/// Mount the canonical 13-item playlist: page one (10 items, token "P2")
/// and page two (3 items, no token).
async fn mount_two_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("playlistId", "PL1"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_page(0, 10, Some("P2"))))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("playlistId", "PL1"))
        .and(query_param("pageToken", "P2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_page(10, 3, None)))
        .mount(server)
        .await;
}

// ============================================================================
// Aggregation Flow
// ============================================================================

#[tokio::test]
async fn test_collect_follows_tokens_across_pages() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;

    let client = client_for(&server);
    let request = ListRequest::new("playlistItems")
        .unwrap()
        .parent("PL1")
        .parts("snippet");

    let result = client.collect(&request, None).await.unwrap();

    assert_eq!(result.len(), 13);
    assert_eq!(result.pages, 2);
    assert_eq!(result.meta.next_page_token, None);
    assert_eq!(result.items[0]["id"], "pi-0");
    assert_eq!(result.items[12]["id"], "pi-12");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_collect_with_count_stops_after_first_page() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;

    let client = client_for(&server);
    let request = ListRequest::new("playlistItems").unwrap().parent("PL1");

    let result = client.collect(&request, Some(5)).await.unwrap();

    assert_eq!(result.len(), 5);
    assert_eq!(result.meta.next_page_token.as_deref(), Some("P2"));
    // Page two was never requested
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_collect_shortfall_is_not_an_error() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;

    let client = client_for(&server);
    let request = ListRequest::new("playlistItems").unwrap().parent("PL1");

    let result = client.collect(&request, Some(20)).await.unwrap();

    assert_eq!(result.len(), 13);
}

#[tokio::test]
async fn test_collect_typed_lifts_items() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;

    let client = client_for(&server);
    let request = ListRequest::new("playlistItems").unwrap().parent("PL1");

    let result = client
        .collect_typed::<PlaylistItem>(&request, None)
        .await
        .unwrap();

    assert_eq!(result.len(), 13);
    let snippet = result.items[3].snippet.as_ref().unwrap();
    assert_eq!(snippet.playlist_id.as_deref(), Some("PL1"));
    assert_eq!(
        snippet.resource_id.as_ref().unwrap().video_id.as_deref(),
        Some("v-3")
    );
}

#[tokio::test]
async fn test_page_stream_yields_pages_sequentially() {
    use futures::TryStreamExt;

    let server = MockServer::start().await;
    mount_two_pages(&server).await;

    let client = client_for(&server);
    let request = ListRequest::new("playlistItems").unwrap().parent("PL1");

    let pages: Vec<_> = client.page_stream(&request).try_collect().await.unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].items.len(), 10);
    assert_eq!(pages[1].items.len(), 3);
}

// ============================================================================
// Wire Shape
// ============================================================================

#[tokio::test]
async fn test_oversized_page_hint_is_clamped_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("maxResults", "50"))
        .and(query_param("part", "snippet"))
        .and(query_param("id", "v1,v2"))
        .and(query_param("key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"kind": "youtube#videoListResponse", "items": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ListRequest::new("videos")
        .unwrap()
        .ids(["v1", "v2"])
        .parts("snippet")
        .page_size(500);

    client.collect(&request, None).await.unwrap();
}

#[tokio::test]
async fn test_single_page_list_with_explicit_token() {
    let server = MockServer::start().await;
    mount_two_pages(&server).await;

    let client = client_for(&server);
    let request = ListRequest::new("playlistItems")
        .unwrap()
        .parent("PL1")
        .page_token("P2");

    let envelope = client.list(&request).await.unwrap();

    // One fetch, of the second page, even though it is the last one
    assert_eq!(envelope.items.len(), 3);
    assert_eq!(envelope.next_page_token, None);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

// ============================================================================
// Validation Before the Wire
// ============================================================================

#[tokio::test]
async fn test_invalid_parts_never_reach_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ListRequest::new("channels")
        .unwrap()
        .ids(["UC1"])
        .parts("id,bogusPart");

    let err = client.collect(&request, None).await.unwrap_err();

    assert_eq!(err.code(), "unsupportedParts");
    assert!(err.to_string().contains("bogusPart"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_conflicting_filters_never_reach_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ListRequest::new("playlists").unwrap().ids(["PL1"]).mine();

    let err = client.collect(&request, None).await.unwrap_err();

    assert_eq!(err.code(), "conflictingFilters");
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Error Propagation
// ============================================================================

#[tokio::test]
async fn test_api_error_propagates_without_partial_result() {
    let server = MockServer::start().await;

    // Page one succeeds, page two fails hard
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_page(0, 10, Some("P2"))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("pageToken", "P2"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "Access forbidden",
                "errors": [{"reason": "forbidden"}]
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ListRequest::new("playlistItems").unwrap().parent("PL1");

    let err = client.collect(&request, None).await.unwrap_err();

    match err {
        Error::Api { status, reason, .. } => {
            assert_eq!(status, 403);
            assert_eq!(reason.as_deref(), Some("forbidden"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transient_error_is_retried_inside_the_transport() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_page(0, 3, None)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ListRequest::new("playlistItems").unwrap().parent("PL1");

    let result = client.collect(&request, None).await.unwrap();

    assert_eq!(result.len(), 3);
    // One failed attempt plus the retry
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

// ============================================================================
// Write Operations
// ============================================================================

#[tokio::test]
async fn test_insert_sends_validated_part_and_body() {
    let server = MockServer::start().await;

    let body = json!({"snippet": {"title": "My playlist"}});
    Mock::given(method("POST"))
        .and(path("/playlists"))
        .and(query_param("part", "snippet"))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#playlist",
            "id": "PL-new",
            "snippet": {"title": "My playlist"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .insert("playlists", Some(&"snippet".into()), &body)
        .await
        .unwrap();

    assert_eq!(created["id"], "PL-new");
}

#[tokio::test]
async fn test_update_rejects_invalid_parts_client_side() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .update("playlists", Some(&"bogusPart".into()), &json!({}))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "unsupportedParts");
}

#[tokio::test]
async fn test_delete_sends_id() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/videos"))
        .and(query_param("id", "v-gone"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete("videos", "v-gone").await.unwrap();
}
