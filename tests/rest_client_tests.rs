//! Integration tests for the request executor.
//!
//! These tests run the full pipeline (endpoint building, authentication,
//! execution, decoding) against a local mock server and verify how each
//! outcome is classified.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mailchimp_api::{
    ApiError, ApiKey, EndpointDescriptor, FailureKind, HostUrl, HttpClient, HttpMethod,
    HttpRequest, MailchimpConfig, NoContent, Payload, ResourceType, RestClient,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "abcd1234-us6";

#[derive(Debug, Deserialize, PartialEq)]
struct List {
    id: String,
    name: String,
}

fn config_for(server: &MockServer) -> MailchimpConfig {
    MailchimpConfig::builder()
        .api_key(ApiKey::new(API_KEY).unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn client_for(server: &MockServer) -> RestClient {
    RestClient::new(&config_for(server)).unwrap()
}

fn lists() -> EndpointDescriptor {
    EndpointDescriptor::collection(ResourceType::Lists)
}

// ============================================================================
// Success Paths
// ============================================================================

#[tokio::test]
async fn test_get_decodes_typed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists/abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "abc", "name": "Test List"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let list: List = client.lists().get("abc").await.unwrap();

    assert_eq!(
        list,
        List {
            id: "abc".to_string(),
            name: "Test List".to_string()
        }
    );
}

#[tokio::test]
async fn test_requests_carry_basic_credentials() {
    let server = MockServer::start().await;
    let expected = format!("Basic {}", STANDARD.encode(format!("apikey:{API_KEY}")));
    Mock::given(method("GET"))
        .and(path("/3.0/lists"))
        .and(header("authorization", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lists": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body: Value = client.get(&lists(), None).await.unwrap();

    assert_eq!(body, json!({"lists": []}));
}

#[tokio::test]
async fn test_delete_with_empty_body_is_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/3.0/lists/abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.lists().delete("abc").await.unwrap();

    assert_eq!(result, NoContent);
}

#[tokio::test]
async fn test_post_with_unexpected_shape_is_opaque_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3.0/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "queued"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload: Payload<List> = client
        .lists()
        .create(&json!({"name": "Newsletter"}))
        .await
        .unwrap();

    assert!(!payload.is_typed());
    assert_eq!(payload.opaque().unwrap()["status"], "queued");
}

#[tokio::test]
async fn test_post_with_matching_shape_is_typed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3.0/lists"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "new1", "name": "Newsletter"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload: Payload<List> = client
        .lists()
        .create(&json!({"name": "Newsletter"}))
        .await
        .unwrap();

    assert_eq!(payload.typed().map(|l| l.id.as_str()), Some("new1"));
}

// ============================================================================
// Failure Classification
// ============================================================================

#[tokio::test]
async fn test_not_found_preserves_status_and_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("x-request-id", "req-123")
                .set_body_json(json!({"title": "Resource Not Found", "status": 404, "detail": "Not Found"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.lists().get::<Value>("missing").await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Http);
    assert_eq!(err.status_code(), Some(404));
    assert!(err.raw_body().unwrap().contains("Not Found"));

    match err {
        ApiError::Http(e) => {
            assert_eq!(e.request_id.as_deref(), Some("req-123"));
            let problem = e.problem().unwrap();
            assert_eq!(problem.title.as_deref(), Some("Resource Not Found"));
            assert_eq!(problem.detail.as_deref(), Some("Not Found"));
        }
        other => panic!("Expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limited_response_is_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get::<Value>(&lists(), None).await.unwrap_err();

    assert_eq!(err.status_code(), Some(429));
    assert!(err.is_retryable(HttpMethod::Get));
    assert!(err.is_retryable(HttpMethod::Post));
}

#[tokio::test]
async fn test_rate_limited_response_carries_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "7")
                .set_body_string("slow down"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get::<Value>(&lists(), None).await.unwrap_err();

    match err {
        ApiError::Http(e) => {
            assert_eq!(e.code, 429);
            assert_eq!(e.body, "slow down");
            assert_eq!(e.retry_after, Some(Duration::from_secs(7)));
        }
        other => panic!("Expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_retry_after_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists"))
        .respond_with(ResponseTemplate::new(503).insert_header("Retry-After", "1e300"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get::<Value>(&lists(), None).await.unwrap_err();

    match err {
        ApiError::Http(e) => assert_eq!(e.retry_after, None),
        other => panic!("Expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_is_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get::<Value>(&lists(), None).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Decode);
    assert_eq!(err.status_code(), Some(200));
    assert_eq!(err.raw_body(), Some("{not json"));
}

#[tokio::test]
async fn test_wrong_shape_is_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.lists().get::<List>("abc").await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { code: 200, .. }));
}

#[tokio::test]
async fn test_missing_credential_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = MailchimpConfig::builder()
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let err = client.lists().get::<Value>("abc").await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Authentication);

    // Calling the executor directly with a full URL must fail the same way.
    let request = HttpRequest::builder(HttpMethod::Get, format!("{}/3.0/lists", server.uri()))
        .build()
        .unwrap();
    let err = client.http_client().request(request).await.unwrap_err();
    assert!(matches!(err, ApiError::Authentication(_)));
}

#[tokio::test]
async fn test_timeout_is_network_failure_with_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = MailchimpConfig::builder()
        .api_key(ApiKey::new(API_KEY).unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let err = client.get::<Value>(&lists(), None).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Network);
    assert!(err.is_timeout());
    assert!(err.is_retryable(HttpMethod::Get));
    assert!(!err.is_retryable(HttpMethod::Post));
}

#[tokio::test]
async fn test_per_request_timeout_overrides_client_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, format!("{}/3.0/lists", server.uri()))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.request(request).await.unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_unreachable_host_is_network_failure() {
    let config = MailchimpConfig::builder()
        .api_key(ApiKey::new(API_KEY).unwrap())
        .api_host(HostUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let err = client.lists().delete("abc").await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Network);
    assert!(!err.is_timeout());
    assert_eq!(err.status_code(), None);
}

// ============================================================================
// Cancellation
// ============================================================================

#[tokio::test]
async fn test_cancelled_call_returns_cancelled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let started = std::time::Instant::now();
    let err = client
        .get_with_cancel::<Value>(&lists(), None, &token)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Cancelled);
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_already_cancelled_token_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = CancellationToken::new();
    token.cancel();

    let err = client
        .get_with_cancel::<Value>(&lists(), None, &token)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Cancelled));
}

#[tokio::test]
async fn test_uncancelled_token_completes_normally() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_items": 0})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = CancellationToken::new();

    let body: Value = client
        .get_with_cancel(&lists(), None, &token)
        .await
        .unwrap();

    assert_eq!(body["total_items"], 0);
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_fifty_concurrent_gets_complete_independently() {
    let server = MockServer::start().await;
    for i in 0..50 {
        Mock::given(method("GET"))
            .and(path(format!("/3.0/lists/list-{i}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": format!("list-{i}"), "name": format!("List {i}")})),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let handles: Vec<_> = (0..50)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                let id = format!("list-{i}");
                let list: List = client.lists().get(&id).await.unwrap();
                (i, list)
            })
        })
        .collect();

    for handle in handles {
        let (i, list) = handle.await.unwrap();
        assert_eq!(list.id, format!("list-{i}"));
        assert_eq!(list.name, format!("List {i}"));
    }
}

#[tokio::test]
async fn test_failure_in_one_call_does_not_affect_others() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists/good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "good", "name": "Good"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3.0/lists/bad"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let service = client.lists();
    let (good, bad) = tokio::join!(service.get::<List>("good"), service.get::<List>("bad"));

    assert_eq!(good.unwrap().name, "Good");
    assert_eq!(bad.unwrap_err().status_code(), Some(500));
}
