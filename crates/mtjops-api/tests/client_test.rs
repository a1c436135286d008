#![allow(clippy::unwrap_used)]
// Integration tests for `OpsClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mtjops_api::{Error, OpsClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, OpsClient) {
    let server = MockServer::start().await;
    let token: secrecy::SecretString = "test-token".to_string().into();
    let client = OpsClient::from_token(&server.uri(), &token, &TransportConfig::default()).unwrap();
    (server, client)
}

fn api_path(suffix: &str) -> String {
    format!("/api/v1/{suffix}")
}

fn pass_json(id: &str, code: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "event_id": "ev1",
        "code": code,
        "status": status,
        "used_at": null,
        "created_at": "2026-03-01T09:00:00Z"
    })
}

// ── Auth ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_bearer_token_attached() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("events/ev1")))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ev1",
            "title": "Iftar Drive",
            "status": "upcoming",
            "allowed_attendees": 250,
            "is_public": true
        })))
        .mount(&server)
        .await;

    let event = client.get_event("ev1").await.unwrap();
    assert_eq!(event.title, "Iftar Drive");
    assert_eq!(event.allowed_attendees, 250);
}

#[tokio::test]
async fn test_invalid_token() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.get_event("ev1").await;
    assert!(
        matches!(result, Err(Error::InvalidToken)),
        "expected InvalidToken, got: {result:?}"
    );
}

// ── Response handling ───────────────────────────────────────────────

#[tokio::test]
async fn test_malformed_success_body_is_a_deserialization_error() {
    let (server, client) = setup().await;

    // 199 ASCII bytes then a two-byte character straddling the preview
    // cut: truncation must land on a char boundary, not panic.
    let mut body = "x".repeat(199);
    body.push('é');

    Mock::given(method("GET"))
        .and(path(api_path("events/ev1")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let result = client.get_event("ev1").await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization, got: {result:?}"
    );
}

// ── Pass generation ─────────────────────────────────────────────────

#[tokio::test]
async fn test_generate_passes() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("events/ev1/passes/generate")))
        .and(query_param("count", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            pass_json("p1", "c-aaa", "unused"),
            pass_json("p2", "c-bbb", "unused"),
            pass_json("p3", "c-ccc", "unused"),
        ])))
        .mount(&server)
        .await;

    let passes = client.generate_passes("ev1", 3).await.unwrap();
    assert_eq!(passes.len(), 3);
    assert!(passes.iter().all(|p| p.status == "unused"));
}

#[tokio::test]
async fn test_generate_count_zero_rejected_before_request() {
    let (server, client) = setup().await;

    // No request may reach the backend for an out-of-range count.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = client.generate_passes("ev1", 0).await;
    assert!(
        matches!(result, Err(Error::Validation { ref field, .. }) if field == "count"),
        "expected count validation error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_generate_count_over_limit_rejected_before_request() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = client.generate_passes("ev1", 1001).await;
    assert!(matches!(result, Err(Error::Validation { .. })));
}

// ── Scanning ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_scan_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("events/ev1/passes/scan")))
        .and(body_json(json!({ "pass_code": "c-aaa" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "remaining": 41
        })))
        .mount(&server)
        .await;

    let resp = client.scan_pass("ev1", "c-aaa").await.unwrap();
    assert!(resp.ok);
    assert_eq!(resp.remaining, Some(41));
    assert!(resp.code.is_none());
}

#[tokio::test]
async fn test_scan_code_is_trimmed() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("events/ev1/passes/scan")))
        .and(body_json(json!({ "pass_code": "c-aaa" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let resp = client.scan_pass("ev1", "  c-aaa \n").await.unwrap();
    assert!(resp.ok);
}

#[tokio::test]
async fn test_scan_already_used_carries_used_at() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("events/ev1/passes/scan")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": false,
            "code": "PASS_ALREADY_USED",
            "message": "Pass has already been used",
            "used_at": "2026-03-01T10:15:00Z"
        })))
        .mount(&server)
        .await;

    let resp = client.scan_pass("ev1", "c-aaa").await.unwrap();
    assert!(!resp.ok);
    assert_eq!(resp.code.as_deref(), Some("PASS_ALREADY_USED"));
    assert!(resp.used_at.is_some());
}

#[tokio::test]
async fn test_scan_empty_code_never_hits_network() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for code in ["", "   ", "\t\n"] {
        let result = client.scan_pass("ev1", code).await;
        assert!(
            matches!(result, Err(Error::Validation { ref field, .. }) if field == "pass_code"),
            "expected pass_code validation error for {code:?}, got: {result:?}"
        );
    }
}

// ── Revocation ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_revoke_pass() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path(api_path("events/ev1/passes/p1/revoke")))
        .respond_with(ResponseTemplate::new(200).set_body_json(pass_json("p1", "c-aaa", "revoked")))
        .mount(&server)
        .await;

    let pass = client.revoke_pass("ev1", "p1").await.unwrap();
    assert_eq!(pass.status, "revoked");
}

#[tokio::test]
async fn test_revoke_used_pass_surfaces_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path(api_path("events/ev1/passes/p1/revoke")))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "Cannot revoke a used pass",
            "code": "PASS_NOT_REVOCABLE"
        })))
        .mount(&server)
        .await;

    let result = client.revoke_pass("ev1", "p1").await;
    match result {
        Err(Error::Api {
            status,
            ref message,
            ref code,
        }) => {
            assert_eq!(status, 409);
            assert!(message.contains("used pass"), "got: {message}");
            assert_eq!(code.as_deref(), Some("PASS_NOT_REVOCABLE"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Listing & stats ─────────────────────────────────────────────────

#[tokio::test]
async fn test_list_passes_with_status_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("events/ev1/passes")))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "50"))
        .and(query_param("status", "unused"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [pass_json("p1", "c-aaa", "unused")],
            "total": 1,
            "page": 1,
            "pageSize": 50
        })))
        .mount(&server)
        .await;

    let page = client.list_passes("ev1", 1, 50, Some("unused")).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].code, "c-aaa");
}

#[tokio::test]
async fn test_get_event_stats() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("events/ev1/stats")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "capacity": 100,
            "attendees_count": 58,
            "remaining": 42,
            "passes_total": 120,
            "passes_used": 58,
            "passes_unused": 55,
            "passes_revoked": 7
        })))
        .mount(&server)
        .await;

    let stats = client.get_event_stats("ev1").await.unwrap();
    assert_eq!(stats.capacity, 100);
    assert_eq!(stats.remaining, 42);
    assert_eq!(stats.passes_revoked, 7);
}

#[tokio::test]
async fn test_paginate_all_walks_pages() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("events")))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": "ev1", "title": "A", "status": "upcoming", "allowed_attendees": 10 },
                { "id": "ev2", "title": "B", "status": "upcoming", "allowed_attendees": 10 },
            ],
            "total": 3,
            "page": 1,
            "pageSize": 2
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(api_path("events")))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": "ev3", "title": "C", "status": "upcoming", "allowed_attendees": 10 },
            ],
            "total": 3,
            "page": 2,
            "pageSize": 2
        })))
        .mount(&server)
        .await;

    let all = client
        .paginate_all(2, |page, size| client.list_events(page, size, None))
        .await
        .unwrap();

    assert_eq!(all.len(), 3);
    assert_eq!(all[2].id, "ev3");
}

// ── Geography ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_cascading_geo_lookups() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("regions/r1/cities")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "c1", "region_id": "r1", "name": "Lahore" }
        ])))
        .mount(&server)
        .await;

    let cities = client.list_cities("r1").await.unwrap();
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].name, "Lahore");
}
