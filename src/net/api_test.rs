use super::*;
use crate::net::mock::mock_client;
use crate::net::transport::Method;
use crate::net::types::Status;

#[test]
fn check_endpoint_formats_expected_path() {
    assert_eq!(check_endpoint("c-123"), "/check/c-123");
}

// =============================================================
// parse_history
// =============================================================

#[test]
fn parse_history_missing_field_is_empty() {
    let parsed = parse_history(serde_json::json!({})).unwrap();
    assert!(parsed.records.is_empty());
    assert!(parsed.rejected.is_empty());
}

#[test]
fn parse_history_rejects_wrong_shape() {
    assert!(parse_history(serde_json::json!({ "history": "nope" })).is_err());
}

#[test]
fn parse_history_keeps_valid_entries_around_a_bad_one() {
    let parsed = parse_history(serde_json::json!({ "history": [
        { "id": "1", "target": "a.example.com", "date": "2024-01-01", "status": "success" },
        { "id": "2", "target": "b.example.com", "date": null, "status": "error" },
        { "id": "3", "target": "c.example.com", "date": "2024-01-03", "status": null }
    ]}))
    .unwrap();

    let ids: Vec<&str> = parsed.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(parsed.records[1].status.as_str(), "unknown");
    assert_eq!(parsed.rejected.len(), 1);
    assert!(parsed.rejected[0].starts_with("history[1]"));
}

// =============================================================
// load_history
// =============================================================

#[tokio::test]
async fn load_history_returns_single_record() {
    let (client, transport, diagnostics) = mock_client();
    transport.respond(
        200,
        r#"{"history":[{"id":"1","target":"example.com","date":"2024-01-01","status":"success"}]}"#,
    );

    let records = load_history(&client).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "1");
    assert_eq!(records[0].status, Status::Success);
    assert_eq!(transport.requests()[0].url, "http://localhost:8000/api/history");
    assert!(diagnostics.entries().is_empty());
}

#[tokio::test]
async fn load_history_preserves_server_order() {
    let (client, transport, _) = mock_client();
    transport.respond(
        200,
        r#"{"history":[
            {"id":"b","target":"t2","date":"d2","status":"error"},
            {"id":"a","target":"t1","date":"d1","status":"pending"},
            {"id":"c","target":"t3","date":"d3","status":"success"}
        ]}"#,
    );

    let ids: Vec<String> = load_history(&client).await.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[tokio::test]
async fn load_history_missing_field_is_empty_without_logging() {
    let (client, transport, diagnostics) = mock_client();
    transport.respond(200, r#"{"checks":[]}"#);

    assert!(load_history(&client).await.is_empty());
    assert!(diagnostics.entries().is_empty());
}

#[tokio::test]
async fn load_history_server_error_is_absorbed_after_logging() {
    let (client, transport, diagnostics) = mock_client();
    transport.respond(500, r#"{"error":"Internal error"}"#);

    assert!(load_history(&client).await.is_empty());
    assert_eq!(diagnostics.scopes(), vec!["request".to_owned(), "history".to_owned()]);
}

#[tokio::test]
async fn load_history_transport_failure_is_absorbed() {
    let (client, transport, diagnostics) = mock_client();
    transport.fail("connection refused");

    assert!(load_history(&client).await.is_empty());
    assert!(diagnostics.entries()[1].1.contains("connection refused"));
}

#[tokio::test]
async fn load_history_malformed_json_is_absorbed() {
    let (client, transport, _) = mock_client();
    transport.respond(200, "{not json");

    assert!(load_history(&client).await.is_empty());
}

#[tokio::test]
async fn load_history_wrong_shape_is_absorbed() {
    let (client, transport, diagnostics) = mock_client();
    transport.respond(200, r#"{"history":{"id":"1"}}"#);

    assert!(load_history(&client).await.is_empty());
    assert_eq!(diagnostics.scopes(), vec!["history".to_owned()]);
}

#[tokio::test]
async fn load_history_skips_malformed_record_and_logs_it() {
    let (client, transport, diagnostics) = mock_client();
    transport.respond(
        200,
        r#"{"history":[
            {"id":"1","target":"a.example.com","date":"2024-01-01","status":"success"},
            {"id":"2","target":"b.example.com","date":null,"status":"error"},
            {"id":"3","target":"c.example.com","date":"2024-01-03","status":null}
        ]}"#,
    );

    let records = load_history(&client).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].status, Status::Success);
    assert_eq!(records[1].id, "3");
    assert_eq!(records[1].status, Status::default());
    assert_eq!(diagnostics.scopes(), vec!["history".to_owned()]);
    assert!(diagnostics.entries()[0].1.contains("history[1]"));
}

// =============================================================
// check endpoints
// =============================================================

#[tokio::test]
async fn fetch_check_decodes_details() {
    let (client, transport, _) = mock_client();
    transport.respond(
        200,
        r#"{"id":"c-1","target":"example.com","checks":["ping"],"status":"completed","results":{"ping":{"success":true}}}"#,
    );

    let details = fetch_check(&client, "c-1").await.unwrap();

    assert_eq!(details.target, "example.com");
    assert_eq!(details.results["ping"]["success"], true);
    assert_eq!(transport.requests()[0].url, "http://localhost:8000/api/check/c-1");
}

#[tokio::test]
async fn fetch_check_propagates_not_found() {
    let (client, transport, _) = mock_client();
    transport.respond(404, r#"{"error":"not found","status":"not_found"}"#);

    let err = fetch_check(&client, "missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn repeat_check_resubmits_same_parameters() {
    let (client, transport, _) = mock_client();
    transport
        .respond(
            200,
            r#"{"id":"c-1","target":"example.com","checks":["ping","dns"],"status":"completed","results":{}}"#,
        )
        .respond(
            201,
            r#"{"checkId":"c-2","status":"queued","target":"example.com","checks":["ping","dns"]}"#,
        );

    let accepted = repeat_check(&client, "c-1").await.unwrap();

    assert_eq!(accepted.check_id, "c-2");
    let sent = transport.requests();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].method, Method::Post);
    assert_eq!(sent[1].url, "http://localhost:8000/api/check");
    let body: serde_json::Value = serde_json::from_str(sent[1].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "target": "example.com", "checks": ["ping", "dns"] }));
}

#[tokio::test]
async fn repeat_check_stops_when_lookup_fails() {
    let (client, transport, _) = mock_client();
    transport.respond(404, "{}");

    assert!(repeat_check(&client, "gone").await.is_err());
    assert_eq!(transport.requests().len(), 1);
}
