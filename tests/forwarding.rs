//! Forwarder behavior against a live mock target.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::json;
use webhook_relay::webhook::ForwardError;

mod common;

#[tokio::test]
async fn missing_config_never_touches_the_network() {
    let target = common::start_mock_target(200, "ok", &[]).await;
    let dir = tempfile::tempdir().unwrap();
    let forwarder = common::forwarder_for(dir.path().join("mcp_config.json"));

    let err = forwarder.forward(&json!({"a": 1})).await.unwrap_err();

    assert!(matches!(err, ForwardError::NotConfigured));
    assert!(err.to_string().contains("WEBHOOK_URL"));
    assert_eq!(target.hits(), 0);
}

#[tokio::test]
async fn malformed_config_disables_forwarding() {
    let target = common::start_mock_target(200, "ok", &[]).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mcp_config.json");
    std::fs::write(&path, format!("{{\"mcpServers\": {{ \"url\": \"{}\"", target.url())).unwrap();

    let err = common::forwarder_for(&path)
        .forward(&json!({"a": 1}))
        .await
        .unwrap_err();

    assert!(matches!(err, ForwardError::NotConfigured));
    assert_eq!(target.hits(), 0);
}

#[tokio::test]
async fn payload_is_posted_verbatim_as_json() {
    let target = common::start_mock_target(200, "ok", &[]).await;
    let dir = tempfile::tempdir().unwrap();
    let forwarder = common::forwarder_for(common::write_mcp_config(dir.path(), &target.url()));

    let payload = json!({
        "zeta": [1, 2.5, "three", null],
        "alpha": { "nested": true, "empty": {} },
        "unicode": "żółw 🐢"
    });
    let response = forwarder.forward(&payload).await.unwrap();
    assert_eq!(response.status_code, 200);

    let requests = target.requests();
    assert_eq!(requests.len(), 1);
    let recorded = &requests[0];
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.headers["content-type"], "application/json");
    assert_eq!(recorded.body, serde_json::to_vec(&payload).unwrap());
}

#[tokio::test]
async fn scalar_and_array_payloads_are_forwarded() {
    let target = common::start_mock_target(204, "", &[]).await;
    let dir = tempfile::tempdir().unwrap();
    let forwarder = common::forwarder_for(common::write_mcp_config(dir.path(), &target.url()));

    forwarder.forward(&json!([1, 2, 3])).await.unwrap();
    forwarder.forward(&json!("just a string")).await.unwrap();

    let bodies: Vec<_> = target.requests().into_iter().map(|r| r.body).collect();
    assert_eq!(bodies[0], "[1,2,3]");
    assert_eq!(bodies[1], "\"just a string\"");
}

#[tokio::test]
async fn downstream_error_status_is_a_response() {
    let target = common::start_mock_target(404, "not found", &[("x-trace", "t-1")]).await;
    let dir = tempfile::tempdir().unwrap();
    let forwarder = common::forwarder_for(common::write_mcp_config(dir.path(), &target.url()));

    let response = forwarder.forward(&json!({"a": 1})).await.unwrap();

    assert_eq!(response.status_code, 404);
    assert_eq!(response.content, "not found");
    assert_eq!(response.headers["x-trace"], "t-1");
    assert!(response.headers.contains_key("content-length"));
}

#[tokio::test]
async fn json_response_body_is_returned_as_raw_text() {
    let target = common::start_mock_target(
        500,
        r#"{"ok": false}"#,
        &[("content-type", "application/json")],
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    let forwarder = common::forwarder_for(common::write_mcp_config(dir.path(), &target.url()));

    let response = forwarder.forward(&json!({})).await.unwrap();

    assert_eq!(response.status_code, 500);
    assert_eq!(response.content, r#"{"ok": false}"#);
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let addr = common::refused_addr().await;
    let dir = tempfile::tempdir().unwrap();
    let forwarder = common::forwarder_for(common::write_mcp_config(
        dir.path(),
        &format!("http://{addr}/hook"),
    ));

    let err = forwarder.forward(&json!({"a": 1})).await.unwrap_err();

    assert!(matches!(err, ForwardError::Transport(_)));
    let message = err.to_string();
    assert!(message.starts_with("Error sending webhook: "));
    assert!(message.to_lowercase().contains("connect"), "{message}");
}

#[tokio::test]
async fn redirect_status_is_returned_without_following() {
    let target =
        common::start_mock_target(302, "moved", &[("location", "/elsewhere")]).await;
    let dir = tempfile::tempdir().unwrap();
    let forwarder = common::forwarder_for(common::write_mcp_config(dir.path(), &target.url()));

    let response = forwarder.forward(&json!({"a": 1})).await.unwrap();

    assert_eq!(response.status_code, 302);
    assert_eq!(response.headers["location"], "/elsewhere");
    assert_eq!(response.content, "moved");
    assert_eq!(target.hits(), 1);
}

#[tokio::test]
async fn slow_target_times_out_as_transport_error() {
    let target =
        common::start_delayed_target(Duration::from_secs(5), 200, "late", &[]).await;
    let dir = tempfile::tempdir().unwrap();
    let forwarder =
        common::forwarder_with_timeout(common::write_mcp_config(dir.path(), &target.url()), 1);

    let started = Instant::now();
    let err = forwarder.forward(&json!({"a": 1})).await.unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(4));
    assert!(matches!(err, ForwardError::Transport(_)));
    let message = err.to_string();
    assert!(message.starts_with("Error sending webhook: "));
    assert!(message.to_lowercase().contains("timed out"), "{message}");
    assert_eq!(target.hits(), 1);
}

#[tokio::test]
async fn unsupported_url_scheme_fails_without_network() {
    let target = common::start_mock_target(200, "ok", &[]).await;
    let dir = tempfile::tempdir().unwrap();
    let forwarder = common::forwarder_for(common::write_mcp_config(
        dir.path(),
        &format!("ftp://{}/hook", target.addr),
    ));

    let err = forwarder.forward(&json!({})).await.unwrap_err();

    assert!(matches!(err, ForwardError::InvalidUrl { .. }));
    assert_eq!(target.hits(), 0);
}

#[tokio::test]
async fn unserializable_payload_is_reported() {
    let target = common::start_mock_target(200, "ok", &[]).await;
    let dir = tempfile::tempdir().unwrap();
    let forwarder = common::forwarder_for(common::write_mcp_config(dir.path(), &target.url()));

    let mut payload = HashMap::new();
    payload.insert(vec![1u8], "non-string key");

    let err = forwarder.forward(&payload).await.unwrap_err();

    assert!(matches!(err, ForwardError::Serialization(_)));
    assert_eq!(target.hits(), 0);
}

#[tokio::test]
async fn config_edits_apply_to_the_next_call() {
    let first = common::start_mock_target(200, "first", &[]).await;
    let second = common::start_mock_target(200, "second", &[]).await;
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_mcp_config(dir.path(), &first.url());
    let forwarder = common::forwarder_for(&path);

    assert_eq!(forwarder.forward(&json!(1)).await.unwrap().content, "first");

    common::write_mcp_config(dir.path(), &second.url());
    assert_eq!(forwarder.forward(&json!(2)).await.unwrap().content, "second");

    assert_eq!(first.hits(), 1);
    assert_eq!(second.hits(), 1);
}
