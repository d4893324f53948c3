use axum::body::Body;
use axum::http::StatusCode;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use secportal::api::{build_router, AppState};
use secportal::db::Database;

fn create_test_state() -> AppState {
    AppState {
        db: Database::in_memory().unwrap(),
        api_token: None,
    }
}

fn create_test_state_with_token(token: &str) -> AppState {
    AppState {
        db: Database::in_memory().unwrap(),
        api_token: Some(token.to_string()),
    }
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone())
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn make_bearer_request(method: &str, uri: &str, token: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

fn finding(repo: &str, tool: &str, file: &str, severity: &str, message: &str) -> Value {
    json!({
        "repo": repo,
        "tool": tool,
        "file": file,
        "severity": severity,
        "message": message,
    })
}

async fn upload(state: &AppState, payload: Value) -> Value {
    let req = make_request("POST", "/api/upload-scan", Some(payload));
    let response = app(state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response_json(response).await
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = create_test_state();
    let req = make_request("GET", "/api/health", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "secportal");
}

#[tokio::test]
async fn test_upload_without_findings_rejected() {
    let state = create_test_state();
    let req = make_request("POST", "/api/upload-scan", Some(json!({"run_id": "x"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("findings"));
}

#[tokio::test]
async fn test_upload_and_history_roundtrip() {
    let state = create_test_state();

    let ack = upload(
        &state,
        json!({
            "run_id": "run-ci-1",
            "scan_time": "2026-08-29 09:00:00 UTC",
            "findings": [
                finding("api", "trivy", "libssl", "HIGH", "CVE-2026-0001"),
                finding("api", "trivy", "libcurl", "LOW", "CVE-2026-0002"),
            ],
        }),
    )
    .await;
    assert_eq!(ack["status"], "Scan uploaded successfully");
    assert_eq!(ack["run_id"], "run-ci-1");
    assert_eq!(ack["total"], 2);

    let req = make_request("GET", "/api/history", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["total"], 1);
    let scan = &body["scans"][0];
    assert_eq!(scan["run_id"], "run-ci-1");
    assert_eq!(scan["scan_time"], "2026-08-29 09:00:00 UTC");
    assert_eq!(scan["total"], 2);
    assert_eq!(scan["high"], 1);
    assert_eq!(scan["low"], 1);
    assert_eq!(scan["findings"].as_array().unwrap().len(), 2);
    assert_eq!(scan["findings"][0]["file"], "libssl");
}

#[tokio::test]
async fn test_duplicate_run_id_keeps_one_header_appends_findings() {
    let state = create_test_state();
    let payload = json!({
        "run_id": "run-dup",
        "findings": [finding("api", "trivy", "libssl", "HIGH", "CVE-2026-0001")],
    });

    upload(&state, payload.clone()).await;
    upload(&state, payload).await;

    let req = make_request("GET", "/api/history", None);
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;

    // One scan header, doubled finding rows. Current behavior.
    assert_eq!(body["total"], 1);
    assert_eq!(body["scans"][0]["findings"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_summary_repo_rollup() {
    let state = create_test_state();
    upload(
        &state,
        json!({
            "findings": [
                finding("a", "trivy", "pkg1", "HIGH", "issue one"),
                finding("a", "trivy", "pkg2", "LOW", "issue two"),
                finding("b", "yamllint", "ci.yml", "LOW", "issue three"),
            ],
        }),
    )
    .await;

    let req = make_request("GET", "/api/summary", None);
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;

    assert_eq!(body["total"], 3);
    assert_eq!(body["high"], 1);
    assert_eq!(body["low"], 2);

    let a = &body["repo_summary"]["a"];
    assert_eq!(a["total"], 2);
    assert_eq!(a["high"], 1);
    assert_eq!(a["low"], 1);
    assert_eq!(a["status"], "Failed");

    let b = &body["repo_summary"]["b"];
    assert_eq!(b["total"], 1);
    assert_eq!(b["high"], 0);
    assert_eq!(b["low"], 1);
    assert_eq!(b["status"], "Passed");
}

#[tokio::test]
async fn test_summary_empty_store() {
    let state = create_test_state();
    let req = make_request("GET", "/api/summary", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["total"], 0);
    assert!(body["repo_summary"].as_object().unwrap().is_empty());
    assert!(body["trend"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_trend_window_is_last_ten_in_storage_order() {
    let state = create_test_state();
    for i in 0..15 {
        upload(
            &state,
            json!({
                "run_id": format!("run-{}", i),
                "scan_time": format!("2026-08-{:02} 00:00:00 UTC", 29 - i),
                "high": i,
                "low": 0,
                "total": i,
                "findings": [],
            }),
        )
        .await;
    }

    let req = make_request("GET", "/api/summary", None);
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;

    let trend = body["trend"].as_array().unwrap();
    assert_eq!(trend.len(), 10);
    // Storage order, not timestamp order: the descending scan_times above
    // would invert under a time sort.
    assert_eq!(trend[0]["high"], 5);
    assert_eq!(trend[9]["high"], 14);
}

#[tokio::test]
async fn test_repos_listing_and_drilldown() {
    let state = create_test_state();
    upload(
        &state,
        json!({
            "findings": [
                finding("infra", "yamllint", "infra/deploy.yml", "HIGH", "syntax error"),
                finding("infra", "yamllint", "infra/app.yml", "LOW", "line too long"),
                finding("web", "trivy", "node", "LOW", "CVE-2026-0003"),
            ],
        }),
    )
    .await;

    let req = make_request("GET", "/api/repos", None);
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_eq!(body["repos"].as_object().unwrap().len(), 2);
    assert_eq!(body["repos"]["infra"]["status"], "Failed");

    let req = make_request("GET", "/api/repos/infra", None);
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_eq!(body["repo"], "infra");
    assert_eq!(body["total"], 2);
    assert_eq!(body["high"], 1);
    assert_eq!(body["low"], 1);
    assert_eq!(body["findings"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_repo_returns_empty_not_404() {
    let state = create_test_state();
    let req = make_request("GET", "/api/repos/nonexistent", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["total"], 0);
    assert!(body["findings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_findings_filters() {
    let state = create_test_state();
    upload(
        &state,
        json!({
            "findings": [
                finding("api", "trivy", "libssl", "HIGH", "CVE-2026-0001"),
                finding("api", "trivy", "libcurl", "LOW", "CVE-2026-0002"),
                finding("infra", "yamllint", "deploy.yml", "HIGH", "syntax error"),
            ],
        }),
    )
    .await;

    // Conjunction: severity AND tool.
    let req = make_request("GET", "/api/findings?severity=HIGH&tool=trivy", None);
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["findings"][0]["file"], "libssl");

    // Absent filters pass everything through.
    let req = make_request("GET", "/api/findings", None);
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_eq!(body["total"], 3);

    // Case-insensitive search across file and message.
    let req = make_request("GET", "/api/findings?search=SYNTAX", None);
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["findings"][0]["tool"], "yamllint");
}

#[tokio::test]
async fn test_read_routes_require_token_when_configured() {
    let state = create_test_state_with_token("s3cret");

    // No Authorization header.
    let req = make_request("GET", "/api/summary", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Wrong token.
    let req = make_bearer_request("GET", "/api/history", "wrong");
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("token"));

    // Correct token.
    let req = make_bearer_request("GET", "/api/summary", "s3cret");
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_upload_and_health_stay_open_with_token_configured() {
    let state = create_test_state_with_token("s3cret");

    let req = make_request("GET", "/api/health", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // CI callers upload without credentials even when reads are gated.
    let ack = upload(
        &state,
        json!({
            "findings": [finding("api", "trivy", "libssl", "HIGH", "CVE-2026-0001")],
        }),
    )
    .await;
    assert_eq!(ack["status"], "Scan uploaded successfully");

    // And the gated read confirms the upload landed.
    let req = make_bearer_request("GET", "/api/history", "s3cret");
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_reads_open_when_no_token_configured() {
    let state = create_test_state();
    let req = make_request("GET", "/api/history", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_finding_repo_defaults_to_unknown() {
    let state = create_test_state();
    upload(
        &state,
        json!({
            "findings": [
                {"tool": "trivy", "file": "libssl", "severity": "LOW", "message": "CVE-2026-0004"},
            ],
        }),
    )
    .await;

    let req = make_request("GET", "/api/repos", None);
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_eq!(body["repos"]["unknown"]["total"], 1);
}
