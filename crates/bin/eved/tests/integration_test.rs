//! End-to-end smoke tests for the full eved stack.
//!
//! Each test serves a fake home API on an ephemeral local port, points the
//! real hyper client at it, mounts a real dashboard and exercises the axum
//! router via `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use eve_adapter_http_axum::router;
use eve_adapter_http_axum::state::AppState;
use eve_adapter_http_hyper::{HttpApiConfig, HyperHomeApi};
use eve_app::services::dashboard::{Dashboard, Phase};
use eve_domain::time::DisplayZone;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Serve `upstream` on an ephemeral local port and return its base URL.
async fn serve(upstream: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    format!("http://{addr}")
}

/// Home API answering every endpoint with live data.
fn live_upstream() -> Router {
    Router::new()
        .route(
            "/api/v1/rooms",
            get(|| async {
                Json(json!({"rooms": [
                    {"room": "office", "occupied": true, "door_open": true,
                     "window_open": false, "temperature": 23, "humidity": 38.5,
                     "air_quality": 7, "last_seen_at": "2024-01-01T00:00:00Z"}
                ]}))
            }),
        )
        .route(
            "/api/v1/fridge",
            get(|| async {
                Json(json!({"fridges": [
                    {"room": "kitchen", "summary": "Running low on greens",
                     "health_score": 0.456,
                     "items": {"healthy": ["kale"], "less_healthy": []}},
                    {"room": "garage", "summary": "ignored"}
                ]}))
            }),
        )
        .route(
            "/api/v1/occupants/{person}/weight",
            get(|| async {
                Json(json!({"metrics": [
                    {"person": "sobu", "metric_type": "heart_rate",
                     "captured_at": "2024-01-02T00:00:00Z"},
                    {"person": "sobu", "metric_type": "weight", "weight_kg": 70.25,
                     "captured_at": "2024-01-01T00:00:00Z"}
                ]}))
            }),
        )
}

/// Mount a dashboard against `base_url`, wait for the fetches, and build the router.
async fn app(base_url: String) -> (Router, Arc<Dashboard<HyperHomeApi>>) {
    let api = HyperHomeApi::new(&HttpApiConfig {
        base_url,
        timeout_secs: Some(5),
    });
    let dashboard = Arc::new(Dashboard::new(api, "sobu"));
    assert!(dashboard.mount().await);
    dashboard.settle().await;

    let state = AppState::new(
        Arc::clone(&dashboard),
        DisplayZone::utc(),
        10,
    );
    (router::build(state), dashboard)
}

async fn get_json(app: Router, uri: &str) -> Value {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_html(app: Router, uri: &str) -> String {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, _) = app(serve(Router::new()).await).await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Live data
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_replace_fixtures_with_live_data() {
    let (app, dashboard) = app(serve(live_upstream()).await).await;
    assert_eq!(dashboard.phase().await, Phase::Mounted);

    let view = get_json(app, "/api/dashboard").await;

    let rooms = view["rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["name"], "office");
    assert_eq!(rooms[0]["door"], "Open");
    assert_eq!(rooms[0]["temperature"], "23");
    assert_eq!(rooms[0]["humidity"], "38.5");
    assert_eq!(rooms[0]["last_seen"], "1/1/2024, 12:00:00 AM");

    assert_eq!(view["fridge"]["summary"], "Running low on greens");
    assert_eq!(view["fridge"]["health"], "46%");
    assert_eq!(view["fridge"]["categories"]["healthy"], "kale");
    assert_eq!(view["fridge"]["categories"]["less_healthy"], "n/a");

    assert_eq!(view["metric"]["weight"], "70.3 kg");
    assert_eq!(view["metric"]["updated"], "Updated 1/1/2024, 12:00:00 AM");
}

#[tokio::test]
async fn should_render_live_data_on_the_page() {
    let (app, _) = app(serve(live_upstream()).await).await;

    let body = get_html(app, "/").await;

    assert!(body.contains("office"));
    assert!(!body.contains("livingroom"));
    assert!(body.contains("Running low on greens"));
    assert!(body.contains("46%"));
    assert!(body.contains("70.3 kg"));
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_keep_fixtures_when_upstream_is_down() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let (app, _) = app(format!("http://{addr}")).await;

    let view = get_json(app, "/api/dashboard").await;

    assert_eq!(view["rooms"].as_array().unwrap().len(), 3);
    assert_eq!(view["rooms"][0]["name"], "livingroom");
    assert_eq!(view["fridge"]["health"], "82%");
    assert_eq!(view["metric"]["weight"], "68.5 kg");
}

#[tokio::test]
async fn should_keep_fixture_rooms_when_upstream_returns_none() {
    let upstream = Router::new()
        .route("/api/v1/rooms", get(|| async { Json(json!({"rooms": []})) }))
        .route(
            "/api/v1/fridge",
            get(|| async {
                Json(json!({"fridges": [{"room": "kitchen", "health_score": 0, "items": ["milk"]}]}))
            }),
        );
    let (app, _) = app(serve(upstream).await).await;

    let view = get_json(app, "/api/dashboard").await;

    assert_eq!(view["rooms"].as_array().unwrap().len(), 3);
    assert_eq!(view["fridge"]["summary"], "");
    assert_eq!(view["fridge"]["health"], "0%");
    assert!(view["fridge"]["categories"].is_null());
    // metrics endpoint is missing (404), so the fixture reading stays
    assert_eq!(view["metric"]["weight"], "68.5 kg");
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_switch_mode_without_touching_data() {
    let (app, _) = app(serve(live_upstream()).await).await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mode")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("mode=away"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let view = get_json(app, "/api/dashboard").await;
    assert_eq!(view["banner"]["alert"], "House is guarded. I will notify on any motion.");
    assert_eq!(view["banner"]["accent_color"], "#ffe5ec");
    assert_eq!(view["modes"][1]["selected"], true);
    assert_eq!(view["rooms"][0]["name"], "office");
}

// ---------------------------------------------------------------------------
// Teardown
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_report_torn_down_after_teardown() {
    let (_, dashboard) = app(serve(live_upstream()).await).await;

    dashboard.teardown().await;

    assert_eq!(dashboard.phase().await, Phase::TornDown);
    assert!(!dashboard.mount().await);
}
