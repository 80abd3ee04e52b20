//! Local stand-in for the USGS and plate-boundary feeds.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::settings::Settings;

// Three features, one of them without geometry.
pub const QUAKES_WEEK: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"mag": 5, "title": "M 5.0 - Fiji"},
         "geometry": {"type": "Point", "coordinates": [178.2, -17.9, 95]}},
        {"type": "Feature", "properties": {"mag": 1.7, "title": "M 1.7 - Nevada"},
         "geometry": {"type": "Point", "coordinates": [-117.05, 38.1, 8.3]}},
        {"type": "Feature", "properties": {"mag": 2.1, "title": "M 2.1 - somewhere"},
         "geometry": null}
    ]
}"#;

pub const QUAKES_SINGLE: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"mag": 3.2, "title": "M 3.2 - Chile"},
         "geometry": {"type": "Point", "coordinates": [-71.5, -33.0, 42]}}
    ]
}"#;

// Two drawable features among malformed ones.
pub const QUAKES_RAGGED: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"mag": 4.1, "title": "M 4.1 - Tonga"},
         "geometry": {"type": "Point", "coordinates": [-175.2, -20.1, 120.5]}},
        {"type": "Feature", "properties": {"mag": 2.0, "title": "M 2.0 - no depth"},
         "geometry": {"type": "Point", "coordinates": [11.0, 21.0, null]}},
        {"type": "Feature", "properties": {"mag": 3.0, "title": "M 3.0 - bad lon"},
         "geometry": {"type": "Point", "coordinates": [null, 21.0, 5.0]}},
        {"type": "Feature", "properties": {"mag": 3.0, "title": "M 3.0 - line"},
         "geometry": {"type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]]}}
    ]
}"#;

pub const PLATES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"Name": "AF-AN"},
         "geometry": {"type": "LineString", "coordinates": [[-0.4, -54.8], [0.3, -54.6]]}}
    ]
}"#;

/// Holds the `slow` feed until released, and reports when it was requested.
#[derive(Clone, Default)]
pub struct SlowFeedGate {
    pub arrived: Arc<Notify>,
    pub release: Arc<Notify>,
}

async fn summary(State(gate): State<SlowFeedGate>, Path(file): Path<String>) -> impl IntoResponse {
    match file.as_str() {
        "all_week.geojson" => (StatusCode::OK, QUAKES_WEEK),
        "all_day.geojson" => (StatusCode::OK, QUAKES_SINGLE),
        "all_ragged.geojson" => (StatusCode::OK, QUAKES_RAGGED),
        "all_slow.geojson" => {
            gate.arrived.notify_one();
            gate.release.notified().await;
            (StatusCode::OK, QUAKES_SINGLE)
        }
        "all_broken.geojson" => (StatusCode::OK, "<html>not json</html>"),
        _ => (StatusCode::NOT_FOUND, "no such feed"),
    }
}

/// Serves fixture feeds on an ephemeral port and returns settings pointing at it.
pub async fn spawn_feed_server() -> Settings {
    spawn_gated_feed_server().await.0
}

pub async fn spawn_gated_feed_server() -> (Settings, SlowFeedGate) {
    let gate = SlowFeedGate::default();
    let app = Router::new()
        .route("/summary/:file", get(summary))
        .route("/plates.json", get(|| async { PLATES }))
        .with_state(gate.clone());

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let settings = Settings {
        earthquake_feed_base: format!("http://{}/summary", addr),
        plates_url: format!("http://{}/plates.json", addr),
        request_timeout_secs: 5,
        ..Settings::default()
    };
    (settings, gate)
}
