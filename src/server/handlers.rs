use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, Json, Response},
};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::constants::TIME_FRAMES;
use crate::layers::MapScene;

use super::state::AppState;

#[derive(RustEmbed)]
#[folder = "frontend/"]
struct Asset;

#[derive(Debug, Deserialize)]
pub struct MapQuery {
    pub time_frame: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TimeFrames {
    pub options: &'static [&'static str],
    pub default: String,
}

// Runs a full render for the requested time frame
pub async fn get_map(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> Result<Json<Arc<MapScene>>, StatusCode> {
    // Only an absent parameter falls back; any given value goes into the URL as-is
    let time_frame = query
        .time_frame
        .unwrap_or_else(|| state.settings.default_time_frame.clone());

    let scene = state.renderer.render(&time_frame).await.map_err(|e| {
        error!("Feed error: {}", e);
        StatusCode::BAD_GATEWAY
    })?;

    Ok(Json(scene))
}

pub async fn get_current_map(
    State(state): State<AppState>,
) -> Result<Json<Arc<MapScene>>, StatusCode> {
    state
        .renderer
        .current()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn get_time_frames(State(state): State<AppState>) -> Json<TimeFrames> {
    Json(TimeFrames {
        options: TIME_FRAMES,
        default: state.settings.default_time_frame.clone(),
    })
}

fn embedded(path: &str, content_type: &str) -> Result<Response, StatusCode> {
    let content = Asset::get(path).ok_or(StatusCode::NOT_FOUND)?.data;
    Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .body(content.into_owned().into())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

pub async fn index_html() -> Result<Html<Vec<u8>>, StatusCode> {
    Asset::get("index.html")
        .map(|file| Html(file.data.into_owned()))
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn style_css() -> Result<Response, StatusCode> {
    embedded("style.css", "text/css")
}

pub async fn script_js() -> Result<Response, StatusCode> {
    embedded("script.js", "application/javascript")
}
