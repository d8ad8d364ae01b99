use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json},
};
use serde::Deserialize;
use std::sync::MutexGuard;
use tracing::{error, info, warn};

use crate::constants::MAX_STATION_COUNT;
use crate::html_template::render_map_page;
use crate::map_view::MapScreen;
use crate::stations::{StationCache, StationSet};

use super::state::{AppState, SharedCache, SharedSource};

#[derive(Debug, Default, Deserialize)]
pub struct StationQuery {
    pub count: Option<usize>,
}

fn lock_cache(
    cache: &SharedCache,
) -> Result<MutexGuard<'_, StationCache<SharedSource>>, StatusCode> {
    cache.lock().map_err(|e| {
        error!("Station cache lock poisoned: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

fn resolve_count(state: &AppState, query: &StationQuery) -> Result<usize, StatusCode> {
    let count = query.count.unwrap_or(state.settings.station_count);
    if count > MAX_STATION_COUNT {
        warn!(count, max = MAX_STATION_COUNT, "Rejecting station count");
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(count)
}

fn current_screen(state: &AppState) -> Result<MapScreen, StatusCode> {
    let mut cache = lock_cache(&state.screen)?;
    let profile = *cache.profile();
    let set = cache.get(state.settings.station_count);
    Ok(MapScreen::new(&profile, &set.stations))
}

// HTTP API Handlers
pub async fn index_html(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let screen = current_screen(&state)?;
    render_map_page(&screen).map_err(|e| {
        error!("Failed to render map page: {:#}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// The configured count reads the screen's own set; any other count goes
/// through a separate cache so the screen stays stable.
pub async fn get_stations(
    State(state): State<AppState>,
    Query(query): Query<StationQuery>,
) -> Result<Json<StationSet>, StatusCode> {
    let count = resolve_count(&state, &query)?;
    let cache = if count == state.settings.station_count {
        &state.screen
    } else {
        &state.queries
    };
    let mut cache = lock_cache(cache)?;
    Ok(Json(cache.get(count).clone()))
}

/// Throws the screen's set away, as if the screen had been mounted again.
pub async fn regenerate_stations(
    State(state): State<AppState>,
) -> Result<Json<StationSet>, StatusCode> {
    let count = state.settings.station_count;
    let mut cache = lock_cache(&state.screen)?;
    cache.invalidate();
    let set = cache.get(count).clone();
    info!(count, "Stations regenerated on request");
    Ok(Json(set))
}

pub async fn get_screen(State(state): State<AppState>) -> Result<Json<MapScreen>, StatusCode> {
    Ok(Json(current_screen(&state)?))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
