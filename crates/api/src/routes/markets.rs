//! Borrow Markets routes — the grouped collateral table and its row toggles.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use markets_common::error::AppError;
use markets_common::types::GroupSummary;
use markets_engine::page::MarketRow;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/borrow-markets", get(get_markets))
        .route("/api/borrow-markets/groups", get(get_groups))
        .route("/api/borrow-markets/{gem}/toggle", post(toggle_row))
}

/// Response for the markets table.
#[derive(Debug, Serialize)]
pub struct MarketsResponse {
    /// True until the feed has produced any value
    pub loading: bool,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<MarketRow>,
}

/// Response for a row toggle.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub gem: String,
    pub expanded: bool,
}

/// GET /api/borrow-markets — Summary rows with their risk profiles.
async fn get_markets(State(state): State<AppState>) -> Json<MarketsResponse> {
    let mut page = state.page.lock().await;
    let rows = page.render(state.current_records());

    Json(MarketsResponse {
        loading: rows.is_none(),
        generated_at: Utc::now(),
        rows: rows.unwrap_or_default(),
    })
}

/// GET /api/borrow-markets/groups — Raw group summaries without display formatting.
async fn get_groups(State(state): State<AppState>) -> Json<Vec<GroupSummary>> {
    let mut page = state.page.lock().await;
    let groups = page.groups(state.current_records());
    Json(groups.unwrap_or_default())
}

/// POST /api/borrow-markets/:gem/toggle — Expand or collapse a summary row.
async fn toggle_row(
    State(state): State<AppState>,
    Path(gem): Path<String>,
) -> Result<Json<ToggleResponse>, AppError> {
    let mut page = state.page.lock().await;
    page.observe(state.current_records());

    if !page.has_group(&gem) {
        return Err(AppError::NotFound(format!("Market {} not found", gem)));
    }

    let expanded = page.toggle(&gem);
    tracing::info!(
        gem = %gem,
        expanded,
        expanded_rows = page.expanded_count(),
        "Market row toggled"
    );

    Ok(Json(ToggleResponse { gem, expanded }))
}
