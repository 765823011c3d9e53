//! JSON API handlers.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::format::format_range;
use crate::listing;
use crate::web::{AppError, AppState};

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Filtered, category-grouped view of the catalog. An empty or missing `q`
/// returns the full grouped listing.
pub async fn search_costs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<serde_json::Value> {
    let query = params.q.as_deref().unwrap_or("");
    let grouped = listing::filter_and_group(state.catalog.records(), query);
    let rows: usize = grouped.iter().map(|(_, group)| group.len()).sum();

    let groups: Vec<serde_json::Value> = grouped
        .iter()
        .map(|(category, group)| {
            json!({
                "category": category,
                "costs": group
                    .iter()
                    .map(|r| json!({
                        "slug": r.slug,
                        "topic": r.topic,
                        "title": r.title,
                        "range": format_range(r.min_cost, r.max_cost, r.unit.as_deref()),
                    }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    Json(json!({
        "rows": rows,
        "groups": groups
    }))
}

/// One record plus its fully derived narrative.
pub async fn get_cost(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let record = state
        .catalog
        .get(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Cost guide {} not found", slug)))?;

    let narrative = state.generator.derive(record);

    Ok(Json(json!({
        "record": record,
        "narrative": narrative
    })))
}
