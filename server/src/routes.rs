use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, header::AUTHORIZATION},
};
use catalog::SearchResult;
use tracing::debug;

use crate::{database::fetch_catalog, error::AppError, search::scan_catalog, state::AppState};

/// The query handler: path-keyed query, full-store scan, one page back.
/// The credential header is recorded, never validated here.
pub async fn search_handler(
    Path(query): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SearchResult>, AppError> {
    debug!(
        "Search for {query:?}, credential present: {}",
        headers.contains_key(AUTHORIZATION)
    );

    let items = fetch_catalog(state.redis_connection.clone(), &state.config.store_key).await?;

    Ok(Json(scan_catalog(items.values(), &query)))
}
