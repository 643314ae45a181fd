use super::service::CatalogService;
use super::types::{
    ErrorMessage, ListItemsResponse, ListParams, NameSample, ReloadResponse, SearchParams,
    StatusResponse,
};
use crate::index::types::SearchOutcome;
use crate::loader::fetch::RecordSource;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde_json::Value;
use std::sync::Arc;

const DEFAULT_SAMPLE_LIMIT: usize = 10;

/// `GET /search?query=` — single object on exact match, array on
/// prefix/substring matches, 404 otherwise. A cold-start load failure is the
/// upstream's fault, hence 502.
pub async fn handle_search<S: RecordSource>(
    Query(params): Query<SearchParams>,
    Extension(catalog): Extension<Arc<CatalogService<S>>>,
) -> Response {
    let query = params.query.unwrap_or_default();

    match catalog.search(&query).await {
        Ok(SearchOutcome::Exact(record)) => Json(record).into_response(),
        Ok(SearchOutcome::Matches(records)) => Json(Value::Array(records)).into_response(),
        Ok(SearchOutcome::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorMessage::new("No results found for query")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Search unavailable, initial load failed: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorMessage::new(format!("Failed to load data: {}", err))),
            )
                .into_response()
        }
    }
}

/// `GET /list-items?limit=` — total count plus the first `limit` names.
pub async fn handle_list_items<S: RecordSource>(
    Query(params): Query<ListParams>,
    Extension(catalog): Extension<Arc<CatalogService<S>>>,
) -> Response {
    let limit = params.limit.unwrap_or(DEFAULT_SAMPLE_LIMIT);
    let (total_items, names) = catalog.sample(limit).await;

    if total_items == 0 {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorMessage::new("No data loaded")),
        )
            .into_response();
    }

    let samples = names.into_iter().map(|name| NameSample { name }).collect();
    Json(ListItemsResponse {
        total_items,
        samples,
    })
    .into_response()
}

/// `POST /reload` — synchronous fetch-and-rebuild; the caller blocks through
/// the retry schedule.
pub async fn handle_reload<S: RecordSource>(
    Extension(catalog): Extension<Arc<CatalogService<S>>>,
) -> Response {
    match catalog.reload().await {
        Ok(count) => Json(ReloadResponse {
            message: format!("Data reloaded successfully. {} items loaded.", count),
            count,
        })
        .into_response(),
        Err(err) => {
            tracing::error!("Reload failed: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorMessage::new(format!("Failed to reload data: {}", err))),
            )
                .into_response()
        }
    }
}

/// `GET /status` — pure read, never triggers a load.
pub async fn handle_status<S: RecordSource>(
    Extension(catalog): Extension<Arc<CatalogService<S>>>,
) -> Json<StatusResponse> {
    let snapshot = catalog.status().await;
    Json(StatusResponse {
        data_loaded: snapshot.loaded,
        item_count: snapshot.item_count,
        trie_initialized: snapshot.index_ready,
    })
}
