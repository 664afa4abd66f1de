//! HTTP route handlers for Axum.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::{
    api::types::{
        HealthDto, OcrSearchRequest, OcrSearchResponse, SearchRequest, SearchResultDto,
    },
    matching::MatchEngine,
    ocr::{clean_ocr_text, PackagingHints},
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "healthy".to_string(),
    })
}

pub async fn search_medicines(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<Vec<SearchResultDto>> {
    let engine = engine_for(&state, request.limit)?;
    let results = engine.search_by_query(&state.catalog, &request.query);
    info!(query = %request.query, results = results.len(), "medicine search");
    Ok(Json(
        results
            .iter()
            .map(|r| SearchResultDto::from_result(r, &engine))
            .collect(),
    ))
}

pub async fn search_by_ocr(
    State(state): State<AppState>,
    Json(request): Json<OcrSearchRequest>,
) -> ApiResult<OcrSearchResponse> {
    let engine = engine_for(&state, request.limit)?;
    let text = request.ocr.full_text();
    if let Some(confidence) = request.ocr.mean_confidence {
        info!(confidence, "ocr payload received");
    }
    let results = engine.search_by_ocr_text(&state.catalog, &text);
    let extracted_text = clean_ocr_text(&text);
    let medicine_info = PackagingHints::extract(&extracted_text);
    info!(results = results.len(), "ocr search");
    Ok(Json(OcrSearchResponse {
        search_results: results
            .iter()
            .map(|r| SearchResultDto::from_result(r, &engine))
            .collect(),
        extracted_text,
        medicine_info,
    }))
}

pub async fn search_by_barcode(
    State(state): State<AppState>,
    Path(barcode): Path<String>,
) -> ApiResult<SearchResultDto> {
    match state.engine.search_by_barcode(&state.catalog, &barcode) {
        Some(result) => Ok(Json(SearchResultDto::from_result(&result, &state.engine))),
        None => {
            warn!(%barcode, "barcode not in catalog");
            Err((StatusCode::NOT_FOUND, "Medicine not found".to_string()))
        }
    }
}

fn engine_for(
    state: &AppState,
    limit: Option<usize>,
) -> Result<MatchEngine, (StatusCode, String)> {
    match limit {
        None => Ok(state.engine),
        Some(0) => Err((
            StatusCode::BAD_REQUEST,
            "limit must be at least 1".to_string(),
        )),
        Some(limit) => Ok(state.engine.with_max_results(limit)),
    }
}
