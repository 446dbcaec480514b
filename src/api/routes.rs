//! HTTP handlers for the three leaderboard endpoints.

use std::str::FromStr;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::api::dto::{
    HealthResponse, NeighborsQuery, RangeQuery, RankedCustomerDto, ScoreUpdateResponse,
};
use crate::api::error::ApiError;
use crate::api::AppState;

/// `POST /customer/{id}/score/{delta}`
pub async fn update_score(
    State(state): State<AppState>,
    Path((id, delta_raw)): Path<(i64, String)>,
) -> Result<Json<ScoreUpdateResponse>, ApiError> {
    let delta = Decimal::from_str(&delta_raw)
        .map_err(|_| ApiError::bad_request(format!("'{delta_raw}' is not a valid decimal")))?;

    let score = state.apply_delta(id, delta).map_err(|e| {
        warn!(customer_id = id, %delta, error = %e, "rejected score update");
        ApiError::from(e)
    })?;

    debug!(customer_id = id, %delta, new_score = %score, "applied score update");
    Ok(Json(ScoreUpdateResponse {
        customer_id: id,
        score,
    }))
}

/// `GET /leaderboard?start=S&end=E`
pub async fn get_range(
    State(state): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> Result<Json<Vec<RankedCustomerDto>>, ApiError> {
    let ranked = state
        .range(params.start, params.end)
        .map_err(ApiError::from)?;

    debug!(start = params.start, end = params.end, count = ranked.len(), "served range query");
    Ok(Json(ranked.into_iter().map(Into::into).collect()))
}

/// `GET /leaderboard/{id}?high=H&low=L`
pub async fn get_neighbors(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<NeighborsQuery>,
) -> Result<Json<Vec<RankedCustomerDto>>, ApiError> {
    let ranked = state
        .neighbors(id, params.high, params.low)
        .map_err(ApiError::from)?;

    debug!(customer_id = id, count = ranked.len(), "served neighbors query");
    Ok(Json(ranked.into_iter().map(Into::into).collect()))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
