use crate::error::AppError;
use crate::models::CoefficientsQuery;
use crate::rate_limit::client_key;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::HeaderMap,
    Json,
};
use risk_engine::CoefficientSet;

/// Published coefficient table for one sex/race cohort
pub async fn get_coefficients(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<CoefficientsQuery>, QueryRejection>,
) -> Result<Json<&'static CoefficientSet>, AppError> {
    state.check_rate_limit(&client_key(&headers), "coefficients")?;

    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    Ok(Json(risk_engine::select_coefficients(query.sex, query.race)))
}

pub async fn list_coefficients(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<[&'static CoefficientSet; 4]>, AppError> {
    state.check_rate_limit(&client_key(&headers), "coefficients")?;

    Ok(Json(risk_engine::all_coefficient_sets()))
}
