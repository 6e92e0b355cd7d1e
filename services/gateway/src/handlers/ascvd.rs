use crate::error::AppError;
use crate::models::{AscvdQuery, AscvdResponse};
use crate::rate_limit::client_key;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::HeaderMap,
    Json,
};
use types::model::ModelVersion;

pub async fn calculate_ascvd(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<AscvdQuery>, QueryRejection>,
) -> Result<Json<AscvdResponse>, AppError> {
    // 1. Rate limits
    state.check_rate_limit(&client_key(&headers), "ascvd")?;

    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // 2. Resolve the model before looking at the factors
    let model: ModelVersion = query.model_version.parse()?;
    risk_engine::ensure_implemented(model)?;

    // 3. Compute
    let factors = query.risk_factors()?;
    let result = risk_engine::compute_risk_for(&factors, model)?;

    tracing::info!(
        model = %result.model_version,
        risk_percent = %result.risk_percent,
        category = %result.risk_category,
        "ascvd risk computed"
    );

    Ok(Json(AscvdResponse::from(result)))
}
