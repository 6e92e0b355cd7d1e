use crate::handlers::{ascvd, coefficients, status};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/calculate/ascvd", get(ascvd::calculate_ascvd))
        .route("/coefficients", get(coefficients::get_coefficients))
        .route("/coefficients/all", get(coefficients::list_coefficients));

    Router::new()
        .route("/", get(status::welcome))
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
