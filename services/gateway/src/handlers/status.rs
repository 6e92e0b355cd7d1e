use crate::models::StatusResponse;
use axum::Json;

pub async fn welcome() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "PulseNode MD Online",
        message: "Global Clinical Infrastructure Ready.",
    })
}
