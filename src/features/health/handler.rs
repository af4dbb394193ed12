use axum::Json;
use axum::extract::State;

use crate::features::health::dto::HealthResponse;
use crate::server::AppState;

pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        is_success: true,
        official_email: state.config.official_email.clone(),
    })
}
