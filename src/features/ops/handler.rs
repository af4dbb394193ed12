use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;

use crate::core::error::ApiError;
use crate::features::ops::dto::OpsResponse;
use crate::features::ops::helpers::decode_json_body;
use crate::server::AppState;

pub async fn handle_ops(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<OpsResponse>, ApiError> {
    let payload = decode_json_body(&headers, &body)?;
    let response = state.ops.execute(payload).await?;
    Ok(Json(response))
}
