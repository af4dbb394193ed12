use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub is_success: bool,
    pub official_email: Option<String>,
}
