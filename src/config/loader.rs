use std::env;
use std::net::IpAddr;

use crate::config::dto::AppConfig;
use crate::core::error::ApiError;

const DEFAULT_GEMINI_MODEL: &str = "gemma-3-12b-it";

pub fn load_config() -> Result<AppConfig, ApiError> {
    dotenvy::dotenv().ok();

    let host = env::var("SERVER_HOST")
        .unwrap_or_else(|_| "0.0.0.0".to_string())
        .parse::<IpAddr>()
        .map_err(|err| ApiError::configuration(format!("invalid SERVER_HOST: {err}")))?;

    let port = env::var("SERVER_PORT")
        .or_else(|_| env::var("PORT"))
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .map_err(|err| ApiError::configuration(format!("invalid port: {err}")))?;

    let debug = parse_bool_env("SERVER_DEBUG", false);
    let use_https = parse_bool_env("USE_HTTPS", false);

    let official_email = non_empty_env("OFFICIAL_EMAIL");
    let gemini_api_key = non_empty_env("GEMINI_API_KEY");
    let gemini_model =
        non_empty_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

    Ok(AppConfig {
        host,
        port,
        debug,
        use_https,
        official_email,
        gemini_api_key,
        gemini_model,
    })
}

fn parse_bool_env(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|value| matches!(value.as_str(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(default)
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
