use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub debug: bool,
    pub use_https: bool,
    pub official_email: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}
