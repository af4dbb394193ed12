use serde::Serialize;
use serde_json::Value;

/// The closed set of operations `/bfhl` can dispatch to, resolved from a
/// request body by a fixed priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Fibonacci(u32),
    Prime(Vec<i64>),
    Lcm(Vec<i64>),
    Hcf(Vec<i64>),
    Ai(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct OpsResponse {
    pub is_success: bool,
    pub official_email: Option<String>,
    pub data: Value,
}
