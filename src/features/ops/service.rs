use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::config::AppConfig;
use crate::core::error::ApiError;
use crate::features::ai::GeminiClient;
use crate::features::math;
use crate::features::ops::dto::{Operation, OpsResponse};
use crate::features::ops::helpers::select_operation;

/// Source of single-word answers for the AI branch.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    async fn answer_one_word(&self, question: &str) -> Result<String, ApiError>;
}

#[async_trait]
impl AnswerProvider for GeminiClient {
    async fn answer_one_word(&self, question: &str) -> Result<String, ApiError> {
        GeminiClient::answer_one_word(self, question).await
    }
}

pub struct OpsService {
    config: Arc<AppConfig>,
    answer_provider: Arc<dyn AnswerProvider>,
}

impl OpsService {
    pub fn new(config: Arc<AppConfig>, answer_provider: Arc<dyn AnswerProvider>) -> Self {
        Self {
            config,
            answer_provider,
        }
    }

    /// Resolves the decoded body to one operation, runs it, and wraps the
    /// result in the success envelope.
    pub async fn execute(&self, body: Value) -> Result<OpsResponse, ApiError> {
        let operation = select_operation(&body)?;
        let data = self.run_operation(operation).await?;

        Ok(OpsResponse {
            is_success: true,
            official_email: self.config.official_email.clone(),
            data,
        })
    }

    async fn run_operation(&self, operation: Operation) -> Result<Value, ApiError> {
        match operation {
            Operation::Fibonacci(count) => Ok(json!(math::fibonacci(count))),
            Operation::Prime(values) => Ok(json!(math::filter_primes(&values))),
            Operation::Lcm(values) => {
                let result = math::fold_lcm(&values)
                    .map_err(|err| ApiError::validation(err.to_string()))?;
                Ok(json!(result))
            }
            Operation::Hcf(values) => Ok(json!(math::fold_hcf(&values))),
            Operation::Ai(question) => {
                let answer = self.answer_provider.answer_one_word(&question).await?;
                Ok(Value::String(answer))
            }
        }
    }
}
