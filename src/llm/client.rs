//! 统一 LLM 客户端

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use super::backend::CompletionBackend;
use super::format::build_openai_endpoint;
use super::openai::complete_openai;
use super::types::{ChatMessage, ChatOptions, LlmError};

/// 连接超时
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// OpenAI 兼容的 LLM 客户端
///
/// 启动时构建一次，之后在所有请求间只读共享。
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::ConfigError("API Key is required".to_string()));
        }

        // 构建 HTTP 客户端
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::HttpError)?;

        Ok(Self {
            client,
            api_key,
            endpoint: build_openai_endpoint(base_url),
            model: model.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        options: ChatOptions,
    ) -> Result<String, LlmError> {
        info!(
            "LLM request: model={}, messages={}",
            self.model,
            messages.len()
        );

        complete_openai(
            &self.client,
            &self.api_key,
            &self.endpoint,
            &messages,
            &self.model,
            &options,
        )
        .await
    }
}
