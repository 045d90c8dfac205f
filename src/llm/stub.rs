//! 测试用补全后端桩

use async_trait::async_trait;
use parking_lot::Mutex;

use super::backend::CompletionBackend;
use super::types::{ChatMessage, ChatOptions, LlmError};

/// 返回固定结果并记录每次调用的桩后端
pub struct StubBackend {
    reply: Result<String, String>,
    calls: Mutex<Vec<(Vec<ChatMessage>, ChatOptions)>>,
}

impl StubBackend {
    /// 每次调用都返回 `text`
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 每次调用都以 API 错误失败
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls(&self) -> Vec<(Vec<ChatMessage>, ChatOptions)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl CompletionBackend for StubBackend {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        options: ChatOptions,
    ) -> Result<String, LlmError> {
        self.calls.lock().push((messages, options));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(LlmError::ApiError {
                status: 429,
                message: message.clone(),
            }),
        }
    }
}
