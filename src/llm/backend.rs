//! 补全后端抽象
//!
//! 请求处理器只依赖该 trait，测试中可替换为桩实现。

use async_trait::async_trait;

use super::types::{ChatMessage, ChatOptions, LlmError};

/// 文本补全后端
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// 发送消息列表，返回第一个补全结果的原始文本
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        options: ChatOptions,
    ) -> Result<String, LlmError>;
}
