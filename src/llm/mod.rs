//! LLM 模块
//!
//! 提供 OpenAI 兼容的补全客户端，以及供处理器依赖的 `CompletionBackend` 抽象。

mod backend;
mod client;
mod format;
mod openai;
#[cfg(test)]
pub mod stub;
mod types;

pub use backend::CompletionBackend;
pub use client::LlmClient;
pub use types::*;
