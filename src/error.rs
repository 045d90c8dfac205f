//! 统一错误处理模块
//!
//! 定义应用级错误类型，并实现 axum 的 IntoResponse trait 以便自动转换为 HTTP 响应。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm::LlmError;

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 配置相关错误（仅在启动阶段出现）
    #[error("Configuration error: {0}")]
    Config(String),

    /// 上游 LLM 调用失败
    #[error("{0}")]
    Upstream(String),

    /// 上游返回的文本无法解析为 JSON 数组
    #[error("Could not parse JSON from upstream response:\n{raw}")]
    MalformedPayload { raw: String },

    /// 某个题目缺少必需字段或字段类型不符
    #[error("Invalid question format returned by API: {0}")]
    InvalidQuestionFormat(String),

    /// 请求参数校验失败
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_)
            | AppError::Upstream(_)
            | AppError::MalformedPayload { .. }
            | AppError::InvalidQuestionFormat(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "detail": self.to_string()
        }));

        (status, body).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;
