//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// 单次请求允许的最少题目数
pub const MIN_QUESTIONS: i64 = 1;
/// 单次请求允许的最多题目数
pub const MAX_QUESTIONS: i64 = 10;
/// 未指定时的默认题目数
pub const DEFAULT_QUESTIONS: i64 = 5;

fn default_n_questions() -> i64 {
    DEFAULT_QUESTIONS
}

/// 生成题目请求
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// 出题主题
    pub topic: String,
    /// 题目数量（1 - 10）
    #[serde(default = "default_n_questions")]
    pub n_questions: i64,
}

impl GenerateRequest {
    /// 校验请求参数，失败时不会发起任何上游调用
    pub fn validate(&self) -> Result<(), AppError> {
        if self.topic.trim().is_empty() {
            return Err(AppError::Validation(
                "topic: must be a non-empty string".to_string(),
            ));
        }

        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&self.n_questions) {
            return Err(AppError::Validation(format!(
                "n_questions: must be between {} and {} (got {})",
                MIN_QUESTIONS, MAX_QUESTIONS, self.n_questions
            )));
        }

        Ok(())
    }
}

/// 选择题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}
