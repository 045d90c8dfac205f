//! 出题服务
//!
//! 串联整条流水线：校验请求 → 构建 prompt → 调用上游 → 清理文本 → 解析 → 逐题校验。
//! 任一阶段失败即终止，不做重试，也不返回部分结果。

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use super::prompt_service::PromptService;
use super::sanitizer::strip_code_fences;
use crate::error::{AppError, AppResult};
use crate::llm::{ChatOptions, CompletionBackend};
use crate::models::{GenerateRequest, Question};

/// 采样温度
const TEMPERATURE: f64 = 0.7;
/// 最大输出 token 数
const MAX_TOKENS: u32 = 500;
/// 每道题必须包含的字段
const REQUIRED_KEYS: [&str; 3] = ["question", "options", "answer"];
/// 期望的选项数量（仅告警，不强制）
const EXPECTED_OPTIONS: usize = 4;

/// 出题服务
pub struct QuestionService {
    backend: Arc<dyn CompletionBackend>,
    prompts: PromptService,
}

impl QuestionService {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            prompts: PromptService::new(),
        }
    }

    /// 执行完整的出题流水线
    pub async fn generate(&self, req: &GenerateRequest) -> AppResult<Vec<Question>> {
        req.validate()?;

        let messages = self
            .prompts
            .build_generation_messages(&req.topic, req.n_questions);
        let options = ChatOptions {
            temperature: Some(TEMPERATURE),
            max_tokens: Some(MAX_TOKENS),
        };

        let raw = self.backend.complete(messages, options).await?;
        debug!("Upstream completion received: {} chars", raw.len());

        parse_questions(&raw)
    }
}

/// 把原始补全文本解析为题目列表
///
/// 全有或全无：遇到第一道不合格的题目立即失败。
pub fn parse_questions(raw: &str) -> AppResult<Vec<Question>> {
    let cleaned = strip_code_fences(raw);

    let items: Vec<Value> = serde_json::from_str(cleaned).map_err(|e| {
        debug!("Failed to decode completion as a JSON array: {}", e);
        AppError::MalformedPayload {
            raw: raw.to_string(),
        }
    })?;

    let mut questions = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let question = to_question(item)?;
        warn_if_suspicious(index, &question);
        questions.push(question);
    }

    Ok(questions)
}

/// 校验单道题的字段并转换为 `Question`
fn to_question(item: Value) -> AppResult<Question> {
    let has_required_keys = item
        .as_object()
        .map(|obj| REQUIRED_KEYS.iter().all(|key| obj.contains_key(*key)))
        .unwrap_or(false);

    let repr = item.to_string();
    if !has_required_keys {
        return Err(AppError::InvalidQuestionFormat(repr));
    }

    serde_json::from_value(item).map_err(|_| AppError::InvalidQuestionFormat(repr))
}

fn warn_if_suspicious(index: usize, question: &Question) {
    if question.options.len() != EXPECTED_OPTIONS {
        warn!(
            "Question #{} has {} options, expected {}",
            index,
            question.options.len(),
            EXPECTED_OPTIONS
        );
    }
    if !question.options.contains(&question.answer) {
        warn!("Question #{} answer is not one of its options", index);
    }
}
