//! Prompt 构建服务
//!
//! 负责构建出题用的 LLM 消息列表

use crate::llm::ChatMessage;

/// 系统提示词
const SYSTEM_PROMPT: &str = "You are a question-generation assistant.";

/// Prompt 服务
pub struct PromptService;

impl PromptService {
    /// 创建新的 Prompt 服务
    pub fn new() -> Self {
        Self
    }

    /// 构建出题指令
    pub fn build_prompt(&self, topic: &str, n_questions: i64) -> String {
        format!(
            "Generate exactly {n} multiple choice trivia questions about \"{topic}\".\n\
             Each question must have exactly 4 answer options.\n\
             Output the result as a JSON array of {n} objects, each with keys:\n\
             \x20 - question (string)\n\
             \x20 - options (array of 4 strings)\n\
             \x20 - answer (the correct option string)\n",
            n = n_questions,
            topic = topic,
        )
    }

    /// 构建聊天消息列表：固定系统消息 + 出题指令
    pub fn build_generation_messages(&self, topic: &str, n_questions: i64) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(self.build_prompt(topic, n_questions)),
        ]
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_count_and_topic() {
        let service = PromptService::new();
        for n in 1..=10 {
            let prompt = service.build_prompt("The Godfather", n);
            assert!(prompt.contains(&format!("Generate exactly {} multiple choice", n)));
            assert!(prompt.contains("\"The Godfather\""));
            assert!(prompt.contains("JSON array"));
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let service = PromptService::new();
        assert_eq!(
            service.build_prompt("Alien", 3),
            service.build_prompt("Alien", 3)
        );
    }

    #[test]
    fn test_prompt_lists_required_keys() {
        let prompt = PromptService::new().build_prompt("Jaws", 2);
        assert!(prompt.contains("  - question (string)"));
        assert!(prompt.contains("  - options (array of 4 strings)"));
        assert!(prompt.contains("  - answer (the correct option string)"));
    }

    #[test]
    fn test_generation_messages() {
        let messages = PromptService::new().build_generation_messages("Heat", 4);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.contains("\"Heat\""));
    }
}
