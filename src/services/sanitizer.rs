//! 补全文本清理
//!
//! 模型经常把 JSON 包在 Markdown 代码块里返回，解析前先剥掉首尾的围栏。

use once_cell::sync::Lazy;
use regex::Regex;

/// 开头的围栏：``` 加可选语言标记，连续多个一并剥离
static RE_LEADING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\s*```(?:[\w+.-]*[ \t]*\r?\n|(?i:json))?)+").unwrap()
});

/// 结尾的围栏
static RE_TRAILING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*(?:```\s*)+$").unwrap());

/// 剥离首尾代码围栏
///
/// 没有围栏的文本原样返回；剥离过围栏时去掉内部文本两端的空白。
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw;
    let mut stripped = false;

    if let Some(m) = RE_LEADING_FENCE.find(text) {
        text = &text[m.end()..];
        stripped = true;
    }

    if let Some(m) = RE_TRAILING_FENCE.find(text) {
        text = &text[..m.start()];
        stripped = true;
    }

    if stripped {
        text.trim()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INNER: &str = "[{\"question\": \"Q?\", \"options\": [\"a\", \"b\", \"c\", \"d\"], \"answer\": \"a\"}]";

    #[test]
    fn test_json_tagged_fence() {
        let raw = format!("```json\n{}\n```", INNER);
        assert_eq!(strip_code_fences(&raw), INNER);
    }

    #[test]
    fn test_untagged_fence() {
        let raw = format!("```\n{}\n```", INNER);
        assert_eq!(strip_code_fences(&raw), INNER);
    }

    #[test]
    fn test_uppercase_tag_and_crlf() {
        let raw = format!("```JSON \r\n{}\r\n```\r\n", INNER);
        assert_eq!(strip_code_fences(&raw), INNER);
    }

    #[test]
    fn test_other_language_tag() {
        let raw = format!("```javascript\n{}\n```", INNER);
        assert_eq!(strip_code_fences(&raw), INNER);
    }

    #[test]
    fn test_single_line_fence() {
        assert_eq!(strip_code_fences("```json[1, 2]```"), "[1, 2]");
        assert_eq!(strip_code_fences("```[1, 2]```"), "[1, 2]");
    }

    #[test]
    fn test_unfenced_text_unchanged() {
        assert_eq!(strip_code_fences(INNER), INNER);
        assert_eq!(strip_code_fences("  not json at all \n"), "  not json at all \n");
    }

    #[test]
    fn test_inner_fence_left_alone() {
        let text = "see ``` here";
        assert_eq!(strip_code_fences(text), text);
    }

    #[test]
    fn test_repeated_leading_fences() {
        assert_eq!(strip_code_fences("```\n```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("```json\n```\n[1]\n```\n```"), "[1]");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            format!("```json\n{}\n```", INNER),
            format!("\n\n```\n{}\n```\n\n", INNER),
            INNER.to_string(),
            "```".to_string(),
            "text```".to_string(),
            "a``````".to_string(),
            "```\n```json\n[1]\n```".to_string(),
            "\n```\n\n```JSON\n[1]\n```\n```".to_string(),
        ];
        for raw in &inputs {
            let once = strip_code_fences(raw);
            assert_eq!(strip_code_fences(once), once, "input: {:?}", raw);
        }
    }
}
