//! 答案判定 - 在上下文中查找 "answer is B" 一类的陈述

use regex::Regex;
use std::sync::LazyLock;

use super::options::OptionMap;

static ANSWER_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:answer|correct|solution)\s*(?:is|:)?\s*([a-d])\b")
        .expect("Invalid answer statement regex")
});

/// 从上下文中判定正确选项的字母
///
/// 找到 "answer/correct/solution [is|:] X" 时返回 X（大写），
/// 即使 X 不在选项表中（由调用方兜底）。
/// 没有找到时返回首个插入的字母；选项表为空时返回 None。
pub fn resolve_answer(options: &OptionMap, context: &str) -> Option<char> {
    ANSWER_STATEMENT
        .captures(context)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
        .map(|c| c.to_ascii_uppercase())
        .or_else(|| options.first_key())
}
