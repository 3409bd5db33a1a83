//! 题目去重器 - 合并两种提取策略的结果
//!
//! ## 去重策略
//! 1. 指纹 = 题干小写 + 空白折叠 + 去首尾空白
//! 2. 只按指纹去重，选项不同也视为重复，保留先出现的
//! 3. 指纹长度不大于阈值（默认 10）的题目直接丢弃，视为误匹配噪音

use std::collections::HashSet;
use tracing::debug;

use crate::question::Question;

use super::cleaner::collapse_whitespace;

/// 题目去重器
pub struct QuestionDeduplicator {
    /// 已保留题目的指纹
    seen: HashSet<String>,
    /// 指纹长度必须大于该值
    min_fingerprint_len: usize,
}

impl QuestionDeduplicator {
    /// 创建去重器，默认指纹长度阈值 10
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
            min_fingerprint_len: 10,
        }
    }

    /// 设置指纹长度阈值
    pub fn with_min_fingerprint_len(mut self, len: usize) -> Self {
        self.min_fingerprint_len = len;
        self
    }

    /// 计算题干指纹
    pub fn fingerprint(text: &str) -> String {
        collapse_whitespace(&text.to_lowercase())
    }

    /// 检查是否应保留该题，保留时记录指纹
    pub fn should_keep(&mut self, question: &Question) -> bool {
        let key = Self::fingerprint(&question.text);

        if key.chars().count() <= self.min_fingerprint_len {
            debug!(fingerprint = %key, "Question dropped (fingerprint too short)");
            return false;
        }

        if self.seen.contains(&key) {
            debug!(
                fingerprint = %key,
                source = %question.source,
                "Question deduplicated (stem already seen)"
            );
            return false;
        }

        self.seen.insert(key);
        true
    }

    /// 按顺序去重，保留首次出现的题目
    pub fn dedup(&mut self, questions: Vec<Question>) -> Vec<Question> {
        questions
            .into_iter()
            .filter(|q| self.should_keep(q))
            .collect()
    }
}

impl Default for QuestionDeduplicator {
    fn default() -> Self {
        Self::new()
    }
}

/// 用默认阈值去重
pub fn remove_duplicates(questions: Vec<Question>) -> Vec<Question> {
    QuestionDeduplicator::new().dedup(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{SOURCE_HEURISTIC, SOURCE_STRUCTURED};

    fn question(text: &str, options: &[&str], source: &str) -> Question {
        let options: Vec<String> = options.iter().map(|o| o.to_string()).collect();
        let correct = options[0].clone();
        Question::new(text, options, correct, "medium", source)
    }

    #[test]
    fn test_fingerprint() {
        assert_eq!(
            QuestionDeduplicator::fingerprint("  What IS\n 2+2? "),
            "what is 2+2?"
        );
    }

    #[test]
    fn test_first_seen_wins() {
        let questions = vec![
            question("What is 2+2?", &["3", "4"], SOURCE_STRUCTURED),
            question("what  is 2+2?", &["4", "5"], SOURCE_HEURISTIC),
        ];
        let unique = remove_duplicates(questions);

        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].source, SOURCE_STRUCTURED);
        assert_eq!(unique[0].options, vec!["3", "4"]);
    }

    #[test]
    fn test_short_fingerprint_dropped() {
        let questions = vec![
            question("Why not?", &["a", "b"], SOURCE_HEURISTIC),
            question("0123456789", &["a", "b"], SOURCE_HEURISTIC),
            question("0123456789a", &["a", "b"], SOURCE_HEURISTIC),
        ];
        let unique = remove_duplicates(questions);

        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].text, "0123456789a");
    }

    #[test]
    fn test_idempotent() {
        let questions = vec![
            question("Which planet is red?", &["Mars", "Venus"], SOURCE_STRUCTURED),
            question("Which planet is red?", &["Venus", "Mars"], SOURCE_HEURISTIC),
            question("Which metal is liquid?", &["Mercury", "Iron"], SOURCE_HEURISTIC),
        ];
        let once = remove_duplicates(questions);
        let twice = remove_duplicates(once.clone());

        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn test_custom_threshold() {
        let questions = vec![question("Why not?", &["a", "b"], SOURCE_HEURISTIC)];
        let unique = QuestionDeduplicator::new()
            .with_min_fingerprint_len(3)
            .dedup(questions);

        assert_eq!(unique.len(), 1);
    }
}
