//! 题目提取引擎
//!
//! 原始文本 -> 归一化 -> 结构化提取 + 启发式提取（两者总是都运行）
//! -> 合并（结构化结果在前）-> 按题干去重。
//!
//! 所有函数都是纯函数，无失败分支；没有匹配时返回空列表。

pub mod answer;
pub mod cleaner;
pub mod dedup;
pub mod heuristic;
pub mod normalizer;
pub mod options;
pub mod patterns;
pub mod structured;

pub use answer::resolve_answer;
pub use cleaner::{clean_option_text, clean_question_text};
pub use dedup::{remove_duplicates, QuestionDeduplicator};
pub use heuristic::extract_heuristic;
pub use normalizer::normalize_text;
pub use options::OptionMap;
pub use structured::extract_structured;

use tracing::debug;

use crate::config::ExtractorConfig;
use crate::question::Question;

/// 题目提取器
#[derive(Debug, Clone, Default)]
pub struct QuestionExtractor {
    config: ExtractorConfig,
}

impl QuestionExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// 从一份文档的文本中提取题目
    pub fn extract(&self, raw_text: &str) -> Vec<Question> {
        let text = normalize_text(raw_text);

        let structured = extract_structured(&text, &self.config);
        let heuristic = extract_heuristic(&text, &self.config);
        debug!(
            structured = structured.len(),
            heuristic = heuristic.len(),
            "Extracted candidate questions"
        );

        let mut candidates = structured;
        candidates.extend(heuristic);

        QuestionDeduplicator::new()
            .with_min_fingerprint_len(self.config.min_fingerprint_len)
            .dedup(candidates)
    }
}

/// 使用默认配置提取题目
pub fn extract_questions(raw_text: &str) -> Vec<Question> {
    QuestionExtractor::default().extract(raw_text)
}
