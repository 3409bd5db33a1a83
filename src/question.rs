//! 题目数据模型
//!
//! `Question` 是所有题目来源（文档提取、在线题库）共享的结构，
//! 字段名即对外契约，序列化格式由调用方决定。

use serde::{Deserialize, Serialize};

/// 结构化提取（编号题干 + 字母选项）产生的题目来源标记
pub const SOURCE_STRUCTURED: &str = "PDF Extract";
/// 段落启发式提取产生的题目来源标记
pub const SOURCE_HEURISTIC: &str = "PDF Heuristic";
/// 提取引擎不推断难度，统一使用该标记
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// 单选题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// 题干（已去除编号和标记，空白已归一化）
    pub text: String,
    /// 选项列表，至少 2 项
    pub options: Vec<String>,
    /// 正确答案，应为 `options` 中的某一项；无法判定时取第一个选项
    pub correct_answer: String,
    /// 难度标记：easy / medium / hard，或为空
    pub difficulty: String,
    /// 来源标记（用于排查，不参与逻辑）
    pub source: String,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        difficulty: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options,
            correct_answer: correct_answer.into(),
            difficulty: difficulty.into(),
            source: source.into(),
        }
    }

    /// 判断所选选项是否为正确答案（精确匹配）
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }

    /// 解析难度标记
    pub fn difficulty_level(&self) -> Option<Difficulty> {
        Difficulty::parse(&self.difficulty)
    }
}

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 不区分大小写解析；未知或空标记返回 None
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// 按难度筛选题目
///
/// 保留难度匹配（不区分大小写）或难度为空的题目；
/// 如果一道都没有匹配，返回全部题目。
pub fn filter_by_difficulty(questions: Vec<Question>, difficulty: Difficulty) -> Vec<Question> {
    let wanted = difficulty.as_str();
    let filtered: Vec<Question> = questions
        .iter()
        .filter(|q| q.difficulty.is_empty() || q.difficulty.eq_ignore_ascii_case(wanted))
        .cloned()
        .collect();

    if filtered.is_empty() {
        questions
    } else {
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(difficulty: &str) -> Question {
        Question::new(
            "What is the capital of France?",
            vec!["Paris".into(), "Lyon".into()],
            "Paris",
            difficulty,
            SOURCE_HEURISTIC,
        )
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("EASY"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse(" medium "), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse(""), None);
        assert_eq!(Difficulty::parse("extreme"), None);
    }

    #[test]
    fn test_is_correct() {
        let q = sample("medium");
        assert!(q.is_correct("Paris"));
        assert!(!q.is_correct("paris"));
        assert!(!q.is_correct("Lyon"));
    }

    #[test]
    fn test_filter_keeps_untagged() {
        let questions = vec![sample("easy"), sample(""), sample("hard")];
        let filtered = filter_by_difficulty(questions, Difficulty::Hard);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].difficulty, "");
        assert_eq!(filtered[1].difficulty, "hard");
    }

    #[test]
    fn test_filter_falls_back_to_all() {
        let questions = vec![sample("medium"), sample("medium")];
        let filtered = filter_by_difficulty(questions, Difficulty::Easy);
        assert_eq!(filtered.len(), 2);
    }
}
