//! 文本清理 - 去除题干和选项上的编号、项目符号和正确性标记

use regex::Regex;
use std::sync::LazyLock;

/// 题干前缀，按顺序各去除一次
static QUESTION_PREFIXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\s*\d+\.?\s*",
        r"(?i)^\s*q\.?\s*\d+\.?\s*",
        r"(?i)^\s*question\s+\d+\.?\s*",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// 选项前缀，按顺序各去除一次
static OPTION_PREFIXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\s*[A-Da-d][.)]\s*",
        r"^\s*\([A-Da-d]\)\s*",
        r"^\s*[•·▪▫-]\s*",
        r"^\s*\d+[.)]\s*",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

static CORRECT_GLYPHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*✓✔√]").expect("Invalid glyph regex"));

static CORRECT_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(?:\(correct\)|\[correct\])\s*").expect("Invalid annotation regex")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// 清理题干：去除编号前缀，空白归一化
pub fn clean_question_text(text: &str) -> String {
    let stripped = strip_prefixes(text, &QUESTION_PREFIXES);
    collapse_whitespace(&stripped)
}

/// 清理选项：去除字母/符号/数字前缀，再去除正确性标记
pub fn clean_option_text(text: &str) -> String {
    let stripped = strip_prefixes(text, &OPTION_PREFIXES);
    strip_correct_markers(&stripped)
}

/// 去除正确性符号和 `(correct)` / `[correct]` 注释，空白归一化
pub fn strip_correct_markers(text: &str) -> String {
    let without_glyphs = CORRECT_GLYPHS.replace_all(text, "");
    let without_notes = CORRECT_ANNOTATION.replace_all(&without_glyphs, " ");
    collapse_whitespace(&without_notes)
}

/// 空白归一化：连续空白折叠为单个空格并去除首尾空白
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

fn strip_prefixes(text: &str, prefixes: &[Regex]) -> String {
    prefixes.iter().fold(text.to_string(), |acc, re| re.replace(&acc, "").into_owned())
}
