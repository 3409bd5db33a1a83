//! 题目格式识别模式
//!
//! 每种约定（题干编号、选项字母、答案标记、段落线索）对应一个独立的谓词或捕获函数，
//! 便于单独测试。

use regex::Regex;
use std::sync::LazyLock;

/// 全文题干搜索：行首编号（`12.`、`Q3`、`Question 4.`）之后直到第一个 `?`，可跨行
pub static STEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)(?:\A|\n)\s*(?:\d+\.?\s*|q\.?\s*\d+\.?\s*|question\s+\d+\.?\s*)(.+?\?)",
    )
    .expect("Invalid stem regex")
});

/// 单行题干：与 `STEM` 相同的编号约定，且同一行内出现 `?`
static STEM_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:\d+\.?\s*|q\.?\s*\d+\.?\s*|question\s+\d+\.?\s*).+?\?")
        .expect("Invalid stem line regex")
});

/// 字母选项行：`A. xxx`、`b) xxx`、`C xxx`
static OPTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*([a-d])(?:[.)]\s*|\s+)(\S.*?)\s*$").expect("Invalid option regex")
});

/// 显式答案标记：`Answer: B`、`Correct - c`、`Solution D`
static ANSWER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:answer|correct|solution)\s*[:.)\-]?\s*([a-d])\b")
        .expect("Invalid answer marker regex")
});

/// 疑问词
static QUESTION_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:what|which|who|when|where|why|how)\b").expect("Invalid question words regex")
});

/// 祈使词
static IMPERATIVE_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:identify|choose|select|determine)\b").expect("Invalid imperative regex")
});

/// 段落以 `数字.` 或 `q 数字` 开头
static NUMBERED_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d+\.|q\s*\d)").expect("Invalid numbered start regex")
});

/// 选项行线索（输入已 trim 且小写）
static OPTION_CUES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // a. / a)
        r"^[a-d][.)]",
        // (a)
        r"^\([a-d]\)",
        // bullets
        r"^[•·▪▫]\s+",
        r"^-\s+",
        // 1. / 1)
        r"^\d+[.)]\s+",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// 标记正确选项的符号和词
const CORRECT_MARKS: [&str; 6] = ["*", "✓", "✔", "√", "correct", "answer"];

/// 判断单行是否为新的编号题干（用于终止选项扫描）
pub fn is_stem_line(line: &str) -> bool {
    STEM_LINE.is_match(line)
}

/// 解析字母选项行，返回（大写字母, 选项文本）
pub fn parse_option_line(line: &str) -> Option<(char, &str)> {
    let caps = OPTION_LINE.captures(line)?;
    let letter = caps.get(1)?.as_str().chars().next()?.to_ascii_uppercase();
    let text = caps.get(2)?.as_str();
    Some((letter, text))
}

/// 查找显式答案标记，返回大写字母
pub fn find_answer_marker(line: &str) -> Option<char> {
    ANSWER_MARKER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
        .map(|c| c.to_ascii_uppercase())
}

/// 判断段落是否像一道题
pub fn is_likely_question(paragraph: &str) -> bool {
    let lower = paragraph.to_lowercase();
    lower.contains('?')
        || QUESTION_WORDS.is_match(&lower)
        || IMPERATIVE_WORDS.is_match(&lower)
        || NUMBERED_START.is_match(&lower)
}

/// 判断单行是否像一个选项
pub fn is_likely_option(line: &str) -> bool {
    let line = line.trim().to_lowercase();
    OPTION_CUES.iter().any(|re| re.is_match(&line))
}

/// 判断原始选项行是否带有"正确"标记
pub fn is_marked_correct(line: &str) -> bool {
    let lower = line.to_lowercase();
    CORRECT_MARKS.iter().any(|mark| lower.contains(mark))
}
