//! 启发式提取 - 针对没有编号约定的文本，按段落判断题目和选项
//!
//! 每个段落都独立判断是否为题目，已被前一题当作选项的段落也会再次判断，
//! 因此相邻题目可能共享选项；去重只针对题干。

use regex::Regex;
use std::sync::LazyLock;

use crate::config::ExtractorConfig;
use crate::question::{Question, SOURCE_HEURISTIC};

use super::cleaner::{clean_option_text, clean_question_text};
use super::patterns;

/// 段落分隔：至少一个空行（只含空白的行也算空行）
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n)+").expect("Invalid paragraph regex"));

/// 段落窗口内收集的选项
#[derive(Debug, Default)]
struct OptionCollector {
    options: Vec<String>,
    marked: Option<String>,
}

impl OptionCollector {
    fn collect<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) {
        for line in lines {
            if !patterns::is_likely_option(line) {
                continue;
            }
            let option = clean_option_text(line);
            if option.is_empty() || self.options.contains(&option) {
                continue;
            }
            if self.marked.is_none() && patterns::is_marked_correct(line) {
                self.marked = Some(option.clone());
            }
            self.options.push(option);
        }
    }

    /// 第一个带正确标记的选项，否则第一个选项
    fn correct_answer(&self) -> String {
        self.marked
            .clone()
            .or_else(|| self.options.first().cloned())
            .unwrap_or_default()
    }
}

/// 把文本拆分为段落
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK.split(text).collect()
}

/// 按段落启发式提取题目
pub fn extract_heuristic(text: &str, config: &ExtractorConfig) -> Vec<Question> {
    let paragraphs = split_paragraphs(text);
    let mut questions = Vec::new();

    for (i, paragraph) in paragraphs.iter().enumerate() {
        if !patterns::is_likely_question(paragraph) {
            continue;
        }

        let (stem_lines, body_lines) = split_stem(paragraph);
        let question_text = clean_question_text(&stem_lines.join("\n"));
        if question_text.is_empty() {
            continue;
        }

        let mut collector = OptionCollector::default();
        collector.collect(body_lines.iter().copied());
        for next in paragraphs
            .iter()
            .skip(i + 1)
            .take(config.heuristic_paragraph_window.saturating_sub(1))
        {
            collector.collect(next.lines());
        }

        if collector.options.len() < config.option_threshold() {
            continue;
        }

        let correct = collector.correct_answer();
        questions.push(Question::new(
            question_text,
            collector.options,
            correct,
            config.default_difficulty.clone(),
            SOURCE_HEURISTIC,
        ));
    }

    questions
}

/// 拆出题干行和其余行
///
/// 首个非空行总属于题干，之后直到第一个选项行之前的行也属于题干。
/// 题干行不参与选项收集：问题段落只有题干之后的行和后续段落会被当作选项来源，
/// 否则 `1. What ...?` 这类编号题干本身会被识别成选项。
fn split_stem(paragraph: &str) -> (Vec<&str>, Vec<&str>) {
    let lines: Vec<&str> = paragraph
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .collect();

    let split_at = lines
        .iter()
        .skip(1)
        .position(|line| patterns::is_likely_option(line))
        .map(|pos| pos + 1)
        .unwrap_or(lines.len());

    let (stem, body) = lines.split_at(split_at);
    (stem.to_vec(), body.to_vec())
}
