//! 结构化提取 - 编号题干 + 字母选项 + 可选的答案标记
//!
//! 题干约定见 [`patterns::STEM`]。找到题干后向后扫描最多
//! `structured_window_lines` 行，遇到空行或新的题干行提前结束。

use crate::config::ExtractorConfig;
use crate::question::{Question, SOURCE_STRUCTURED};

use super::answer::resolve_answer;
use super::cleaner::{clean_question_text, strip_correct_markers};
use super::options::OptionMap;
use super::patterns;

/// 单个题干之后的扫描结果
#[derive(Debug, Default)]
struct OptionScan {
    options: OptionMap,
    marker: Option<char>,
}

/// 用编号约定提取题目
pub fn extract_structured(text: &str, config: &ExtractorConfig) -> Vec<Question> {
    let mut questions = Vec::new();

    for caps in patterns::STEM.captures_iter(text) {
        let (Some(whole), Some(stem)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let window = window_lines(&text[whole.end()..], config.structured_window_lines);
        let scan = scan_options(&window);
        if scan.options.len() < config.option_threshold() {
            continue;
        }

        let question_text = clean_question_text(stem.as_str());
        if question_text.is_empty() {
            continue;
        }

        let correct = pick_correct(&scan, &window.join("\n"));
        questions.push(Question::new(
            question_text,
            scan.options.into_texts(),
            correct,
            config.default_difficulty.clone(),
            SOURCE_STRUCTURED,
        ));
    }

    questions
}

/// 题干之后的候选行
///
/// 第一段是题干所在行 `?` 之后的剩余部分，为空白时跳过。
fn window_lines(rest: &str, max_lines: usize) -> Vec<&str> {
    let mut lines = rest.split('\n');
    let mut window = Vec::with_capacity(max_lines);

    if let Some(tail) = lines.next() {
        if !tail.trim().is_empty() {
            window.push(tail);
        }
    }
    window.extend(lines.take(max_lines.saturating_sub(window.len())));
    window
}

/// 收集字母选项和答案标记，遇到空行或新题干停止
fn scan_options(window: &[&str]) -> OptionScan {
    let mut scan = OptionScan::default();

    for line in window {
        if line.trim().is_empty() || patterns::is_stem_line(line) {
            break;
        }

        if let Some((letter, raw)) = patterns::parse_option_line(line) {
            let text = strip_correct_markers(raw);
            // 选项文本必须互不相同；同一字母重复时仍以后出现的为准
            if !text.is_empty() && !scan.options.has_text_elsewhere(letter, &text) {
                scan.options.insert(letter, text);
            }
        }

        if let Some(letter) = patterns::find_answer_marker(line) {
            scan.marker = Some(letter);
        }
    }

    scan
}

/// 标记字母存在于选项中时直接使用，否则交给答案判定，最后兜底第一个选项
fn pick_correct(scan: &OptionScan, context: &str) -> String {
    let options = &scan.options;
    let explicit = scan.marker.and_then(|letter| options.get(letter));
    let resolved = || resolve_answer(options, context).and_then(|letter| options.get(letter));

    explicit
        .or_else(resolved)
        .or_else(|| options.first_text())
        .unwrap_or_default()
        .to_string()
}
