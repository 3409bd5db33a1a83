//! Output formatting for CLI commands

use serde::Serialize;

use crate::question::Question;

/// Format output as pretty JSON
pub fn format_output<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}

/// 人类可读的题目列表，正确答案前加 `*`
pub fn format_questions(questions: &[Question]) -> String {
    let mut out = String::new();

    for (i, question) in questions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}. {}  [{}]\n", i + 1, question.text, question.source));
        for (letter, option) in ('A'..='Z').zip(&question.options) {
            let mark = if question.is_correct(option) { "*" } else { " " };
            out.push_str(&format!("  {}{}. {}\n", mark, letter, option));
        }
    }

    out
}
