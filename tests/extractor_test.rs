//! 提取引擎集成测试
//!
//! 通过公开 API 覆盖归一化、两种提取策略和去重的完整流程。

use quiz_extractor::extract::{clean_option_text, extract_heuristic, extract_structured};
use quiz_extractor::{
    extract_questions, normalize_text, ExtractorConfig, QuestionDeduplicator, QuestionExtractor,
    SOURCE_HEURISTIC, SOURCE_STRUCTURED,
};

const MIXED_DOCUMENT: &str = "Chapter 3 Review\r\n\r\n\r\n\r\n\
1. What is 2+2?\r\n\
A. 3\r\n\
B. 4\r\n\
C. 5\r\n\
Answer: B\r\n\r\n\
Question 2. Which planet is known as the Red Planet?\r\n\
a) Venus\r\n\
b) Mars\r\n\
The correct answer is b\r\n\r\n\
Identify the largest ocean\r\n\
- Atlantic\r\n\
- Pacific ✓\r\n\
- Indian\r\n";

// ============================================================================
// 完整流程
// ============================================================================

#[test]
fn test_mixed_document() {
    let questions = extract_questions(MIXED_DOCUMENT);

    assert_eq!(questions.len(), 3);

    assert_eq!(questions[0].text, "What is 2+2?");
    assert_eq!(questions[0].options, vec!["3", "4", "5"]);
    assert_eq!(questions[0].correct_answer, "4");
    assert_eq!(questions[0].source, SOURCE_STRUCTURED);

    assert_eq!(questions[1].text, "Which planet is known as the Red Planet?");
    assert_eq!(questions[1].options, vec!["Venus", "Mars"]);
    assert_eq!(questions[1].correct_answer, "Mars");
    assert_eq!(questions[1].source, SOURCE_STRUCTURED);

    assert_eq!(questions[2].text, "Identify the largest ocean");
    assert_eq!(questions[2].options, vec!["Atlantic", "Pacific", "Indian"]);
    assert_eq!(questions[2].correct_answer, "Pacific");
    assert_eq!(questions[2].source, SOURCE_HEURISTIC);
}

#[test]
fn test_every_question_has_valid_options() {
    for question in extract_questions(MIXED_DOCUMENT) {
        assert!(question.options.len() >= 2);
        assert!(question.options.iter().all(|o| !o.is_empty()));
        assert!(question.options.contains(&question.correct_answer));
        assert_eq!(question.difficulty, "medium");
    }
}

#[test]
fn test_both_extractors_always_run() {
    let text = normalize_text(MIXED_DOCUMENT);
    let config = ExtractorConfig::default();

    let structured = extract_structured(&text, &config);
    let heuristic = extract_heuristic(&text, &config);

    assert_eq!(structured.len(), 2);
    assert!(heuristic.len() >= 3);
}

#[test]
fn test_no_recognizable_stems() {
    let text = "This document is just prose.\n\nIt has two paragraphs.";
    let config = ExtractorConfig::default();

    assert!(extract_structured(text, &config).is_empty());
    assert!(extract_heuristic(text, &config).is_empty());
    assert!(extract_questions(text).is_empty());
}

// ============================================================================
// 场景
// ============================================================================

#[test]
fn test_heuristic_capital_of_france() {
    let text = "World capitals\n\nWhat is the capital of France?\nA) Paris\nB) Lyon\n\nEnd of section.";
    let questions = extract_questions(text);

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].text, "What is the capital of France?");
    assert_eq!(questions[0].options, vec!["Paris", "Lyon"]);
    assert_eq!(questions[0].correct_answer, "Paris");
}

#[test]
fn test_asterisk_marked_option() {
    assert_eq!(clean_option_text("C. Madrid *"), "Madrid");

    let text = "Which city is the capital of Spain?\nA. Paris\nB. Lyon\nC. Madrid *";
    let questions = extract_questions(text);

    assert_eq!(questions[0].correct_answer, "Madrid");
}

#[test]
fn test_duplicate_stems_across_paragraphs() {
    let text = "what is 2+2?\na) 4\nb) 5\n\nWHAT IS   2+2?\n- 22\n- 4";
    let questions = extract_questions(text);

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].options[0], "4");
}

// ============================================================================
// 去重性质
// ============================================================================

#[test]
fn test_dedup_idempotent_on_pipeline_output() {
    let once = extract_questions(MIXED_DOCUMENT);
    let twice = QuestionDeduplicator::new().dedup(once.clone());

    assert_eq!(once, twice);
}

#[test]
fn test_custom_config_window() {
    let config = ExtractorConfig {
        structured_window_lines: 2,
        ..ExtractorConfig::default()
    };
    let extractor = QuestionExtractor::new(config);
    let text = "1. Which letter comes first?\nnote\nnote\nA. a\nB. b";

    let questions = extractor.extract(text);

    assert!(questions.iter().all(|q| q.source == SOURCE_HEURISTIC));
}
