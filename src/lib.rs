//! Quiz Extractor - 从非结构化文档文本中提取单选题

pub mod cli;
pub mod config;
pub mod extract;
pub mod question;
pub mod source;

pub use config::ExtractorConfig;
pub use extract::{extract_questions, normalize_text, QuestionDeduplicator, QuestionExtractor};
pub use question::{
    filter_by_difficulty, Difficulty, Question, DEFAULT_DIFFICULTY, SOURCE_HEURISTIC,
    SOURCE_STRUCTURED,
};
pub use source::{
    extract_from_path, DocumentFailure, DocumentSummary, DocumentTextSource, ExtractionReport,
    PlainTextSource,
};
