//! 文档文本来源与批量提取
//!
//! 二进制文档（PDF 等）的解析不在本 crate 范围内，只定义 [`DocumentTextSource`] 接口，
//! 并提供读取 UTF-8 纯文本文件的 [`PlainTextSource`]。
//! 批量提取时单个文档失败只记录并跳过，不影响其余文档。

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::ExtractorConfig;
use crate::extract::QuestionExtractor;
use crate::question::Question;

/// 文档文本提取接口
pub trait DocumentTextSource: Send + Sync {
    /// 提取文档的全部文本；文档无法读取时返回错误
    fn extract_text(&self, path: &Path) -> Result<String>;

    /// 是否支持该文件（用于扫描目录）
    fn supports(&self, path: &Path) -> bool;
}

/// UTF-8 纯文本文档
#[derive(Debug, Clone)]
pub struct PlainTextSource {
    extensions: Vec<String>,
}

impl PlainTextSource {
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    /// 使用配置中的扩展名
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(config.document_extensions.clone())
    }
}

impl Default for PlainTextSource {
    fn default() -> Self {
        Self::new(vec!["txt".to_string()])
    }
}

impl DocumentTextSource for PlainTextSource {
    fn extract_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .map_err(|e| anyhow!("Document unreadable: {} ({})", path.display(), e))
    }

    fn supports(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
                .unwrap_or(false)
    }
}

/// 单个文档的提取统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub file_name: String,
    pub question_count: usize,
}

/// 单个文档的失败记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub file_name: String,
    pub error: String,
}

/// 批量提取结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// 所有文档的题目，按文档处理顺序拼接
    pub questions: Vec<Question>,
    pub documents: Vec<DocumentSummary>,
    pub failures: Vec<DocumentFailure>,
    pub extracted_at: DateTime<Utc>,
}

impl ExtractionReport {
    fn new() -> Self {
        Self {
            questions: Vec::new(),
            documents: Vec::new(),
            failures: Vec::new(),
            extracted_at: Utc::now(),
        }
    }
}

/// 从文件或目录提取题目
///
/// 目录只扫描第一层，按文件名排序处理。路径不存在时返回错误。
pub fn extract_from_path(
    path: &Path,
    source: &dyn DocumentTextSource,
    extractor: &QuestionExtractor,
) -> Result<ExtractionReport> {
    if !path.exists() {
        return Err(anyhow!("Path not found: {}", path.display()));
    }

    let documents = if path.is_dir() {
        list_documents(path, source)?
    } else {
        vec![path.to_path_buf()]
    };

    let mut report = ExtractionReport::new();
    for document in &documents {
        let file_name = display_name(document);
        match source.extract_text(document) {
            Ok(text) => {
                let questions = extractor.extract(&text);
                info!(document = %file_name, count = questions.len(), "Extracted questions");
                report.documents.push(DocumentSummary {
                    file_name,
                    question_count: questions.len(),
                });
                report.questions.extend(questions);
            }
            Err(e) => {
                warn!(document = %file_name, error = %e, "Skipping unreadable document");
                report.failures.push(DocumentFailure {
                    file_name,
                    error: e.to_string(),
                });
            }
        }
    }

    if report.questions.is_empty() {
        warn!(path = %path.display(), "No questions extracted");
    }

    Ok(report)
}

fn list_documents(dir: &Path, source: &dyn DocumentTextSource) -> Result<Vec<PathBuf>> {
    let mut documents: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| anyhow!("Cannot read directory {}: {}", dir.display(), e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| source.supports(path))
        .collect();
    documents.sort();
    Ok(documents)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
