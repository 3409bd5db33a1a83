//! `quizx extract` 命令 - 从文档或目录提取题目

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::config::ExtractorConfig;
use crate::extract::QuestionExtractor;
use crate::question::{filter_by_difficulty, Difficulty};
use crate::source::{extract_from_path, ExtractionReport, PlainTextSource};

use super::output::{format_output, format_questions};

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// 文档文件或目录
    pub path: PathBuf,
    /// 输出 JSON 格式
    #[arg(long)]
    pub json: bool,
    /// 按难度筛选（无匹配时保留全部）
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,
    /// 最多输出 N 道题
    #[arg(long, short)]
    pub limit: Option<usize>,
    /// 配置文件路径（默认 ~/.config/quiz-extractor/config.json）
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// 执行提取并应用筛选（纯逻辑，便于测试）
pub fn build_report(args: &ExtractArgs, config: ExtractorConfig) -> Result<ExtractionReport> {
    let source = PlainTextSource::from_config(&config);
    let extractor = QuestionExtractor::new(config);
    let mut report = extract_from_path(&args.path, &source, &extractor)?;

    if let Some(difficulty) = args.difficulty {
        report.questions = filter_by_difficulty(report.questions, difficulty);
    }
    if let Some(limit) = args.limit {
        report.questions.truncate(limit);
    }

    Ok(report)
}

/// 执行 extract 命令主逻辑
pub fn run_extract(args: &ExtractArgs) -> Result<()> {
    let config = ExtractorConfig::load(args.config.as_deref())?;
    let report = build_report(args, config)?;

    info!(
        documents = report.documents.len(),
        failures = report.failures.len(),
        questions = report.questions.len(),
        "Extraction finished"
    );

    if args.json {
        println!("{}", format_output(&report));
    } else if report.questions.is_empty() {
        println!("No questions found.");
    } else {
        print!("{}", format_questions(&report.questions));
    }

    Ok(())
}
