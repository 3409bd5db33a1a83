//! `quizx normalize` 命令 - 打印归一化后的文档文本（调试用）

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::ExtractorConfig;
use crate::extract::normalize_text;
use crate::source::{DocumentTextSource, PlainTextSource};

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// 文档文件
    pub path: PathBuf,
}

/// 执行 normalize 命令
pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let config = ExtractorConfig::load(None)?;
    let source = PlainTextSource::from_config(&config);
    let text = source.extract_text(&args.path)?;
    print!("{}", normalize_text(&text));
    Ok(())
}
