//! Quiz Extractor CLI
//!
//! 从文档文本中提取单选题

use anyhow::Result;
use clap::{Parser, Subcommand};
use quiz_extractor::cli::{run_extract, run_normalize, ExtractArgs, NormalizeArgs};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "quizx")]
#[command(about = "Quiz Extractor - 从文档文本中提取单选题")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 从文档文件或目录提取题目
    Extract(ExtractArgs),
    /// 打印归一化后的文档文本
    Normalize(NormalizeArgs),
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quiz_extractor=info,quizx=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract(args) => run_extract(&args),
        Commands::Normalize(args) => run_normalize(&args),
    }
}
