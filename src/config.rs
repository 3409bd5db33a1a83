//! 提取配置
//!
//! 加载顺序：默认值 -> `~/.config/quiz-extractor/config.json` -> 环境变量覆盖

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::question::DEFAULT_DIFFICULTY;

/// 结构化扫描窗口行数的环境变量
pub const ENV_WINDOW_LINES: &str = "QUIZX_WINDOW_LINES";
/// 启发式段落窗口的环境变量
pub const ENV_PARAGRAPH_WINDOW: &str = "QUIZX_PARAGRAPH_WINDOW";

/// 一道单选题至少需要的选项数
pub const MIN_OPTIONS_FLOOR: usize = 2;

/// 提取引擎配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// 题干之后最多扫描的行数
    pub structured_window_lines: usize,
    /// 启发式提取时，问题段落连同其后共检查的段落数
    pub heuristic_paragraph_window: usize,
    /// 保留一道题所需的最少选项数，不能小于 [`MIN_OPTIONS_FLOOR`]
    pub min_options: usize,
    /// 指纹长度必须大于该值才保留
    pub min_fingerprint_len: usize,
    /// 提取题目的难度标记
    pub default_difficulty: String,
    /// 纯文本文档的扩展名（不含点）
    pub document_extensions: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            structured_window_lines: 20,
            heuristic_paragraph_window: 5,
            min_options: 2,
            min_fingerprint_len: 10,
            default_difficulty: DEFAULT_DIFFICULTY.to_string(),
            document_extensions: vec!["txt".to_string()],
        }
    }
}

impl ExtractorConfig {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config/quiz-extractor/config.json"))
    }

    /// 加载配置
    ///
    /// 指定路径时文件必须存在；未指定时默认路径不存在则使用默认值。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load_from(&default)?,
                _ => Self::default(),
            },
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// 从 JSON 文件加载，缺失字段使用默认值
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Cannot parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {}", path.display()))?;
        debug!(path = %path.display(), "Loaded extractor config");
        Ok(config)
    }

    /// 校验取值范围
    pub fn validate(&self) -> Result<()> {
        if self.min_options < MIN_OPTIONS_FLOOR {
            return Err(anyhow!(
                "min_options must be at least {}, got {}",
                MIN_OPTIONS_FLOOR,
                self.min_options
            ));
        }
        Ok(())
    }

    /// 实际使用的最少选项数（直接构造的配置也不会低于下限）
    pub fn option_threshold(&self) -> usize {
        self.min_options.max(MIN_OPTIONS_FLOOR)
    }

    /// 应用覆盖值；无法解析的值忽略并告警
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = parse_override(&lookup, ENV_WINDOW_LINES) {
            self.structured_window_lines = value;
        }
        if let Some(value) = parse_override(&lookup, ENV_PARAGRAPH_WINDOW) {
            self.heuristic_paragraph_window = value;
        }
    }
}

fn parse_override<F>(lookup: &F, key: &str) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            warn!(key = %key, value = %raw, "Ignoring invalid config override");
            None
        }
    }
}
