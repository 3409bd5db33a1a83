//! 文本归一化：统一换行符，折叠多余空行

use regex::Regex;
use std::sync::LazyLock;

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid newline regex"));

/// `\r\n` 和 `\r` 统一为 `\n`，三个及以上连续换行折叠为两个
pub fn normalize_text(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    EXCESS_NEWLINES.replace_all(&unified, "\n\n").into_owned()
}
