//! 按插入顺序保存的选项表（字母 -> 文本）

/// 选项表
///
/// 同一字母重复插入时覆盖文本，但保留首次插入的位置。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    entries: Vec<(char, String)>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入选项，字母统一转为大写
    pub fn insert(&mut self, letter: char, text: impl Into<String>) {
        let letter = letter.to_ascii_uppercase();
        let text = text.into();
        match self.entries.iter_mut().find(|(l, _)| *l == letter) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((letter, text)),
        }
    }

    pub fn get(&self, letter: char) -> Option<&str> {
        let letter = letter.to_ascii_uppercase();
        self.entries
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, text)| text.as_str())
    }

    /// 其他字母下是否已有相同文本
    pub fn has_text_elsewhere(&self, letter: char, text: &str) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.entries.iter().any(|(l, t)| *l != letter && t == text)
    }

    /// 首个插入的字母
    pub fn first_key(&self) -> Option<char> {
        self.entries.first().map(|(l, _)| *l)
    }

    pub fn first_text(&self) -> Option<&str> {
        self.entries.first().map(|(_, text)| text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按插入顺序返回选项文本
    pub fn into_texts(self) -> Vec<String> {
        self.entries.into_iter().map(|(_, text)| text).collect()
    }
}
