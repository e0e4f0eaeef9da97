//! 样式类别
//!
//! 每个类别拥有互不相交的输出 key，列在各自的 `KEYS` 常量中。

pub mod border;
pub mod color;
pub mod focus;
pub mod layout;
pub mod padding;
pub mod reset;
pub mod typography;

use crate::responsive::ResolvedSequence;
use crate::types::StyleValue;

/// 单个类别的输出，按输出顺序
pub type Entries = Vec<(String, StyleValue)>;

/// 追加解析后的序列，折叠为空时跳过
pub(crate) fn push_sequence(entries: &mut Entries, key: &str, seq: ResolvedSequence<String>) {
    if let Some(value) = StyleValue::from_sequence(seq) {
        entries.push((key.to_string(), value));
    }
}

pub(crate) fn single(key: &str, value: impl Into<String>) -> (String, StyleValue) {
    (key.to_string(), StyleValue::Single(value.into()))
}

/// 各类别的静态 key 集合，用于互斥检查
pub fn category_keys() -> [(&'static str, &'static [&'static str]); 7] {
    [
        ("reset", reset::KEYS),
        ("color", color::KEYS),
        ("border", border::KEYS),
        ("layout", layout::KEYS),
        ("padding", padding::KEYS),
        ("typography", typography::KEYS),
        ("focus", focus::KEYS),
    ]
}
