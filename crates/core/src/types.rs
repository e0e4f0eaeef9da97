use crate::responsive::{ResolvedSequence, Slot};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 输入：扁平的属性包（属性名 → 字面值或按断点映射）
pub type PropsBundle = IndexMap<String, serde_json::Value>;

/// 未识别的属性，原样返回给调用方
pub type RestProps = IndexMap<String, serde_json::Value>;

/// 命名策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NamingMode {
    /// 基于内容 hash
    #[default]
    Hash,
    /// 调试友好（如 "pt_pl_c"）
    Readable,
}

/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "padding"）
    pub property: String,
    /// CSS 属性值（如 "1rem"）
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// 样式声明中的值
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// 所有断点生效
    Single(String),
    /// 每个断点一个槽位
    Responsive(ResolvedSequence<String>),
    /// 嵌套选择器块（如 `:focus`）
    Nested(Vec<Declaration>),
}

impl StyleValue {
    /// 将解析后的序列转换为输出值
    ///
    /// 来自字面值的序列折叠为单值；若该值是显式重置则不输出。
    pub fn from_sequence(seq: ResolvedSequence<String>) -> Option<StyleValue> {
        if seq.is_uniform() {
            match seq.into_slots().into_iter().next() {
                Some(Slot::Set(v)) => Some(StyleValue::Single(v)),
                _ => None,
            }
        } else {
            Some(StyleValue::Responsive(seq))
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            StyleValue::Single(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_responsive(&self) -> Option<&ResolvedSequence<String>> {
        match self {
            StyleValue::Responsive(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_nested(&self) -> Option<&[Declaration]> {
        match self {
            StyleValue::Nested(decls) => Some(decls),
            _ => None,
        }
    }
}

/// The engine's output: property name (or nested selector) → value, in category order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleDeclaration {
    entries: IndexMap<String, StyleValue>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入值，返回同 key 的旧值
    pub fn insert(&mut self, key: impl Into<String>, value: StyleValue) -> Option<StyleValue> {
        self.entries.insert(key.into(), value)
    }

    /// 删除 key，其后的条目保持相对顺序
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.entries.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 用于类名 hash 的稳定文本形式
    pub fn fingerprint(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push(':');
            match value {
                StyleValue::Single(v) => out.push_str(v),
                StyleValue::Responsive(seq) => {
                    out.push('[');
                    for (i, slot) in seq.slots().iter().enumerate() {
                        if i > 0 {
                            out.push(',');
                        }
                        if let Slot::Set(v) = slot {
                            out.push_str(v);
                        }
                    }
                    out.push(']');
                }
                StyleValue::Nested(decls) => {
                    out.push('{');
                    for decl in decls {
                        out.push_str(&format!("{}:{};", decl.property, decl.value));
                    }
                    out.push('}');
                }
            }
            out.push(';');
        }
        out
    }
}

/// 输出：样式声明 + 原样透传的属性
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleOutput {
    pub styles: StyleDeclaration,
    pub rest: RestProps,
}
