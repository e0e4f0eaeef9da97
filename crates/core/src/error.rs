use std::fmt;
use thiserror::Error;

/// 查找失败的 token 表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenTable {
    Spacing,
    FontSize,
    FontWeight,
    FontFamily,
    LineHeight,
    Foreground,
    Background,
    Theme,
}

impl fmt::Display for TokenTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenTable::Spacing => "spacing",
            TokenTable::FontSize => "font size",
            TokenTable::FontWeight => "font weight",
            TokenTable::FontFamily => "font family",
            TokenTable::LineHeight => "line height",
            TokenTable::Foreground => "foreground color",
            TokenTable::Background => "background color",
            TokenTable::Theme => "theme",
        };
        f.write_str(name)
    }
}

/// 属性包转换为样式声明时的错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    /// 引用的 token key 在表中不存在
    #[error("unresolved token '{key}' in {table} table")]
    UnresolvedToken { table: TokenTable, key: String },

    /// 响应式映射使用了未配置的断点
    #[error("property '{property}' uses unknown breakpoint '{breakpoint}'")]
    UnknownBreakpoint { property: String, breakpoint: String },

    /// 值的形状与属性不符
    #[error("invalid value for '{property}': expected {expected}")]
    InvalidValue {
        property: String,
        expected: &'static str,
    },
}

impl StyleError {
    pub fn unresolved(table: TokenTable, key: impl Into<String>) -> Self {
        StyleError::UnresolvedToken {
            table,
            key: key.into(),
        }
    }

    pub fn invalid(property: impl Into<String>, expected: &'static str) -> Self {
        StyleError::InvalidValue {
            property: property.into(),
            expected,
        }
    }
}

/// 断点列表校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakpointError {
    #[error("breakpoint list is empty")]
    Empty,

    #[error("breakpoint '{0}' is defined more than once")]
    Duplicate(String),

    #[error("breakpoint '{name}' ({min_width}px) must be wider than the previous one ({previous}px)")]
    Unordered {
        name: String,
        min_width: u32,
        previous: u32,
    },
}
