use crate::breakpoint::Breakpoints;
use crate::error::{StyleError, TokenTable};
use crate::types::Declaration;

/// Token 表的查询接口
///
/// 使用 trait 而不是具体类型，以便于测试和解耦。所有查询都是只读的，
/// 缺失的 key 返回 `None`，由调用方转换为 [`StyleError::UnresolvedToken`]。
pub trait TokenSource {
    /// 有序断点列表
    fn breakpoints(&self) -> &Breakpoints;

    /// Spacing scale: canonical key (e.g. `"0.5"`) → CSS length
    fn spacing(&self, key: &str) -> Option<&str>;

    /// Font size scale: key → size in rem
    fn font_size(&self, key: &str) -> Option<f64>;

    fn font_weight(&self, key: &str) -> Option<&str>;

    fn font_family(&self, key: &str) -> Option<&str>;

    /// Typography category → nominal line-height ratio
    fn line_height(&self, category: &str) -> Option<f64>;

    /// 基线网格单位（rem）
    fn grid_quantum(&self) -> f64;

    fn foreground(&self, key: &str) -> Option<&str>;

    fn background(&self, key: &str) -> Option<&str>;

    fn border_color(&self) -> &str;

    fn border_radius(&self) -> &str;

    /// `:focus` 块内的声明
    fn focus_outline(&self) -> &[Declaration];

    /// 命名主题的基础声明
    fn theme(&self, name: &str) -> Option<&[Declaration]>;
}

/// 查询辅助：缺失的 key 在查询处直接转为错误
pub(crate) trait TokenSourceExt: TokenSource {
    fn require_spacing(&self, key: &str) -> Result<&str, StyleError> {
        self.spacing(key)
            .ok_or_else(|| StyleError::unresolved(TokenTable::Spacing, key))
    }

    fn require_font_size(&self, key: &str) -> Result<f64, StyleError> {
        self.font_size(key)
            .ok_or_else(|| StyleError::unresolved(TokenTable::FontSize, key))
    }

    fn require_font_weight(&self, key: &str) -> Result<&str, StyleError> {
        self.font_weight(key)
            .ok_or_else(|| StyleError::unresolved(TokenTable::FontWeight, key))
    }

    fn require_font_family(&self, key: &str) -> Result<&str, StyleError> {
        self.font_family(key)
            .ok_or_else(|| StyleError::unresolved(TokenTable::FontFamily, key))
    }

    fn require_line_height(&self, category: &str) -> Result<f64, StyleError> {
        self.line_height(category)
            .ok_or_else(|| StyleError::unresolved(TokenTable::LineHeight, category))
    }

    fn require_foreground(&self, key: &str) -> Result<&str, StyleError> {
        self.foreground(key)
            .ok_or_else(|| StyleError::unresolved(TokenTable::Foreground, key))
    }

    fn require_background(&self, key: &str) -> Result<&str, StyleError> {
        self.background(key)
            .ok_or_else(|| StyleError::unresolved(TokenTable::Background, key))
    }

    fn require_theme(&self, name: &str) -> Result<&[Declaration], StyleError> {
        self.theme(name)
            .ok_or_else(|| StyleError::unresolved(TokenTable::Theme, name))
    }
}

impl<T: TokenSource + ?Sized> TokenSourceExt for T {}
