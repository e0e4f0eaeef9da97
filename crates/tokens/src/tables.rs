use boxstyle_core::{Breakpoints, Declaration, TokenSource};
use indexmap::IndexMap;

/// 已校验的 token 表
///
/// 由 [`load_from_json`](crate::load_from_json) 构造，构造后只读；可在线程间共享。
#[derive(Debug, Clone)]
pub struct TokenTables {
    pub(crate) breakpoints: Breakpoints,
    pub(crate) spacing: IndexMap<String, String>,
    pub(crate) font_size: IndexMap<String, f64>,
    pub(crate) font_weight: IndexMap<String, String>,
    pub(crate) font_family: IndexMap<String, String>,
    pub(crate) line_height: IndexMap<String, f64>,
    pub(crate) grid_quantum: f64,
    pub(crate) foreground: IndexMap<String, String>,
    pub(crate) background: IndexMap<String, String>,
    pub(crate) border_color: String,
    pub(crate) border_radius: String,
    pub(crate) outline: Vec<Declaration>,
    pub(crate) themes: IndexMap<String, Vec<Declaration>>,
    pub(crate) palette: IndexMap<String, String>,
    pub(crate) page_background: Option<String>,
}

impl TokenTables {
    /// Custom properties for the `:root` block, in document order.
    pub fn palette(&self) -> &IndexMap<String, String> {
        &self.palette
    }

    pub fn page_background(&self) -> Option<&str> {
        self.page_background.as_deref()
    }

    /// Theme names in document order.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(|k| k.as_str())
    }
}

impl TokenSource for TokenTables {
    fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    fn spacing(&self, key: &str) -> Option<&str> {
        self.spacing.get(key).map(|v| v.as_str())
    }

    fn font_size(&self, key: &str) -> Option<f64> {
        self.font_size.get(key).copied()
    }

    fn font_weight(&self, key: &str) -> Option<&str> {
        self.font_weight.get(key).map(|v| v.as_str())
    }

    fn font_family(&self, key: &str) -> Option<&str> {
        self.font_family.get(key).map(|v| v.as_str())
    }

    fn line_height(&self, category: &str) -> Option<f64> {
        self.line_height.get(category).copied()
    }

    fn grid_quantum(&self) -> f64 {
        self.grid_quantum
    }

    fn foreground(&self, key: &str) -> Option<&str> {
        self.foreground.get(key).map(|v| v.as_str())
    }

    fn background(&self, key: &str) -> Option<&str> {
        self.background.get(key).map(|v| v.as_str())
    }

    fn border_color(&self) -> &str {
        &self.border_color
    }

    fn border_radius(&self) -> &str {
        &self.border_radius
    }

    fn focus_outline(&self) -> &[Declaration] {
        &self.outline
    }

    fn theme(&self, name: &str) -> Option<&[Declaration]> {
        self.themes.get(name).map(|v| v.as_slice())
    }
}
