use crate::error::ConfigError;
use crate::tables::TokenTables;
use boxstyle_core::props::SpacingKey;
use boxstyle_core::{Breakpoint, Breakpoints, Declaration};
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokensJson {
    breakpoints: Vec<Breakpoint>,
    spacing: IndexMap<String, String>,
    font_size: IndexMap<String, f64>,
    font_weight: IndexMap<String, String>,
    font: IndexMap<String, String>,
    line_height: IndexMap<String, f64>,
    grid_quantum: f64,
    foreground: IndexMap<String, String>,
    background: IndexMap<String, String>,
    border: String,
    border_radius: String,
    outline: Vec<Declaration>,
    #[serde(default)]
    themes: IndexMap<String, Vec<Declaration>>,
    #[serde(default)]
    palette: IndexMap<String, String>,
    #[serde(default)]
    page_background: Option<String>,
}

/// 从 JSON 字符串加载 token 表
///
/// JSON 格式示例（省略部分表）：
/// ```json
/// {
///   "breakpoints": [{ "name": "xs", "minWidth": 0 }, { "name": "md", "minWidth": 768 }],
///   "spacing": { "1": "8px", "0.5": "4px" },
///   "fontSize": { "sm": 1 },
///   "lineHeight": { "default": 1.45 },
///   "gridQuantum": 0.25,
///   "outline": [{ "property": "outline", "value": "3px solid #9263DE" }]
/// }
/// ```
///
/// Spacing keys are canonicalised (`"1.0"` → `"1"`) so that they match what props parsing
/// produces.
pub fn load_from_json(json_str: &str) -> Result<TokenTables, ConfigError> {
    let raw: TokensJson = serde_json::from_str(json_str)?;

    let breakpoints = Breakpoints::new(raw.breakpoints)?;

    if !(raw.grid_quantum.is_finite() && raw.grid_quantum > 0.0) {
        return Err(ConfigError::InvalidGridQuantum(raw.grid_quantum));
    }
    for (category, &ratio) in &raw.line_height {
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(ConfigError::InvalidLineHeight {
                category: category.clone(),
                ratio,
            });
        }
    }
    for (key, &size) in &raw.font_size {
        if !(size.is_finite() && size > 0.0) {
            return Err(ConfigError::InvalidFontSize {
                key: key.clone(),
                size,
            });
        }
    }

    let spacing = raw
        .spacing
        .into_iter()
        .map(|(key, value)| (SpacingKey::new(key).as_str().to_string(), value))
        .collect();

    let tables = TokenTables {
        breakpoints,
        spacing,
        font_size: raw.font_size,
        font_weight: raw.font_weight,
        font_family: raw.font,
        line_height: raw.line_height,
        grid_quantum: raw.grid_quantum,
        foreground: raw.foreground,
        background: raw.background,
        border_color: raw.border,
        border_radius: raw.border_radius,
        outline: raw.outline,
        themes: raw.themes,
        palette: raw.palette,
        page_background: raw.page_background,
    };

    log::debug!(
        "loaded token tables: {} breakpoints, {} spacing steps, {} themes",
        tables.breakpoints.len(),
        tables.spacing.len(),
        tables.themes.len()
    );

    Ok(tables)
}
