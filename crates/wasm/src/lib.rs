use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};

use boxstyle_core::naming::create_naming_strategy;
use boxstyle_core::{
    box_styles, NamingMode, PropsBundle, RestProps, StyleDeclaration, StyleError, TokenSource,
};
use boxstyle_css::{build_rule_blocks, emit_css, emit_global_css};
use boxstyle_tokens::{load_from_json, TokenTables};

const INDENT: &str = "  ";

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsStyleOptions {
    #[serde(default)]
    naming_mode: JsNamingMode,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
enum JsNamingMode {
    #[default]
    Hash,
    Readable,
}

impl From<JsNamingMode> for NamingMode {
    fn from(m: JsNamingMode) -> Self {
        match m {
            JsNamingMode::Hash => NamingMode::Hash,
            JsNamingMode::Readable => NamingMode::Readable,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BoxStylesResult {
    class_name: String,
    css: String,
    styles: StyleDeclaration,
    rest: RestProps,
}

fn parse_options(options: JsValue) -> Result<JsStyleOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(JsStyleOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn serialize_result<T: Serialize>(result: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    result
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── WASM 导出 ─────────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 持有已校验 token 表的样式引擎
#[wasm_bindgen]
pub struct StyleEngine {
    tokens: TokenTables,
}

#[wasm_bindgen]
impl StyleEngine {
    /// @param tokensJson - token 表 JSON 字符串
    #[wasm_bindgen(constructor)]
    pub fn new(tokens_json: &str) -> Result<StyleEngine, JsError> {
        let tokens = load_from_json(tokens_json).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(StyleEngine { tokens })
    }

    /// 属性包 → 样式
    ///
    /// @param props   - 扁平属性对象
    /// @param options - `{ namingMode: "hash" | "readable" }`，可选
    /// @returns `{ className, css, styles, rest }`
    #[wasm_bindgen(js_name = "boxStyles")]
    pub fn box_styles(&self, props: JsValue, options: JsValue) -> Result<JsValue, JsError> {
        let opts = parse_options(options)?;
        let bundle: PropsBundle = serde_wasm_bindgen::from_value(props)
            .map_err(|e| JsError::new(&format!("Invalid props: {}", e)))?;
        let result = self
            .render(&bundle, opts.naming_mode.into())
            .map_err(|e| JsError::new(&e.to_string()))?;
        serialize_result(&result)
    }

    /// `:root` 调色板变量与页面背景
    #[wasm_bindgen(js_name = "globalCss")]
    pub fn global_css(&self) -> String {
        emit_global_css(self.tokens.palette(), self.tokens.page_background(), INDENT)
    }
}

impl StyleEngine {
    fn render(&self, bundle: &PropsBundle, mode: NamingMode) -> Result<BoxStylesResult, StyleError> {
        let output = box_styles(bundle, &self.tokens)?;
        let class_name = create_naming_strategy(mode).generate_name(&output.styles);
        let blocks = build_rule_blocks(&class_name, &output.styles, self.tokens.breakpoints());
        log::debug!("{}: {} rule blocks", class_name, blocks.len());

        Ok(BoxStylesResult {
            css: emit_css(&blocks, INDENT),
            class_name,
            styles: output.styles,
            rest: output.rest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const TOKENS: &str = include_str!("../../tokens/fixtures/tokens.json");

    fn engine() -> StyleEngine {
        StyleEngine {
            tokens: load_from_json(TOKENS).unwrap(),
        }
    }

    fn bundle(value: serde_json::Value) -> PropsBundle {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_render_class_and_css() {
        let result = engine()
            .render(&bundle(json!({ "color": "action" })), NamingMode::Hash)
            .unwrap();
        assert!(result.class_name.starts_with("c_"));
        assert!(result.css.starts_with(&format!(".{} {{\n", result.class_name)));
        assert!(result.css.contains("  color: #00698f;\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let props = bundle(json!({ "padding": { "xs": 1, "md": 2 }, "focus": true }));
        let a = engine().render(&props, NamingMode::Hash).unwrap();
        let b = engine().render(&props, NamingMode::Hash).unwrap();
        assert_eq!(a.class_name, b.class_name);
        assert_eq!(a.css, b.css);
    }

    #[test]
    fn test_readable_class_name() {
        let result = engine()
            .render(&bundle(json!({})), NamingMode::Readable)
            .unwrap();
        assert_eq!(result.class_name, "bs_ls_m_p_bw");
    }

    #[test]
    fn test_result_shape() {
        let result = engine()
            .render(&bundle(json!({ "id": "x", "fontSize": { "md": "sm" } })), NamingMode::Hash)
            .unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["rest"], json!({ "id": "x" }));
        assert_eq!(
            value["styles"]["font-size"],
            json!([null, null, "1rem", "1rem", "1rem"])
        );
        assert_eq!(value["styles"]["line-height"][2], json!("1.5"));
        assert!(value["className"].is_string());
    }

    #[test]
    fn test_global_css() {
        let css = engine().global_css();
        assert!(css.starts_with(":root {\n  --foreground-text: #313131;\n"));
        assert!(css.contains("background: var(--background-body);"));
    }
}
