//! Page-level stylesheet: palette custom properties and the page background.

use indexmap::IndexMap;

/// `:root` custom properties, then a `body, html` block when a page background is given.
pub fn emit_global_css(
    palette: &IndexMap<String, String>,
    page_background: Option<&str>,
    indent: &str,
) -> String {
    let mut css = String::new();

    if !palette.is_empty() {
        css.push_str(":root {\n");
        for (property, value) in palette {
            css.push_str(&format!("{}{}: {};\n", indent, property, value));
        }
        css.push_str("}\n");
    }

    if let Some(background) = page_background {
        if !css.is_empty() {
            css.push('\n');
        }
        css.push_str("body,\nhtml {\n");
        for (property, value) in [("margin", "0"), ("padding", "0"), ("background", background)] {
            css.push_str(&format!("{}{}: {};\n", indent, property, value));
        }
        css.push_str("}\n");
    }

    css
}
