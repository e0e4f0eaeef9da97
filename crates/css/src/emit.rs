use crate::ir::RuleBlock;

/// 生成 CSS 字符串
///
/// 规则块之间空一行；at-rule 内的规则多缩进一级。相同输入总是产生相同输出。
pub fn emit_css(blocks: &[RuleBlock], indent: &str) -> String {
    let mut css = String::new();

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            css.push('\n');
        }

        match &block.at_rule {
            Some(at_rule) => {
                css.push_str(&format!("{} {{\n", at_rule));
                write_rule(&mut css, block, indent, 1);
                css.push_str("}\n");
            }
            None => write_rule(&mut css, block, indent, 0),
        }
    }

    css
}

fn write_rule(css: &mut String, block: &RuleBlock, indent: &str, depth: usize) {
    let sel_prefix = indent.repeat(depth);
    let decl_prefix = indent.repeat(depth + 1);

    css.push_str(&format!("{}{} {{\n", sel_prefix, block.selector));
    for decl in &block.declarations {
        css.push_str(&format!("{}{}: {};\n", decl_prefix, decl.property, decl.value));
    }
    css.push_str(&format!("{}}}\n", sel_prefix));
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxstyle_core::Declaration;
    use pretty_assertions::assert_eq;

    fn block(at_rule: Option<&str>, decls: &[(&str, &str)]) -> RuleBlock {
        RuleBlock {
            at_rule: at_rule.map(str::to_string),
            selector: ".c_test".to_string(),
            declarations: decls
                .iter()
                .map(|(p, v)| Declaration::new(*p, *v))
                .collect(),
        }
    }

    #[test]
    fn test_emit_single_rule() {
        let css = emit_css(&[block(None, &[("padding", "8px")])], "  ");
        assert_eq!(css, ".c_test {\n  padding: 8px;\n}\n");
    }

    #[test]
    fn test_emit_media_rule() {
        let css = emit_css(
            &[
                block(None, &[("color", "red")]),
                block(Some("@media (min-width: 768px)"), &[("padding-left", "4px")]),
            ],
            "  ",
        );
        assert_eq!(
            css,
            ".c_test {\n  color: red;\n}\n\n@media (min-width: 768px) {\n  .c_test {\n    padding-left: 4px;\n  }\n}\n"
        );
    }

    #[test]
    fn test_emit_empty() {
        assert_eq!(emit_css(&[], "  "), "");
    }

    #[test]
    fn test_emit_stability() {
        let blocks = vec![
            block(None, &[("padding", "8px"), ("margin", "0")]),
            block(Some("@media (min-width: 992px)"), &[("display", "none")]),
        ];
        assert_eq!(emit_css(&blocks, "\t"), emit_css(&blocks, "\t"));
    }
}
