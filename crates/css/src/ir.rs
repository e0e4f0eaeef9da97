//! Rule-block IR: a style declaration laid out as selector blocks and media blocks.

use boxstyle_core::merge::merge_declarations;
use boxstyle_core::shorthand::optimize_shorthands;
use boxstyle_core::{Breakpoints, Declaration, Slot, StyleDeclaration, StyleValue};

/// CSS value written for an explicit reset slot.
pub const UNSET: &str = "unset";

/// One CSS rule, optionally wrapped in an at-rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBlock {
    /// e.g. `@media (min-width: 768px)`
    pub at_rule: Option<String>,
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// 将样式声明拆分为规则块
///
/// 顺序：基础块（`.class`）、嵌套块（`:focus` 等）、按断点顺序的媒体查询块。
///
/// - 单值进入基础块
/// - 响应式值按槽位分配：`min_width == 0` 的断点进入基础块，其余进入对应的媒体查询块；
///   与上一个槽位相同的值不重复输出，`Unset` 输出为 `unset`
/// - 每个块先做简写折叠再去重合并，空块丢弃
pub fn build_rule_blocks(
    class_name: &str,
    styles: &StyleDeclaration,
    breakpoints: &Breakpoints,
) -> Vec<RuleBlock> {
    let class_selector = format!(".{}", class_name);
    let mut base: Vec<Declaration> = Vec::new();
    let mut nested: Vec<RuleBlock> = Vec::new();
    let mut media: Vec<Vec<Declaration>> = vec![Vec::new(); breakpoints.len()];

    for (key, value) in styles.iter() {
        match value {
            StyleValue::Single(v) => base.push(Declaration::new(key, v.as_str())),
            StyleValue::Responsive(seq) => {
                let mut previous: Option<&Slot<String>> = None;
                for (index, slot) in seq.slots().iter().enumerate() {
                    if previous == Some(slot) {
                        continue;
                    }
                    previous = Some(slot);

                    let css_value = match slot {
                        Slot::Set(v) => v.as_str(),
                        Slot::Unset => UNSET,
                    };
                    let decl = Declaration::new(key, css_value);
                    match breakpoints.get(index) {
                        Some(bp) if bp.min_width == 0 => base.push(decl),
                        Some(_) => media[index].push(decl),
                        None => log::warn!("'{}' has more slots than breakpoints", key),
                    }
                }
            }
            StyleValue::Nested(decls) => nested.push(RuleBlock {
                at_rule: None,
                selector: nested_selector(&class_selector, key),
                declarations: decls.clone(),
            }),
        }
    }

    let mut blocks = Vec::with_capacity(2 + nested.len() + media.len());
    blocks.push(RuleBlock {
        at_rule: None,
        selector: class_selector.clone(),
        declarations: base,
    });
    blocks.extend(nested);
    for (bp, declarations) in breakpoints.iter().zip(media) {
        blocks.push(RuleBlock {
            at_rule: bp.media_query(),
            selector: class_selector.clone(),
            declarations,
        });
    }

    blocks
        .into_iter()
        .map(|mut block| {
            block.declarations = merge_declarations(optimize_shorthands(block.declarations));
            block
        })
        .filter(|block| !block.declarations.is_empty())
        .collect()
}

/// `&` 替换为类选择器，否则追加（如 `:focus`）
fn nested_selector(class_selector: &str, key: &str) -> String {
    if key.contains('&') {
        key.replace('&', class_selector)
    } else {
        format!("{}{}", class_selector, key)
    }
}
