//! 样式组装
//!
//! 引擎入口：解析属性包，运行各样式类别，并把输出合并为一个有序声明。

use crate::error::StyleError;
use crate::props::BoxProps;
use crate::style::{self, Entries};
use crate::tokens::TokenSource;
use crate::types::{PropsBundle, StyleDeclaration, StyleOutput};
use std::collections::HashSet;

/// 主入口：属性包 → 样式声明 + 透传属性
///
/// 类别按固定顺序合并：reset、color、border、layout、padding、typography、focus。
/// 各类别的输出 key 互不相交；主题声明引入的 key 是唯一允许被后续类别覆盖的，
/// 被覆盖的 key 移到覆盖它的类别的位置。
pub fn box_styles<T>(bundle: &PropsBundle, tokens: &T) -> Result<StyleOutput, StyleError>
where
    T: TokenSource + ?Sized,
{
    let (props, rest) = BoxProps::from_bundle(bundle, tokens.breakpoints())?;
    let styles = assemble(&props, tokens)?;

    log::debug!(
        "assembled {} declarations, {} rest props",
        styles.len(),
        rest.len()
    );

    Ok(StyleOutput { styles, rest })
}

/// 对已解析的属性运行全部类别
pub fn assemble<T>(props: &BoxProps, tokens: &T) -> Result<StyleDeclaration, StyleError>
where
    T: TokenSource + ?Sized,
{
    let reset = style::reset::styles(props.theme.as_deref(), tokens)?;
    let theme_keys: HashSet<String> = reset
        .iter()
        .map(|(key, _)| key.clone())
        .filter(|key| !style::reset::KEYS.contains(&key.as_str()))
        .collect();

    let categories: [(&str, Entries); 7] = [
        ("reset", reset),
        ("color", style::color::styles(&props.color, tokens)?),
        ("border", style::border::styles(&props.border, tokens)?),
        ("layout", style::layout::styles(&props.layout, tokens)?),
        ("padding", style::padding::styles(&props.padding, tokens)?),
        ("typography", style::typography::styles(&props.typography, tokens)?),
        ("focus", style::focus::styles(&props.focus, tokens)),
    ];

    let mut styles = StyleDeclaration::new();
    for (category, entries) in categories {
        log::trace!("{}: {} entries", category, entries.len());
        for (key, value) in entries {
            // 覆盖主题 key 时移到当前类别的位置
            if category != "reset" && theme_keys.contains(&key) {
                styles.remove(&key);
            }
            let previous = styles.insert(key.as_str(), value);
            debug_assert!(
                previous.is_none(),
                "category {} overwrote '{}'",
                category,
                key
            );
        }
    }

    Ok(styles)
}
