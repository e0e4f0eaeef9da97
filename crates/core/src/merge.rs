use crate::types::Declaration;
use indexmap::IndexMap;

/// 合并 CSS 声明
///
/// - 同名属性后者覆盖前者
/// - 保持首次出现的位置（使用 IndexMap）
///
/// 用于主题基础声明与结构重置的叠加，以及同一规则块内简写折叠后的去重。
pub fn merge_declarations<I>(decls: I) -> Vec<Declaration>
where
    I: IntoIterator<Item = Declaration>,
{
    let mut map: IndexMap<String, String> = IndexMap::new();
    for decl in decls {
        map.insert(decl.property, decl.value);
    }

    map.into_iter()
        .map(|(property, value)| Declaration { property, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reset_overrides_theme() {
        let theme = vec![
            Declaration::new("--foreground-text", "#fff"),
            Declaration::new("margin", "8px"),
        ];
        let reset = vec![
            Declaration::new("box-sizing", "border-box"),
            Declaration::new("margin", "0"),
        ];
        let merged = merge_declarations(theme.into_iter().chain(reset));
        assert_eq!(
            merged,
            vec![
                Declaration::new("--foreground-text", "#fff"),
                Declaration::new("margin", "0"),
                Declaration::new("box-sizing", "border-box"),
            ]
        );
    }

    #[test]
    fn test_collapsed_shorthand_replaces_reset_value() {
        let decls = vec![
            Declaration::new("padding", "0"),
            Declaration::new("display", "flex"),
            Declaration::new("padding", "8px 16px"),
        ];
        let merged = merge_declarations(decls);
        assert_eq!(
            merged,
            vec![
                Declaration::new("padding", "8px 16px"),
                Declaration::new("display", "flex"),
            ]
        );
    }

    #[test]
    fn test_no_conflict() {
        let decls = vec![
            Declaration::new("color", "#313131"),
            Declaration::new("border-style", "solid"),
        ];
        assert_eq!(merge_declarations(decls.clone()), decls);
    }
}
