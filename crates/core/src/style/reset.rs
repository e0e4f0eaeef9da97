use super::{single, Entries};
use crate::error::StyleError;
use crate::merge::merge_declarations;
use crate::tokens::{TokenSource, TokenSourceExt};
use crate::types::Declaration;

/// 固定结构重置的 key；主题声明会带来自己的 key
pub const KEYS: &[&str] = &["box-sizing", "list-style", "margin", "padding"];

const RESET: [(&str, &str); 4] = [
    ("box-sizing", "border-box"),
    ("list-style", "none"),
    ("margin", "0"),
    ("padding", "0"),
];

/// 主题基础声明在前，结构重置在后；冲突时重置生效
///
/// 主题里属于其他类别的 key（如 `padding-top`）放在重置之后，不被 `padding: 0` 盖掉。
pub fn styles<T>(theme: Option<&str>, tokens: &T) -> Result<Entries, StyleError>
where
    T: TokenSource + ?Sized,
{
    let theme_decls: Vec<Declaration> = match theme {
        Some(name) => tokens.require_theme(name)?.to_vec(),
        None => Vec::new(),
    };
    let (owned, custom): (Vec<Declaration>, Vec<Declaration>) = theme_decls
        .into_iter()
        .partition(|d| is_category_owned(&d.property));

    let reset = RESET.iter().map(|(p, v)| Declaration::new(*p, *v));
    Ok(merge_declarations(custom.into_iter().chain(reset).chain(owned))
        .into_iter()
        .map(|d| single(&d.property, d.value))
        .collect())
}

fn is_category_owned(property: &str) -> bool {
    super::category_keys()
        .iter()
        .any(|(category, keys)| *category != "reset" && keys.contains(&property))
}
