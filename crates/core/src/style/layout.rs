use super::{push_sequence, Entries};
use crate::error::StyleError;
use crate::props::{LayoutProps, LayoutValue};
use crate::responsive::{try_resolve_with, Slot};
use crate::tokens::{TokenSource, TokenSourceExt};

pub const KEYS: &[&str] = &[
    "display",
    "flex-direction",
    "flex-wrap",
    "flex-grow",
    "flex-shrink",
    "justify-content",
    "align-items",
    "gap",
    "width",
    "min-width",
    "max-width",
    "height",
    "min-height",
    "max-height",
];

/// 每个布局属性独立走断点级联，`gap` 与尺寸的 spacing key 在级联后查表
pub fn styles<T>(props: &LayoutProps, tokens: &T) -> Result<Entries, StyleError>
where
    T: TokenSource + ?Sized,
{
    let mut entries = Entries::new();
    for entry in &props.entries {
        let seq = try_resolve_with(&entry.value, tokens.breakpoints(), |value| {
            Ok::<_, StyleError>(Slot::Set(match value {
                LayoutValue::Css(css) => css.clone(),
                LayoutValue::Spacing(key) => tokens.require_spacing(key.as_str())?.to_string(),
            }))
        })?;
        push_sequence(&mut entries, entry.property, seq);
    }
    Ok(entries)
}
