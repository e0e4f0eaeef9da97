use super::{push_sequence, Entries};
use crate::error::StyleError;
use crate::props::PaddingProps;
use crate::responsive::{try_resolve_with, Slot};
use crate::tokens::{TokenSource, TokenSourceExt};

pub const KEYS: &[&str] = &["padding-top", "padding-right", "padding-bottom", "padding-left"];

/// 先合成各边值，再逐边级联并映射到 spacing 表
pub fn styles<T>(props: &PaddingProps, tokens: &T) -> Result<Entries, StyleError>
where
    T: TokenSource + ?Sized,
{
    let mut entries = Entries::new();
    let sides = props.sides.compose();
    for (side, value) in sides.iter() {
        let Some(value) = value else { continue };
        let seq = try_resolve_with(value, tokens.breakpoints(), |key| {
            tokens
                .require_spacing(key.as_str())
                .map(|length| Slot::Set(length.to_string()))
        })?;
        push_sequence(&mut entries, &format!("padding-{}", side.as_str()), seq);
    }
    Ok(entries)
}
