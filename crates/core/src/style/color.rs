use super::{single, Entries};
use crate::error::StyleError;
use crate::props::ColorProps;
use crate::tokens::{TokenSource, TokenSourceExt};

pub const KEYS: &[&str] = &["color", "background-color"];

/// 直接查调色板，不级联
pub fn styles<T>(props: &ColorProps, tokens: &T) -> Result<Entries, StyleError>
where
    T: TokenSource + ?Sized,
{
    let mut entries = Entries::new();
    if let Some(key) = &props.color {
        entries.push(single("color", tokens.require_foreground(key)?));
    }
    if let Some(key) = &props.background {
        entries.push(single("background-color", tokens.require_background(key)?));
    }
    Ok(entries)
}
