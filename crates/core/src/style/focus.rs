use super::Entries;
use crate::props::FocusProps;
use crate::tokens::TokenSource;
use crate::types::{Declaration, StyleValue};

pub const KEYS: &[&str] = &[":focus", "&::-moz-focus-inner"];

/// 焦点轮廓，以及配套的 Firefox 内边框抑制
pub fn styles<T>(props: &FocusProps, tokens: &T) -> Entries
where
    T: TokenSource + ?Sized,
{
    if !props.focus {
        return Entries::new();
    }
    vec![
        (
            ":focus".to_string(),
            StyleValue::Nested(tokens.focus_outline().to_vec()),
        ),
        (
            "&::-moz-focus-inner".to_string(),
            StyleValue::Nested(vec![Declaration::new("border", "0")]),
        ),
    ]
}
