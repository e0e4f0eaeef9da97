use super::{push_sequence, single, Entries};
use crate::error::StyleError;
use crate::props::BorderProps;
use crate::responsive::{resolve_with, ResponsiveValue, Slot};
use crate::tokens::TokenSource;

pub const KEYS: &[&str] = &[
    "border-width",
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
    "border-color",
    "border-style",
    "border-radius",
];

const BORDER_WIDTH: &str = "1px";

/// 先输出 `border-width: 0`，再为每条启用的边输出 1px 宽度，最后为整个属性族输出一次颜色与样式
pub fn styles<T>(props: &BorderProps, tokens: &T) -> Result<Entries, StyleError>
where
    T: TokenSource + ?Sized,
{
    let mut entries = vec![single("border-width", "0")];

    let sides = props.sides.compose();
    for (side, flag) in sides.iter() {
        let Some(&flag) = flag else { continue };
        let seq = resolve_with(&ResponsiveValue::Literal(flag), tokens.breakpoints(), |on| {
            if *on {
                Slot::Set(BORDER_WIDTH.to_string())
            } else {
                Slot::Unset
            }
        });
        push_sequence(&mut entries, &format!("border-{}-width", side.as_str()), seq);
    }

    if props.sides.any() {
        entries.push(single("border-color", tokens.border_color()));
        entries.push(single("border-style", "solid"));
    }

    if props.rounded {
        entries.push(single("border-radius", tokens.border_radius()));
    }

    Ok(entries)
}
