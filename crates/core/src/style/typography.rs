//! 排版：字重与字体按断点查表，字号与行高作为对齐网格的一对输出

use super::{push_sequence, Entries};
use crate::error::StyleError;
use crate::font_grid::{compute_line_height, FontGrid};
use crate::props::{format_number, FontSize, TypographyProps};
use crate::responsive::{try_resolve_with, ResolvedSequence, ResponsiveValue, Slot};
use crate::tokens::{TokenSource, TokenSourceExt};

pub const KEYS: &[&str] = &["font-weight", "font-family", "font-size", "line-height"];

pub fn styles<T>(props: &TypographyProps, tokens: &T) -> Result<Entries, StyleError>
where
    T: TokenSource + ?Sized,
{
    let mut entries = Entries::new();

    if let Some(weight) = &props.font_weight {
        let seq = lookup(weight, tokens, |key| tokens.require_font_weight(key))?;
        push_sequence(&mut entries, "font-weight", seq);
    }

    if let Some(family) = &props.font_family {
        let seq = lookup(family, tokens, |key| tokens.require_font_family(key))?;
        push_sequence(&mut entries, "font-family", seq);
    }

    if let Some(size) = &props.font_size {
        // 每个槽位单独计算行高；没有字号的槽位两者都保持 Unset，不继承上一个配对
        let grid = try_resolve_with(size, tokens.breakpoints(), |size| -> Result<_, StyleError> {
            let rem = match size {
                FontSize::Token(key) => tokens.require_font_size(key)?,
                FontSize::Rem(rem) => *rem,
            };
            compute_line_height(rem, &props.line_height, tokens).map(Slot::Set)
        })?;
        push_sequence(
            &mut entries,
            "font-size",
            grid.map_slots(|g: &FontGrid| Slot::Set(g.font_size.clone())),
        );
        push_sequence(
            &mut entries,
            "line-height",
            grid.map_slots(|g| Slot::Set(format_number(g.line_height))),
        );
    }

    Ok(entries)
}

fn lookup<'t, T, F>(
    value: &ResponsiveValue<String>,
    tokens: &'t T,
    mut find: F,
) -> Result<ResolvedSequence<String>, StyleError>
where
    T: TokenSource + ?Sized,
    F: FnMut(&str) -> Result<&'t str, StyleError>,
{
    try_resolve_with(value, tokens.breakpoints(), |key| {
        find(key.as_str()).map(|v| Slot::Set(v.to_string()))
    })
}
