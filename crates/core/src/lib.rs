//! 基于设计 token 的样式合成引擎
//!
//! [`box_styles`] 将一个扁平的、可能带响应式值的语义属性包转换为一个有序的
//! [`StyleDeclaration`]，所有值都从 [`TokenSource`] 中查出。

pub mod assemble;
pub mod breakpoint;
pub mod error;
pub mod font_grid;
pub mod merge;
pub mod naming;
pub mod props;
pub mod responsive;
pub mod shorthand;
pub mod style;
pub mod tokens;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used types
pub use assemble::box_styles;
pub use breakpoint::{Breakpoint, Breakpoints};
pub use error::{BreakpointError, StyleError, TokenTable};
pub use font_grid::{compute_line_height, FontGrid};
pub use responsive::{ResolvedSequence, ResponsiveValue, Slot};
pub use tokens::TokenSource;
pub use types::{
    Declaration, NamingMode, PropsBundle, RestProps, StyleDeclaration, StyleOutput, StyleValue,
};
