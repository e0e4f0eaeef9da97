//! 排版网格计算
//!
//! 将行框对齐到基线网格，使堆叠的文本保持垂直韵律。

use crate::error::StyleError;
use crate::tokens::{TokenSource, TokenSourceExt};

/// 以网格步数计的容差，在此范围内的高度视为恰好落在网格线上
pub const GRID_EPSILON: f64 = 1e-9;

/// 字号及其对齐网格后的行高倍数
#[derive(Debug, Clone, PartialEq)]
pub struct FontGrid {
    /// 如 `"1rem"`
    pub font_size: String,
    /// 无单位倍数
    pub line_height: f64,
}

/// 计算 `font_size`（rem）在名义比例 `ratio` 下对齐网格的行高
///
/// 行框 `font_size * ratio` 向上取整到 `quantum` 的倍数，因此不会比名义高度更矮；
/// 距网格线不超过 [`GRID_EPSILON`] 步的高度视为正好在网格线上。
///
/// 前置条件：`font_size` 为正数。
pub fn font_grid(font_size: f64, ratio: f64, quantum: f64) -> FontGrid {
    let snapped = snap_to_grid(font_size * ratio, quantum);
    FontGrid {
        font_size: format!("{}rem", font_size),
        line_height: snapped / font_size,
    }
}

/// 将 `height` 向上取整到 `quantum` 的倍数
pub fn snap_to_grid(height: f64, quantum: f64) -> f64 {
    let steps = height / quantum;
    let nearest = steps.round();
    let steps = if (steps - nearest).abs() <= GRID_EPSILON {
        nearest
    } else {
        steps.ceil()
    };
    steps * quantum
}

/// 从 token 表查出类别比例与网格单位后计算
pub fn compute_line_height<T>(font_size: f64, category: &str, tokens: &T) -> Result<FontGrid, StyleError>
where
    T: TokenSource + ?Sized,
{
    let ratio = tokens.require_line_height(category)?;
    let grid = font_grid(font_size, ratio, tokens.grid_quantum());
    log::trace!(
        "font grid {} ({}) -> line-height {}",
        grid.font_size,
        category,
        grid.line_height
    );
    Ok(grid)
}
