use boxstyle_core::BreakpointError;
use thiserror::Error;

/// Errors raised while loading token tables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid token JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid breakpoints: {0}")]
    Breakpoints(#[from] BreakpointError),

    #[error("grid quantum must be a positive finite number, got {0}")]
    InvalidGridQuantum(f64),

    #[error("line-height ratio for '{category}' must be a positive finite number, got {ratio}")]
    InvalidLineHeight { category: String, ratio: f64 },

    #[error("font size '{key}' must be a positive finite number, got {size}")]
    InvalidFontSize { key: String, size: f64 },
}
