pub mod emit;
pub mod global;
pub mod ir;

// Re-export main functions
pub use emit::emit_css;
pub use global::emit_global_css;
pub use ir::{build_rule_blocks, RuleBlock};
