//! 测试用的简单 token 表实现

use crate::breakpoint::{Breakpoint, Breakpoints};
use crate::tokens::TokenSource;
use crate::types::Declaration;
use std::collections::HashMap;

pub(crate) struct SimpleTokens {
    pub breakpoints: Breakpoints,
    pub spacing: HashMap<String, String>,
    pub font_size: HashMap<String, f64>,
    pub font_weight: HashMap<String, String>,
    pub font_family: HashMap<String, String>,
    pub line_height: HashMap<String, f64>,
    pub grid_quantum: f64,
    pub foreground: HashMap<String, String>,
    pub background: HashMap<String, String>,
    pub border_color: String,
    pub border_radius: String,
    pub outline: Vec<Declaration>,
    pub themes: HashMap<String, Vec<Declaration>>,
}

fn strings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn numbers(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// xs/sm/md/lg/xl breakpoints, spacing unit 1 = 8px, 4px baseline grid.
pub(crate) fn test_tokens() -> SimpleTokens {
    SimpleTokens {
        breakpoints: Breakpoints::new(vec![
            Breakpoint::new("xs", 0),
            Breakpoint::new("sm", 576),
            Breakpoint::new("md", 768),
            Breakpoint::new("lg", 992),
            Breakpoint::new("xl", 1200),
        ])
        .unwrap(),
        spacing: strings(&[
            ("0", "0px"),
            ("0.25", "2px"),
            ("0.5", "4px"),
            ("1", "8px"),
            ("1.5", "12px"),
            ("2", "16px"),
            ("3", "24px"),
        ]),
        font_size: numbers(&[("xs", 0.875), ("sm", 1.0), ("md", 1.25), ("lg", 1.5), ("xl", 2.0)]),
        font_weight: strings(&[("normal", "400"), ("bold", "700")]),
        font_family: strings(&[
            ("body", "system-ui, sans-serif"),
            ("monospace", "Menlo, monospace"),
        ]),
        line_height: numbers(&[("default", 1.45), ("heading", 1.25), ("nospace", 1.0)]),
        grid_quantum: 0.25,
        foreground: strings(&[("text", "#313131"), ("action", "#00698f"), ("muted", "#61696b")]),
        background: strings(&[("body", "#ffffff"), ("shade", "#f5f5f5")]),
        border_color: "#808080".to_string(),
        border_radius: "4px".to_string(),
        outline: vec![
            Declaration::new("outline", "3px solid #9263DE"),
            Declaration::new("outline-offset", "2px"),
        ],
        themes: [
            (
                "light".to_string(),
                vec![Declaration::new("--foreground-text", "#313131")],
            ),
            (
                "dark".to_string(),
                vec![
                    Declaration::new("--foreground-text", "#ffffff"),
                    Declaration::new("--background-body", "#0d1926"),
                ],
            ),
            (
                "inset".to_string(),
                vec![
                    Declaration::new("--foreground-text", "#313131"),
                    Declaration::new("padding-top", "2px"),
                ],
            ),
        ]
        .into_iter()
        .collect(),
    }
}

impl TokenSource for SimpleTokens {
    fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    fn spacing(&self, key: &str) -> Option<&str> {
        self.spacing.get(key).map(|v| v.as_str())
    }

    fn font_size(&self, key: &str) -> Option<f64> {
        self.font_size.get(key).copied()
    }

    fn font_weight(&self, key: &str) -> Option<&str> {
        self.font_weight.get(key).map(|v| v.as_str())
    }

    fn font_family(&self, key: &str) -> Option<&str> {
        self.font_family.get(key).map(|v| v.as_str())
    }

    fn line_height(&self, category: &str) -> Option<f64> {
        self.line_height.get(category).copied()
    }

    fn grid_quantum(&self) -> f64 {
        self.grid_quantum
    }

    fn foreground(&self, key: &str) -> Option<&str> {
        self.foreground.get(key).map(|v| v.as_str())
    }

    fn background(&self, key: &str) -> Option<&str> {
        self.background.get(key).map(|v| v.as_str())
    }

    fn border_color(&self) -> &str {
        &self.border_color
    }

    fn border_radius(&self) -> &str {
        &self.border_radius
    }

    fn focus_outline(&self) -> &[Declaration] {
        &self.outline
    }

    fn theme(&self, name: &str) -> Option<&[Declaration]> {
        self.themes.get(name).map(|v| v.as_slice())
    }
}
