//! 属性包解析
//!
//! 把扁平属性包拆成识别出的样式属性（带类型、断点 key 已校验）和原样保留的其余属性。

use crate::breakpoint::Breakpoints;
use crate::error::StyleError;
use crate::responsive::ResponsiveValue;
use crate::shorthand::ShorthandGroup;
use crate::types::{PropsBundle, RestProps};
use phf::{phf_set, Set};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// 引擎处理的属性名，其他属性原样透传
pub static RECOGNIZED_PROPS: Set<&'static str> = phf_set! {
    "theme",
    // color
    "color", "background",
    // border
    "border", "borderX", "borderY", "borderTop", "borderRight", "borderBottom", "borderLeft",
    "rounded",
    // layout
    "display", "flexDirection", "flexWrap", "flexGrow", "flexShrink", "justifyContent",
    "alignItems", "gap", "width", "minWidth", "maxWidth", "height", "minHeight", "maxHeight",
    // padding
    "padding", "paddingX", "paddingY", "paddingTop", "paddingRight", "paddingBottom",
    "paddingLeft",
    // typography
    "fontWeight", "fontFamily", "fontSize", "lineHeight",
    // focus
    "focus",
};

static DISPLAY: Set<&'static str> = phf_set! {
    "block", "flex", "inline", "inline-block", "inline-flex", "none",
};

static FLEX_DIRECTION: Set<&'static str> = phf_set! { "row", "column" };

static FLEX_WRAP: Set<&'static str> = phf_set! { "nowrap", "wrap", "wrap-reverse" };

static JUSTIFY_CONTENT: Set<&'static str> = phf_set! {
    "flex-start", "flex-end", "center", "space-between", "space-around", "space-evenly",
};

static ALIGN_ITEMS: Set<&'static str> = phf_set! {
    "stretch", "flex-start", "flex-end", "center", "baseline",
};

/// 规范化的 spacing key，如 `"1"`、`"0.5"`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpacingKey(String);

impl SpacingKey {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        match key.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => SpacingKey(format_number(n)),
            _ => SpacingKey(key),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 字号：比例表 key 或直接的 rem 数值
#[derive(Debug, Clone, PartialEq)]
pub enum FontSize {
    Token(String),
    Rem(f64),
}

/// 查表之前的布局槽位值
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutValue {
    /// 已是 CSS 值
    Css(String),
    /// 需要查 spacing 表
    Spacing(SpacingKey),
}

#[derive(Debug, Clone, Copy)]
enum LayoutKind {
    Keyword(&'static Set<&'static str>),
    Number,
    Spacing,
    Size,
}

/// （属性名, CSS 属性, 类型），按输出顺序
static LAYOUT_PROPS: &[(&str, &str, LayoutKind)] = &[
    ("display", "display", LayoutKind::Keyword(&DISPLAY)),
    ("flexDirection", "flex-direction", LayoutKind::Keyword(&FLEX_DIRECTION)),
    ("flexWrap", "flex-wrap", LayoutKind::Keyword(&FLEX_WRAP)),
    ("flexGrow", "flex-grow", LayoutKind::Number),
    ("flexShrink", "flex-shrink", LayoutKind::Number),
    ("justifyContent", "justify-content", LayoutKind::Keyword(&JUSTIFY_CONTENT)),
    ("alignItems", "align-items", LayoutKind::Keyword(&ALIGN_ITEMS)),
    ("gap", "gap", LayoutKind::Spacing),
    ("width", "width", LayoutKind::Size),
    ("minWidth", "min-width", LayoutKind::Size),
    ("maxWidth", "max-width", LayoutKind::Size),
    ("height", "height", LayoutKind::Size),
    ("minHeight", "min-height", LayoutKind::Size),
    ("maxHeight", "max-height", LayoutKind::Size),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorProps {
    pub color: Option<String>,
    pub background: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderProps {
    pub sides: ShorthandGroup<bool>,
    pub rounded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEntry {
    pub property: &'static str,
    pub value: ResponsiveValue<LayoutValue>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutProps {
    pub entries: Vec<LayoutEntry>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaddingProps {
    pub sides: ShorthandGroup<ResponsiveValue<SpacingKey>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypographyProps {
    pub font_weight: Option<ResponsiveValue<String>>,
    pub font_family: Option<ResponsiveValue<String>>,
    pub font_size: Option<ResponsiveValue<FontSize>>,
    /// 排版类别
    pub line_height: String,
}

impl Default for TypographyProps {
    fn default() -> Self {
        Self {
            font_weight: None,
            font_family: None,
            font_size: None,
            line_height: "default".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FocusProps {
    pub focus: bool,
}

/// 属性包中已识别部分的类型化视图
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxProps {
    pub theme: Option<String>,
    pub color: ColorProps,
    pub border: BorderProps,
    pub layout: LayoutProps,
    pub padding: PaddingProps,
    pub typography: TypographyProps,
    pub focus: FocusProps,
}

impl BoxProps {
    /// 解析识别出的属性，其余属性按输入顺序原样返回
    ///
    /// 顶层的 `null` 视为未给出。
    pub fn from_bundle(
        bundle: &PropsBundle,
        breakpoints: &Breakpoints,
    ) -> Result<(BoxProps, RestProps), StyleError> {
        let mut recognized: HashMap<&str, &Value> = HashMap::new();
        let mut rest = RestProps::new();

        for (key, value) in bundle {
            if RECOGNIZED_PROPS.contains(key.as_str()) {
                if !value.is_null() {
                    recognized.insert(key.as_str(), value);
                }
            } else {
                rest.insert(key.clone(), value.clone());
            }
        }

        let parser = Parser {
            values: recognized,
            breakpoints,
        };

        let props = BoxProps {
            theme: parser.literal("theme", "a theme name", as_string)?,
            color: ColorProps {
                color: parser.literal("color", "a foreground color key", as_string)?,
                background: parser.literal("background", "a background color key", as_string)?,
            },
            border: BorderProps {
                sides: ShorthandGroup {
                    general: parser.literal("border", "a boolean", Value::as_bool)?,
                    x: parser.literal("borderX", "a boolean", Value::as_bool)?,
                    y: parser.literal("borderY", "a boolean", Value::as_bool)?,
                    top: parser.literal("borderTop", "a boolean", Value::as_bool)?,
                    right: parser.literal("borderRight", "a boolean", Value::as_bool)?,
                    bottom: parser.literal("borderBottom", "a boolean", Value::as_bool)?,
                    left: parser.literal("borderLeft", "a boolean", Value::as_bool)?,
                },
                rounded: parser
                    .literal("rounded", "a boolean", Value::as_bool)?
                    .unwrap_or(false),
            },
            layout: parser.layout()?,
            padding: PaddingProps {
                sides: ShorthandGroup {
                    general: parser.spacing("padding")?,
                    x: parser.spacing("paddingX")?,
                    y: parser.spacing("paddingY")?,
                    top: parser.spacing("paddingTop")?,
                    right: parser.spacing("paddingRight")?,
                    bottom: parser.spacing("paddingBottom")?,
                    left: parser.spacing("paddingLeft")?,
                },
            },
            typography: TypographyProps {
                font_weight: parser.responsive("fontWeight", "a font weight key", as_string)?,
                font_family: parser.responsive("fontFamily", "a font key", as_string)?,
                font_size: parser.responsive("fontSize", "a font size key or rem number", as_font_size)?,
                line_height: parser
                    .literal("lineHeight", "a typography category", as_string)?
                    .unwrap_or_else(|| "default".to_string()),
            },
            focus: FocusProps {
                focus: parser
                    .literal("focus", "a boolean", Value::as_bool)?
                    .unwrap_or(false),
            },
        };

        Ok((props, rest))
    }
}

struct Parser<'a> {
    values: HashMap<&'a str, &'a Value>,
    breakpoints: &'a Breakpoints,
}

impl<'a> Parser<'a> {
    fn literal<T>(
        &self,
        property: &str,
        expected: &'static str,
        leaf: impl Fn(&Value) -> Option<T>,
    ) -> Result<Option<T>, StyleError> {
        match self.values.get(property) {
            None => Ok(None),
            Some(value) => leaf(value)
                .map(Some)
                .ok_or_else(|| StyleError::invalid(property, expected)),
        }
    }

    fn responsive<T>(
        &self,
        property: &str,
        expected: &'static str,
        leaf: impl Fn(&Value) -> Option<T>,
    ) -> Result<Option<ResponsiveValue<T>>, StyleError> {
        match self.values.get(property) {
            None => Ok(None),
            Some(value) => {
                parse_responsive(property, value, self.breakpoints, expected, leaf).map(Some)
            }
        }
    }

    fn spacing(&self, property: &str) -> Result<Option<ResponsiveValue<SpacingKey>>, StyleError> {
        self.responsive(property, "a spacing key", as_spacing_key)
    }

    fn layout(&self) -> Result<LayoutProps, StyleError> {
        let mut entries = Vec::new();
        for &(name, property, kind) in LAYOUT_PROPS {
            let value = match kind {
                LayoutKind::Keyword(set) => self.responsive(name, "a supported keyword", |v| {
                    v.as_str()
                        .filter(|s| set.contains(*s))
                        .map(|s| LayoutValue::Css(s.to_string()))
                })?,
                LayoutKind::Number => self.responsive(name, "a number", |v| {
                    finite_number(v).map(|n| LayoutValue::Css(format_number(n)))
                })?,
                LayoutKind::Spacing => self.responsive(name, "a spacing key", |v| {
                    as_spacing_key(v).map(LayoutValue::Spacing)
                })?,
                LayoutKind::Size => self.responsive(name, "a number or CSS length", as_size)?,
            };
            if let Some(value) = value {
                entries.push(LayoutEntry { property, value });
            }
        }
        Ok(LayoutProps { entries })
    }
}

/// 解析字面值或以断点为 key 的对象
///
/// 未知断点名在这里拒绝，解析器只会看到合法下标。
pub fn parse_responsive<T>(
    property: &str,
    value: &Value,
    breakpoints: &Breakpoints,
    expected: &'static str,
    leaf: impl Fn(&Value) -> Option<T>,
) -> Result<ResponsiveValue<T>, StyleError> {
    match value {
        Value::Object(map) => {
            let mut entries = BTreeMap::new();
            for (name, v) in map {
                let index =
                    breakpoints
                        .index_of(name)
                        .ok_or_else(|| StyleError::UnknownBreakpoint {
                            property: property.to_string(),
                            breakpoint: name.clone(),
                        })?;
                let leaf_value = leaf(v).ok_or_else(|| StyleError::invalid(property, expected))?;
                entries.insert(index, leaf_value);
            }
            Ok(ResponsiveValue::PerBreakpoint(entries))
        }
        other => leaf(other)
            .map(ResponsiveValue::Literal)
            .ok_or_else(|| StyleError::invalid(property, expected)),
    }
}

/// 最短十进制形式，如 `1`、`0.5`
pub fn format_number(n: f64) -> String {
    format!("{}", n)
}

fn finite_number(v: &Value) -> Option<f64> {
    v.as_f64().filter(|n| n.is_finite())
}

fn as_string(v: &Value) -> Option<String> {
    v.as_str().map(str::to_string)
}

fn as_spacing_key(v: &Value) -> Option<SpacingKey> {
    match v {
        Value::Number(_) => finite_number(v).map(|n| SpacingKey(format_number(n))),
        Value::String(s) => Some(SpacingKey::new(s.as_str())),
        _ => None,
    }
}

fn as_font_size(v: &Value) -> Option<FontSize> {
    match v {
        Value::Number(_) => finite_number(v).map(FontSize::Rem),
        Value::String(s) => Some(FontSize::Token(s.clone())),
        _ => None,
    }
}

fn as_size(v: &Value) -> Option<LayoutValue> {
    match v {
        Value::Number(_) => finite_number(v).map(|n| {
            if n == 0.0 {
                LayoutValue::Css("0".to_string())
            } else {
                LayoutValue::Css(format!("{}px", format_number(n)))
            }
        }),
        Value::String(s) => Some(LayoutValue::Css(s.clone())),
        _ => None,
    }
}
