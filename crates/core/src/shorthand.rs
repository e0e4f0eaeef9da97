//! 简写属性的双向处理
//!
//! - [`ShorthandGroup::compose`]：断点解析之前，把 通用/轴向/单边 属性族拆成四个边的值
//! - [`optimize_shorthands`]：在同一规则块内把四个子属性折叠回一个简写声明

use crate::types::Declaration;
use phf::{phf_set, Set};
use std::collections::{HashMap, HashSet};

/// 盒模型的四条边之一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// TRBL 顺序
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

/// 合成后的各边值
#[derive(Debug, Clone, PartialEq)]
pub struct Sides<T> {
    pub top: Option<T>,
    pub right: Option<T>,
    pub bottom: Option<T>,
    pub left: Option<T>,
}

impl<T> Sides<T> {
    pub fn get(&self, side: Side) -> Option<&T> {
        match side {
            Side::Top => self.top.as_ref(),
            Side::Right => self.right.as_ref(),
            Side::Bottom => self.bottom.as_ref(),
            Side::Left => self.left.as_ref(),
        }
    }

    /// 按 TRBL 顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (Side, Option<&T>)> {
        Side::ALL.into_iter().map(move |side| (side, self.get(side)))
    }
}

/// 属性族：通用值、X/Y 轴向值与四个单边值
#[derive(Debug, Clone, PartialEq)]
pub struct ShorthandGroup<T> {
    pub general: Option<T>,
    /// 左 + 右
    pub x: Option<T>,
    /// 上 + 下
    pub y: Option<T>,
    pub top: Option<T>,
    pub right: Option<T>,
    pub bottom: Option<T>,
    pub left: Option<T>,
}

impl<T> Default for ShorthandGroup<T> {
    fn default() -> Self {
        Self {
            general: None,
            x: None,
            y: None,
            top: None,
            right: None,
            bottom: None,
            left: None,
        }
    }
}

impl<T: Clone> ShorthandGroup<T> {
    /// 每条边：单边值优先，其次轴向值，最后通用值
    ///
    /// 优先级按整个值判定，响应式的单边值整体替换响应式的轴向值，而不是逐槽位合并。
    pub fn compose(&self) -> Sides<T> {
        let pick = |side: &Option<T>, axis: &Option<T>| {
            side.as_ref()
                .or(axis.as_ref())
                .or(self.general.as_ref())
                .cloned()
        };

        Sides {
            top: pick(&self.top, &self.y),
            right: pick(&self.right, &self.x),
            bottom: pick(&self.bottom, &self.y),
            left: pick(&self.left, &self.x),
        }
    }

    /// 所有已给出的成员，通用值在前
    pub fn members(&self) -> impl Iterator<Item = &T> {
        [
            &self.general,
            &self.x,
            &self.y,
            &self.top,
            &self.right,
            &self.bottom,
            &self.left,
        ]
        .into_iter()
        .filter_map(|v| v.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.members().next().is_none()
    }
}

impl ShorthandGroup<bool> {
    /// “是否有任一边框”：对属性族所有成员取 OR
    pub fn any(&self) -> bool {
        self.members().any(|v| *v)
    }
}

/// 可折叠的子属性组（TRBL 顺序）
struct LonghandGroup {
    shorthand: &'static str,
    longhands: [&'static str; 4],
}

static LONGHAND_GROUPS: &[LonghandGroup] = &[
    LonghandGroup {
        shorthand: "padding",
        longhands: [
            "padding-top",
            "padding-right",
            "padding-bottom",
            "padding-left",
        ],
    },
    LonghandGroup {
        shorthand: "margin",
        longhands: ["margin-top", "margin-right", "margin-bottom", "margin-left"],
    },
    LonghandGroup {
        shorthand: "border-width",
        longhands: [
            "border-top-width",
            "border-right-width",
            "border-bottom-width",
            "border-left-width",
        ],
    },
];

/// CSS 全局关键字：与其他边的值拼成简写后不再是合法的值
static CSS_WIDE_KEYWORDS: Set<&'static str> = phf_set! {
    "unset", "initial", "inherit", "revert", "revert-layer",
};

/// 将同一规则块内的四个子属性合并为简写属性
///
/// 仅当某组的四个子属性都出现且都不是 CSS 全局关键字时才合并；
/// 简写声明放在第一个子属性的位置，其余声明保持原始顺序。
///
/// ```
/// use boxstyle_core::types::Declaration;
/// use boxstyle_core::shorthand::optimize_shorthands;
///
/// let decls = vec![
///     Declaration::new("padding-top", "8px"),
///     Declaration::new("padding-right", "8px"),
///     Declaration::new("padding-bottom", "8px"),
///     Declaration::new("padding-left", "16px"),
/// ];
/// let result = optimize_shorthands(decls);
/// assert_eq!(result, vec![Declaration::new("padding", "8px 8px 8px 16px")]);
/// ```
pub fn optimize_shorthands(decls: Vec<Declaration>) -> Vec<Declaration> {
    let values: HashMap<&str, &str> = decls
        .iter()
        .map(|d| (d.property.as_str(), d.value.as_str()))
        .collect();

    // 1. 找出子属性齐全的组，并计算简写值
    let mut collapsed: HashMap<&str, (&'static str, String)> = HashMap::new();
    for group in LONGHAND_GROUPS {
        let sides: Option<Vec<&str>> = group
            .longhands
            .iter()
            .map(|lh| values.get(lh).copied())
            .collect();
        if let Some(sides) = sides {
            if sides.iter().any(|v| CSS_WIDE_KEYWORDS.contains(v.trim())) {
                continue;
            }
            let value = compress_trbl(&sides);
            for lh in group.longhands {
                collapsed.insert(lh, (group.shorthand, value.clone()));
            }
        }
    }

    if collapsed.is_empty() {
        return decls;
    }

    // 2. 重建声明列表
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut result = Vec::with_capacity(decls.len());
    for decl in &decls {
        match collapsed.get(decl.property.as_str()) {
            Some((shorthand, value)) => {
                if emitted.insert(*shorthand) {
                    result.push(Declaration::new(*shorthand, value.clone()));
                }
            }
            None => result.push(decl.clone()),
        }
    }
    result
}

/// TRBL 值压缩：`V` / `V1 V2` / `V1 V2 V3` / `V1 V2 V3 V4`
fn compress_trbl(values: &[&str]) -> String {
    let (top, right, bottom, left) = (values[0], values[1], values[2], values[3]);

    if top == right && right == bottom && bottom == left {
        top.to_string()
    } else if top == bottom && left == right {
        format!("{} {}", top, right)
    } else if left == right {
        format!("{} {} {}", top, right, bottom)
    } else {
        format!("{} {} {} {}", top, right, bottom, left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn group(general: Option<&'static str>, y: Option<&'static str>, top: Option<&'static str>)
        -> ShorthandGroup<&'static str>
    {
        ShorthandGroup {
            general,
            y,
            top,
            ..Default::default()
        }
    }

    // ========== compose ==========

    #[test]
    fn test_specific_side_wins() {
        let sides = group(Some("A"), Some("B"), Some("C")).compose();
        assert_eq!(sides.top, Some("C"));
        assert_eq!(sides.bottom, Some("B"));
        assert_eq!(sides.left, Some("A"));
        assert_eq!(sides.right, Some("A"));
    }

    #[test]
    fn test_axis_over_general() {
        let sides = group(Some("A"), Some("B"), None).compose();
        assert_eq!(sides.top, Some("B"));
        assert_eq!(sides.bottom, Some("B"));
    }

    #[test]
    fn test_general_only() {
        let sides = group(Some("A"), None, None).compose();
        assert_eq!(sides.top, Some("A"));
        assert_eq!(sides.right, Some("A"));
        assert_eq!(sides.bottom, Some("A"));
        assert_eq!(sides.left, Some("A"));
    }

    #[test]
    fn test_x_axis_covers_left_right() {
        let g = ShorthandGroup {
            x: Some(1),
            left: Some(2),
            ..Default::default()
        };
        let sides = g.compose();
        assert_eq!(sides.left, Some(2));
        assert_eq!(sides.right, Some(1));
        assert_eq!(sides.top, None);
        assert_eq!(sides.bottom, None);
    }

    #[test]
    fn test_sides_iter_order() {
        let sides = group(Some("A"), None, Some("C")).compose();
        let order: Vec<Side> = sides.iter().map(|(side, _)| side).collect();
        assert_eq!(order, Side::ALL.to_vec());
    }

    #[test]
    fn test_any_border() {
        let none: ShorthandGroup<bool> = ShorthandGroup::default();
        assert!(!none.any());
        assert!(none.is_empty());

        let top_only = ShorthandGroup {
            top: Some(true),
            ..Default::default()
        };
        assert!(top_only.any());

        let all_false = ShorthandGroup {
            general: Some(false),
            x: Some(false),
            ..Default::default()
        };
        assert!(!all_false.any());
        assert!(!all_false.is_empty());
    }

    // ========== optimize_shorthands ==========

    #[test]
    fn test_collapse_padding_all_same() {
        let decls = vec![
            Declaration::new("padding-top", "8px"),
            Declaration::new("padding-right", "8px"),
            Declaration::new("padding-bottom", "8px"),
            Declaration::new("padding-left", "8px"),
        ];
        assert_eq!(
            optimize_shorthands(decls),
            vec![Declaration::new("padding", "8px")]
        );
    }

    #[test]
    fn test_collapse_two_and_three_values() {
        let decls = vec![
            Declaration::new("margin-top", "0"),
            Declaration::new("margin-right", "auto"),
            Declaration::new("margin-bottom", "0"),
            Declaration::new("margin-left", "auto"),
        ];
        assert_eq!(
            optimize_shorthands(decls),
            vec![Declaration::new("margin", "0 auto")]
        );

        let decls = vec![
            Declaration::new("padding-top", "1px"),
            Declaration::new("padding-right", "2px"),
            Declaration::new("padding-bottom", "3px"),
            Declaration::new("padding-left", "2px"),
        ];
        assert_eq!(
            optimize_shorthands(decls),
            vec![Declaration::new("padding", "1px 2px 3px")]
        );
    }

    #[test]
    fn test_partial_group_untouched() {
        let decls = vec![
            Declaration::new("border-top-width", "1px"),
            Declaration::new("border-left-width", "1px"),
        ];
        assert_eq!(optimize_shorthands(decls.clone()), decls);
    }

    #[test]
    fn test_collapse_keeps_interleaved_order() {
        let decls = vec![
            Declaration::new("display", "flex"),
            Declaration::new("border-top-width", "1px"),
            Declaration::new("color", "red"),
            Declaration::new("border-right-width", "1px"),
            Declaration::new("border-bottom-width", "1px"),
            Declaration::new("border-left-width", "1px"),
        ];
        assert_eq!(
            optimize_shorthands(decls),
            vec![
                Declaration::new("display", "flex"),
                Declaration::new("border-width", "1px"),
                Declaration::new("color", "red"),
            ]
        );
    }

    #[test]
    fn test_css_wide_keyword_blocks_collapse() {
        let decls = vec![
            Declaration::new("padding-top", "8px"),
            Declaration::new("padding-right", "8px"),
            Declaration::new("padding-bottom", "8px"),
            Declaration::new("padding-left", "unset"),
            Declaration::new("margin-top", "0"),
            Declaration::new("margin-right", "inherit"),
            Declaration::new("margin-bottom", "0"),
            Declaration::new("margin-left", "0"),
        ];
        assert_eq!(optimize_shorthands(decls.clone()), decls);
    }

    #[test]
    fn test_keyword_in_one_group_leaves_other_collapsible() {
        let decls = vec![
            Declaration::new("padding-top", "initial"),
            Declaration::new("padding-right", "8px"),
            Declaration::new("padding-bottom", "8px"),
            Declaration::new("padding-left", "8px"),
            Declaration::new("margin-top", "0"),
            Declaration::new("margin-right", "0"),
            Declaration::new("margin-bottom", "0"),
            Declaration::new("margin-left", "0"),
        ];
        let mut expected = decls[..4].to_vec();
        expected.push(Declaration::new("margin", "0"));
        assert_eq!(optimize_shorthands(decls), expected);
    }

    #[test]
    fn test_empty_input() {
        assert!(optimize_shorthands(vec![]).is_empty());
    }
}
