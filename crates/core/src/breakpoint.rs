//! 有序断点集合
//!
//! 断点按其在 [`Breakpoints`] 中的下标寻址，下标 0 是最小的视口档位；
//! token 表加载后顺序即固定。

use crate::error::BreakpointError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 命名的视口宽度阈值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub name: String,
    /// 最小视口宽度（px）
    pub min_width: u32,
}

impl Breakpoint {
    pub fn new(name: impl Into<String>, min_width: u32) -> Self {
        Self {
            name: name.into(),
            min_width,
        }
    }

    /// 该档位的媒体查询前缀，无条件的基础档位返回 `None`
    pub fn media_query(&self) -> Option<String> {
        if self.min_width == 0 {
            None
        } else {
            Some(format!("@media (min-width: {}px)", self.min_width))
        }
    }
}

/// 已校验、严格递增的断点列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Breakpoints(Vec<Breakpoint>);

impl Breakpoints {
    /// 校验：非空、名称唯一、宽度严格递增
    pub fn new(list: Vec<Breakpoint>) -> Result<Self, BreakpointError> {
        if list.is_empty() {
            return Err(BreakpointError::Empty);
        }

        let mut seen = HashSet::new();
        for bp in &list {
            if !seen.insert(bp.name.as_str()) {
                return Err(BreakpointError::Duplicate(bp.name.clone()));
            }
        }

        for pair in list.windows(2) {
            if pair[1].min_width <= pair[0].min_width {
                return Err(BreakpointError::Unordered {
                    name: pair[1].name.clone(),
                    min_width: pair[1].min_width,
                    previous: pair[0].min_width,
                });
            }
        }

        Ok(Self(list))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Breakpoint> {
        self.0.get(index)
    }

    /// 按名称查找下标
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|bp| bp.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|bp| bp.name.as_str()).collect()
    }
}

impl<'de> Deserialize<'de> for Breakpoints {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let list = Vec::<Breakpoint>::deserialize(deserializer)?;
        Breakpoints::new(list).map_err(serde::de::Error::custom)
    }
}
