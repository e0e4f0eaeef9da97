//! 断点解析器
//!
//! 将字面值或按断点映射的值展开为每个断点一个槽位，采用移动优先的向前填充级联。

use crate::breakpoint::Breakpoints;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::BTreeMap;

/// 解析后的槽位：值或显式重置
///
/// `Unset` 不等于“调用方未传该属性”；未传的属性根本不会进入解析器。
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Set(T),
    Unset,
}

impl<T> Slot<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Slot::Set(_))
    }

    pub fn as_ref(&self) -> Slot<&T> {
        match self {
            Slot::Set(v) => Slot::Set(v),
            Slot::Unset => Slot::Unset,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Slot::Set(v) => Some(v),
            Slot::Unset => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Slot<U> {
        match self {
            Slot::Set(v) => Slot::Set(f(v)),
            Slot::Unset => Slot::Unset,
        }
    }
}

impl<T: Serialize> Serialize for Slot<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Slot::Set(v) => v.serialize(serializer),
            Slot::Unset => serializer.serialize_none(),
        }
    }
}

/// 调用方写下的属性值
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsiveValue<T> {
    /// 所有断点同一个值
    Literal(T),
    /// 部分断点的值，以断点下标为 key
    PerBreakpoint(BTreeMap<usize, T>),
}

impl<T> ResponsiveValue<T> {
    /// 由 `(下标, 值)` 对构造按断点映射的值
    pub fn per_breakpoint(entries: impl IntoIterator<Item = (usize, T)>) -> Self {
        ResponsiveValue::PerBreakpoint(entries.into_iter().collect())
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, ResponsiveValue::Literal(_))
    }

    /// 任一断点上的值满足 `pred` 时为真
    pub fn any(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        match self {
            ResponsiveValue::Literal(v) => pred(v),
            ResponsiveValue::PerBreakpoint(map) => map.values().any(pred),
        }
    }
}

/// 每个断点一个槽位，按断点升序
///
/// 只能由本模块的解析函数构造。
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSequence<T> {
    slots: Vec<Slot<T>>,
    uniform: bool,
}

impl<T> ResolvedSequence<T> {
    pub fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&Slot<T>> {
        self.slots.get(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 是否来自字面值（所有槽位相同）
    pub fn is_uniform(&self) -> bool {
        self.uniform
    }

    /// 对每个已设置的槽位应用 `f`；`f` 可以把槽位变为显式重置
    pub fn map_slots<U>(&self, mut f: impl FnMut(&T) -> Slot<U>) -> ResolvedSequence<U> {
        ResolvedSequence {
            slots: self
                .slots
                .iter()
                .map(|slot| match slot {
                    Slot::Set(v) => f(v),
                    Slot::Unset => Slot::Unset,
                })
                .collect(),
            uniform: self.uniform,
        }
    }

    pub fn into_slots(self) -> Vec<Slot<T>> {
        self.slots
    }
}

impl<T: Serialize> Serialize for ResolvedSequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.slots.len()))?;
        for slot in &self.slots {
            seq.serialize_element(slot)?;
        }
        seq.end()
    }
}

/// 不做转换的解析
pub fn resolve<T: Clone>(value: &ResponsiveValue<T>, breakpoints: &Breakpoints) -> ResolvedSequence<T> {
    resolve_with(value, breakpoints, |v| Slot::Set(v.clone()))
}

/// 解析并对每个级联后的槽位值应用 `transform`
pub fn resolve_with<T, U>(
    value: &ResponsiveValue<T>,
    breakpoints: &Breakpoints,
    mut transform: impl FnMut(&T) -> Slot<U>,
) -> ResolvedSequence<U> {
    let result: Result<_, std::convert::Infallible> =
        try_resolve_with(value, breakpoints, |v| Ok(transform(v)));
    match result {
        Ok(seq) => seq,
        Err(never) => match never {},
    }
}

/// [`resolve_with`] 的可失败版本，遇到第一个转换错误即停止
///
/// 先级联：未指定的断点继承最近的较小断点的值，第一个指定断点之下的槽位保持 `Unset`。
/// 转换函数只会看到级联后的值。
pub fn try_resolve_with<T, U, E>(
    value: &ResponsiveValue<T>,
    breakpoints: &Breakpoints,
    mut transform: impl FnMut(&T) -> Result<Slot<U>, E>,
) -> Result<ResolvedSequence<U>, E> {
    let n = breakpoints.len();
    let mut slots = Vec::with_capacity(n);

    match value {
        ResponsiveValue::Literal(v) => {
            for _ in 0..n {
                slots.push(transform(v)?);
            }
            Ok(ResolvedSequence {
                slots,
                uniform: true,
            })
        }
        ResponsiveValue::PerBreakpoint(map) => {
            let mut current: Option<&T> = None;
            for index in 0..n {
                if let Some(v) = map.get(&index) {
                    current = Some(v);
                }
                let slot = match current {
                    Some(v) => transform(v)?,
                    None => Slot::Unset,
                };
                slots.push(slot);
            }
            Ok(ResolvedSequence {
                slots,
                uniform: false,
            })
        }
    }
}
