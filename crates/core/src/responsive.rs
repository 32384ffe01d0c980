use crate::breakpoint::Breakpoint;
use crate::types::StyleValue;
use serde::{Deserialize, Serialize};

/// 响应式属性值
///
/// 要么是单一字面量，要么是按断点分别给出的值。
/// JSON 中标量解析为 `Literal`，对象解析为 `Breakpoints`；
/// 对象中 `base/sm/md/lg/xl` 以外的键被忽略。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Responsive<T> {
    Literal(T),
    Breakpoints(ResponsiveProp<T>),
}

impl<T> Responsive<T> {
    pub fn literal(value: T) -> Self {
        Responsive::Literal(value)
    }
}

impl<T> From<ResponsiveProp<T>> for Responsive<T> {
    fn from(prop: ResponsiveProp<T>) -> Self {
        Responsive::Breakpoints(prop)
    }
}

impl From<StyleValue> for Responsive<StyleValue> {
    fn from(value: StyleValue) -> Self {
        Responsive::Literal(value)
    }
}

impl From<&str> for Responsive<StyleValue> {
    fn from(value: &str) -> Self {
        Responsive::Literal(value.into())
    }
}

impl From<String> for Responsive<StyleValue> {
    fn from(value: String) -> Self {
        Responsive::Literal(value.into())
    }
}

impl From<i32> for Responsive<StyleValue> {
    fn from(value: i32) -> Self {
        Responsive::Literal(value.into())
    }
}

impl From<f64> for Responsive<StyleValue> {
    fn from(value: f64) -> Self {
        Responsive::Literal(value.into())
    }
}

/// 按断点给出的属性值
///
/// - base: 基础值（无媒体查询）
/// - sm / md / lg / xl: 640px / 768px / 1024px / 1280px 以上的值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveProp<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<T>,
}

impl<T> ResponsiveProp<T> {
    pub fn new() -> Self {
        Self {
            base: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
        }
    }

    /// 设置基础值（builder 模式）
    pub fn with_base(mut self, value: impl Into<T>) -> Self {
        self.base = Some(value.into());
        self
    }

    /// 设置某个断点的值（builder 模式）
    pub fn with(mut self, breakpoint: Breakpoint, value: impl Into<T>) -> Self {
        *self.slot_mut(breakpoint) = Some(value.into());
        self
    }

    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        match breakpoint {
            Breakpoint::Sm => self.sm.as_ref(),
            Breakpoint::Md => self.md.as_ref(),
            Breakpoint::Lg => self.lg.as_ref(),
            Breakpoint::Xl => self.xl.as_ref(),
        }
    }

    fn slot_mut(&mut self, breakpoint: Breakpoint) -> &mut Option<T> {
        match breakpoint {
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
        }
    }

    /// 按 base, sm, md, lg, xl 的固定顺序遍历已设置的值
    ///
    /// `None` 表示 base。
    pub fn entries(&self) -> impl Iterator<Item = (Option<Breakpoint>, &T)> + '_ {
        let base = self.base.as_ref().map(|v| (None, v));
        let breakpoints = Breakpoint::ALL
            .into_iter()
            .filter_map(move |bp| self.get(bp).map(|v| (Some(bp), v)));
        base.into_iter().chain(breakpoints)
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

impl<T> Default for ResponsiveProp<T> {
    fn default() -> Self {
        Self::new()
    }
}
