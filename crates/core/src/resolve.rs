use crate::breakpoint::Breakpoint;
use crate::responsive::Responsive;
use crate::theme::{Theme, ThemeScale};
use crate::types::Declaration;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use tracing::trace;

/// 单条解析结果：基础声明，或被某个断点的媒体查询包裹的声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleRule {
    /// `None` 表示 base（无媒体查询）
    pub breakpoint: Option<Breakpoint>,
    pub declaration: Declaration,
}

impl StyleRule {
    pub fn base(declaration: Declaration) -> Self {
        Self {
            breakpoint: None,
            declaration,
        }
    }

    pub fn at(breakpoint: Breakpoint, declaration: Declaration) -> Self {
        Self {
            breakpoint: Some(breakpoint),
            declaration,
        }
    }
}

impl Display for StyleRule {
    /// - base: `padding: 8px;`
    /// - md: `@media screen and (min-width: 768px) {padding: 8px;}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.breakpoint {
            None => write!(f, "{}", self.declaration),
            Some(bp) => write!(f, "{} {{{}}}", bp.media_query(), self.declaration),
        }
    }
}

/// 将属性值解析为 CSS 文本
///
/// - `prop` 为 `None` 时返回 `None`（不输出任何声明）
/// - 字面量 → `"{prop_key}: {value};"`
/// - 响应式值 → 按 base, sm, md, lg, xl 顺序输出，断点值包裹在媒体查询中，用换行连接
///
/// 每个字面量都会经过 theme token 替换（见 [`to_theme_value_if_needed`]）。
///
/// ```
/// use kasikari_core::{to_prop_value, Responsive, ResponsiveProp, StyleValue, Breakpoint};
///
/// let prop: Responsive<StyleValue> = ResponsiveProp::new()
///     .with_base("14px")
///     .with(Breakpoint::Md, "18px")
///     .into();
///
/// assert_eq!(
///     to_prop_value("font-size", Some(&prop), None).as_deref(),
///     Some("font-size: 14px;\n@media screen and (min-width: 768px) {font-size: 18px;}")
/// );
/// ```
pub fn to_prop_value<T: Display>(
    prop_key: &str,
    prop: Option<&Responsive<T>>,
    theme: Option<&Theme>,
) -> Option<String> {
    let rules = resolve_rules(prop_key, prop, theme)?;
    let fragments: Vec<String> = rules.iter().map(ToString::to_string).collect();
    Some(fragments.join("\n"))
}

/// 与 [`to_prop_value`] 相同，但返回结构化的规则列表
///
/// 没有设置任何断点值的响应式值返回空列表。
pub fn resolve_rules<T: Display>(
    prop_key: &str,
    prop: Option<&Responsive<T>>,
    theme: Option<&Theme>,
) -> Option<Vec<StyleRule>> {
    let rules = match prop? {
        Responsive::Literal(value) => {
            let value = to_theme_value_if_needed(prop_key, value, theme);
            vec![StyleRule::base(Declaration::new(prop_key, value))]
        }
        Responsive::Breakpoints(responsive) => responsive
            .entries()
            .map(|(breakpoint, value)| StyleRule {
                breakpoint,
                declaration: Declaration::new(
                    prop_key,
                    to_theme_value_if_needed(prop_key, value, theme),
                ),
            })
            .collect(),
    };

    Some(rules)
}

/// 值与 theme token 完全一致时返回 theme 中的值，否则原样返回
///
/// 只有 space / colors / fontSizes / letterSpacings / lineHeights 对应的属性参与替换；
/// 未提供 theme 时不替换。
pub fn to_theme_value_if_needed<T: Display>(
    prop_key: &str,
    value: &T,
    theme: Option<&Theme>,
) -> String {
    let literal = value.to_string();

    let Some(theme) = theme else {
        return literal;
    };
    let Some(scale) = ThemeScale::for_property(prop_key) else {
        return literal;
    };

    match theme.lookup(scale, &literal) {
        Some(token) => {
            trace!(property = prop_key, token = %literal, value = %token, "theme token substituted");
            token.to_string()
        }
        None => literal,
    }
}
