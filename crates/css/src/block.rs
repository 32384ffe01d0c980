use indexmap::IndexMap;
use kasikari_core::merge::merge_declarations;
use kasikari_core::{resolve_rules, Breakpoint, Declaration, Responsive, StyleRule, Theme};
use std::fmt::Display;

/// 单个元素的样式块，按断点和伪类分组
///
/// 声明按推入顺序保存；读取时同名属性后者覆盖前者。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleBlock {
    /// 基础声明（无媒体查询）
    base: Vec<Declaration>,
    /// 断点声明（如 md → min-width: 768px）
    responsive: IndexMap<Breakpoint, Vec<Declaration>>,
    /// 伪类块（如 hover, disabled），输出为 `&:name`
    pseudo_classes: IndexMap<String, StyleBlock>,
}

impl StyleBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析属性值并加入样式块；`prop` 为 `None` 时不做任何事
    pub fn push_prop<T: Display>(
        &mut self,
        prop_key: &str,
        prop: Option<&Responsive<T>>,
        theme: Option<&Theme>,
    ) -> &mut Self {
        if let Some(rules) = resolve_rules(prop_key, prop, theme) {
            for rule in rules {
                self.push_rule(rule);
            }
        }
        self
    }

    pub fn push_rule(&mut self, rule: StyleRule) -> &mut Self {
        match rule.breakpoint {
            None => self.base.push(rule.declaration),
            Some(bp) => self
                .responsive
                .entry(bp)
                .or_default()
                .push(rule.declaration),
        }
        self
    }

    /// 加入固定声明（不经过 theme 解析）
    pub fn push_raw(&mut self, property: &str, value: impl Into<String>) -> &mut Self {
        self.base.push(Declaration::new(property, value));
        self
    }

    /// 取得（必要时创建）伪类块
    pub fn pseudo(&mut self, name: &str) -> &mut StyleBlock {
        self.pseudo_classes.entry(name.to_string()).or_default()
    }

    /// 合并后的声明；`None` 表示 base
    pub fn declarations(&self, breakpoint: Option<Breakpoint>) -> Vec<Declaration> {
        match breakpoint {
            None => merge_declarations(self.base.iter().cloned()),
            Some(bp) => self
                .responsive
                .get(&bp)
                .map(|decls| merge_declarations(decls.iter().cloned()))
                .unwrap_or_default(),
        }
    }

    pub fn pseudo_classes(&self) -> impl Iterator<Item = (&str, &StyleBlock)> {
        self.pseudo_classes
            .iter()
            .map(|(name, block)| (name.as_str(), block))
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
            && self.responsive.values().all(Vec::is_empty)
            && self.pseudo_classes.values().all(StyleBlock::is_empty)
    }
}
