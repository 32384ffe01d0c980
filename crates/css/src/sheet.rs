use crate::block::StyleBlock;
use crate::emit::{emit_block, emit_rules};
use indexmap::IndexMap;
use kasikari_core::naming::create_naming_strategy;
use kasikari_core::NamingMode;
use std::collections::HashSet;
use tracing::{debug, warn};

/// 收集样式失败时返回的错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
    /// seal 之后仍在收集样式
    #[error("style sheet is sealed; cannot collect styles for '{component}'")]
    Sealed { component: String },
}

/// 服务端渲染时收集所有元素的样式
///
/// 每个样式块得到一个由内容决定的类名，相同样式只输出一次。
/// 渲染结束后通过 [`ServerStyleSheet::get_style_tags`] 取出 `<style>` 标签，
/// 再调用 [`ServerStyleSheet::seal`] 禁止继续收集。
#[derive(Debug, Default)]
pub struct ServerStyleSheet {
    naming_mode: NamingMode,
    /// 规则体 → 类名（去重以规则体为准）
    classes: IndexMap<String, String>,
    /// 已分配的类名（包括空样式块的类名）
    assigned: HashSet<String>,
    /// 类名 → CSS 文本（保持收集顺序）
    rules: IndexMap<String, String>,
    sealed: bool,
}

impl ServerStyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置类名生成策略（builder 模式）
    pub fn with_naming(mut self, mode: NamingMode) -> Self {
        self.naming_mode = mode;
        self
    }

    /// 收集样式块，返回应挂到元素上的类名
    pub fn collect(&mut self, component: &str, block: &StyleBlock) -> Result<String, SheetError> {
        if self.sealed {
            return Err(SheetError::Sealed {
                component: component.to_string(),
            });
        }

        // 类名只由规则体决定
        let body = emit_rules("&", block);
        if let Some(class_name) = self.classes.get(&body) {
            return Ok(class_name.clone());
        }

        let generated = create_naming_strategy(self.naming_mode).generate_name(component, &body);
        Ok(self.register(component, body, generated, block))
    }

    /// 登记新的规则体；生成的类名已被其他规则体占用时追加序号
    fn register(
        &mut self,
        component: &str,
        body: String,
        generated: String,
        block: &StyleBlock,
    ) -> String {
        let mut class_name = generated.clone();
        let mut suffix = 1;
        while self.assigned.contains(&class_name) {
            class_name = format!("{}-{}", generated, suffix);
            suffix += 1;
        }
        if class_name != generated {
            warn!(component, generated = %generated, class = %class_name, "class name collision");
        }

        if !body.is_empty() {
            debug!(component, class = %class_name, "collected styles");
            self.rules
                .insert(class_name.clone(), emit_block(&class_name, block));
        }
        self.assigned.insert(class_name.clone());
        self.classes.insert(body, class_name.clone());

        class_name
    }

    /// 所有已收集的 CSS
    pub fn css(&self) -> String {
        self.rules.values().map(String::as_str).collect()
    }

    /// `<style data-styled="active">...</style>`，用于插入文档 `<head>`
    pub fn get_style_tags(&self) -> String {
        format!(
            "<style data-styled=\"active\">\n{}</style>",
            escape_style_content(&self.css())
        )
    }

    /// 结束收集
    pub fn seal(&mut self) {
        if !self.sealed {
            debug!(rules = self.rules.len(), "style sheet sealed");
        }
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// 已收集的规则数（去重后）
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// 避免 CSS 值中的 `</style>` 提前结束标签
fn escape_style_content(css: &str) -> String {
    css.replace("</", "<\\/")
}
