use crate::html;
use kasikari_core::{Responsive, StyleValue, Theme};
use kasikari_css::{ServerStyleSheet, SheetError, StyleBlock};

/// 可选的响应式样式属性
pub type Prop = Option<Responsive<StyleValue>>;

/// 组件默认属性中常用的字面量
pub(crate) fn prop(value: impl Into<Responsive<StyleValue>>) -> Prop {
    Some(value.into())
}

/// 按给定顺序把属性推入样式块
///
/// ```ignore
/// push_props!(block, Some(theme);
///     "color" => self.color,
///     "margin-top" => self.margin_top,
/// );
/// ```
macro_rules! push_props {
    ($block:expr, $theme:expr; $($key:literal => $value:expr),* $(,)?) => {
        $( $block.push_prop($key, $value.as_ref(), $theme); )*
    };
}
pub(crate) use push_props;

/// 展示型组件
///
/// 组件只描述样式和标签；类名由 [`ServerStyleSheet`] 生成。
pub trait Component {
    /// 组件名，用于 Readable 命名
    const NAME: &'static str;

    fn style(&self, theme: &Theme) -> StyleBlock;

    fn tag(&self) -> &str;

    fn attributes(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// 收集样式并输出 HTML；`children` 为已渲染的 HTML
    fn render(
        &self,
        children: &str,
        sheet: &mut ServerStyleSheet,
        theme: &Theme,
    ) -> Result<String, SheetError> {
        let class_name = sheet.collect(Self::NAME, &self.style(theme))?;
        Ok(html::element(
            self.tag(),
            &class_name,
            &self.attributes(),
            children,
        ))
    }
}
