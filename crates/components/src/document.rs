use crate::html::{escape_attr, escape_text};
use kasikari_core::{NamingMode, Theme};
use kasikari_css::{ServerStyleSheet, SheetError};
use serde::Deserialize;
use tracing::debug;

/// 文档设置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    pub lang: String,
    pub naming_mode: NamingMode,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            title: "kasikari".to_string(),
            lang: "ja".to_string(),
            naming_mode: NamingMode::Hash,
        }
    }
}

impl Document {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// 设置类名生成策略（builder 模式）
    pub fn with_naming(mut self, mode: NamingMode) -> Self {
        self.naming_mode = mode;
        self
    }

    /// 服务端渲染整个文档
    ///
    /// `body` 渲染过程中收集到的样式会以 `<style>` 标签插入 `<head>`。
    /// 无论 `body` 是否成功，样式表最终都会被 seal。
    pub fn render<F>(&self, theme: &Theme, body: F) -> Result<String, SheetError>
    where
        F: FnOnce(&mut ServerStyleSheet, &Theme) -> Result<String, SheetError>,
    {
        let mut sheet = ServerStyleSheet::new().with_naming(self.naming_mode);

        let result = body(&mut sheet, theme).map(|content| {
            debug!(rules = sheet.len(), "rendered document body");
            format!(
                "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n{}\n</head>\n<body>\n<div id=\"root\">{}</div>\n</body>\n</html>\n",
                escape_attr(&self.lang),
                escape_text(&self.title),
                sheet.get_style_tags(),
                content
            )
        });

        sheet.seal();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::BoxProps;
    use crate::component::Component;
    use kasikari_core::default_theme;
    use kasikari_css::StyleBlock;

    #[test]
    fn test_render_injects_styles_into_head() {
        let doc = Document::new("Test");
        let html = doc
            .render(default_theme(), |sheet, theme| {
                let props = BoxProps {
                    padding: Some(1.into()),
                    ..Default::default()
                };
                props.render("hello", sheet, theme)
            })
            .unwrap();

        let head_end = html.find("</head>").unwrap();
        let style = html.find("padding: 8px;").unwrap();
        assert!(style < head_end);
        assert!(html.contains("<title>Test</title>"));
        assert!(html.contains(">hello</div>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_render_propagates_sheet_error() {
        let doc = Document::default();

        let result = doc.render(default_theme(), |sheet, _theme| {
            sheet.seal();
            sheet.collect("Box", &StyleBlock::new())
        });

        assert_eq!(
            result,
            Err(SheetError::Sealed {
                component: "Box".to_string()
            })
        );
    }

    #[test]
    fn test_render_with_readable_naming() {
        let doc = Document::default().with_naming(NamingMode::Readable);
        let html = doc
            .render(default_theme(), |sheet, theme| {
                BoxProps::default().render("", sheet, theme)
            })
            .unwrap();

        assert!(html.contains("class=\"Box-"));
    }

    #[test]
    fn test_title_is_escaped() {
        let doc = Document::new("<script>");
        let html = doc
            .render(default_theme(), |_, _| Ok(String::new()))
            .unwrap();
        assert!(html.contains("<title>&lt;script&gt;</title>"));
    }
}
