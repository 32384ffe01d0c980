use crate::component::{prop, push_props, Component, Prop};
use kasikari_core::{Responsive, StyleValue, Theme};
use kasikari_css::StyleBlock;
use serde::Deserialize;

/// 文字的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextVariant {
    ExtraSmall,
    Small,
    Medium,
    MediumLarge,
    Large,
    ExtraLarge,
}

/// 文字种类对应的 theme token
struct TextVariantStyle {
    font_size: &'static str,
    letter_spacing: i32,
    line_height: i32,
}

impl TextVariant {
    fn style(self) -> TextVariantStyle {
        let (font_size, index) = match self {
            TextVariant::ExtraSmall => ("extraSmall", 0),
            TextVariant::Small => ("small", 1),
            TextVariant::Medium => ("medium", 2),
            TextVariant::MediumLarge => ("mediumLarge", 3),
            TextVariant::Large => ("large", 4),
            TextVariant::ExtraLarge => ("extraLarge", 5),
        };

        TextVariantStyle {
            font_size,
            letter_spacing: index,
            line_height: index,
        }
    }
}

/// Text：文字（默认 `<span>`）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextProps {
    /// 输出的 HTML 标签（如 "h1", "p", "a"）
    #[serde(rename = "as")]
    pub as_tag: String,
    /// 额外的 HTML 属性（如 href）
    pub attrs: Vec<(String, String)>,
    pub variant: Option<TextVariant>,

    pub font_size: Prop,
    pub font_weight: Prop,
    pub letter_spacing: Prop,
    pub line_height: Prop,
    pub text_align: Prop,
    pub color: Prop,
    pub background_color: Prop,
    pub width: Prop,
    pub height: Prop,
    pub min_width: Prop,
    pub min_height: Prop,
    pub display: Prop,
    pub border: Prop,
    pub overflow: Prop,
    pub margin: Prop,
    pub margin_top: Prop,
    pub margin_right: Prop,
    pub margin_bottom: Prop,
    pub margin_left: Prop,
    pub padding: Prop,
    pub padding_top: Prop,
    pub padding_right: Prop,
    pub padding_bottom: Prop,
    pub padding_left: Prop,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            as_tag: "span".to_string(),
            attrs: Vec::new(),
            variant: Some(TextVariant::Medium),
            font_size: None,
            font_weight: None,
            letter_spacing: None,
            line_height: None,
            text_align: None,
            color: prop("text"),
            background_color: None,
            width: None,
            height: None,
            min_width: None,
            min_height: None,
            display: None,
            border: None,
            overflow: None,
            margin: None,
            margin_top: None,
            margin_right: None,
            margin_bottom: None,
            margin_left: None,
            padding: None,
            padding_top: None,
            padding_right: None,
            padding_bottom: None,
            padding_left: None,
        }
    }
}

impl TextProps {
    pub fn new(as_tag: &str, variant: TextVariant) -> Self {
        Self {
            as_tag: as_tag.to_string(),
            variant: Some(variant),
            ..Default::default()
        }
    }

    /// 添加 HTML 属性（builder 模式）
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }
}

impl Component for TextProps {
    const NAME: &'static str = "Text";

    fn style(&self, theme: &Theme) -> StyleBlock {
        let mut block = StyleBlock::new();
        let theme = Some(theme);

        // 未显式指定时使用种类对应的 token
        if let Some(variant) = self.variant {
            let style = variant.style();
            if self.font_size.is_none() {
                let value = Responsive::literal(StyleValue::from(style.font_size));
                block.push_prop("font-size", Some(&value), theme);
            }
            if self.letter_spacing.is_none() {
                let value = Responsive::literal(StyleValue::from(style.letter_spacing));
                block.push_prop("letter-spacing", Some(&value), theme);
            }
            if self.line_height.is_none() {
                let value = Responsive::literal(StyleValue::from(style.line_height));
                block.push_prop("line-height", Some(&value), theme);
            }
        }

        push_props!(block, theme;
            "font-size" => self.font_size,
            "letter-spacing" => self.letter_spacing,
            "line-height" => self.line_height,
            "font-weight" => self.font_weight,
            "text-align" => self.text_align,
            "color" => self.color,
            "background-color" => self.background_color,
            "width" => self.width,
            "height" => self.height,
            "min-width" => self.min_width,
            "min-height" => self.min_height,
            "display" => self.display,
            "border" => self.border,
            "overflow" => self.overflow,
            "margin" => self.margin,
            "margin-top" => self.margin_top,
            "margin-left" => self.margin_left,
            "margin-bottom" => self.margin_bottom,
            "margin-right" => self.margin_right,
            "padding" => self.padding,
            "padding-top" => self.padding_top,
            "padding-left" => self.padding_left,
            "padding-bottom" => self.padding_bottom,
            "padding-right" => self.padding_right,
        );

        block
    }

    fn tag(&self) -> &str {
        &self.as_tag
    }

    fn attributes(&self) -> Vec<(String, String)> {
        self.attrs.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasikari_core::{default_theme, Declaration};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_text_style() {
        let block = TextProps::default().style(default_theme());

        assert_eq!(
            block.declarations(None),
            vec![
                Declaration::new("font-size", "16px"),
                Declaration::new("letter-spacing", "0.08px"),
                Declaration::new("line-height", "22px"),
                Declaration::new("color", "#000000"),
            ]
        );
    }

    #[test]
    fn test_variant_tokens() {
        let block = TextProps::new("h1", TextVariant::ExtraLarge).style(default_theme());
        let decls = block.declarations(None);

        assert!(decls.contains(&Declaration::new("font-size", "32px")));
        assert!(decls.contains(&Declaration::new("letter-spacing", "0.15px")));
        assert!(decls.contains(&Declaration::new("line-height", "37px")));
    }

    #[test]
    fn test_explicit_prop_replaces_variant() {
        let props = TextProps {
            font_size: Some("small".into()),
            ..TextProps::new("p", TextVariant::Large)
        };

        let block = props.style(default_theme());
        let decls = block.declarations(None);

        assert_eq!(decls[0], Declaration::new("letter-spacing", "0.1px"));
        assert!(decls.contains(&Declaration::new("font-size", "14px")));
        assert!(!decls.contains(&Declaration::new("font-size", "24px")));
    }

    #[test]
    fn test_unknown_color_passes_through() {
        let props = TextProps {
            color: Some("brack".into()),
            ..TextProps::default()
        };

        let decls = props.style(default_theme()).declarations(None);
        assert!(decls.contains(&Declaration::new("color", "brack")));
    }

    #[test]
    fn test_text_props_from_json() {
        let props: TextProps =
            serde_json::from_str(r#"{ "as": "h2", "variant": "mediumLarge", "marginTop": 0 }"#)
                .unwrap();

        assert_eq!(props.as_tag, "h2");
        assert_eq!(props.variant, Some(TextVariant::MediumLarge));
        assert_eq!(props.color, Some("text".into()));
        assert_eq!(props.margin_top, Some(0.into()));
    }

    #[test]
    fn test_attributes() {
        let props = TextProps::new("a", TextVariant::Small).with_attr("href", "/about");
        assert_eq!(props.tag(), "a");
        assert_eq!(
            props.attributes(),
            vec![("href".to_string(), "/about".to_string())]
        );
    }
}
