use crate::component::{prop, push_props, Component, Prop};
use kasikari_core::{Responsive, StyleValue, Theme};
use kasikari_css::StyleBlock;
use serde::Deserialize;

/// 按钮的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

/// 按钮种类对应的颜色 token
struct ButtonVariantStyle {
    color: &'static str,
    background_color: &'static str,
    hover_background_color: &'static str,
    disabled_background_color: &'static str,
}

impl ButtonVariant {
    fn style(self) -> ButtonVariantStyle {
        let (background, hover) = match self {
            ButtonVariant::Primary => ("primary", "primaryDark"),
            ButtonVariant::Secondary => ("secondary", "secondaryDark"),
            ButtonVariant::Danger => ("danger", "dangerDark"),
        };

        ButtonVariantStyle {
            color: "white",
            background_color: background,
            hover_background_color: hover,
            disabled_background_color: background,
        }
    }
}

/// 伪类中可覆盖的样式
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PseudoStyle {
    pub background_color: Prop,
}

/// 伪类样式
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PseudoClassProps {
    pub hover: Option<PseudoStyle>,
    pub disabled: Option<PseudoStyle>,
}

/// Button：按钮（`<button>`）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonProps {
    pub variant: Option<ButtonVariant>,
    pub disabled: bool,
    pub pseudo_class: Option<PseudoClassProps>,

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

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            variant: Some(ButtonVariant::Primary),
            disabled: false,
            pseudo_class: None,
            font_size: prop("inherit"),
            font_weight: None,
            letter_spacing: None,
            line_height: prop("inherit"),
            text_align: prop("center"),
            color: prop("white"),
            background_color: None,
            width: None,
            height: None,
            min_width: None,
            min_height: None,
            display: prop("inline-block"),
            border: None,
            overflow: None,
            margin: None,
            margin_top: None,
            margin_right: None,
            margin_bottom: None,
            margin_left: None,
            padding: None,
            padding_top: prop(1),
            padding_right: prop(2),
            padding_bottom: prop(1),
            padding_left: prop(2),
        }
    }
}

impl ButtonProps {
    pub fn new(variant: ButtonVariant) -> Self {
        Self {
            variant: Some(variant),
            ..Default::default()
        }
    }

    /// 种类给出的颜色，仅在对应属性未显式指定时生效
    fn push_variant_style(&self, block: &mut StyleBlock, theme: Option<&Theme>) {
        let Some(variant) = self.variant else {
            return;
        };
        let style = variant.style();
        let token = |name: &'static str| Responsive::literal(StyleValue::from(name));

        if self.color.is_none() {
            block.push_prop("color", Some(&token(style.color)), theme);
        }
        if self.background_color.is_none() {
            block.push_prop("background-color", Some(&token(style.background_color)), theme);
        }
        if self.pseudo_class.is_none() {
            block.pseudo("hover").push_prop(
                "background-color",
                Some(&token(style.hover_background_color)),
                theme,
            );
            block.pseudo("disabled").push_prop(
                "background-color",
                Some(&token(style.disabled_background_color)),
                theme,
            );
        }
    }

    /// 显式指定的伪类颜色不经过 theme 替换
    fn push_pseudo_class_style(&self, block: &mut StyleBlock) {
        let Some(pseudo_class) = &self.pseudo_class else {
            return;
        };

        if let Some(hover) = &pseudo_class.hover {
            block
                .pseudo("hover")
                .push_prop("background-color", hover.background_color.as_ref(), None);
        }
        if let Some(disabled) = &pseudo_class.disabled {
            block
                .pseudo("disabled")
                .push_prop("background-color", disabled.background_color.as_ref(), None);
        }
    }
}

impl Component for ButtonProps {
    const NAME: &'static str = "Button";

    fn style(&self, theme: &Theme) -> StyleBlock {
        let mut block = StyleBlock::new();
        let theme = Some(theme);

        self.push_variant_style(&mut block, theme);

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

        self.push_pseudo_class_style(&mut block);

        block
            .push_raw("cursor", "pointer")
            .push_raw("outline", "0")
            .push_raw("text-decoration", "none")
            .push_raw("opacity", if self.disabled { "0.5" } else { "1" })
            .push_raw("border-radius", "4px")
            .push_raw("border", "none");

        block
    }

    fn tag(&self) -> &str {
        "button"
    }

    fn attributes(&self) -> Vec<(String, String)> {
        let mut attrs = vec![("type".to_string(), "button".to_string())];
        if self.disabled {
            attrs.push(("disabled".to_string(), String::new()));
        }
        attrs
    }
}
