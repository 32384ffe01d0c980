use crate::component::{prop, push_props, Component, Prop};
use kasikari_core::Theme;
use kasikari_css::StyleBlock;
use serde::Deserialize;

/// Flex：flexbox 容器（`<div>`，默认 `display: flex`）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlexProps {
    pub align_items: Prop,
    pub align_content: Prop,
    pub justify_content: Prop,
    pub justify_items: Prop,
    pub flex_wrap: Prop,
    pub flex_basis: Prop,
    pub flex_direction: Prop,
    pub flex_grow: Prop,
    pub flex_shrink: Prop,
    pub justify_self: Prop,
    pub align_self: Prop,
    pub order: Prop,

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

impl Default for FlexProps {
    fn default() -> Self {
        Self {
            align_items: None,
            align_content: None,
            justify_content: None,
            justify_items: None,
            flex_wrap: None,
            flex_basis: None,
            flex_direction: None,
            flex_grow: None,
            flex_shrink: None,
            justify_self: None,
            align_self: None,
            order: None,
            color: None,
            background_color: None,
            width: None,
            height: None,
            min_width: None,
            min_height: None,
            display: prop("flex"),
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

impl Component for FlexProps {
    const NAME: &'static str = "Flex";

    fn style(&self, theme: &Theme) -> StyleBlock {
        let mut block = StyleBlock::new();
        let theme = Some(theme);

        push_props!(block, theme;
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
            "align-items" => self.align_items,
            "align-content" => self.align_content,
            "justify-content" => self.justify_content,
            "justify-items" => self.justify_items,
            "flex-wrap" => self.flex_wrap,
            "flex-basis" => self.flex_basis,
            "flex-direction" => self.flex_direction,
            "flex-grow" => self.flex_grow,
            "flex-shrink" => self.flex_shrink,
            "justify-self" => self.justify_self,
            "align-self" => self.align_self,
            "order" => self.order,
        );

        block
    }

    fn tag(&self) -> &str {
        "div"
    }
}
