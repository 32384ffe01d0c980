use crate::component::{push_props, Component, Prop};
use kasikari_core::Theme;
use kasikari_css::StyleBlock;
use serde::Deserialize;

/// Box：通用容器（`<div>`）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxProps {
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

impl Component for BoxProps {
    const NAME: &'static str = "Box";

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
        );

        block
    }

    fn tag(&self) -> &str {
        "div"
    }
}
