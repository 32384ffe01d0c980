//! 应用主题（设计 token 字典）
//!
//! 主题包含五张子表：space、colors、fontSizes、letterSpacings、lineHeights。
//! 每张表把 token 名映射为 CSS 字面量。主题构造后只读。

use crate::error::ThemeError;
use crate::types::StyleValue;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use phf::phf_map;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// 单张 token 表：token 名 → CSS 字面量（保持定义顺序）
pub type Scale = IndexMap<String, StyleValue>;

/// 主题子表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeScale {
    Space,
    Colors,
    FontSizes,
    LetterSpacings,
    LineHeights,
}

/// 参与 token 替换的 CSS 属性 → 对应子表
///
/// 不在表中的属性一律原样输出。
static PROPERTY_SCALES: phf::Map<&'static str, ThemeScale> = phf_map! {
    "margin" => ThemeScale::Space,
    "margin-top" => ThemeScale::Space,
    "margin-left" => ThemeScale::Space,
    "margin-bottom" => ThemeScale::Space,
    "margin-right" => ThemeScale::Space,
    "padding" => ThemeScale::Space,
    "padding-top" => ThemeScale::Space,
    "padding-left" => ThemeScale::Space,
    "padding-bottom" => ThemeScale::Space,
    "padding-right" => ThemeScale::Space,
    "color" => ThemeScale::Colors,
    "background-color" => ThemeScale::Colors,
    "font-size" => ThemeScale::FontSizes,
    "letter-spacing" => ThemeScale::LetterSpacings,
    "line-height" => ThemeScale::LineHeights,
};

impl ThemeScale {
    /// 根据 CSS 属性名（kebab-case）确定子表
    pub fn for_property(prop_key: &str) -> Option<Self> {
        PROPERTY_SCALES.get(prop_key).copied()
    }
}

/// 主题
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default, deserialize_with = "deserialize_scale")]
    pub space: Scale,
    #[serde(default, deserialize_with = "deserialize_scale")]
    pub colors: Scale,
    #[serde(default, deserialize_with = "deserialize_scale")]
    pub font_sizes: Scale,
    #[serde(default, deserialize_with = "deserialize_scale")]
    pub letter_spacings: Scale,
    #[serde(default, deserialize_with = "deserialize_scale")]
    pub line_heights: Scale,
}

impl Theme {
    /// 创建空主题
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加 token（builder 模式）
    pub fn with_token(
        mut self,
        scale: ThemeScale,
        name: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Self {
        self.scale_mut(scale).insert(name.into(), value.into());
        self
    }

    pub fn scale(&self, scale: ThemeScale) -> &Scale {
        match scale {
            ThemeScale::Space => &self.space,
            ThemeScale::Colors => &self.colors,
            ThemeScale::FontSizes => &self.font_sizes,
            ThemeScale::LetterSpacings => &self.letter_spacings,
            ThemeScale::LineHeights => &self.line_heights,
        }
    }

    fn scale_mut(&mut self, scale: ThemeScale) -> &mut Scale {
        match scale {
            ThemeScale::Space => &mut self.space,
            ThemeScale::Colors => &mut self.colors,
            ThemeScale::FontSizes => &mut self.font_sizes,
            ThemeScale::LetterSpacings => &mut self.letter_spacings,
            ThemeScale::LineHeights => &mut self.line_heights,
        }
    }

    /// 精确匹配 token 名（区分大小写）
    pub fn lookup(&self, scale: ThemeScale, token: &str) -> Option<&StyleValue> {
        self.scale(scale).get(token)
    }

    /// 从 JSON 字符串加载主题
    ///
    /// 子表可以是对象，也可以是数组（下标即 token 名）：
    /// ```json
    /// {
    ///   "space": ["0px", "8px", "16px"],
    ///   "colors": { "primary": "#3f51b5" }
    /// }
    /// ```
    pub fn from_json(json_str: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// 从 JSON 文件加载主题
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// 子表既接受对象也接受数组
fn deserialize_scale<'de, D>(deserializer: D) -> Result<Scale, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScaleRepr {
        List(Vec<StyleValue>),
        Map(IndexMap<String, StyleValue>),
    }

    Ok(match ScaleRepr::deserialize(deserializer)? {
        ScaleRepr::List(values) => values
            .into_iter()
            .enumerate()
            .map(|(i, value)| (i.to_string(), value))
            .collect(),
        ScaleRepr::Map(map) => map,
    })
}

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(app_theme);

/// 应用默认主题（进程内只构造一次）
pub fn default_theme() -> &'static Theme {
    &DEFAULT_THEME
}

fn app_theme() -> Theme {
    let space = ["0px", "8px", "16px", "32px", "64px"];
    let colors = [
        ("primary", "#3f51b5"),
        ("primaryDark", "#2c387e"),
        ("secondary", "#f50057"),
        ("secondaryDark", "#ab003c"),
        ("danger", "#ed1c24"),
        ("dangerDark", "#a50d12"),
        ("border", "#cdced2"),
        ("text", "#000000"),
        ("subText", "#6b6b6b"),
        ("black", "#000000"),
        ("white", "#ffffff"),
        ("gray", "#f5f5f5"),
    ];
    let font_sizes = [
        ("extraSmall", "12px"),
        ("small", "14px"),
        ("medium", "16px"),
        ("mediumLarge", "20px"),
        ("large", "24px"),
        ("extraLarge", "32px"),
        ("extraExtraLarge", "48px"),
        ("extraExtraExtraLarge", "64px"),
    ];
    let letter_spacings = ["0.06px", "0.07px", "0.08px", "0.09px", "0.1px", "0.15px"];
    let line_heights = ["17px", "19px", "22px", "26px", "28px", "37px", "43px"];

    let mut theme = Theme::new();
    for (i, value) in space.iter().enumerate() {
        theme = theme.with_token(ThemeScale::Space, i.to_string(), *value);
    }
    for (name, value) in colors {
        theme = theme.with_token(ThemeScale::Colors, name, value);
    }
    for (name, value) in font_sizes {
        theme = theme.with_token(ThemeScale::FontSizes, name, value);
    }
    for (i, value) in letter_spacings.iter().enumerate() {
        theme = theme.with_token(ThemeScale::LetterSpacings, i.to_string(), *value);
    }
    for (i, value) in line_heights.iter().enumerate() {
        theme = theme.with_token(ThemeScale::LineHeights, i.to_string(), *value);
    }
    theme
}
