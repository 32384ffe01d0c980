use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use kasikari_components::{home_page, Document};
use kasikari_core::{default_theme as rs_default_theme, to_prop_value as rs_to_prop_value};
use kasikari_core::{NamingMode, Responsive, StyleValue, Theme};

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsRenderOptions {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    naming_mode: JsNamingMode,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
enum JsNamingMode {
    #[default]
    Hash,
    Readable,
}

impl From<JsNamingMode> for NamingMode {
    fn from(m: JsNamingMode) -> Self {
        match m {
            JsNamingMode::Hash => NamingMode::Hash,
            JsNamingMode::Readable => NamingMode::Readable,
        }
    }
}

fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

fn parse_prop(prop: JsValue) -> Result<Option<Responsive<StyleValue>>, JsError> {
    if is_absent(&prop) {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(prop)
        .map(Some)
        .map_err(|e| JsError::new(&format!("Invalid prop: {}", e)))
}

fn parse_theme(theme: JsValue) -> Result<Option<Theme>, JsError> {
    if is_absent(&theme) {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(theme)
        .map(Some)
        .map_err(|e| JsError::new(&format!("Invalid theme: {}", e)))
}

fn parse_options(options: JsValue) -> Result<JsRenderOptions, JsError> {
    if is_absent(&options) {
        return Ok(JsRenderOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 将属性值解析为 CSS 文本
///
/// @param propKey - CSS 属性名（kebab-case，如 "margin-top"）
/// @param prop    - 字面量或 `{ base, sm, md, lg, xl }`；undefined 时返回 undefined
/// @param theme   - 主题对象，可选；省略时不做 token 替换
/// @returns CSS 文本或 undefined
#[wasm_bindgen(js_name = "toPropValue")]
pub fn to_prop_value(prop_key: &str, prop: JsValue, theme: JsValue) -> Result<JsValue, JsError> {
    let prop = parse_prop(prop)?;
    let theme = parse_theme(theme)?;

    Ok(rs_to_prop_value(prop_key, prop.as_ref(), theme.as_ref())
        .map(JsValue::from)
        .unwrap_or(JsValue::UNDEFINED))
}

/// 应用默认主题
///
/// @returns `{ space, colors, fontSizes, letterSpacings, lineHeights }`
#[wasm_bindgen(js_name = "defaultTheme")]
pub fn default_theme() -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    rs_default_theme()
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// 服务端渲染首页
///
/// @param theme   - 主题对象，可选；省略时使用默认主题
/// @param options - `{ title?, namingMode? }`，可选
/// @returns 完整 HTML 文档
#[wasm_bindgen(js_name = "renderHomePage")]
pub fn render_home_page(theme: JsValue, options: JsValue) -> Result<String, JsError> {
    let theme = parse_theme(theme)?.unwrap_or_else(|| rs_default_theme().clone());
    let opts = parse_options(options)?;

    let mut document = Document::default().with_naming(opts.naming_mode.into());
    if let Some(title) = opts.title {
        document.title = title;
    }

    document
        .render(&theme, home_page)
        .map_err(|e| JsError::new(&e.to_string()))
}
