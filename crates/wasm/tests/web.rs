#![cfg(target_arch = "wasm32")]

use kasikari_wasm::{default_theme, render_home_page, to_prop_value};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_to_prop_value_with_default_theme() {
    let theme = default_theme().map_err(JsValue::from).unwrap();
    let css = to_prop_value("color", JsValue::from_str("primary"), theme).map_err(JsValue::from).unwrap();
    assert_eq!(css.as_string().as_deref(), Some("color: #3f51b5;"));
}

#[wasm_bindgen_test]
fn test_to_prop_value_without_theme() {
    let css = to_prop_value("color", JsValue::from_str("primary"), JsValue::UNDEFINED).map_err(JsValue::from).unwrap();
    assert_eq!(css.as_string().as_deref(), Some("color: primary;"));
}

#[wasm_bindgen_test]
fn test_undefined_prop() {
    let css = to_prop_value("color", JsValue::UNDEFINED, JsValue::UNDEFINED).map_err(JsValue::from).unwrap();
    assert!(css.is_undefined());
}

#[wasm_bindgen_test]
fn test_render_home_page() {
    let html = render_home_page(JsValue::UNDEFINED, JsValue::UNDEFINED).map_err(JsValue::from).unwrap();
    assert!(html.contains("<style data-styled=\"active\">"));
}
