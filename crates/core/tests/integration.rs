use kasikari_core::{default_theme, to_prop_value, Responsive, StyleValue, Theme};
use pretty_assertions::assert_eq;

fn prop(json: &str) -> Responsive<StyleValue> {
    serde_json::from_str(json).expect("Failed to parse prop JSON")
}

#[test]
fn test_end_to_end_with_json_theme() {
    // 1. 从 JSON 加载主题
    let json = r##"{
        "space": ["0px", "8px", "16px", "32px", "64px"],
        "colors": { "primary": "#1a1a1a", "white": "#ffffff" },
        "fontSizes": { "small": "14px" },
        "letterSpacings": ["0.06px"],
        "lineHeights": ["17px"]
    }"##;
    let theme = Theme::from_json(json).expect("Failed to load theme");

    // 2. 解析各类属性值
    let cases = [
        ("padding", r#"{ "base": 2 }"#, "padding: 16px;"),
        ("color", r#""primary""#, "color: #1a1a1a;"),
        ("width", r#""primary""#, "width: primary;"),
        ("font-size", r#""small""#, "font-size: 14px;"),
        ("letter-spacing", "0", "letter-spacing: 0.06px;"),
        ("line-height", "0", "line-height: 17px;"),
        (
            "margin-top",
            r#"{ "base": 1, "lg": 3 }"#,
            "margin-top: 8px;\n@media screen and (min-width: 1024px) {margin-top: 32px;}",
        ),
    ];

    for (prop_key, value, expected) in cases {
        let value = prop(value);
        assert_eq!(
            to_prop_value(prop_key, Some(&value), Some(&theme)).as_deref(),
            Some(expected),
            "prop {prop_key}"
        );
    }
}

#[test]
fn test_responsive_from_json_without_theme() {
    let value = prop(r#"{ "md": "18px", "base": "14px" }"#);

    assert_eq!(
        to_prop_value("font-size", Some(&value), None).as_deref(),
        Some("font-size: 14px;\n@media screen and (min-width: 768px) {font-size: 18px;}")
    );
}

#[test]
fn test_default_theme_tokens() {
    let theme = default_theme();

    let value = prop(r#""primary""#);
    assert_eq!(
        to_prop_value("background-color", Some(&value), Some(theme)).as_deref(),
        Some("background-color: #3f51b5;")
    );

    let value = prop(r#"{ "base": 1, "md": 2 }"#);
    assert_eq!(
        to_prop_value("padding-left", Some(&value), Some(theme)).as_deref(),
        Some("padding-left: 8px;\n@media screen and (min-width: 768px) {padding-left: 16px;}")
    );
}

#[test]
fn test_responsive_with_extra_keys() {
    let value = prop(r#"{ "base": 1, "foo": 2 }"#);
    assert_eq!(
        to_prop_value("padding", Some(&value), Some(default_theme())).as_deref(),
        Some("padding: 8px;")
    );
}

#[test]
fn test_negative_zero_matches_zero_token() {
    let value = prop("-0.0");
    assert_eq!(
        to_prop_value("padding", Some(&value), Some(default_theme())).as_deref(),
        Some("padding: 0px;")
    );
}

#[test]
fn test_absent_prop_from_json_null() {
    let value: Option<Responsive<StyleValue>> = serde_json::from_str("null").unwrap();

    assert_eq!(to_prop_value("color", value.as_ref(), Some(default_theme())), None);
}

#[test]
fn test_resolution_is_thread_independent() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let value = prop(r#""danger""#);
                to_prop_value("color", Some(&value), Some(default_theme()))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("color: #ed1c24;"));
    }
}
