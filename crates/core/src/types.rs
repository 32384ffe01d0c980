use serde::{Deserialize, Serialize};
use std::fmt;

/// 类名生成策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamingMode {
    /// 基于内容 hash（如 "c_1a2b3c4d5e6f"）
    #[default]
    Hash,
    /// 调试友好（如 "Button-1a2b3c"）
    Readable,
}

/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "padding"）
    pub property: String,
    /// CSS 属性值（如 "8px"）
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// 样式字面量：数字或字符串
///
/// 数字按 CSS 习惯输出，不带多余的 `.0`（`2` → `"2"`），
/// 因此 `2` 可以直接命中 theme 中名为 `"2"` 的 token。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => fmt_number(*n, f),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

/// 与 JS 数字转字符串一致：`-0` 输出 `0`，极大/极小值用指数形式（`1e+21`, `1e-7`）
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n == 0.0 {
        return f.write_str("0");
    }

    let abs = n.abs();
    if n.is_finite() && !(1e-6..1e21).contains(&abs) {
        let exp = format!("{:e}", n);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => f.write_str(&exp),
        };
    }

    write!(f, "{}", n)
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_display() {
        let decl = Declaration::new("padding", "8px");
        assert_eq!(decl.to_string(), "padding: 8px;");
    }

    #[test]
    fn test_number_display_without_fraction() {
        assert_eq!(StyleValue::from(2).to_string(), "2");
        assert_eq!(StyleValue::from(0.5).to_string(), "0.5");
        assert_eq!(StyleValue::from("inherit").to_string(), "inherit");
    }

    #[test]
    fn test_negative_zero_displays_as_zero() {
        assert_eq!(StyleValue::from(-0.0).to_string(), "0");
    }

    #[test]
    fn test_extreme_numbers_use_exponent() {
        assert_eq!(StyleValue::from(1e21).to_string(), "1e+21");
        assert_eq!(StyleValue::from(-2.5e22).to_string(), "-2.5e+22");
        assert_eq!(StyleValue::from(1e-7).to_string(), "1e-7");
        assert_eq!(StyleValue::from(123456.789).to_string(), "123456.789");
    }

    #[test]
    fn test_style_value_from_json() {
        let num: StyleValue = serde_json::from_str("2").unwrap();
        let text: StyleValue = serde_json::from_str("\"primary\"").unwrap();
        assert_eq!(num, StyleValue::Number(2.0));
        assert_eq!(text, StyleValue::Text("primary".to_string()));
    }
}
