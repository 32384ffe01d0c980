//! HTML 输出工具

use tracing::warn;

/// 标签名无效时使用的标签
const FALLBACK_TAG: &str = "div";

/// 转义文本内容（`&`, `<`, `>`）
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// 转义属性值（包括引号）
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 标签名、属性名只允许 ASCII 字母数字和 `-`
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// 输出 `<tag class="..." attr="...">children</tag>`
///
/// `children` 是已渲染的 HTML，原样插入。
/// 无效的标签名替换为 `div`，无效的属性名直接丢弃。
pub fn element(tag: &str, class_name: &str, attrs: &[(String, String)], children: &str) -> String {
    let tag = if is_valid_name(tag) {
        tag
    } else {
        warn!(tag, "invalid tag name, falling back to {}", FALLBACK_TAG);
        FALLBACK_TAG
    };

    let mut html = format!("<{} class=\"{}\"", tag, escape_attr(class_name));
    for (name, value) in attrs {
        if !is_valid_name(name) {
            warn!(attribute = %name, "invalid attribute name skipped");
            continue;
        }
        html.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
    }
    html.push('>');
    html.push_str(children);
    html.push_str(&format!("</{}>", tag));
    html
}
