use crate::types::NamingMode;

/// 命名策略 trait
///
/// `css` 是规则体（不含类名），相同样式得到相同类名。
pub trait NamingStrategy {
    fn generate_name(&self, component: &str, css: &str) -> String;
}

/// Hash 命名策略：基于样式内容生成稳定 hash
pub struct HashNaming;

impl NamingStrategy for HashNaming {
    fn generate_name(&self, _component: &str, css: &str) -> String {
        let hex = content_hash(css);
        format!("c_{}", &hex[..12])
    }
}

/// Readable 命名策略：组件名 + 短 hash，便于在开发者工具中定位
pub struct ReadableNaming;

impl ReadableNaming {
    /// 只保留 ASCII 字母数字，其余替换为 "-"
    ///
    /// 例如：
    /// - "Button" → "Button"
    /// - "Text h1" → "Text-h1"
    fn sanitize(component: &str) -> String {
        let cleaned: String = component
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();

        let cleaned = cleaned.trim_matches('-');
        if cleaned.is_empty() {
            "sc".to_string()
        } else {
            cleaned.to_string()
        }
    }
}

impl NamingStrategy for ReadableNaming {
    fn generate_name(&self, component: &str, css: &str) -> String {
        let hex = content_hash(css);
        format!("{}-{}", Self::sanitize(component), &hex[..6])
    }
}

fn content_hash(input: &str) -> String {
    blake3::hash(input.as_bytes()).to_hex().to_string()
}

/// 根据 NamingMode 创建对应的策略
pub fn create_naming_strategy(mode: NamingMode) -> Box<dyn NamingStrategy> {
    match mode {
        NamingMode::Hash => Box::new(HashNaming),
        NamingMode::Readable => Box::new(ReadableNaming),
    }
}
