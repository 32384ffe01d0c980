use crate::types::Declaration;
use indexmap::IndexMap;

/// 合并 CSS 声明
///
/// - 同名属性后者覆盖前者（与样式表中后出现的规则生效一致）
/// - 保持首次出现的顺序（使用 IndexMap）
pub fn merge_declarations<I>(decls: I) -> Vec<Declaration>
where
    I: IntoIterator<Item = Declaration>,
{
    let mut map: IndexMap<String, String> = IndexMap::new();

    for decl in decls {
        map.insert(decl.property, decl.value);
    }

    map.into_iter()
        .map(|(property, value)| Declaration { property, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_prop_overrides_default() {
        let decls = vec![
            Declaration::new("color", "#ffffff"),
            Declaration::new("color", "#3f51b5"),
        ];
        let result = merge_declarations(decls);
        assert_eq!(result, vec![Declaration::new("color", "#3f51b5")]);
    }

    #[test]
    fn test_first_insertion_order_kept() {
        let decls = vec![
            Declaration::new("padding-left", "16px"),
            Declaration::new("display", "inline-block"),
            Declaration::new("padding-left", "8px"),
        ];
        let result = merge_declarations(decls);
        assert_eq!(
            result,
            vec![
                Declaration::new("padding-left", "8px"),
                Declaration::new("display", "inline-block"),
            ]
        );
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge_declarations(Vec::new()).is_empty());
    }
}
