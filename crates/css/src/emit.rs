use crate::block::StyleBlock;
use kasikari_core::{Breakpoint, Declaration};

const INDENT: &str = "  ";

/// 将样式块输出为类选择器下的 CSS 文本
///
/// 输出顺序固定：
/// 1. `.cls { ... }`
/// 2. `.cls:hover { ... }` 等伪类规则
/// 3. 每个断点一个 `@media screen and (min-width: ...) { ... }`，按 sm, md, lg, xl 顺序
///
/// 空规则不输出。
pub fn emit_block(class_name: &str, block: &StyleBlock) -> String {
    emit_rules(&format!(".{}", class_name), block)
}

/// 与 [`emit_block`] 相同，但使用任意选择器
pub fn emit_rules(selector: &str, block: &StyleBlock) -> String {
    let mut css = String::new();

    write_rules(&mut css, selector, block, None, "");

    for bp in Breakpoint::ALL {
        let mut inner = String::new();
        write_rules(&mut inner, selector, block, Some(bp), INDENT);

        if !inner.is_empty() {
            css.push_str(&format!("{} {{\n", bp.media_query()));
            css.push_str(&inner);
            css.push_str("}\n");
        }
    }

    css
}

fn write_rules(
    css: &mut String,
    selector: &str,
    block: &StyleBlock,
    breakpoint: Option<Breakpoint>,
    indent: &str,
) {
    write_rule(css, selector, &block.declarations(breakpoint), indent);

    for (name, nested) in block.pseudo_classes() {
        let pseudo_selector = format!("{}:{}", selector, name);
        write_rules(css, &pseudo_selector, nested, breakpoint, indent);
    }
}

fn write_rule(css: &mut String, selector: &str, decls: &[Declaration], indent: &str) {
    if decls.is_empty() {
        return;
    }

    css.push_str(&format!("{}{} {{\n", indent, selector));
    for decl in decls {
        css.push_str(&format!("{}{}{}\n", indent, INDENT, decl));
    }
    css.push_str(&format!("{}}}\n", indent));
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasikari_core::{Responsive, ResponsiveProp, StyleValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emit_single_rule() {
        let mut block = StyleBlock::new();
        block.push_raw("padding", "8px");

        let css = emit_block("test", &block);

        assert_eq!(css, ".test {\n  padding: 8px;\n}\n");
    }

    #[test]
    fn test_emit_pseudo_and_media() {
        let font_size: Responsive<StyleValue> = ResponsiveProp::new()
            .with_base("14px")
            .with(Breakpoint::Md, "18px")
            .into();

        let mut block = StyleBlock::new();
        block.push_prop("font-size", Some(&font_size), None);
        block.pseudo("hover").push_raw("background-color", "#2c387e");

        let css = emit_block("btn", &block);

        let expected = "\
.btn {
  font-size: 14px;
}
.btn:hover {
  background-color: #2c387e;
}
@media screen and (min-width: 768px) {
  .btn {
    font-size: 18px;
  }
}
";
        assert_eq!(css, expected);
    }

    #[test]
    fn test_emit_breakpoint_order() {
        let width: Responsive<StyleValue> = ResponsiveProp::new()
            .with(Breakpoint::Xl, "40%")
            .with(Breakpoint::Sm, "100%")
            .into();

        let mut block = StyleBlock::new();
        block.push_prop("width", Some(&width), None);

        let css = emit_block("box", &block);
        let sm = css.find("min-width: 640px").unwrap();
        let xl = css.find("min-width: 1280px").unwrap();

        assert!(sm < xl);
        assert!(!css.contains(".box {\n  width"), "no base rule expected");
    }

    #[test]
    fn test_emit_pseudo_class_breakpoint() {
        let bg: Responsive<StyleValue> = ResponsiveProp::new()
            .with(Breakpoint::Lg, "red")
            .into();

        let mut block = StyleBlock::new();
        block.pseudo("hover").push_prop("background-color", Some(&bg), None);

        let css = emit_block("x", &block);

        assert_eq!(
            css,
            "@media screen and (min-width: 1024px) {\n  .x:hover {\n    background-color: red;\n  }\n}\n"
        );
    }

    #[test]
    fn test_emit_empty_block() {
        assert_eq!(emit_block("empty", &StyleBlock::new()), "");
    }

    #[test]
    fn test_emit_stability() {
        let mut block = StyleBlock::new();
        block.push_raw("padding", "8px").push_raw("margin", "0");

        assert_eq!(emit_block("test", &block), emit_block("test", &block));
    }
}
