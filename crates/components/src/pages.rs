use crate::component::Component;
use crate::html::escape_text;
use crate::text::{TextProps, TextVariant};
use kasikari_core::Theme;
use kasikari_css::{ServerStyleSheet, SheetError};

/// 首页
pub fn home_page(sheet: &mut ServerStyleSheet, theme: &Theme) -> Result<String, SheetError> {
    let mut html = String::new();

    let headline = TextProps {
        margin_bottom: Some(0.into()),
        color: Some("black".into()),
        ..TextProps::new("h1", TextVariant::ExtraLarge)
    };
    html.push_str(&headline.render(&escape_text("kasikari C2Cで"), sheet, theme)?);

    let subline = TextProps {
        margin_top: Some(0.into()),
        color: Some("black".into()),
        ..TextProps::new("h1", TextVariant::ExtraLarge)
    };
    html.push_str(&subline.render(
        &escape_text("お気に入りのアイテムを見つけよう"),
        sheet,
        theme,
    )?);

    let link = TextProps::new("a", TextVariant::MediumLarge)
        .with_attr("href", "https://github.com/shunakid/kasikari")
        .with_attr("target", "_blank")
        .with_attr("style", "text-decoration: underline");
    let intro = format!(
        "{}{}",
        escape_text("kasikari C2Cは実践的なNext.jsアプリケーション開発で使われるデモアプリです。"),
        link.render("github", sheet, theme)?
    );
    html.push_str(&TextProps::new("p", TextVariant::MediumLarge).render(&intro, sheet, theme)?);

    html.push_str(&TextProps::new("p", TextVariant::MediumLarge).render(
        &escape_text(
            "このアプリはTypeScript/Next.jsで作成されており、バックエンドはFirebaseが使用されています。",
        ),
        sheet,
        theme,
    )?);

    for category in ["トップス", "本", "シューズ"] {
        html.push_str(&TextProps::new("h2", TextVariant::Large).render(
            &escape_text(category),
            sheet,
            theme,
        )?);
    }

    Ok(html)
}
