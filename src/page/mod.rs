//! Markdown document to single HTML page.
//!
//! # Pipeline
//!
//! ```text
//! source ──► Document::parse ──► split_sections ──┐
//!                                                 ├──► assemble ──► html
//! Theme ───► ThemeVariables ──────────────────────┼──► to_css ────► css
//!        └─► hero_image_name ─────────────────────┘
//! ```

pub mod assemble;
pub mod block;
pub mod front_matter;
pub mod inline;
pub mod section;

use crate::{log, theme::{Theme, ThemeVariables}};
use assemble::{PageContext, assemble};
use front_matter::Document;
use section::{duplicate_ids, split_sections};

/// The two generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub css: String,
}

/// Render a content document with the given theme.
///
/// `year` is printed in the footer copyright line.
pub fn render(source: &str, theme: &Theme, year: i32) -> RenderedPage {
    let document = Document::parse(source);
    let sections = split_sections(&document.body);

    for id in duplicate_ids(&sections) {
        log!("warn"; "several sections share the id `{id}`, navigation links to the first");
    }

    let hero_image = theme.hero_image_name();
    let html = assemble(&PageContext {
        document: &document,
        sections: &sections,
        hero_image: &hero_image,
        year,
    });
    let css = ThemeVariables::from_theme(theme).to_css();

    RenderedPage { html, css }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_theme() {
        let page = render("# Title\n\nSome *text* here.\n", &Theme::default(), 2026);
        assert!(page.html.contains(r#"<section id="title" class="">"#));
        assert!(page.html.contains("<h1>Title</h1>\n<p>Some <em>text</em> here.</p>"));
        assert!(page.css.contains("--color-primary: #3c5644;"));
    }

    #[test]
    fn test_render_onepage_with_theme_hero() {
        let theme = Theme::from_json(
            r##"{"settings":{
                "color":{"palette":[{"slug":"primary","color":"#101010"}]},
                "custom":{"heroImage":"assets/hero/berge.jpg"}}}"##,
        )
        .unwrap();
        let page = render(
            "---\ntitle: Sonntag\ntemplate: onepage\n---\n# Willkommen\n---\n# Leistungen\n- Hausrat",
            &theme,
            2026,
        );

        assert!(page.html.contains("background-image:url('berge.jpg')"));
        assert!(page.html.contains(r#"<section id="leistungen" class="services">"#));
        assert!(page.html.contains("<ul>\n<li>Hausrat</li>\n</ul>"));
        assert!(page.css.contains("--color-primary: #101010;"));
    }

    #[test]
    fn test_render_onepage_default_hero() {
        let page = render("---\ntemplate: onepage\n---\n# Start", &Theme::default(), 2026);
        assert!(page.html.contains("background-image:url('a.jpg')"));
    }
}
