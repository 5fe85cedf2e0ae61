//! Final HTML document layout.
//!
//! ```text
//! <head>      fixed meta, web font, theme3.css + styles.css
//! <nav>       logo + one link per section
//! hero        first section (one-page layout only)
//! <section>…  remaining sections, augmented by WELL_KNOWN_SECTIONS
//! <footer>    logo, page title, copyright year
//! script.js
//! ```

use super::{front_matter::Document, section::Section};

/// Page title when the front matter has none.
pub const DEFAULT_TITLE: &str = "Website";

/// Logo shown in the navigation bar and footer.
const LOGO: &str = "sonntag_logo.svg";

/// Theme stylesheet written next to the page.
pub const THEME_STYLESHEET: &str = "theme3.css";

/// Indentation between navigation items.
const NAV_ITEM_SEPARATOR: &str = "\n                ";

// ============================================================================
// Layout Mode
// ============================================================================

/// How the first section is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// First section becomes a full-width hero banner.
    OnePage,
    /// All sections render as regular content blocks.
    Standard,
}

impl LayoutMode {
    /// Read the `template` front matter key (`onepage`, case-insensitive).
    pub fn from_document(document: &Document) -> Self {
        match document.meta("template") {
            Some(template) if template.eq_ignore_ascii_case("onepage") => LayoutMode::OnePage,
            _ => LayoutMode::Standard,
        }
    }
}

// ============================================================================
// Well-known sections
// ============================================================================

/// Extra presentation for a section with a specific identifier.
#[derive(Debug, Clone, Copy)]
pub struct WellKnownSection {
    /// Section identifier this entry applies to.
    pub id: &'static str,
    /// CSS class added to the `<section>` element.
    pub class: &'static str,
    /// Replaces the plain body HTML when set.
    pub augment: Option<fn(&Section) -> String>,
}

/// Sections that get a dedicated class and, for `kontakt`, a contact form.
pub const WELL_KNOWN_SECTIONS: &[WellKnownSection] = &[
    WellKnownSection {
        id: "kontakt",
        class: "contact",
        augment: Some(contact_body),
    },
    WellKnownSection {
        id: "team",
        class: "team",
        augment: None,
    },
    WellKnownSection {
        id: "leistungen",
        class: "services",
        augment: None,
    },
];

/// Look up the registry entry for a section identifier.
pub fn well_known(id: &str) -> Option<&'static WellKnownSection> {
    WELL_KNOWN_SECTIONS.iter().find(|entry| entry.id == id)
}

/// Contact details next to a static contact form (submitted by `script.js`).
fn contact_body(section: &Section) -> String {
    [
        r#"      <div class="contact-content">"#.to_owned(),
        format!(r#"        <div class="contact-info">{}</div>"#, section.html),
        r#"        <div class="contact-form">"#.to_owned(),
        r#"          <form>"#.to_owned(),
        r#"            <div class="form-group"><label for="name">Name *</label><input id="name" name="name" required></div>"#.to_owned(),
        r#"            <div class="form-group"><label for="email">E‑Mail *</label><input type="email" id="email" name="email" required></div>"#.to_owned(),
        r#"            <div class="form-group"><label for="message">Nachricht *</label><textarea id="message" name="message" rows="5" required></textarea></div>"#.to_owned(),
        r#"            <button type="submit" class="btn btn-primary">Nachricht senden</button>"#.to_owned(),
        r#"          </form>"#.to_owned(),
        r#"        </div>"#.to_owned(),
        r#"      </div>"#.to_owned(),
    ]
    .join("\n")
}

// ============================================================================
// Page
// ============================================================================

/// Everything the layout needs besides fixed scaffolding.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub document: &'a Document,
    pub sections: &'a [Section],
    /// File name of the hero background image.
    pub hero_image: &'a str,
    /// Copyright year shown in the footer.
    pub year: i32,
}

/// Assemble the complete HTML document.
pub fn assemble(ctx: &PageContext) -> String {
    let title = ctx.document.meta("title").unwrap_or(DEFAULT_TITLE);
    let mode = LayoutMode::from_document(ctx.document);

    let mut html: Vec<String> = Vec::new();
    push_head(&mut html, title);
    push_nav(&mut html, ctx.sections);

    let regular = match (mode, ctx.sections.split_first()) {
        (LayoutMode::OnePage, Some((hero, rest))) => {
            push_hero(&mut html, hero, ctx.hero_image);
            rest
        }
        _ => ctx.sections,
    };
    for section in regular {
        push_section(&mut html, section);
    }

    push_footer(&mut html, title, ctx.year);
    html.join("\n")
}

fn push_head(html: &mut Vec<String>, title: &str) {
    html.extend(
        [
            "<!DOCTYPE html>",
            r#"<html lang="de">"#,
            "<head>",
            r#"  <meta charset="UTF-8">"#,
            r#"  <meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
        ]
        .map(String::from),
    );
    html.push(format!("  <title>{title}</title>"));
    html.extend(
        [
            r#"  <link rel="preconnect" href="https://fonts.googleapis.com">"#,
            r#"  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>"#,
            r#"  <link href="https://fonts.googleapis.com/css2?family=Manrope:wght@300;400;500;600;700&display=swap" rel="stylesheet">"#,
        ]
        .map(String::from),
    );
    html.push(format!(r#"  <link rel="stylesheet" href="{THEME_STYLESHEET}">"#));
    html.push(r#"  <link rel="stylesheet" href="styles.css">"#.into());
    html.push("</head>".into());
    html.push("<body>".into());
}

fn push_nav(html: &mut Vec<String>, sections: &[Section]) {
    let links = sections
        .iter()
        .map(|s| format!(r##"<li><a href="#{}" class="nav-link">{}</a></li>"##, s.id, s.title))
        .collect::<Vec<_>>()
        .join(NAV_ITEM_SEPARATOR);

    html.push(r#"  <nav class="navbar">"#.into());
    html.push(r#"    <div class="container">"#.into());
    html.push(r#"      <div class="nav-brand">"#.into());
    html.push(format!(r#"        <img src="{LOGO}" alt="Logo" class="logo">"#));
    html.push("      </div>".into());
    html.push(r#"      <ul class="nav-menu">"#.into());
    html.push(format!("        {links}"));
    html.push("      </ul>".into());
    html.push(
        r#"      <div class="hamburger"><span></span><span></span><span></span></div>"#.into(),
    );
    html.push("    </div>".into());
    html.push("  </nav>".into());
}

fn push_hero(html: &mut Vec<String>, section: &Section, image: &str) {
    html.push(format!(
        r#"  <section id="{}" class="hero hero--image" style="background-image:url('{image}')">"#,
        section.id
    ));
    html.push(r#"    <div class="container">"#.into());
    html.push(r#"      <div class="hero-content">"#.into());
    html.push(section.html.clone());
    html.push("      </div>".into());
    html.push("    </div>".into());
    html.push("  </section>".into());
}

fn push_section(html: &mut Vec<String>, section: &Section) {
    let entry = well_known(&section.id);
    let class = entry.map_or("", |e| e.class);
    let body = match entry.and_then(|e| e.augment) {
        Some(augment) => augment(section),
        None => section.html.clone(),
    };

    html.push(format!(r#"  <section id="{}" class="{class}">"#, section.id));
    html.push(r#"    <div class="container">"#.into());
    html.push(r#"      <div class="section-header">"#.into());
    html.push(format!(
        r#"        <h2 class="section-title">{}</h2>"#,
        section.title
    ));
    html.push("      </div>".into());
    html.push(body);
    html.push("    </div>".into());
    html.push("  </section>".into());
}

fn push_footer(html: &mut Vec<String>, title: &str, year: i32) {
    html.push(r#"  <footer class="footer">"#.into());
    html.push(r#"    <div class="container">"#.into());
    html.push(r#"      <div class="footer-content">"#.into());
    html.push(r#"        <div class="footer-brand">"#.into());
    html.push(format!(
        r#"          <img src="{LOGO}" alt="Logo" class="footer-logo">"#
    ));
    html.push(format!("          <p>{title}</p>"));
    html.push("        </div>".into());
    html.push("      </div>".into());
    html.push(r#"      <div class="footer-bottom">"#.into());
    html.push(format!("        <p>&copy; {year} Sonntag GmbH</p>"));
    html.push("      </div>".into());
    html.push("    </div>".into());
    html.push("  </footer>".into());
    html.push(r#"  <script src="script.js"></script>"#.into());
    html.push("</body>".into());
    html.push("</html>".into());
}
