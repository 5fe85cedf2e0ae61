//! Block-level markup for one body segment.
//!
//! Supported blocks: `#`/`##`/`###` headings, `>` quotes, `-` list items
//! and plain paragraphs. Every line is its own block except list items,
//! which are grouped into one `<ul>` while consecutive.

use super::inline::render_inline;

/// Open-list tracking while scanning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Closed,
    Open,
}

/// Classified line content, marker already removed.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Heading(u8, &'a str),
    Quote(&'a str),
    Item(&'a str),
    Paragraph(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a line. Longer heading markers are tried first so `##`
    /// is never read as `#` followed by text.
    fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return Line::Blank;
        }
        if let Some(text) = strip_marker(line, "###") {
            return Line::Heading(3, text);
        }
        if let Some(text) = strip_marker(line, "##") {
            return Line::Heading(2, text);
        }
        if let Some(text) = strip_marker(line, "#") {
            return Line::Heading(1, text);
        }
        if let Some(rest) = line.strip_prefix('>') {
            let mut chars = rest.chars();
            let text = match chars.next() {
                Some(c) if c.is_whitespace() => chars.as_str(),
                _ => rest,
            };
            return Line::Quote(text);
        }
        if let Some(text) = strip_marker(line, "-") {
            return Line::Item(text);
        }
        Line::Paragraph(line)
    }
}

/// Strip `marker` plus the whitespace run after it. The run must be non-empty.
fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    rest.starts_with(char::is_whitespace)
        .then(|| rest.trim_start())
}

/// Render a body segment to HTML, one block per output line.
pub fn render_blocks(segment: &str) -> String {
    let mut html: Vec<String> = Vec::new();
    let mut list = ListState::Closed;

    for line in segment.lines() {
        let line = Line::classify(line);

        let next = if matches!(line, Line::Item(_)) {
            ListState::Open
        } else {
            ListState::Closed
        };
        match (list, next) {
            (ListState::Closed, ListState::Open) => html.push("<ul>".into()),
            (ListState::Open, ListState::Closed) => html.push("</ul>".into()),
            _ => {}
        }
        list = next;

        match line {
            Line::Blank => {}
            Line::Heading(level, text) => {
                html.push(format!("<h{level}>{}</h{level}>", render_inline(text)));
            }
            Line::Quote(text) => {
                html.push(format!(
                    "<blockquote><p>{}</p></blockquote>",
                    render_inline(text)
                ));
            }
            Line::Item(text) => html.push(format!("<li>{}</li>", render_inline(text))),
            Line::Paragraph(text) => html.push(format!("<p>{}</p>", render_inline(text))),
        }
    }

    if list == ListState::Open {
        html.push("</ul>".into());
    }

    html.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_heading_levels() {
        assert_eq!(Line::classify("# Eins"), Line::Heading(1, "Eins"));
        assert_eq!(Line::classify("## Zwei"), Line::Heading(2, "Zwei"));
        assert_eq!(Line::classify("### Drei"), Line::Heading(3, "Drei"));
    }

    #[test]
    fn test_classify_deep_heading_is_paragraph() {
        assert_eq!(Line::classify("#### Vier"), Line::Paragraph("#### Vier"));
    }

    #[test]
    fn test_classify_marker_without_space_is_paragraph() {
        assert_eq!(Line::classify("#hashtag"), Line::Paragraph("#hashtag"));
        assert_eq!(Line::classify("-5 Grad"), Line::Paragraph("-5 Grad"));
    }

    #[test]
    fn test_classify_quote_optional_space() {
        assert_eq!(Line::classify("> Zitat"), Line::Quote("Zitat"));
        assert_eq!(Line::classify(">Zitat"), Line::Quote("Zitat"));
        assert_eq!(Line::classify(">  zwei"), Line::Quote(" zwei"));
    }

    #[test]
    fn test_classify_blank() {
        assert_eq!(Line::classify(""), Line::Blank);
        assert_eq!(Line::classify("  \t"), Line::Blank);
    }

    #[test]
    fn test_render_heading_and_paragraph() {
        assert_eq!(
            render_blocks("# Title\n\nSome *text* here."),
            "<h1>Title</h1>\n<p>Some <em>text</em> here.</p>"
        );
    }

    #[test]
    fn test_render_plain_paragraph() {
        assert_eq!(render_blocks("Nur Text."), "<p>Nur Text.</p>");
    }

    #[test]
    fn test_render_list_grouping() {
        assert_eq!(
            render_blocks("- eins\n- zwei\nDanach"),
            "<ul>\n<li>eins</li>\n<li>zwei</li>\n</ul>\n<p>Danach</p>"
        );
    }

    #[test]
    fn test_render_list_closed_at_end() {
        assert_eq!(
            render_blocks("## Liste\n- a\n- b"),
            "<h2>Liste</h2>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_render_blank_line_splits_lists() {
        assert_eq!(
            render_blocks("- a\n\n- b"),
            "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_render_heading_closes_list() {
        assert_eq!(
            render_blocks("- a\n### Weiter"),
            "<ul>\n<li>a</li>\n</ul>\n<h3>Weiter</h3>"
        );
    }

    #[test]
    fn test_render_quote() {
        assert_eq!(
            render_blocks("> **Tipp:** früh planen"),
            "<blockquote><p><strong>Tipp:</strong> früh planen</p></blockquote>"
        );
    }

    #[test]
    fn test_render_crlf_lines() {
        assert_eq!(
            render_blocks("# Titel\r\n\r\nText\r\n"),
            "<h1>Titel</h1>\n<p>Text</p>"
        );
    }

    #[test]
    fn test_render_empty_segment() {
        assert_eq!(render_blocks(""), "");
        assert_eq!(render_blocks("\n\n"), "");
    }
}
