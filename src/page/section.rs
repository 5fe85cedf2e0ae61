//! Splitting a document body into page sections.
//!
//! Sections are separated by a line containing only `---`. Each section
//! is named after its first heading and rendered independently.

use super::block::render_blocks;
use crate::utils::slug::slugify;
use regex::Regex;
use std::{collections::HashSet, sync::LazyLock};

/// Title used when a section has no heading.
pub const FALLBACK_TITLE: &str = "Abschnitt";

/// Section separator: a `---` line between two newlines.
const SEPARATOR: &str = "\n---\n";

/// First heading of any depth (`#` to `######`).
static RE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+(.+)$").unwrap());

/// One rendered block of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Slug of the title, used as `id` and navigation anchor.
    pub id: String,
    /// Heading text as written.
    pub title: String,
    /// Rendered body HTML.
    pub html: String,
}

impl Section {
    /// Render one body segment.
    pub fn from_segment(segment: &str) -> Self {
        let title = RE_HEADING
            .captures(segment)
            .and_then(|caps| caps.get(1))
            .map_or(FALLBACK_TITLE, |m| m.as_str().trim())
            .to_owned();

        Self {
            id: slugify(&title),
            html: render_blocks(segment),
            title,
        }
    }
}

/// Split `body` into sections, dropping empty segments. Order is preserved.
pub fn split_sections(body: &str) -> Vec<Section> {
    body.split(SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(Section::from_segment)
        .collect()
}

/// Identifiers used by more than one section, in first-seen order.
///
/// Duplicates are kept as they are; the result only exists so callers can
/// report broken anchors.
pub fn duplicate_ids(sections: &[Section]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    sections
        .iter()
        .map(|s| s.id.as_str())
        .filter(|id| !seen.insert(*id) && reported.insert(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_section() {
        let sections = split_sections("# Title\n\nSome *text* here.\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Title");
        assert_eq!(sections[0].id, "title");
        assert_eq!(
            sections[0].html,
            "<h1>Title</h1>\n<p>Some <em>text</em> here.</p>"
        );
    }

    #[test]
    fn test_two_sections_in_order() {
        let sections = split_sections("# Leistungen\n- Beratung\n---\n## Über uns\nText");
        let ids: Vec<_> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["leistungen", "uber-uns"]);
        assert_eq!(sections[1].title, "Über uns");
    }

    #[test]
    fn test_segment_count_matches() {
        let body = (1..=5)
            .map(|i| format!("# Teil {i}\nInhalt {i}"))
            .collect::<Vec<_>>()
            .join("\n---\n");
        let sections = split_sections(&body);
        assert_eq!(sections.len(), 5);
        for (i, section) in sections.iter().enumerate() {
            assert_eq!(section.id, format!("teil-{}", i + 1));
        }
    }

    #[test]
    fn test_empty_segments_dropped() {
        let sections = split_sections("\n---\n# A\n---\n   \n---\n# B\n");
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_fallback_title() {
        let sections = split_sections("Nur ein Absatz.");
        assert_eq!(sections[0].title, FALLBACK_TITLE);
        assert_eq!(sections[0].id, "abschnitt");
    }

    #[test]
    fn test_title_from_first_heading_not_first_line() {
        let section = Section::from_segment("![Bild](a.jpg)\n## Team\n### Leitung");
        assert_eq!(section.title, "Team");
    }

    #[test]
    fn test_title_from_deep_heading() {
        let section = Section::from_segment("#### Kleingedrucktes\nText");
        assert_eq!(section.title, "Kleingedrucktes");
        assert!(section.html.starts_with("<p>#### Kleingedrucktes</p>"));
    }

    #[test]
    fn test_dashes_inside_line_do_not_split() {
        let sections = split_sections("# A\nText --- mehr\n----\n# B");
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let sections = split_sections("# Team\n---\n# Kontakt\n---\n# Team\n---\n# team");
        assert_eq!(sections.len(), 4);
        assert_eq!(duplicate_ids(&sections), vec!["team"]);
    }

    #[test]
    fn test_no_duplicate_ids() {
        let sections = split_sections("# A\n---\n# B");
        assert!(duplicate_ids(&sections).is_empty());
    }
}
