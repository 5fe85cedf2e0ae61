//! Heading slugification for section identifiers.
//!
//! Text is transliterated to ASCII first (`Über uns` → `uber-uns`), so
//! identifiers are safe for `id` attributes and `#fragment` links.

use deunicode::deunicode;

/// Separator placed between alphanumeric runs
const SEPARATOR: char = '-';

/// Convert heading text to a lowercase ASCII identifier.
///
/// Every run of characters outside `[a-z0-9]` becomes a single `-`,
/// and leading/trailing separators are dropped.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text).to_ascii_lowercase();
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}
