//! Span-level markup: images, links, bold and italics.
//!
//! Passes run in a fixed order. Images must be replaced before links,
//! otherwise `![alt](src)` would be consumed as a link with a stray `!`.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Image source folder left over from an older project layout.
const LEGACY_IMAGE_PREFIX: &str = "./brief_insurance_site/";

static RE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static RE_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static RE_EM_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^*])\*([^*]+)\*").unwrap());
static RE_EM_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^_])_([^_]+)_").unwrap());

/// Render inline markup in a single line of text.
pub fn render_inline(text: &str) -> String {
    let out = RE_IMAGE.replace_all(text, |caps: &Captures| {
        let src = &caps[2];
        let src = match src.strip_prefix(LEGACY_IMAGE_PREFIX) {
            Some(rest) => format!("./{rest}"),
            None => src.to_owned(),
        };
        format!(r#"<img src="{src}" alt="{}">"#, &caps[1])
    });
    let out = RE_LINK.replace_all(&out, r#"<a href="${2}">${1}</a>"#);
    let out = RE_BOLD.replace_all(&out, "<strong>${1}</strong>");
    let out = replace_emphasis(&out, &RE_EM_STAR, '*');
    replace_emphasis(&out, &RE_EM_UNDERSCORE, '_')
}

/// Wrap `re` matches in `<em>`, skipping candidates whose closing
/// delimiter is immediately followed by another `delim`.
///
/// A skipped candidate is retried from the next character, so `*a**b*`
/// still finds `*b*`.
fn replace_emphasis(text: &str, re: &Regex, delim: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;

    while search <= text.len() {
        let Some(caps) = re.captures_at(text, search) else {
            break;
        };
        let (Some(whole), Some(lead), Some(inner)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            break;
        };

        if text[whole.end()..].starts_with(delim) {
            search = next_boundary(text, whole.start());
            continue;
        }

        out.push_str(&text[copied..whole.start()]);
        out.push_str(lead.as_str());
        out.push_str("<em>");
        out.push_str(inner.as_str());
        out.push_str("</em>");
        copied = whole.end();
        search = whole.end();
    }

    out.push_str(&text[copied..]);
    out
}

/// Byte offset of the character after the one starting at `at`.
fn next_boundary(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| at + c.len_utf8())
}
