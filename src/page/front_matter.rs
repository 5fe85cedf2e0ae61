//! Front matter extraction.
//!
//! A document may open with a metadata block:
//!
//! ```text
//! ---
//! title: "Sonntag GmbH"
//! template: onepage
//! ---
//! # Body starts here
//! ```
//!
//! Only flat `key: value` lines are understood. Anything else inside the
//! block is ignored.

use regex::Regex;
use std::{collections::HashMap, sync::LazyLock};

/// Leading `---` block, ending at the first `\n---` (one newline after it is consumed).
static RE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A---\n((?s:.*?))\n---\n?").unwrap());

/// `key: value` with optional surrounding quotes on the value.
static RE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^([A-Za-z0-9_-]+):\s*"?(.*?)"?$"#).unwrap());

/// A parsed content document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Front matter pairs. Empty when the document has no metadata block.
    pub metadata: HashMap<String, String>,
    /// Everything after the metadata block.
    pub body: String,
}

impl Document {
    /// Split `source` into front matter and body.
    pub fn parse(source: &str) -> Self {
        let Some(block) = RE_BLOCK.captures(source) else {
            return Self {
                metadata: HashMap::new(),
                body: source.to_owned(),
            };
        };

        let consumed = block.get(0).map_or(0, |m| m.end());
        let inner = block.get(1).map_or("", |m| m.as_str());

        Self {
            metadata: parse_pairs(inner),
            body: source[consumed..].to_owned(),
        }
    }

    /// Look up a metadata value.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

/// Parse metadata lines, skipping those without a `key: value` shape.
fn parse_pairs(block: &str) -> HashMap<String, String> {
    block
        .lines()
        .filter_map(|line| {
            let caps = RE_PAIR.captures(line)?;
            let key = caps.get(1)?.as_str().trim();
            let value = caps.get(2)?.as_str().trim();
            Some((key.to_owned(), value.to_owned()))
        })
        .collect()
}
