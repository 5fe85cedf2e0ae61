//! `[build]` section configuration.
//!
//! Locations of the inputs and outputs, plus HTML minification.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in onepager.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// content = "content.md"
/// themes = ["theme3.json", "theme2.json"]
/// output = "dist"
/// minify = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Markdown document with front matter. Required at build time.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Theme JSON candidates, most specific first. The first existing one is used.
    #[serde(default = "defaults::build::themes")]
    #[educe(Default = defaults::build::themes())]
    pub themes: Vec<PathBuf>,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static files copied into the output when present.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: Vec<PathBuf>,

    /// Images referenced by the content, copied when present.
    #[serde(default = "defaults::build::images")]
    #[educe(Default = defaults::build::images())]
    pub images: Vec<PathBuf>,

    /// Also write `index.html` into the project root.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub root_index: bool,

    /// Minify HTML output.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,
}
