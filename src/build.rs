//! Page building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_page()
//!     │
//!     ├── read_content()  ──► content.md (required)
//!     ├── load_theme()    ──► first existing theme candidate, or defaults
//!     ├── page::render()  ──► index.html + theme3.css
//!     └── copy_assets()   ──► styles, script, logo, images, hero image
//! ```

use crate::{
    config::SiteConfig,
    log,
    page::{self, RenderedPage, assemble::THEME_STYLESHEET},
    theme::Theme,
    utils::minify::minify,
};
use anyhow::{Context, Result};
use chrono::Datelike;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Failures that stop a build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("content file `{0}` not found")]
    ContentMissing(PathBuf, #[source] io::Error),

    #[error("content file `{0}` is empty")]
    ContentEmpty(PathBuf),

    #[error("theme file `{0}` is not valid JSON")]
    ThemeMalformed(PathBuf, #[source] serde_json::Error),
}

/// Build the page into the output directory.
///
/// Returns the path of the written `index.html`.
pub fn build_page(config: &SiteConfig) -> Result<PathBuf> {
    let source = read_content(&config.build.content)?;

    let theme = match load_theme(&config.build.themes)? {
        Some((path, theme)) => {
            log!("theme"; "using {}", display_name(&path));
            theme
        }
        None => {
            log!("theme"; "no theme file found, using defaults");
            Theme::default()
        }
    };

    let year = chrono::Local::now().year();
    let page = page::render(&source, &theme, year);

    let index = write_outputs(&page, config)?;
    copy_assets(&theme, config)?;

    if config.build.root_index {
        let root_index = config.get_root().join("index.html");
        fs::write(&root_index, minify(page.html.as_bytes(), config))
            .with_context(|| format!("Failed to write {}", root_index.display()))?;
    }

    log!("build"; "done: {}", index.display());
    Ok(index)
}

/// Read the required content document.
fn read_content(path: &Path) -> Result<String, BuildError> {
    let source = fs::read_to_string(path)
        .map_err(|err| BuildError::ContentMissing(path.to_path_buf(), err))?;
    if source.is_empty() {
        return Err(BuildError::ContentEmpty(path.to_path_buf()));
    }
    Ok(source)
}

/// Load the first readable, non-empty theme candidate.
///
/// Unreadable candidates are skipped; a candidate that reads but does not
/// parse is an error.
fn load_theme(candidates: &[PathBuf]) -> Result<Option<(PathBuf, Theme)>, BuildError> {
    let Some((path, json)) = candidates.iter().find_map(|path| {
        fs::read_to_string(path)
            .ok()
            .filter(|json| !json.is_empty())
            .map(|json| (path, json))
    }) else {
        return Ok(None);
    };

    let theme =
        Theme::from_json(&json).map_err(|err| BuildError::ThemeMalformed(path.clone(), err))?;
    Ok(Some((path.clone(), theme)))
}

/// Write `index.html` and the theme stylesheet into the output directory.
fn write_outputs(page: &RenderedPage, config: &SiteConfig) -> Result<PathBuf> {
    let output = &config.build.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let css_path = output.join(THEME_STYLESHEET);
    fs::write(&css_path, &page.css)
        .with_context(|| format!("Failed to write {}", css_path.display()))?;

    let html_path = output.join("index.html");
    fs::write(&html_path, minify(page.html.as_bytes(), config))
        .with_context(|| format!("Failed to write {}", html_path.display()))?;

    Ok(html_path)
}

/// Copy static assets, content images and the theme hero image when present.
fn copy_assets(theme: &Theme, config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    let hero = theme.hero_image().map(|path| config.get_root().join(path));

    let mut copied = 0;
    for source in config
        .build
        .assets
        .iter()
        .chain(&config.build.images)
        .chain(hero.as_ref())
    {
        if copy_into(source, output)? {
            copied += 1;
        }
    }

    log!("assets"; "copied {copied} files");
    Ok(())
}

/// Copy `source` into `dir` under its file name.
///
/// Missing sources are skipped, and so is a source that already is the
/// destination (output directory equal to the asset's directory).
fn copy_into(source: &Path, dir: &Path) -> Result<bool> {
    let Some(name) = source.file_name() else {
        return Ok(false);
    };
    if !source.is_file() {
        return Ok(false);
    }

    let dest = dir.join(name);
    if is_same_file(source, &dest) {
        return Ok(false);
    }
    fs::copy(source, &dest).with_context(|| {
        format!("Failed to copy {} to {}", source.display(), dest.display())
    })?;
    Ok(true)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use tempfile::TempDir;

    const CONTENT: &str = "---\ntitle: \"Sonntag GmbH\"\ntemplate: onepage\n---\n\
        # Willkommen\nIhre Versicherung.\n---\n\
        # Leistungen\n- Hausrat\n- Haftpflicht\n---\n\
        # Kontakt\nTelefon: 0123\n";

    fn site(files: &[(&str, &str)]) -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        let cli = Cli::parse_from(["onepager", "--root", dir.path().to_str().unwrap()]);
        let config = SiteConfig::load(&cli).unwrap();
        (dir, config)
    }

    #[test]
    fn test_build_without_theme() {
        let (dir, config) = site(&[("content.md", CONTENT)]);
        let index = build_page(&config).unwrap();

        let html = fs::read_to_string(&index).unwrap();
        assert!(html.contains("<title>Sonntag GmbH</title>"));
        assert!(html.contains("background-image:url('a.jpg')"));
        assert!(html.contains(r#"<section id="kontakt" class="contact">"#));

        let css = fs::read_to_string(dir.path().join("dist/theme3.css")).unwrap();
        assert!(css.contains("--color-primary: #3c5644;"));

        let root_index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert_eq!(root_index, html);
    }

    #[test]
    fn test_build_missing_content_is_fatal() {
        let (_dir, config) = site(&[]);
        let err = build_page(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::ContentMissing(..))
        ));
    }

    #[test]
    fn test_build_empty_content_is_fatal() {
        let (_dir, config) = site(&[("content.md", "")]);
        let err = build_page(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::ContentEmpty(_))
        ));
    }

    #[test]
    fn test_build_malformed_theme_is_fatal() {
        let (_dir, config) = site(&[("content.md", CONTENT), ("theme3.json", "{ nope")]);
        let err = build_page(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::ThemeMalformed(..))
        ));
    }

    #[test]
    fn test_build_prefers_first_theme_candidate() {
        let (dir, config) = site(&[
            ("content.md", CONTENT),
            (
                "theme3.json",
                r##"{"settings":{"color":{"palette":[{"slug":"primary","color":"#333333"}]}}}"##,
            ),
            (
                "theme2.json",
                r##"{"settings":{"color":{"palette":[{"slug":"primary","color":"#222222"}]}}}"##,
            ),
        ]);
        build_page(&config).unwrap();

        let css = fs::read_to_string(dir.path().join("dist/theme3.css")).unwrap();
        assert!(css.contains("--color-primary: #333333;"));
    }

    #[test]
    fn test_build_falls_back_to_second_theme() {
        let (dir, config) = site(&[
            ("content.md", CONTENT),
            ("theme3.json", ""),
            (
                "theme2.json",
                r##"{"settings":{"color":{"palette":[{"slug":"primary","color":"#222222"}]}}}"##,
            ),
        ]);
        build_page(&config).unwrap();

        let css = fs::read_to_string(dir.path().join("dist/theme3.css")).unwrap();
        assert!(css.contains("--color-primary: #222222;"));
    }

    #[test]
    fn test_build_copies_present_assets_and_hero() {
        let (dir, config) = site(&[
            ("content.md", CONTENT),
            ("styles.css", "body{}"),
            ("b.jpg", "jpeg"),
            ("media/berge.jpg", "jpeg"),
            (
                "theme3.json",
                r#"{"settings":{"custom":{"heroImage":"media/berge.jpg"}}}"#,
            ),
        ]);
        let index = build_page(&config).unwrap();
        let dist = dir.path().join("dist");

        assert!(dist.join("styles.css").is_file());
        assert!(dist.join("b.jpg").is_file());
        assert!(dist.join("berge.jpg").is_file());
        assert!(!dist.join("script.js").exists());
        assert!(!dist.join("a.jpg").exists());

        let html = fs::read_to_string(index).unwrap();
        assert!(html.contains("background-image:url('berge.jpg')"));
    }

    #[test]
    fn test_build_into_root_keeps_assets() {
        let (dir, _) = site(&[
            ("content.md", CONTENT),
            ("styles.css", "body{color:red}"),
            ("a.jpg", "jpeg"),
        ]);
        let root = dir.path().to_str().unwrap();
        let cli = Cli::parse_from(["onepager", "--root", root, "-o", "."]);
        let config = SiteConfig::load(&cli).unwrap();

        let index = build_page(&config).unwrap();
        assert_eq!(index, config.get_root().join("index.html"));
        assert_eq!(
            fs::read_to_string(dir.path().join("styles.css")).unwrap(),
            "body{color:red}"
        );
        assert_eq!(fs::read_to_string(dir.path().join("a.jpg")).unwrap(), "jpeg");
        assert!(dir.path().join("theme3.css").is_file());
    }

    #[test]
    fn test_build_without_root_index() {
        let (dir, mut config) = site(&[("content.md", CONTENT)]);
        config.build.root_index = false;
        build_page(&config).unwrap();
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn test_build_minified() {
        let (_dir, mut config) = site(&[("content.md", CONTENT)]);
        config.build.minify = true;
        let index = build_page(&config).unwrap();

        let html = fs::read_to_string(index).unwrap();
        assert!(!html.contains("\n  <nav"));
        assert!(html.contains("Hausrat"));
    }
}
