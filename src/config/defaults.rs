//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content.md".into()
    }

    pub fn themes() -> Vec<PathBuf> {
        vec!["theme3.json".into(), "theme2.json".into()]
    }

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub fn assets() -> Vec<PathBuf> {
        vec![
            "styles.css".into(),
            "script.js".into(),
            "sonntag_logo.svg".into(),
        ]
    }

    pub fn images() -> Vec<PathBuf> {
        ["a.jpg", "b.jpg", "c.jpg", "d.jpg"]
            .into_iter()
            .map(PathBuf::from)
            .collect()
    }
}
