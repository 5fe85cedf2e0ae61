//! Project configuration management for `onepager.toml`.
//!
//! The config file is optional: without it every field takes its default,
//! which matches the conventional project layout (`content.md`,
//! `theme3.json`/`theme2.json`, `dist/`).
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content.md"
//! themes = ["theme3.json", "theme2.json"]
//! output = "dist"
//! minify = true
//! ```

mod build;
pub mod defaults;
mod error;

use build::BuildConfig;
pub use error::ConfigError;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing onepager.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config named by the CLI, falling back to defaults when absent.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.is_file() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        Self::update_option(&mut self.build.minify, cli.minify.as_ref());
        if let Some(theme) = &cli.theme {
            self.build.themes.insert(0, theme.clone());
        }

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against the root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_name: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);
        self.config_path = Self::normalize_path(&root.join(config_name));

        let build = &mut self.build;
        build.content = Self::normalize_path(&root.join(&build.content));
        build.output = Self::normalize_path(&root.join(&build.output));
        for path in build
            .themes
            .iter_mut()
            .chain(build.assets.iter_mut())
            .chain(build.images.iter_mut())
        {
            *path = Self::normalize_path(&root.join(&*path));
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before building
    pub fn validate(&self) -> Result<()> {
        if self.build.themes.is_empty() {
            bail!(ConfigError::Validation(
                "[build.themes] must have at least one element".into()
            ));
        }

        if self.build.output.is_file() {
            bail!(ConfigError::Validation(format!(
                "[build.output] `{}` is a file, expected a directory",
                self.build.output.display()
            )));
        }

        Ok(())
    }
}
