//! Command-line interface definitions.
//!
//! Defines all CLI arguments using clap.

use clap::Parser;
use std::path::PathBuf;

/// Onepager: render a one-page site from `content.md` and a theme file
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root (default: onepager.toml)
    #[arg(short = 'C', long, default_value = "onepager.toml")]
    pub config: PathBuf,

    /// Markdown content file (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Theme JSON file, tried before the configured candidates
    #[arg(short, long)]
    pub theme: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minify the html output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}
