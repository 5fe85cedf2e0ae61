//! Onepager - render a one-page website from markdown and a theme file.

mod build;
mod cli;
mod config;
mod logger;
mod page;
mod theme;
mod utils;

use anyhow::Result;
use build::build_page;
use clap::Parser;
use cli::Cli;
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;
    if config.config_path.is_file() {
        log!("config"; "loaded {}", config.config_path.display());
    }

    build_page(&config)?;
    Ok(())
}
