use crate::config::toml_config::TomlConfig;
use crate::config::SiteConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "site-localizer")]
#[command(about = "Copy a static site's pages into per-language directories ready for translation")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Site root containing the source pages (defaults to the working directory)
    #[arg(long, global = true)]
    pub root: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Show what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the relative URL a language switcher should redirect to
    SwitchUrl {
        /// Current page path, e.g. /fr/contact.html
        path: String,
        /// Target language code
        lang: String,
    },
}

impl CliConfig {
    /// Built-in site, overlaid by the config file, overlaid by `--root`.
    pub fn site_config(&self) -> Result<SiteConfig> {
        let config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_site_config(),
            None => SiteConfig::default(),
        };

        match &self.root {
            Some(root) => Ok(config.with_root(root.clone())),
            None => Ok(config),
        }
    }
}
