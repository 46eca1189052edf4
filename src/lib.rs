pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalStorage;
pub use config::SiteConfig;
pub use core::{engine::LocalizerEngine, localizer::SiteLocalizer};
pub use domain::switcher::LanguageSwitcher;
pub use utils::error::{LocalizerError, Result};
