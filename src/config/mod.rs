#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::LanguageRegistry;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{LocalizerError, Result};
use crate::utils::validation::{self, Validate};

pub const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    ("ru", "Russian"),
    ("zh", "Chinese (Simplified)"),
    ("ja", "Japanese"),
    ("fr", "French"),
    ("es", "Spanish"),
];

pub const DEFAULT_TRACKED_FILES: &[&str] = &[
    "nolilab-redesigned.html",
    "specifications.html",
    "software.html",
    "firmware.html",
    "setup-guides.html",
    "blog.html",
    "contact.html",
    "lorawan.html",
    "glossary.html",
    "privacy.html",
];

pub const DEFAULT_MAIN_PAGE: &str = "nolilab-redesigned.html";
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";

/// Effective configuration for one run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub root: String,
    pub main_page: String,
    pub source_language: String,
    pub languages: LanguageRegistry,
    pub files: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            main_page: DEFAULT_MAIN_PAGE.to_string(),
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            languages: LanguageRegistry::from_pairs(DEFAULT_LANGUAGES),
            files: DEFAULT_TRACKED_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl SiteConfig {
    pub fn new(languages: LanguageRegistry, files: Vec<String>) -> Self {
        Self {
            languages,
            files,
            ..Self::default()
        }
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_main_page(mut self, main_page: impl Into<String>) -> Self {
        self.main_page = main_page.into();
        self
    }
}

impl ConfigProvider for SiteConfig {
    fn languages(&self) -> &LanguageRegistry {
        &self.languages
    }

    fn tracked_files(&self) -> &[String] {
        &self.files
    }

    fn main_page(&self) -> &str {
        &self.main_page
    }

    fn source_language(&self) -> &str {
        &self.source_language
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("site.root", &self.root)?;
        validation::validate_relative_path("site.main_page", &self.main_page)?;
        validation::validate_language_code("site.source_language", &self.source_language)?;

        if self.languages.is_empty() {
            return Err(LocalizerError::MissingConfigError {
                field: "languages".to_string(),
            });
        }
        for code in self.languages.codes() {
            validation::validate_language_code("languages.code", code)?;
        }
        validation::validate_unique("languages.code", self.languages.codes())?;
        if self.languages.contains(&self.source_language) {
            return Err(LocalizerError::InvalidConfigValueError {
                field: "languages.code".to_string(),
                value: self.source_language.clone(),
                reason: "Source language pages stay at the site root".to_string(),
            });
        }

        validation::validate_non_empty_list("site.files", &self.files)?;
        for file in &self.files {
            validation::validate_relative_path("site.files", file)?;
        }
        validation::validate_unique("site.files", self.files.iter().map(String::as_str))?;

        Ok(())
    }
}
