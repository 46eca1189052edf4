use crate::config::SiteConfig;
use crate::domain::model::{Language, LanguageRegistry};
use crate::utils::error::{LocalizerError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Anything left out falls back to the built-in site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSection {
    pub root: Option<String>,
    pub main_page: Option<String>,
    pub source_language: Option<String>,
    pub files: Option<Vec<String>>,
}

impl TomlConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| LocalizerError::io("read config", path.display().to_string(), e))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LocalizerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn into_site_config(self) -> SiteConfig {
        let mut config = SiteConfig::default();

        if let Some(root) = self.site.root {
            config.root = root;
        }
        if let Some(main_page) = self.site.main_page {
            config.main_page = main_page;
        }
        if let Some(source_language) = self.site.source_language {
            config.source_language = source_language;
        }
        if let Some(files) = self.site.files {
            config.files = files;
        }
        if !self.languages.is_empty() {
            config.languages = LanguageRegistry::new(self.languages);
        }

        config
    }
}
