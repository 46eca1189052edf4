//! Relative URL routing between language versions of a page.
//!
//! The localized layout puts the source-language site at the root and each
//! translation in a `<code>/` directory, with the main page renamed to
//! `index.html`. Switching languages therefore has to translate both the
//! directory and, for the main page, the file name.

use crate::domain::model::LanguageRegistry;
use crate::utils::error::{LocalizerError, Result};

pub const INDEX_PAGE: &str = "index.html";

pub struct LanguageSwitcher<'a> {
    registry: &'a LanguageRegistry,
    source_language: &'a str,
    main_page: &'a str,
}

impl<'a> LanguageSwitcher<'a> {
    pub fn new(registry: &'a LanguageRegistry, source_language: &'a str, main_page: &'a str) -> Self {
        Self {
            registry,
            source_language,
            main_page,
        }
    }

    /// Returns `(current language, current page)` for a URL path.
    pub fn locate<'p>(&self, current_path: &'p str) -> (&'p str, &'p str)
    where
        'a: 'p,
    {
        let parts: Vec<&'p str> = current_path.split('/').filter(|p| !p.is_empty()).collect();

        let localized = parts
            .iter()
            .position(|part| self.registry.contains(part))
            .map(|i| (parts[i], parts.get(i + 1).copied().unwrap_or(INDEX_PAGE)));

        let (language, page) = localized.unwrap_or_else(|| {
            (
                self.source_language,
                parts.last().copied().unwrap_or(self.main_page),
            )
        });

        if page == self.main_page {
            (language, INDEX_PAGE)
        } else {
            (language, page)
        }
    }

    /// Relative URL that takes a reader of `current_path` to the same page
    /// in `target`.
    pub fn redirect_url(&self, current_path: &str, target: &str) -> Result<String> {
        let to_source = target == self.source_language;
        if !to_source && !self.registry.contains(target) {
            return Err(LocalizerError::UnknownLanguageError {
                code: target.to_string(),
            });
        }

        let (current, page) = self.locate(current_path);
        let from_source = current == self.source_language;

        let url = match (from_source, to_source) {
            (true, true) => format!("./{}", self.main_page),
            (false, true) if page == INDEX_PAGE => format!("../{}", self.main_page),
            (false, true) => format!("../{}", page),
            (true, false) => format!("./{}/{}", target, page),
            (false, false) => format!("../{}/{}", target, page),
        };

        tracing::debug!(current_path, current, page, target, %url, "Resolved language switch");
        Ok(url)
    }
}
