use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A target locale. The code doubles as the output directory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Ordered mapping of language codes to display names.
///
/// Traversal follows declaration order; uniqueness of codes is checked by
/// config validation rather than here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(code, name)| Language::new(*code, *name))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.code.as_str())
    }

    pub fn get(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// One localized file that was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub language: String,
    pub source: String,
    pub destination: String,
}

/// One (language, file) pair as it would be processed, without touching
/// the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedOutput {
    pub language: String,
    pub source: String,
    pub destination: String,
    pub source_present: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub languages: Vec<String>,
    pub written: Vec<OutputRecord>,
    /// Tracked files missing from the site root, each listed once.
    pub skipped: Vec<String>,
}

impl RunSummary {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            elapsed_ms: 0,
            languages: Vec::new(),
            written: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn record_skipped(&mut self, source: &str) {
        if !self.skipped.iter().any(|s| s == source) {
            self.skipped.push(source.to_string());
        }
    }

    pub fn written_for<'a>(&'a self, language: &'a str) -> impl Iterator<Item = &'a OutputRecord> + 'a {
        self.written.iter().filter(move |r| r.language == language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_keeps_declaration_order() {
        let registry = LanguageRegistry::from_pairs(&[("ru", "Russian"), ("fr", "French"), ("es", "Spanish")]);

        let codes: Vec<&str> = registry.codes().collect();
        assert_eq!(codes, vec!["ru", "fr", "es"]);
        assert_eq!(registry.get("fr").map(|l| l.name.as_str()), Some("French"));
        assert!(!registry.contains("de"));
    }

    #[test]
    fn test_summary_lists_skipped_once() {
        let mut summary = RunSummary::new(Utc::now());
        summary.record_skipped("blog.html");
        summary.record_skipped("blog.html");
        summary.record_skipped("glossary.html");

        assert_eq!(summary.skipped, vec!["blog.html", "glossary.html"]);
    }
}
