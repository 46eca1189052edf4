use crate::core::rewrite::{destination_name, RewriteRules};
use crate::core::{ConfigProvider, OutputRecord, PlannedOutput, RunSummary, Storage};
use crate::utils::error::Result;
use chrono::Utc;
use std::time::{Duration, Instant};

/// Copies every tracked page into one directory per language, rewriting
/// the paths that break when a page moves one level down.
pub struct SiteLocalizer<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    rules: RewriteRules,
}

impl<S: Storage, C: ConfigProvider> SiteLocalizer<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let rules = RewriteRules::new(config.main_page(), config.source_language())?;
        Ok(Self {
            storage,
            config,
            rules,
        })
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn localize(&self, content: &str, language_code: &str) -> String {
        self.rules.apply(content, language_code)
    }

    fn output_path(&self, language_code: &str, source: &str) -> String {
        format!(
            "{}/{}",
            language_code,
            destination_name(source, self.config.main_page())
        )
    }

    /// Lists every (language, file) pair in processing order without
    /// creating or writing anything.
    pub async fn plan(&self) -> Result<Vec<PlannedOutput>> {
        let mut planned = Vec::new();

        for language in self.config.languages().iter() {
            for source in self.config.tracked_files() {
                planned.push(PlannedOutput {
                    language: language.code.clone(),
                    source: source.clone(),
                    destination: self.output_path(&language.code, source),
                    source_present: self.storage.exists(source).await?,
                });
            }
        }

        Ok(planned)
    }

    /// Runs the whole copy. The first I/O failure aborts the run and files
    /// already written are left in place.
    pub async fn prepare(&self) -> Result<RunSummary> {
        let started = Instant::now();
        let mut summary = RunSummary::new(Utc::now());

        for language in self.config.languages().iter() {
            self.storage.create_dir(&language.code).await?;
            tracing::debug!(code = %language.code, name = %language.name, "Language directory ready");
            summary.languages.push(language.code.clone());

            for source in self.config.tracked_files() {
                if !self.storage.exists(source).await? {
                    tracing::debug!(source = %source, "Source file not found, skipping");
                    summary.record_skipped(source);
                    continue;
                }

                let content = self.storage.read_to_string(source).await?;
                let localized = self.localize(&content, &language.code);
                let destination = self.output_path(&language.code, source);

                self.storage
                    .write_file(&destination, localized.as_bytes())
                    .await?;
                println!("Prepared: {}", destination);

                summary.written.push(OutputRecord {
                    language: language.code.clone(),
                    source: source.clone(),
                    destination,
                });
            }
        }

        summary.elapsed_ms = elapsed_millis(started.elapsed());
        Ok(summary)
    }
}

fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::domain::model::LanguageRegistry;
    use crate::utils::error::LocalizerError;
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, String>>>,
        dirs: Arc<Mutex<HashSet<String>>>,
        fail_write: Option<String>,
    }

    impl MockStorage {
        fn with_files(files: &[(&str, &str)]) -> Self {
            let files: HashMap<String, String> = files
                .iter()
                .map(|(name, content)| (name.to_string(), content.to_string()))
                .collect();
            Self {
                files: Arc::new(Mutex::new(files)),
                ..Self::default()
            }
        }

        fn failing_write(mut self, path: &str) -> Self {
            self.fail_write = Some(path.to_string());
            self
        }

        async fn get_file(&self, path: &str) -> Option<String> {
            self.files.lock().await.get(path).cloned()
        }

        async fn has_dir(&self, path: &str) -> bool {
            self.dirs.lock().await.contains(path)
        }
    }

    impl Storage for MockStorage {
        async fn exists(&self, path: &str) -> Result<bool> {
            Ok(self.files.lock().await.contains_key(path))
        }

        async fn read_to_string(&self, path: &str) -> Result<String> {
            self.files.lock().await.get(path).cloned().ok_or_else(|| {
                LocalizerError::io(
                    "read",
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                )
            })
        }

        async fn create_dir(&self, path: &str) -> Result<()> {
            self.dirs.lock().await.insert(path.to_string());
            Ok(())
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.fail_write.as_deref() == Some(path) {
                return Err(LocalizerError::io(
                    "write",
                    path,
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                ));
            }
            let content = String::from_utf8_lossy(data).into_owned();
            self.files.lock().await.insert(path.to_string(), content);
            Ok(())
        }
    }

    fn config(languages: &[(&str, &str)], files: &[&str]) -> SiteConfig {
        SiteConfig::new(
            LanguageRegistry::from_pairs(languages),
            files.iter().map(|f| f.to_string()).collect(),
        )
        .with_main_page("home.html")
    }

    #[tokio::test]
    async fn test_contact_page_for_french() {
        let storage = MockStorage::with_files(&[(
            "contact.html",
            r#"<html lang="en"><img src="images/logo.png"></html>"#,
        )]);
        let localizer =
            SiteLocalizer::new(storage.clone(), config(&[("fr", "French")], &["contact.html"])).unwrap();

        let summary = localizer.prepare().await.unwrap();

        assert!(storage.has_dir("fr").await);
        assert_eq!(
            storage.get_file("fr/contact.html").await.unwrap(),
            r#"<html lang="fr"><img src="../images/logo.png"></html>"#
        );
        assert_eq!(summary.written.len(), 1);
        assert!(summary.skipped.is_empty());
    }

    #[tokio::test]
    async fn test_main_page_becomes_index() {
        let storage = MockStorage::with_files(&[
            ("home.html", r#"<html lang="en"><a href="./home.html">Home</a>"#),
            ("blog.html", r#"<a href="./home.html#top">Back</a>"#),
        ]);
        let localizer = SiteLocalizer::new(
            storage.clone(),
            config(&[("ru", "Russian"), ("es", "Spanish")], &["home.html", "blog.html"]),
        )
        .unwrap();

        localizer.prepare().await.unwrap();

        for code in ["ru", "es"] {
            let index = storage.get_file(&format!("{}/index.html", code)).await.unwrap();
            assert_eq!(index, format!(r#"<html lang="{}"><a href="./index.html">Home</a>"#, code));
            assert!(storage.get_file(&format!("{}/home.html", code)).await.is_none());

            let blog = storage.get_file(&format!("{}/blog.html", code)).await.unwrap();
            assert_eq!(blog, r#"<a href="./index.html#top">Back</a>"#);
        }
    }

    #[tokio::test]
    async fn test_missing_sources_are_skipped() {
        let storage = MockStorage::with_files(&[("contact.html", "<p>contact</p>")]);
        let localizer = SiteLocalizer::new(
            storage.clone(),
            config(&[("ja", "Japanese"), ("zh", "Chinese")], &["missing.html", "contact.html"]),
        )
        .unwrap();

        let summary = localizer.prepare().await.unwrap();

        assert!(storage.has_dir("ja").await);
        assert!(storage.has_dir("zh").await);
        assert!(storage.get_file("ja/missing.html").await.is_none());
        assert!(storage.get_file("zh/contact.html").await.is_some());
        assert_eq!(summary.skipped, vec!["missing.html"]);
        assert_eq!(summary.written.len(), 2);
    }

    #[tokio::test]
    async fn test_processing_order_is_languages_then_files() {
        let storage = MockStorage::with_files(&[("a.html", "a"), ("b.html", "b")]);
        let localizer = SiteLocalizer::new(
            storage,
            config(&[("fr", "French"), ("es", "Spanish")], &["b.html", "a.html"]),
        )
        .unwrap();

        let summary = localizer.prepare().await.unwrap();

        let destinations: Vec<&str> = summary.written.iter().map(|r| r.destination.as_str()).collect();
        assert_eq!(destinations, vec!["fr/b.html", "fr/a.html", "es/b.html", "es/a.html"]);
        assert_eq!(summary.written_for("es").count(), 2);
    }

    #[tokio::test]
    async fn test_write_failure_aborts_run() {
        let storage = MockStorage::with_files(&[("a.html", "a"), ("b.html", "b")]).failing_write("fr/a.html");
        let localizer = SiteLocalizer::new(
            storage.clone(),
            config(&[("fr", "French"), ("es", "Spanish")], &["a.html", "b.html"]),
        )
        .unwrap();

        let err = localizer.prepare().await.unwrap_err();

        assert!(matches!(err, LocalizerError::IoError { operation: "write", .. }));
        assert!(storage.get_file("fr/b.html").await.is_none());
        assert!(!storage.has_dir("es").await);
    }

    #[tokio::test]
    async fn test_plan_writes_nothing() {
        let storage = MockStorage::with_files(&[("home.html", "home")]);
        let localizer = SiteLocalizer::new(
            storage.clone(),
            config(&[("fr", "French")], &["home.html", "gone.html"]),
        )
        .unwrap();

        let plan = localizer.plan().await.unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].destination, "fr/index.html");
        assert!(plan[0].source_present);
        assert_eq!(plan[1].destination, "fr/gone.html");
        assert!(!plan[1].source_present);
        assert!(!storage.has_dir("fr").await);
        assert!(storage.get_file("fr/index.html").await.is_none());
    }

    #[test]
    fn test_elapsed_millis_saturates() {
        assert_eq!(elapsed_millis(Duration::from_millis(1500)), 1500);
        assert_eq!(elapsed_millis(Duration::MAX), u64::MAX);
    }
}
