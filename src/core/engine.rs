use crate::core::localizer::SiteLocalizer;
use crate::core::{ConfigProvider, PlannedOutput, RunSummary, Storage};
use crate::utils::error::{LocalizerError, Result};
use std::path::{Path, PathBuf};

pub struct LocalizerEngine<S: Storage, C: ConfigProvider> {
    localizer: SiteLocalizer<S, C>,
    report_path: Option<PathBuf>,
}

impl<S: Storage, C: ConfigProvider> LocalizerEngine<S, C> {
    pub fn new(localizer: SiteLocalizer<S, C>) -> Self {
        Self {
            localizer,
            report_path: None,
        }
    }

    pub fn with_report(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = Some(path.into());
        self
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let config = self.localizer.config();
        tracing::info!(
            "Preparing {} files for {} languages",
            config.tracked_files().len(),
            config.languages().len()
        );

        let summary = self.localizer.prepare().await?;

        tracing::info!(
            "Prepared {} files in {}ms",
            summary.written.len(),
            summary.elapsed_ms
        );
        if !summary.skipped.is_empty() {
            tracing::warn!(
                "Skipped {} missing source files: {}",
                summary.skipped.len(),
                summary.skipped.join(", ")
            );
        }

        if let Some(path) = &self.report_path {
            write_report(&summary, path).await?;
            tracing::info!("Run report saved to: {}", path.display());
        }

        Ok(summary)
    }

    pub async fn dry_run(&self) -> Result<Vec<PlannedOutput>> {
        let plan = self.localizer.plan().await?;

        for item in &plan {
            if item.source_present {
                println!("Would prepare: {} (from {})", item.destination, item.source);
            } else {
                println!("Would skip: {} (missing source)", item.source);
            }
        }

        Ok(plan)
    }
}

async fn write_report(summary: &RunSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| LocalizerError::io("write report", path.display().to_string(), e))
}
