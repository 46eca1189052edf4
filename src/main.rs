use anyhow::Context;
use clap::Parser;
use site_localizer::config::cli::Command;
use site_localizer::utils::{logger, validation::Validate};
use site_localizer::{
    CliConfig, LanguageSwitcher, LocalStorage, LocalizerEngine, LocalizerError, SiteConfig,
    SiteLocalizer,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            fail(e);
        }
    };

    if let Some(Command::SwitchUrl { path, lang }) = &cli.command {
        let switcher =
            LanguageSwitcher::new(&config.languages, &config.source_language, &config.main_page);
        let url = switcher
            .redirect_url(path, lang)
            .with_context(|| format!("Cannot switch '{}' to '{}'", path, lang))?;
        println!("{}", url);
        return Ok(());
    }

    tracing::info!("Site root: {}", config.root);
    let storage = LocalStorage::new(&config.root);
    let localizer = SiteLocalizer::new(storage, config).context("Failed to build rewrite rules")?;

    let mut engine = LocalizerEngine::new(localizer);
    if let Some(report) = &cli.report {
        engine = engine.with_report(report);
    }

    if cli.dry_run {
        tracing::info!("DRY RUN MODE - no files will be written");
        if let Err(e) = engine.dry_run().await {
            fail(e);
        }
        return Ok(());
    }

    println!("Preparing files for translation...");
    match engine.run().await {
        Ok(summary) => {
            println!();
            println!("Files copied and prepared!");
            if !summary.skipped.is_empty() {
                println!("Skipped (not found): {}", summary.skipped.join(", "));
            }
            println!();
            println!("Next step: Use a translation service like:");
            println!("- Google Cloud Translation API");
            println!("- DeepL API");
            println!("- Azure Translator");
            println!("- Or manual translation");
        }
        Err(e) => {
            tracing::error!(
                "Localization failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(e);
        }
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> Result<SiteConfig, LocalizerError> {
    let config = cli.site_config()?;
    config.validate()?;
    Ok(config)
}

fn fail(e: LocalizerError) -> ! {
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
