use clap::Parser;
use folio::adapters::settings::FileStore;
use folio::config::cli::{Command, RenderArgs, SourceArgs, ThemeAction, ThemeArgs};
use folio::domain::ports::ConfigProvider;
use folio::page::theme::ThemeToggle;
use folio::utils::email::assemble_email;
use folio::utils::error::{ErrorSeverity, FolioError};
use folio::utils::{logger, validation::Validate};
use folio::{CliConfig, ConfiguredSource, ContentLoader, LocalStorage, SiteBuilder};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting folio");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.command {
        Command::Render(args) => render(args).await,
        Command::Theme(args) => theme(args),
        Command::Email(args) => email(args).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ folio failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn render(args: &RenderArgs) -> Result<(), FolioError> {
    let config = args.resolve()?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e);
    }

    let source = ConfiguredSource::from_config(&config)?;
    let layout = config.source.layout;
    let mounts = config.mounts.clone();

    let storage = LocalStorage::new(".".to_string());
    let mut builder = SiteBuilder::new(storage, config.clone(), layout, mounts);
    if let Some(path) = config.theme_store() {
        let toggle = ThemeToggle::load(FileStore::new(path))?;
        tracing::debug!("🎨 Stored theme: {}", toggle.mode().name());
        builder = builder.with_theme(toggle.mode());
    }

    let report = builder.build(source).await?;
    tracing::info!(
        "✅ Rendered {} sections ({} copy controls)",
        report.mounted.len(),
        report.controls.len()
    );
    println!("✅ Page rendered");
    println!("📁 Output saved to: {}", config.output_path());
    Ok(())
}

fn theme(args: &ThemeArgs) -> Result<(), FolioError> {
    let mut toggle = ThemeToggle::load(FileStore::new(args.store.as_str()))?;
    match args.action {
        ThemeAction::Show => println!("{}", toggle.mode().name()),
        ThemeAction::Toggle => {
            let mode = toggle.toggle()?;
            tracing::info!("🎨 Theme switched to {}", mode.name());
            println!("{}", mode.name());
        }
    }
    Ok(())
}

async fn email(args: &SourceArgs) -> Result<(), FolioError> {
    let config = args.resolve()?;
    let source = ConfiguredSource::from_config(&config)?;
    let content = ContentLoader::new(source, config.source.layout).load().await?;

    let obfuscated = content.contact.email.as_ref().or(content.intro.email.as_ref());
    let address = assemble_email(obfuscated);
    if address.is_empty() {
        tracing::warn!("No contact address configured");
    }
    println!("{}", address);
    Ok(())
}
