use clap::Parser;
use oop_models::utils::{logger, validation::Validate};
use oop_models::{CliConfig, ConsoleNarrator, DemoConfig, DemoEngine, DemoSettings};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (日誌格式取決於合併後的設定，尚未初始化)
    let config = match &cli.config {
        Some(path) => match DemoConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };
    let file_settings = config
        .as_ref()
        .map(DemoConfig::settings)
        .unwrap_or_else(DemoSettings::default);

    // 應用命令列覆蓋設定
    let settings = file_settings.with_overrides(&cli.scenarios, cli.format);

    // 初始化日誌
    logger::init_logger(settings.format.into(), cli.verbose);

    tracing::info!("Starting oop-demo");
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Some(config) = &config {
        if let Err(e) = config.validate() {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
        tracing::info!("Configuration '{}' loaded", config.name());
    }
    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let engine = DemoEngine::from_settings(&settings)?;
    let mut narrator = ConsoleNarrator::stdout(settings.format);

    match engine.run(&mut narrator) {
        Ok(summary) => {
            tracing::info!(
                "Ran {} scenario(s), {} lines in {} ms",
                summary.scenarios_run.len(),
                summary.lines_emitted,
                (summary.finished_at - summary.started_at).num_milliseconds()
            );
        }
        Err(e) => {
            tracing::error!("Demo failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }

    Ok(())
}
