use chrono::Utc;
use clap::Parser;
use rentwatch::utils::{logger, validation::Validate};
use rentwatch::{CliConfig, CrawlEngine, CrawlError, ProvidersConfig, SqliteSink};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting rentwatch");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    let providers = match load_and_validate(&config) {
        Ok(providers) => providers,
        Err(e) => exit_fatal("Configuration validation failed", &e),
    };

    tracing::info!("✅ {} providers configured", providers.len());

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No requests or writes will occur");
        display_providers(&providers);
        return Ok(());
    }

    // 開啟資料庫並套用遷移，任何失敗都直接中止
    let mut sink = match SqliteSink::open(&config.database) {
        Ok(sink) => sink,
        Err(e) => exit_fatal("Unable to open database", &e),
    };
    match sink.migrate() {
        Ok(0) => {}
        Ok(applied) => tracing::info!("🗄️ Applied {} migrations to {}", applied, config.database),
        Err(e) => exit_fatal("Unable to apply migrations", &e),
    }

    let client = reqwest::Client::new();
    let engine = CrawlEngine::new(providers.build(&client), sink);

    let stats = engine.run(Utc::now()).await;

    // 摘要以單行 JSON 輸出到 stderr
    eprintln!("{}", serde_json::to_string(&stats)?);

    Ok(())
}

fn load_and_validate(config: &CliConfig) -> rentwatch::Result<ProvidersConfig> {
    config.validate()?;
    let providers = config.load_providers()?;
    providers.validate()?;
    Ok(providers)
}

fn exit_fatal(context: &str, e: &CrawlError) -> ! {
    tracing::error!("❌ {}: {}", context, e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

fn display_providers(providers: &ProvidersConfig) {
    println!("📋 Configured providers:");
    for (index, spec) in providers.providers.iter().enumerate() {
        println!("  {:>2}. [{}] {}", index + 1, spec.kind(), spec.name());
    }
    println!();
}
