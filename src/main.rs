use clap::Parser;
use country_service::api::{self, build_router};
use country_service::domain::ports::{ConfigProvider, CountryStore};
use country_service::utils::{logger, validation::Validate};
use country_service::{
    CliConfig, CountryImporter, CountryService, RestCountriesClient, Result, SqliteCountryStore,
    TomlConfig,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting country-service");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config.as_ref()).await {
        tracing::error!("❌ country-service stopped: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> Result<Box<dyn ConfigProvider>> {
    let config: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)?.with_profile_override(cli.profile);
            config.validate()?;
            Box::new(config)
        }
        None => {
            cli.validate()?;
            Box::new(cli.clone())
        }
    };
    Ok(config)
}

async fn run(config: &dyn ConfigProvider) -> Result<()> {
    tracing::info!(
        "Profile: {}, database: {}",
        config.profile(),
        config.database_path()
    );

    let store: Arc<dyn CountryStore> = Arc::new(SqliteCountryStore::open(config.database_path())?);

    // 匯入完成後才開始對外服務
    let source = RestCountriesClient::from_config(config)?;
    if let Some(report) = CountryImporter::new(source, store.clone())
        .run_on_startup(config.profile())
        .await
    {
        tracing::info!("📊 Startup import saved {} countries", report.saved);
    }
    tracing::info!("Store holds {} countries", store.count().await?);

    let router = build_router(CountryService::new(store));
    let listener = TcpListener::bind(config.bind_addr()).await?;
    api::serve(listener, router).await
}
