//! Wiring & DI. Entry point: load config, bootstrap the gateway, inject into the service, run UI.
//! No business logic here.

use dotenv::dotenv;
use niche_navigator::adapters::ai::GeminiAdapter;
use niche_navigator::adapters::ui::tui::TuiInputPort;
use niche_navigator::ports::{AnalysisGateway, InputPort};
use niche_navigator::shared::config::AppConfig;
use niche_navigator::usecases::AnalysisService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // Default to warn: info-level logs would interleave with the dashboard.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    let Some(api_key) = cfg.api_key() else {
        anyhow::bail!(
            "Set NICHE_NAV_API_KEY (or GEMINI_API_KEY) in env or .env. Get one from https://aistudio.google.com/apikey"
        );
    };

    // --- Gateway ---
    info!(
        model = %cfg.model_or_default(),
        api_base = %cfg.api_base_or_default(),
        "Gemini gateway configured"
    );
    let gateway: Arc<dyn AnalysisGateway> = Arc::new(GeminiAdapter::new(
        cfg.api_base_or_default(),
        api_key,
        cfg.model_or_default(),
    ));

    // --- Service & UI ---
    let analysis_service = Arc::new(AnalysisService::new(gateway));
    niche_navigator::adapters::ui::init_ui();
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(analysis_service));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
