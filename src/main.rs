use anyhow::Context;
use std::sync::Arc;
use syntaxgraph::graph::LoggingObserver;
use syntaxgraph::{AppState, HttpServer, ModelManager, ServerConfig, SyntaxRegistry};
use tracing::{info, warn};

fn load_config() -> anyhow::Result<ServerConfig> {
    let mut config = match std::env::args().nth(1) {
        Some(path) => ServerConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => ServerConfig::default(),
    };
    config.apply_env().context("reading environment overrides")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    // Initialize tracing
    let level = config.max_level().context("reading log level")?;
    tracing_subscriber::fmt().with_max_level(level).init();

    println!("syntaxgraph v{}", syntaxgraph::version());
    println!("==========================================");

    let registry = SyntaxRegistry::with_builtin();
    info!(syntaxes = ?registry.list_names(), "Syntax registry ready");

    let mut models = ModelManager::with_samples();
    models.attach_observer(Arc::new(LoggingObserver::new("model_manager")));
    if !models.set_current_model(&config.default_model) {
        warn!(model = %config.default_model, "Default model not found, keeping current selection");
    }

    let server = HttpServer::new(config, AppState::new(models, registry));

    println!("Server ready. Press Ctrl+C to stop.");
    server.start().await.context("HTTP server failed")?;

    Ok(())
}
