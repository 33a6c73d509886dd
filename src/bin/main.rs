use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use agent_dao_backend::config::AppConfig;
use agent_dao_backend::domain::session::AppSession;
use agent_dao_backend::handlers::routes::{create_router, AppState};
use agent_dao_backend::infrastructure::backend::ProposalBackendClient;
use agent_dao_backend::infrastructure::contracts::{ContractClient, ContractName, ContractRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    // Deployment artifacts are loaded once and shared read-only
    let registry = ContractRegistry::load(&config.addresses_path, &config.abis_path)?;
    registry.validate(&ContractName::REQUIRED).map_err(|e| {
        error!("Contract registry is incomplete: {}", e);
        e
    })?;

    let client = ContractClient::connect(Arc::new(registry), &config.rpc_overrides)?;
    let backend = ProposalBackendClient::new(&config.backend_url)?;

    match &config.wallet {
        Some(_) => info!("Server wallet bound to chain {}", config.default_chain_id),
        None => info!("No PRIVATE_KEY set; voting is disabled"),
    }

    let state = AppState {
        client: Arc::new(client),
        backend: Arc::new(backend),
        session: Arc::new(AppSession::new()),
        wallet: config.wallet.clone().map(Arc::new),
        default_chain_id: config.default_chain_id,
    };
    let app = create_router(state);

    // Start the server
    info!("Server running at http://{}", config.bind_addr);
    axum::serve(
        tokio::net::TcpListener::bind(config.bind_addr).await?,
        app.into_make_service(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Application shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Received shutdown signal");
}
