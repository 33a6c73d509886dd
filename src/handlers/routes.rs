use std::sync::Arc;

use axum::Router;
use ethers::signers::LocalWallet;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::v1::create_v1_router;
use crate::domain::session::AppSession;
use crate::infrastructure::backend::ProposalBackendClient;
use crate::infrastructure::contracts::ContractClient;

/// Shared handles for every request
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ContractClient>,
    pub backend: Arc<ProposalBackendClient>,
    pub session: Arc<AppSession>,
    /// Server-side signer used for votes, if configured
    pub wallet: Option<Arc<LocalWallet>>,
    pub default_chain_id: u64,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", create_v1_router(state))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
