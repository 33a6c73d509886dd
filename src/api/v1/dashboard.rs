use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::api::dto::{ChainResponse, ChainsResponse, HealthResponse, StrategiesResponse, VotingPowerResponse};
use crate::api::errors::ApiResult;
use crate::api::validation::Validator;
use crate::application::queries;
use crate::domain::models::{TokenMetrics, TreasuryBalances};
use crate::handlers::AppState;
use crate::infrastructure::contracts::config::SUPPORTED_CHAINS;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Supported networks and whether the DAO is deployed on each
pub async fn get_chains(State(app_state): State<AppState>) -> Json<ChainsResponse> {
    let deployed = app_state.client.registry().claimed_chains();
    let chains = SUPPORTED_CHAINS
        .iter()
        .map(|chain| ChainResponse {
            chain,
            contracts_deployed: deployed.contains(&chain.chain_id),
        })
        .collect();

    Json(ChainsResponse {
        default_chain_id: app_state.default_chain_id,
        chains,
    })
}

pub async fn get_dao_token(
    State(app_state): State<AppState>,
    Path(chain_id): Path<u64>,
) -> ApiResult<Json<TokenMetrics>> {
    let metrics = queries::dao_token_metrics(app_state.client.as_ref(), chain_id).await?;
    Ok(Json(metrics))
}

pub async fn get_eth_token(
    State(app_state): State<AppState>,
    Path(chain_id): Path<u64>,
) -> ApiResult<Json<TokenMetrics>> {
    let metrics = queries::eth_token_metrics(app_state.client.as_ref(), chain_id).await?;
    Ok(Json(metrics))
}

pub async fn get_treasury(
    State(app_state): State<AppState>,
    Path(chain_id): Path<u64>,
) -> ApiResult<Json<TreasuryBalances>> {
    let balances = queries::treasury_balances(app_state.client.as_ref(), chain_id).await?;
    Ok(Json(balances))
}

pub async fn get_strategies(
    State(app_state): State<AppState>,
    Path(chain_id): Path<u64>,
) -> ApiResult<Json<StrategiesResponse>> {
    let (strategies, summary) = queries::strategies_summary(app_state.client.as_ref(), chain_id).await?;
    info!(
        "Strategies on chain {}: average APY {:.2}%",
        chain_id, summary.average_apy
    );
    Ok(Json(StrategiesResponse { strategies, summary }))
}

pub async fn get_voting_power(
    State(app_state): State<AppState>,
    Path((chain_id, account)): Path<(u64, String)>,
) -> ApiResult<Json<VotingPowerResponse>> {
    let account = Validator::parse_address(&account, "account")?;
    let voting_power = queries::voting_power(app_state.client.as_ref(), account, chain_id).await?;
    Ok(Json(VotingPowerResponse { account, voting_power }))
}
