use ethers::types::Address;
use serde::Serialize;

use crate::domain::models::{StrategyMetrics, StrategySummary};
use crate::infrastructure::contracts::ChainDescriptor;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChainResponse {
    #[serde(flatten)]
    pub chain: &'static ChainDescriptor,
    /// Whether the deployment artifacts carry contracts for this chain
    pub contracts_deployed: bool,
}

#[derive(Debug, Serialize)]
pub struct ChainsResponse {
    pub default_chain_id: u64,
    pub chains: Vec<ChainResponse>,
}

#[derive(Debug, Serialize)]
pub struct StrategiesResponse {
    pub strategies: Vec<StrategyMetrics>,
    pub summary: StrategySummary,
}

#[derive(Debug, Serialize)]
pub struct VotingPowerResponse {
    pub account: Address,
    pub voting_power: f64,
}
