use tracing::debug;

use crate::application::queries::outputs::Outputs;
use crate::domain::errors::ContractError;
use crate::domain::models::{StrategyMetrics, StrategySummary};
use crate::infrastructure::contracts::utils::{bps_to_percent, divide_on_wei, TOKEN_DECIMALS};
use crate::infrastructure::contracts::{ContractName, ContractReader};

/// A strategy slot of the Strategy contract and the protocol behind it
#[derive(Debug, Clone, Copy)]
struct StrategySlot {
    id: u8,
    protocol: &'static str,
    function: &'static str,
    description: &'static str,
}

const STRATEGIES: [StrategySlot; 3] = [
    StrategySlot {
        id: 1,
        protocol: "Aave",
        function: "getStrategy1Metrics",
        description: "Aave Protocol - Decentralized lending platform allowing your DAO to earn yield by supplying assets to liquidity pools and potentially borrowing against collateral for treasury optimization strategies.",
    },
    StrategySlot {
        id: 2,
        protocol: "Lido",
        function: "getStrategy2Metrics",
        description: "Lido Protocol - Liquid staking solution allowing your DAO to stake ETH and earn staking rewards while receiving liquid stETH tokens that can be used in other DeFi strategies and protocols.",
    },
    StrategySlot {
        id: 3,
        protocol: "Compound",
        function: "getStrategy3Metrics",
        description: "Compound Protocol - Algorithmic money market that enables your DAO to earn interest on idle treasury funds through automated lending while maintaining liquidity for governance decisions.",
    },
];

async fn strategy_metrics<R: ContractReader>(
    reader: &R,
    slot: StrategySlot,
    chain_id: u64,
) -> Result<StrategyMetrics, ContractError> {
    let tokens = reader
        .read_contract(ContractName::Strategy, slot.function, vec![], chain_id)
        .await?;
    let outputs = Outputs::new(ContractName::Strategy, slot.function, tokens);

    // apy, utilizationRate, riskAdjustedReturns and withdrawalLiquidity are basis points
    Ok(StrategyMetrics {
        strategy_id: slot.id,
        protocol: slot.protocol,
        apy: bps_to_percent(outputs.uint(0)?),
        tvl: divide_on_wei(outputs.uint(1)?, TOKEN_DECIMALS),
        utilization_rate: bps_to_percent(outputs.uint(2)?),
        risk_adjusted_returns: bps_to_percent(outputs.uint(3)?),
        withdrawal_liquidity: bps_to_percent(outputs.uint(4)?),
        description: slot.description,
        contract_description: outputs.string(5)?,
    })
}

/// Metrics of the three yield strategies, read concurrently
pub async fn strategies_metrics<R: ContractReader>(
    reader: &R,
    chain_id: u64,
) -> Result<Vec<StrategyMetrics>, ContractError> {
    let (first, second, third) = tokio::try_join!(
        strategy_metrics(reader, STRATEGIES[0], chain_id),
        strategy_metrics(reader, STRATEGIES[1], chain_id),
        strategy_metrics(reader, STRATEGIES[2], chain_id),
    )?;

    debug!("Loaded strategy metrics for chain {}", chain_id);
    Ok(vec![first, second, third])
}

pub async fn strategies_summary<R: ContractReader>(
    reader: &R,
    chain_id: u64,
) -> Result<(Vec<StrategyMetrics>, StrategySummary), ContractError> {
    let metrics = strategies_metrics(reader, chain_id).await?;
    let summary = StrategySummary::from_metrics(&metrics);
    Ok((metrics, summary))
}
