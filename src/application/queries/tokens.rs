use ethers::abi::Token;
use ethers::types::Address;
use tracing::debug;

use crate::application::queries::outputs::Outputs;
use crate::domain::errors::ContractError;
use crate::domain::models::{TokenMetrics, TreasuryBalances};
use crate::infrastructure::contracts::utils::{divide_on_wei, TOKEN_DECIMALS};
use crate::infrastructure::contracts::{ContractName, ContractReader};

async fn read<'f, R: ContractReader>(
    reader: &R,
    contract: ContractName,
    function: &'f str,
    args: Vec<Token>,
    chain_id: u64,
) -> Result<Outputs<'f>, ContractError> {
    let tokens = reader.read_contract(contract, function, args, chain_id).await?;
    Ok(Outputs::new(contract, function, tokens))
}

/// Total supply of `token` in display units
pub async fn total_supply<R: ContractReader>(
    reader: &R,
    token: ContractName,
    chain_id: u64,
) -> Result<f64, ContractError> {
    let supply = read(reader, token, "totalSupply", vec![], chain_id).await?.uint(0)?;
    Ok(divide_on_wei(supply, TOKEN_DECIMALS))
}

pub async fn token_name<R: ContractReader>(
    reader: &R,
    token: ContractName,
    chain_id: u64,
) -> Result<String, ContractError> {
    read(reader, token, "name", vec![], chain_id).await?.string(0)
}

pub async fn token_symbol<R: ContractReader>(
    reader: &R,
    token: ContractName,
    chain_id: u64,
) -> Result<String, ContractError> {
    read(reader, token, "symbol", vec![], chain_id).await?.string(0)
}

/// Supply, name and symbol of a token, read concurrently
pub async fn token_metrics<R: ContractReader>(
    reader: &R,
    token: ContractName,
    chain_id: u64,
) -> Result<TokenMetrics, ContractError> {
    let (total_supply, token_name, token_symbol) = tokio::try_join!(
        total_supply(reader, token, chain_id),
        token_name(reader, token, chain_id),
        token_symbol(reader, token, chain_id),
    )?;

    debug!("{} on chain {}: {} {}", token, chain_id, total_supply, token_symbol);
    Ok(TokenMetrics {
        total_supply,
        token_name,
        token_symbol,
    })
}

pub async fn dao_token_metrics<R: ContractReader>(reader: &R, chain_id: u64) -> Result<TokenMetrics, ContractError> {
    token_metrics(reader, ContractName::DAOToken, chain_id).await
}

pub async fn eth_token_metrics<R: ContractReader>(reader: &R, chain_id: u64) -> Result<TokenMetrics, ContractError> {
    token_metrics(reader, ContractName::ETHToken, chain_id).await
}

/// ETHToken held by the Treasury contract
pub async fn treasury_eth_token_balance<R: ContractReader>(reader: &R, chain_id: u64) -> Result<f64, ContractError> {
    let treasury = reader.resolve_contract(ContractName::Treasury, chain_id)?.address;
    let balance = read(
        reader,
        ContractName::ETHToken,
        "balanceOf",
        vec![Token::Address(treasury)],
        chain_id,
    )
    .await?
    .uint(0)?;
    Ok(divide_on_wei(balance, TOKEN_DECIMALS))
}

/// Native currency held by the Treasury contract
pub async fn treasury_ether_balance<R: ContractReader>(reader: &R, chain_id: u64) -> Result<f64, ContractError> {
    let balance = read(reader, ContractName::Treasury, "getEtherBalance", vec![], chain_id)
        .await?
        .uint(0)?;
    Ok(divide_on_wei(balance, TOKEN_DECIMALS))
}

pub async fn treasury_balances<R: ContractReader>(reader: &R, chain_id: u64) -> Result<TreasuryBalances, ContractError> {
    let treasury_address = reader.resolve_contract(ContractName::Treasury, chain_id)?.address;
    let (eth_token_balance, ether_balance) = tokio::try_join!(
        treasury_eth_token_balance(reader, chain_id),
        treasury_ether_balance(reader, chain_id),
    )?;

    Ok(TreasuryBalances {
        treasury_address,
        eth_token_balance,
        ether_balance,
    })
}

/// Delegated DAOToken votes of `account`
pub async fn voting_power<R: ContractReader>(
    reader: &R,
    account: Address,
    chain_id: u64,
) -> Result<f64, ContractError> {
    let votes = read(
        reader,
        ContractName::DAOToken,
        "getVotes",
        vec![Token::Address(account)],
        chain_id,
    )
    .await?
    .uint(0)?;
    Ok(divide_on_wei(votes, TOKEN_DECIMALS))
}
