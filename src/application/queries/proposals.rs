use ethers::abi::Token;
use ethers::middleware::Middleware;
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, Bytes, U256};
use tracing::{debug, info, warn};

use crate::application::queries::outputs::Outputs;
use crate::domain::errors::ContractError;
use crate::domain::models::{CastVoteResponse, ProposalDetails, ProposalState, VoteSupport, VoteTally};
use crate::infrastructure::contracts::config::get_chain_by_id;
use crate::infrastructure::contracts::event_utils::extract_vote_cast;
use crate::infrastructure::contracts::utils::{divide_on_wei, TOKEN_DECIMALS};
use crate::infrastructure::contracts::{ContractClient, ContractName, ContractReader, ContractRegistry};

const GOVERNANCE: ContractName = ContractName::Governance;

async fn read_governance<'f, R: ContractReader>(
    reader: &R,
    function: &'f str,
    args: Vec<Token>,
    chain_id: u64,
) -> Result<Outputs<'f>, ContractError> {
    let tokens = reader.read_contract(GOVERNANCE, function, args, chain_id).await?;
    Ok(Outputs::new(GOVERNANCE, function, tokens))
}

pub async fn proposal_count<R: ContractReader>(reader: &R, chain_id: u64) -> Result<u64, ContractError> {
    let count = read_governance(reader, "proposalCount", vec![], chain_id).await?.uint(0)?;
    u64::try_from(count).map_err(|_| ContractError::read(GOVERNANCE, "proposalCount", "count exceeds u64"))
}

/// Most recently created proposal, or `None` when there are none
pub async fn last_proposal<R: ContractReader>(reader: &R, chain_id: u64) -> Result<Option<ProposalDetails>, ContractError> {
    let count = proposal_count(reader, chain_id).await?;
    if count == 0 {
        debug!("No proposals on chain {}", chain_id);
        return Ok(None);
    }

    proposal_by_index(reader, count - 1, chain_id).await.map(Some)
}

/// Proposal stored at `index` together with its proposer
pub async fn proposal_by_index<R: ContractReader>(
    reader: &R,
    index: u64,
    chain_id: u64,
) -> Result<ProposalDetails, ContractError> {
    let details = read_governance(
        reader,
        "proposalDetailsAt",
        vec![Token::Uint(U256::from(index))],
        chain_id,
    )
    .await?;

    let proposal_id = details.uint(0)?;
    let target_contracts = details.addresses(1)?;
    let eth_spent = details.uints(2)?;
    let calldatas = details.bytes_list(3)?;
    let hashed_description = details.bytes32(4)?;

    let proposer = read_governance(reader, "proposalProposer", vec![Token::Uint(proposal_id)], chain_id)
        .await?
        .address(0)?;

    let execution_function = match (target_contracts.first(), calldatas.first()) {
        (Some(target), Some(calldata)) => describe_call(reader.registry(), chain_id, *target, calldata),
        _ => None,
    };

    Ok(ProposalDetails {
        index,
        proposal_id,
        proposer,
        target_contracts,
        eth_spent,
        calldatas,
        hashed_description,
        execution_function,
    })
}

/// Against, for and abstain weights of a proposal
pub async fn proposal_votes<R: ContractReader>(
    reader: &R,
    proposal_id: U256,
    chain_id: u64,
) -> Result<VoteTally, ContractError> {
    let votes = read_governance(reader, "proposalVotes", vec![Token::Uint(proposal_id)], chain_id).await?;
    let against = votes.uint(0)?;
    let for_votes = votes.uint(1)?;
    let abstain = votes.uint(2)?;
    let total = against
        .checked_add(for_votes)
        .and_then(|sum| sum.checked_add(abstain))
        .ok_or_else(|| ContractError::read(GOVERNANCE, "proposalVotes", "vote total overflows uint256"))?;

    Ok(VoteTally {
        against: divide_on_wei(against, TOKEN_DECIMALS),
        for_votes: divide_on_wei(for_votes, TOKEN_DECIMALS),
        abstain: divide_on_wei(abstain, TOKEN_DECIMALS),
        total: divide_on_wei(total, TOKEN_DECIMALS),
    })
}

pub async fn proposal_state<R: ContractReader>(
    reader: &R,
    proposal_id: U256,
    chain_id: u64,
) -> Result<ProposalState, ContractError> {
    let raw = read_governance(reader, "state", vec![Token::Uint(proposal_id)], chain_id)
        .await?
        .uint(0)?;
    u8::try_from(raw)
        .ok()
        .and_then(|value| ProposalState::try_from(value).ok())
        .ok_or_else(|| ContractError::read(GOVERNANCE, "state", format!("unknown proposal state {}", raw)))
}

pub async fn has_voted<R: ContractReader>(
    reader: &R,
    proposal_id: U256,
    account: Address,
    chain_id: u64,
) -> Result<bool, ContractError> {
    read_governance(
        reader,
        "hasVoted",
        vec![Token::Uint(proposal_id), Token::Address(account)],
        chain_id,
    )
    .await?
    .boolean(0)
}

/// Votes required for the proposal to pass, at its snapshot
pub async fn proposal_quorum<R: ContractReader>(
    reader: &R,
    proposal_id: U256,
    chain_id: u64,
) -> Result<f64, ContractError> {
    let snapshot = read_governance(reader, "proposalSnapshot", vec![Token::Uint(proposal_id)], chain_id)
        .await?
        .uint(0)?;
    let quorum = read_governance(reader, "quorum", vec![Token::Uint(snapshot)], chain_id)
        .await?
        .uint(0)?;
    Ok(divide_on_wei(quorum, TOKEN_DECIMALS))
}

/// Tally and state of a proposal, with its quorum once voting has opened.
///
/// A pending proposal's snapshot is still in the future and Governor's
/// `quorum` reverts for it, so quorum is only read for later states. A failed
/// quorum read leaves it unknown instead of failing the tally.
pub async fn proposal_vote_status<R: ContractReader>(
    reader: &R,
    proposal_id: U256,
    chain_id: u64,
) -> Result<(VoteTally, ProposalState, Option<f64>), ContractError> {
    let (tally, state) = tokio::try_join!(
        proposal_votes(reader, proposal_id, chain_id),
        proposal_state(reader, proposal_id, chain_id),
    )?;

    if state == ProposalState::Pending {
        return Ok((tally, state, None));
    }

    let quorum = match proposal_quorum(reader, proposal_id, chain_id).await {
        Ok(quorum) => Some(quorum),
        Err(e) => {
            warn!("Quorum of proposal {} on chain {} unavailable: {}", proposal_id, chain_id, e);
            None
        }
    };
    Ok((tally, state, quorum))
}

/// Cast a vote with `wallet` on the chain it is bound to
pub async fn cast_vote<M>(
    client: &ContractClient<M>,
    proposal_id: U256,
    support: VoteSupport,
    wallet: Option<&LocalWallet>,
) -> Result<CastVoteResponse, ContractError>
where
    M: Middleware + Clone + 'static,
{
    let args = vec![Token::Uint(proposal_id), Token::Uint(U256::from(support.as_u8()))];
    let outcome = client.write_contract(GOVERNANCE, "castVote", args, wallet).await?;

    // write_contract succeeded, so the wallet is present and its chain is supported
    let chain_id = wallet.map(|w| w.chain_id()).unwrap_or_default();
    let chain = get_chain_by_id(chain_id)?;
    let governance = client.registry().address(GOVERNANCE, chain_id)?;

    let weight = match extract_vote_cast(&outcome.receipt, governance) {
        Some(event) => Some(divide_on_wei(event.weight, TOKEN_DECIMALS)),
        None => {
            warn!("No VoteCast event in receipt {:?}", outcome.transaction_hash);
            None
        }
    };

    info!("Vote {:?} cast on proposal {} ({})", support, proposal_id, chain.name);
    Ok(CastVoteResponse {
        transaction_hash: outcome.transaction_hash,
        block_number: outcome.block_number(),
        explorer_url: chain.transaction_url(outcome.transaction_hash),
        weight,
    })
}

/// Render a proposal execution step as `Contract.function(args)` using the
/// ABIs of the contracts deployed on the chain. Calldata forwarded to another
/// known contract is rendered one level deep.
pub fn describe_call(registry: &ContractRegistry, chain_id: u64, target: Address, calldata: &Bytes) -> Option<String> {
    let contract = registry.contract_at(chain_id, target)?;
    let rendered = render_call(registry, chain_id, contract.name, calldata, 1)?;
    Some(format!("{}.{}", contract.name, rendered))
}

fn render_call(
    registry: &ContractRegistry,
    chain_id: u64,
    name: ContractName,
    calldata: &[u8],
    depth: usize,
) -> Option<String> {
    if calldata.len() < 4 {
        return None;
    }
    let abi = registry.abi(name, chain_id).ok()?;
    let (selector, input) = calldata.split_at(4);
    let function = abi.functions().find(|f| f.short_signature()[..] == *selector)?;
    let args = function.decode_input(input).ok()?;

    // A bytes argument following an address is treated as a call on that address
    let mut forwarded_to = None;
    let mut rendered = Vec::with_capacity(args.len());
    for arg in &args {
        let text = match arg {
            Token::Address(address) => {
                let known = registry.contract_at(chain_id, *address).map(|c| c.name);
                forwarded_to = known;
                match known {
                    Some(contract) => contract.to_string(),
                    None => format!("{:?}", address),
                }
            }
            Token::Bytes(inner) if depth > 0 => forwarded_to
                .and_then(|contract| render_call(registry, chain_id, contract, inner, depth - 1))
                .unwrap_or_else(|| render_token(arg)),
            other => render_token(other),
        };
        rendered.push(text);
    }

    Some(format!("{}({})", function.name, rendered.join(", ")))
}

fn render_token(token: &Token) -> String {
    match token {
        Token::Address(address) => format!("{:?}", address),
        Token::Uint(value) => value.to_string(),
        Token::Int(value) => ethers::types::I256::from_raw(*value).to_string(),
        Token::Bool(value) => value.to_string(),
        Token::String(value) => format!("{:?}", value),
        Token::Bytes(bytes) | Token::FixedBytes(bytes) => format!("0x{}", hex::encode(bytes)),
        Token::Array(items) | Token::FixedArray(items) => {
            format!("[{}]", items.iter().map(render_token).collect::<Vec<_>>().join(", "))
        }
        Token::Tuple(items) => format!("({})", items.iter().map(render_token).collect::<Vec<_>>().join(", ")),
    }
}
