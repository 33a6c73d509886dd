use axum::{
    extract::{Path, State},
    Json,
};
use ethers::signers::Signer;
use tracing::info;

use crate::api::dto::{CastVoteRequest, LatestProposalResponse, ProposalVotesResponse, SelectProposalRequest};
use crate::api::errors::{ApiError, ApiResult};
use crate::api::validation::Validator;
use crate::application::queries;
use crate::domain::errors::ContractError;
use crate::domain::models::{CastVoteResponse, ProposalDetails};
use crate::domain::session::SelectedProposal;
use crate::handlers::AppState;

pub async fn get_latest_proposal(
    State(app_state): State<AppState>,
    Path(chain_id): Path<u64>,
) -> ApiResult<Json<LatestProposalResponse>> {
    let proposal = queries::last_proposal(app_state.client.as_ref(), chain_id).await?;
    Ok(Json(LatestProposalResponse { proposal }))
}

pub async fn get_proposal_by_index(
    State(app_state): State<AppState>,
    Path((chain_id, index)): Path<(u64, u64)>,
) -> ApiResult<Json<ProposalDetails>> {
    let proposal = queries::proposal_by_index(app_state.client.as_ref(), index, chain_id).await?;
    Ok(Json(proposal))
}

/// Tally, shares and, once voting has opened, quorum progress of a proposal
pub async fn get_proposal_votes(
    State(app_state): State<AppState>,
    Path((chain_id, proposal_id)): Path<(u64, String)>,
) -> ApiResult<Json<ProposalVotesResponse>> {
    let id = Validator::parse_proposal_id(&proposal_id, "proposal_id")?;
    let reader = app_state.client.as_ref();

    let (tally, state, quorum) = queries::proposal_vote_status(reader, id, chain_id).await?;

    Ok(Json(ProposalVotesResponse {
        proposal_id: id.to_string(),
        state,
        tally,
        percentages: tally.percentages(),
        quorum: quorum.map(|quorum| tally.quorum_progress(quorum)),
    }))
}

/// Cast a vote with the server wallet
pub async fn cast_vote(
    State(app_state): State<AppState>,
    Path((chain_id, proposal_id)): Path<(u64, String)>,
    Json(request): Json<CastVoteRequest>,
) -> ApiResult<Json<CastVoteResponse>> {
    let id = Validator::parse_proposal_id(&proposal_id, "proposal_id")?;
    let wallet = app_state.wallet.as_deref().ok_or(ContractError::WalletNotConnected)?;
    if wallet.chain_id() != chain_id {
        return Err(ApiError::bad_request(format!(
            "Server wallet is bound to chain {}, not {}",
            wallet.chain_id(),
            chain_id
        )));
    }

    let response = queries::cast_vote(app_state.client.as_ref(), id, request.support, Some(wallet)).await?;
    Ok(Json(response))
}

/// Ask the proposal backend to draft and submit a new proposal
pub async fn draft_proposal(
    State(app_state): State<AppState>,
    Path(chain_id): Path<u64>,
) -> ApiResult<Json<serde_json::Value>> {
    let response = app_state.backend.submit_proposal_creation(chain_id).await?;
    info!("Proposal drafted on chain {}", chain_id);
    Ok(Json(response))
}

pub async fn execute_proposal(
    State(app_state): State<AppState>,
    Path(chain_id): Path<u64>,
) -> ApiResult<Json<serde_json::Value>> {
    let response = app_state.backend.execute_proposal_creation(chain_id).await?;
    info!("Proposal executed on chain {}", chain_id);
    Ok(Json(response))
}

pub async fn get_selected_proposal(State(app_state): State<AppState>) -> Json<Option<SelectedProposal>> {
    Json(app_state.session.selected_proposal())
}

/// Open a proposal; it must exist on the chain
pub async fn select_proposal(
    State(app_state): State<AppState>,
    Json(request): Json<SelectProposalRequest>,
) -> ApiResult<Json<SelectedProposal>> {
    let proposal = queries::proposal_by_index(app_state.client.as_ref(), request.index, request.chain_id).await?;
    let selected = SelectedProposal {
        chain_id: request.chain_id,
        index: proposal.index,
        proposal_id: proposal.proposal_id,
    };

    app_state.session.select_proposal(Some(selected.clone()));
    Ok(Json(selected))
}

pub async fn clear_selected_proposal(State(app_state): State<AppState>) -> Json<Option<SelectedProposal>> {
    app_state.session.select_proposal(None);
    Json(None)
}
