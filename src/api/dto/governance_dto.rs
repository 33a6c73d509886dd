use serde::{Deserialize, Serialize};

use crate::domain::models::{ProposalDetails, ProposalState, QuorumProgress, VotePercentages, VoteSupport, VoteTally};

#[derive(Debug, Serialize)]
pub struct LatestProposalResponse {
    pub proposal: Option<ProposalDetails>,
}

#[derive(Debug, Serialize)]
pub struct ProposalVotesResponse {
    pub proposal_id: String,
    pub state: ProposalState,
    pub tally: VoteTally,
    pub percentages: VotePercentages,
    /// `None` while the proposal is pending or when quorum can't be read
    pub quorum: Option<QuorumProgress>,
}

#[derive(Debug, Deserialize)]
pub struct CastVoteRequest {
    pub support: VoteSupport,
}

#[derive(Debug, Deserialize)]
pub struct SelectProposalRequest {
    pub chain_id: u64,
    pub index: u64,
}
