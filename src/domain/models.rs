use ethers::types::{Address, Bytes, H256, U256};
use serde::{Deserialize, Serialize, Serializer};

pub(crate) fn serialize_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

fn serialize_decimals<S: Serializer>(values: &[U256], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|v| v.to_string()))
}

// ============ TOKEN MODELS ============

/// Supply and identity of an ERC-20 token, in display units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMetrics {
    pub total_supply: f64,
    pub token_name: String,
    pub token_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreasuryBalances {
    pub treasury_address: Address,
    pub eth_token_balance: f64,
    pub ether_balance: f64,
}

// ============ STRATEGY MODELS ============

/// Yield strategy metrics with basis points converted to percent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyMetrics {
    pub strategy_id: u8,
    pub protocol: &'static str,
    pub apy: f64,
    pub tvl: f64,
    pub utilization_rate: f64,
    pub risk_adjusted_returns: f64,
    pub withdrawal_liquidity: f64,
    /// What the protocol does for the treasury
    pub description: &'static str,
    /// Label reported by the Strategy contract
    pub contract_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategySummary {
    pub average_apy: f64,
    pub average_risk_adjusted_returns: f64,
    pub total_tvl: f64,
}

impl StrategySummary {
    /// Plain means of the per-strategy percentages; no further scaling.
    pub fn from_metrics(metrics: &[StrategyMetrics]) -> Self {
        if metrics.is_empty() {
            return Self {
                average_apy: 0.0,
                average_risk_adjusted_returns: 0.0,
                total_tvl: 0.0,
            };
        }

        let count = metrics.len() as f64;
        Self {
            average_apy: metrics.iter().map(|m| m.apy).sum::<f64>() / count,
            average_risk_adjusted_returns: metrics.iter().map(|m| m.risk_adjusted_returns).sum::<f64>() / count,
            total_tvl: metrics.iter().map(|m| m.tvl).sum(),
        }
    }
}

// ============ GOVERNANCE MODELS ============

/// A proposal as stored by the Governance contract
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProposalDetails {
    pub index: u64,
    #[serde(serialize_with = "serialize_decimal")]
    pub proposal_id: U256,
    pub proposer: Address,
    pub target_contracts: Vec<Address>,
    #[serde(serialize_with = "serialize_decimals")]
    pub eth_spent: Vec<U256>,
    pub calldatas: Vec<Bytes>,
    pub hashed_description: H256,
    /// First execution step rendered against the known ABIs
    pub execution_function: Option<String>,
}

/// Vote counts in display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoteTally {
    pub against: f64,
    #[serde(rename = "for")]
    pub for_votes: f64,
    pub abstain: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VotePercentages {
    pub against: f64,
    #[serde(rename = "for")]
    pub for_votes: f64,
    pub abstain: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuorumProgress {
    pub quorum: f64,
    /// Share of the quorum reached, capped at 100
    pub progress: f64,
    pub met: bool,
}

impl VoteTally {
    pub fn has_votes(&self) -> bool {
        self.total > 0.0
    }

    /// Share of each option in percent. All zero when nobody voted.
    pub fn percentages(&self) -> VotePercentages {
        if !self.has_votes() {
            return VotePercentages {
                against: 0.0,
                for_votes: 0.0,
                abstain: 0.0,
            };
        }

        VotePercentages {
            against: self.against / self.total * 100.0,
            for_votes: self.for_votes / self.total * 100.0,
            abstain: self.abstain / self.total * 100.0,
        }
    }

    pub fn quorum_progress(&self, quorum: f64) -> QuorumProgress {
        if quorum <= 0.0 {
            return QuorumProgress {
                quorum,
                progress: 100.0,
                met: true,
            };
        }

        QuorumProgress {
            quorum,
            progress: (self.total / quorum * 100.0).min(100.0),
            met: self.total >= quorum,
        }
    }
}

/// Ballot options of `castVote`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteSupport {
    Against = 0,
    For = 1,
    Abstain = 2,
}

impl VoteSupport {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Lifecycle of an OpenZeppelin Governor proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProposalState {
    Pending,
    Active,
    Canceled,
    Defeated,
    Succeeded,
    Queued,
    Expired,
    Executed,
}

impl TryFrom<u8> for ProposalState {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => ProposalState::Pending,
            1 => ProposalState::Active,
            2 => ProposalState::Canceled,
            3 => ProposalState::Defeated,
            4 => ProposalState::Succeeded,
            5 => ProposalState::Queued,
            6 => ProposalState::Expired,
            7 => ProposalState::Executed,
            other => return Err(other),
        })
    }
}

/// Confirmed vote transaction
#[derive(Debug, Clone, Serialize)]
pub struct CastVoteResponse {
    pub transaction_hash: H256,
    pub block_number: u64,
    pub explorer_url: String,
    /// Voting weight counted by the contract, in display units
    pub weight: Option<f64>,
}
