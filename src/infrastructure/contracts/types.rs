use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ethers::abi::Abi;
use ethers::types::{Address, TransactionReceipt, H256};
use serde::{Deserialize, Serialize};

// ============ CONTRACT NAMES ============

/// Logical names of the contracts deployed for the DAO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractName {
    DAOToken,
    Governance,
    Treasury,
    ETHToken,
    Strategy,
    EntryPoint,
    SimpleAccountFactory,
    SimplePaymaster,
    AIAgentAccount,
    AIAgentEOA,
}

impl ContractName {
    /// Contracts every supported chain must have deployed.
    pub const REQUIRED: [ContractName; 5] = [
        ContractName::DAOToken,
        ContractName::Governance,
        ContractName::Treasury,
        ContractName::ETHToken,
        ContractName::Strategy,
    ];

    pub const ALL: [ContractName; 10] = [
        ContractName::DAOToken,
        ContractName::Governance,
        ContractName::Treasury,
        ContractName::ETHToken,
        ContractName::Strategy,
        ContractName::EntryPoint,
        ContractName::SimpleAccountFactory,
        ContractName::SimplePaymaster,
        ContractName::AIAgentAccount,
        ContractName::AIAgentEOA,
    ];

    /// Key used for this contract in the deployment artifacts
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractName::DAOToken => "DAOToken",
            ContractName::Governance => "Governance",
            ContractName::Treasury => "Treasury",
            ContractName::ETHToken => "ETHToken",
            ContractName::Strategy => "Strategy",
            ContractName::EntryPoint => "EntryPoint",
            ContractName::SimpleAccountFactory => "SimpleAccountFactory",
            ContractName::SimplePaymaster => "SimplePaymaster",
            ContractName::AIAgentAccount => "AIAgentAccount",
            ContractName::AIAgentEOA => "AIAgentEOA",
        }
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("Unknown contract name: {}", s))
    }
}

// ============ CHAIN CONFIGURATION TYPES ============

/// Native currency information
#[derive(Debug, Clone, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// How transactions are priced on a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeeModel {
    Legacy,
    Eip1559,
}

/// Static description of a supported network
#[derive(Debug, Clone, Serialize)]
pub struct ChainDescriptor {
    pub chain_id: u64,
    pub name: &'static str,
    /// Key of this chain in the deployment artifacts
    pub artifact_key: &'static str,
    /// Value of the `chain` parameter expected by the proposal backend
    pub backend_slug: &'static str,
    pub native_currency: NativeCurrency,
    pub rpc_urls: &'static [&'static str],
    pub explorer_url: &'static str,
    pub fee_model: FeeModel,
    #[serde(skip)]
    pub rpc_env_var: &'static str,
}

impl ChainDescriptor {
    pub fn default_rpc_url(&self) -> &'static str {
        self.rpc_urls[0]
    }

    pub fn transaction_url(&self, hash: H256) -> String {
        format!("{}/tx/{:?}", self.explorer_url, hash)
    }
}

// ============ CALL TYPES ============

/// A logical contract resolved on one chain
#[derive(Debug, Clone)]
pub struct ResolvedContract {
    pub name: ContractName,
    pub chain_id: u64,
    pub address: Address,
    pub abi: Arc<Abi>,
}

/// Result of a confirmed state-changing call
#[derive(Debug, Clone)]
pub struct WriteOutcome {
    pub transaction_hash: H256,
    pub receipt: TransactionReceipt,
}

impl WriteOutcome {
    pub fn block_number(&self) -> u64 {
        self.receipt.block_number.unwrap_or_default().as_u64()
    }
}
