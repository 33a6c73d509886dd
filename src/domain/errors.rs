use std::fmt;

use crate::infrastructure::contracts::types::ContractName;

/// Stage of a state-changing call at which it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    Simulate,
    Broadcast,
    Confirm,
    Execution,
}

impl fmt::Display for WriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            WriteStage::Simulate => "simulation",
            WriteStage::Broadcast => "broadcast",
            WriteStage::Confirm => "confirmation",
            WriteStage::Execution => "execution",
        };
        f.write_str(stage)
    }
}

/// Contract interaction errors
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unsupported chain ID: {0}")]
    UnsupportedChain(u64),

    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Read of {contract}.{function} failed: {reason}")]
    Read {
        contract: ContractName,
        function: String,
        reason: String,
    },

    #[error("Wallet not connected. Please connect your wallet first.")]
    WalletNotConnected,

    #[error("Write of {contract}.{function} failed during {stage}: {reason}")]
    Write {
        contract: ContractName,
        function: String,
        stage: WriteStage,
        reason: String,
    },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

impl ContractError {
    pub fn read(contract: ContractName, function: &str, reason: impl ToString) -> Self {
        ContractError::Read {
            contract,
            function: function.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write(contract: ContractName, function: &str, stage: WriteStage, reason: impl ToString) -> Self {
        ContractError::Write {
            contract,
            function: function.to_string(),
            stage,
            reason: reason.to_string(),
        }
    }

    /// Stage at which a write failed, if this is a write error.
    pub fn write_stage(&self) -> Option<WriteStage> {
        match self {
            ContractError::Write { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

/// Fixed-point conversion errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("Amount is not a finite number: {0}")]
    NotFinite(f64),

    #[error("Amount must not be negative: {0}")]
    Negative(f64),

    #[error("Amount does not fit in uint256: {0}")]
    Overflow(String),
}

/// Proposal backend errors
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Unsupported chain ID: {0}")]
    UnsupportedChain(u64),

    #[error("Invalid backend URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },
}
