use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use ethers::signers::{LocalWallet, Signer};

use crate::infrastructure::contracts::config::{get_chain_by_id, DEFAULT_CHAIN_ID, SUPPORTED_CHAINS};

const DEFAULT_ADDRESSES_PATH: &str = "deployments/contract-addresses.json";
const DEFAULT_ABIS_PATH: &str = "deployments/contract-abis.json";
const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(name: &'static str, reason: impl ToString) -> Self {
        ConfigError::Invalid {
            name,
            reason: reason.to_string(),
        }
    }
}

/// Runtime settings read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addresses_path: PathBuf,
    pub abis_path: PathBuf,
    pub backend_url: String,
    pub default_chain_id: u64,
    /// RPC endpoints that replace a chain's default
    pub rpc_overrides: HashMap<u64, String>,
    /// Server-side signer, bound to `default_chain_id`
    pub wallet: Option<LocalWallet>,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let default_chain_id = match var("DEFAULT_CHAIN_ID") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::invalid("DEFAULT_CHAIN_ID", e))?,
            None => DEFAULT_CHAIN_ID,
        };
        get_chain_by_id(default_chain_id).map_err(|e| ConfigError::invalid("DEFAULT_CHAIN_ID", e))?;

        let rpc_overrides = SUPPORTED_CHAINS
            .iter()
            .filter_map(|chain| var(chain.rpc_env_var).map(|url| (chain.chain_id, url)))
            .collect();

        let wallet = match var("PRIVATE_KEY") {
            Some(key) => {
                let wallet = key
                    .trim()
                    .trim_start_matches("0x")
                    .parse::<LocalWallet>()
                    .map_err(|e| ConfigError::invalid("PRIVATE_KEY", e))?;
                Some(wallet.with_chain_id(default_chain_id))
            }
            None => None,
        };

        let host = var("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = var("PORT").unwrap_or_else(|| "8080".to_string());
        let bind_addr = format!("{}:{}", host, port)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid("HOST/PORT", e))?;

        Ok(Self {
            addresses_path: var("CONTRACT_ADDRESSES_PATH")
                .unwrap_or_else(|| DEFAULT_ADDRESSES_PATH.to_string())
                .into(),
            abis_path: var("CONTRACT_ABIS_PATH")
                .unwrap_or_else(|| DEFAULT_ABIS_PATH.to_string())
                .into(),
            backend_url: var("PROPOSAL_BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            default_chain_id,
            rpc_overrides,
            wallet,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.default_chain_id, 11155111);
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert!(config.rpc_overrides.is_empty());
        assert!(config.wallet.is_none());
    }

    #[test]
    fn test_rpc_override_and_wallet() {
        let config = config(&[
            ("DEFAULT_CHAIN_ID", "545"),
            ("FLOW_TESTNET_RPC_URL", "http://localhost:8545"),
            (
                "PRIVATE_KEY",
                "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
            ),
        ])
        .unwrap();

        assert_eq!(config.rpc_overrides.get(&545).map(String::as_str), Some("http://localhost:8545"));
        let wallet = config.wallet.unwrap();
        assert_eq!(wallet.chain_id(), 545);
        assert_eq!(
            format!("{:?}", wallet.address()),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(config(&[("DEFAULT_CHAIN_ID", "abc")]).is_err());
        assert!(config(&[("DEFAULT_CHAIN_ID", "1")]).is_err());
        assert!(config(&[("PRIVATE_KEY", "nope")]).is_err());
        assert!(config(&[("PORT", "http")]).is_err());
    }
}
