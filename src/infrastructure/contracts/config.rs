use crate::domain::errors::ContractError;
use crate::infrastructure::contracts::types::{ChainDescriptor, FeeModel, NativeCurrency};

pub const SEPOLIA_CHAIN_ID: u64 = 11155111;
pub const ZIRCUIT_GARFIELD_CHAIN_ID: u64 = 48898;
pub const FLOW_TESTNET_CHAIN_ID: u64 = 545;
pub const MANTLE_SEPOLIA_CHAIN_ID: u64 = 5003;

pub const DEFAULT_CHAIN_ID: u64 = SEPOLIA_CHAIN_ID;

/// Every network the application can talk to
pub static SUPPORTED_CHAINS: [ChainDescriptor; 4] = [
    // Sepolia testnet
    ChainDescriptor {
        chain_id: SEPOLIA_CHAIN_ID,
        name: "Sepolia",
        artifact_key: "sepolia",
        backend_slug: "ethereum",
        native_currency: NativeCurrency {
            name: "Sepolia Ether",
            symbol: "ETH",
            decimals: 18,
        },
        rpc_urls: &["https://sepolia.drpc.org"],
        explorer_url: "https://sepolia.etherscan.io",
        fee_model: FeeModel::Eip1559,
        rpc_env_var: "SEPOLIA_RPC_URL",
    },
    // Zircuit Garfield testnet
    ChainDescriptor {
        chain_id: ZIRCUIT_GARFIELD_CHAIN_ID,
        name: "Zircuit Garfield Testnet",
        artifact_key: "garfield",
        backend_slug: "zuircuit",
        native_currency: NativeCurrency {
            name: "Ether",
            symbol: "ETH",
            decimals: 18,
        },
        rpc_urls: &["https://garfield-testnet.zircuit.com"],
        explorer_url: "https://explorer.garfield-testnet.zircuit.com",
        fee_model: FeeModel::Eip1559,
        rpc_env_var: "ZIRCUIT_GARFIELD_RPC_URL",
    },
    // Flow EVM testnet
    ChainDescriptor {
        chain_id: FLOW_TESTNET_CHAIN_ID,
        name: "Flow EVM Testnet",
        artifact_key: "flow",
        backend_slug: "flow",
        native_currency: NativeCurrency {
            name: "Flow",
            symbol: "FLOW",
            decimals: 18,
        },
        rpc_urls: &["https://testnet.evm.nodes.onflow.org"],
        explorer_url: "https://evm-testnet.flowscan.io",
        fee_model: FeeModel::Legacy,
        rpc_env_var: "FLOW_TESTNET_RPC_URL",
    },
    // Mantle Sepolia testnet
    ChainDescriptor {
        chain_id: MANTLE_SEPOLIA_CHAIN_ID,
        name: "Mantle Sepolia Testnet",
        artifact_key: "mantle",
        backend_slug: "mantle",
        native_currency: NativeCurrency {
            name: "MNT",
            symbol: "MNT",
            decimals: 18,
        },
        rpc_urls: &["https://rpc.sepolia.mantle.xyz"],
        explorer_url: "https://explorer.sepolia.mantle.xyz",
        fee_model: FeeModel::Legacy,
        rpc_env_var: "MANTLE_SEPOLIA_RPC_URL",
    },
];

/// Get chain configuration by chain ID
pub fn get_chain_by_id(chain_id: u64) -> Result<&'static ChainDescriptor, ContractError> {
    SUPPORTED_CHAINS
        .iter()
        .find(|chain| chain.chain_id == chain_id)
        .ok_or(ContractError::UnsupportedChain(chain_id))
}

/// Get chain configuration by its deployment artifact key
pub fn get_chain_by_artifact_key(key: &str) -> Option<&'static ChainDescriptor> {
    SUPPORTED_CHAINS.iter().find(|chain| chain.artifact_key == key)
}

/// Validate if a chain ID is supported
pub fn is_chain_supported(chain_id: u64) -> bool {
    SUPPORTED_CHAINS.iter().any(|chain| chain.chain_id == chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_chain_id() {
        let chain = get_chain_by_id(SEPOLIA_CHAIN_ID).unwrap();
        assert_eq!(chain.name, "Sepolia");
        assert_eq!(chain.artifact_key, "sepolia");
        assert_eq!(chain.native_currency.decimals, 18);
        assert!(!chain.default_rpc_url().is_empty());
    }

    #[test]
    fn test_unknown_chain_is_rejected() {
        let err = get_chain_by_id(1).unwrap_err();
        assert!(matches!(err, ContractError::UnsupportedChain(1)));
        assert!(!is_chain_supported(31337));
    }

    #[test]
    fn test_backend_slugs() {
        let slugs: Vec<(u64, &str)> = SUPPORTED_CHAINS
            .iter()
            .map(|c| (c.chain_id, c.backend_slug))
            .collect();
        assert_eq!(
            slugs,
            vec![
                (11155111, "ethereum"),
                (48898, "zuircuit"),
                (545, "flow"),
                (5003, "mantle"),
            ]
        );
    }

    #[test]
    fn test_artifact_keys_are_unique() {
        for chain in SUPPORTED_CHAINS.iter() {
            let found = get_chain_by_artifact_key(chain.artifact_key).unwrap();
            assert_eq!(found.chain_id, chain.chain_id);
        }
        assert!(get_chain_by_artifact_key("localhost").is_none());
    }
}
