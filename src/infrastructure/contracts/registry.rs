use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use ethers::abi::Abi;
use ethers::types::Address;
use tracing::{debug, info};

use crate::domain::errors::ContractError;
use crate::infrastructure::contracts::config::{get_chain_by_artifact_key, get_chain_by_id};
use crate::infrastructure::contracts::types::{ContractName, ResolvedContract};

/// Raw `{chain -> {contract -> address}}` artifact
pub type AddressArtifact = HashMap<String, HashMap<String, String>>;
/// Raw `{chain -> {contract -> abi}}` artifact
pub type AbiArtifact = HashMap<String, HashMap<String, Abi>>;

#[derive(Debug, Default)]
struct ChainContracts {
    addresses: HashMap<ContractName, Address>,
    abis: HashMap<ContractName, Arc<Abi>>,
}

/// Deployed contract addresses and ABIs per chain, loaded once at startup.
#[derive(Debug, Default)]
pub struct ContractRegistry {
    chains: HashMap<u64, ChainContracts>,
}

impl ContractRegistry {
    /// Load both deployment artifacts from disk
    pub fn load(addresses_path: impl AsRef<Path>, abis_path: impl AsRef<Path>) -> Result<Self, ContractError> {
        let addresses = read_artifact(addresses_path.as_ref())?;
        let abis = read_artifact(abis_path.as_ref())?;
        Self::from_artifacts(&addresses, &abis)
    }

    /// Build the registry from the JSON text of both artifacts
    pub fn from_artifacts(addresses_json: &str, abis_json: &str) -> Result<Self, ContractError> {
        let addresses: AddressArtifact = serde_json::from_str(addresses_json)
            .map_err(|e| ContractError::Configuration(format!("Failed to parse addresses artifact: {}", e)))?;
        let abis: AbiArtifact = serde_json::from_str(abis_json)
            .map_err(|e| ContractError::Configuration(format!("Failed to parse ABI artifact: {}", e)))?;
        Self::from_parts(addresses, abis)
    }

    /// Build the registry from already decoded artifacts. Chains and contracts
    /// the application does not know are skipped.
    pub fn from_parts(addresses: AddressArtifact, abis: AbiArtifact) -> Result<Self, ContractError> {
        let mut chains: HashMap<u64, ChainContracts> = HashMap::new();

        for (chain_key, contracts) in addresses {
            let Some(chain) = get_chain_by_artifact_key(&chain_key) else {
                debug!("Skipping addresses for unknown chain {}", chain_key);
                continue;
            };
            let entry = chains.entry(chain.chain_id).or_default();
            for (contract_key, address) in contracts {
                let Ok(name) = contract_key.parse::<ContractName>() else {
                    debug!("Skipping unknown contract {} on {}", contract_key, chain_key);
                    continue;
                };
                let address = address.parse::<Address>().map_err(|e| {
                    ContractError::InvalidAddress(format!("Invalid address for {} on {}: {}", name, chain_key, e))
                })?;
                entry.addresses.insert(name, address);
            }
        }

        for (chain_key, contracts) in abis {
            let Some(chain) = get_chain_by_artifact_key(&chain_key) else {
                debug!("Skipping ABIs for unknown chain {}", chain_key);
                continue;
            };
            let entry = chains.entry(chain.chain_id).or_default();
            for (contract_key, abi) in contracts {
                if let Ok(name) = contract_key.parse::<ContractName>() {
                    entry.abis.insert(name, Arc::new(abi));
                }
            }
        }

        let registry = Self { chains };
        info!("Loaded contract registry for chains {:?}", registry.claimed_chains());
        Ok(registry)
    }

    /// Chains that have at least one deployment entry, sorted by chain ID
    pub fn claimed_chains(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.chains.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Check that every required contract resolves on every claimed chain
    pub fn validate(&self, required: &[ContractName]) -> Result<(), ContractError> {
        let mut missing = Vec::new();
        for chain_id in self.claimed_chains() {
            for name in required {
                if let Err(e) = self.resolve(*name, chain_id) {
                    missing.push(e.to_string());
                }
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContractError::Configuration(missing.join("; ")))
        }
    }

    /// Resolve a logical contract name to its address and ABI on a chain
    pub fn resolve(&self, name: ContractName, chain_id: u64) -> Result<ResolvedContract, ContractError> {
        let address = self.address(name, chain_id)?;
        let abi = self.abi(name, chain_id)?;
        Ok(ResolvedContract {
            name,
            chain_id,
            address,
            abi,
        })
    }

    pub fn address(&self, name: ContractName, chain_id: u64) -> Result<Address, ContractError> {
        self.chains
            .get(&chain_id)
            .and_then(|contracts| contracts.addresses.get(&name))
            .copied()
            .ok_or_else(|| {
                ContractError::Configuration(format!(
                    "Contract address not found for {} on {}",
                    name,
                    chain_label(chain_id)
                ))
            })
    }

    pub fn abi(&self, name: ContractName, chain_id: u64) -> Result<Arc<Abi>, ContractError> {
        self.chains
            .get(&chain_id)
            .and_then(|contracts| contracts.abis.get(&name))
            .cloned()
            .ok_or_else(|| {
                ContractError::Configuration(format!(
                    "Contract ABI not found for {} on {}",
                    name,
                    chain_label(chain_id)
                ))
            })
    }

    /// Reverse lookup of a deployed address
    pub fn contract_at(&self, chain_id: u64, address: Address) -> Option<ResolvedContract> {
        let contracts = self.chains.get(&chain_id)?;
        let name = contracts
            .addresses
            .iter()
            .find(|(_, deployed)| **deployed == address)
            .map(|(name, _)| *name)?;
        self.resolve(name, chain_id).ok()
    }
}

fn read_artifact(path: &Path) -> Result<String, ContractError> {
    fs::read_to_string(path)
        .map_err(|e| ContractError::Configuration(format!("Failed to read artifact {}: {}", path.display(), e)))
}

fn chain_label(chain_id: u64) -> String {
    match get_chain_by_id(chain_id) {
        Ok(chain) => chain.artifact_key.to_string(),
        Err(_) => format!("chain {}", chain_id),
    }
}
