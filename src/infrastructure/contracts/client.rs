use ethers::{
    abi::{Function, Token},
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{
        transaction::eip2718::TypedTransaction, Bytes, Eip1559TransactionRequest,
        TransactionRequest, U64,
    },
};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::errors::{ContractError, WriteStage};
use crate::infrastructure::contracts::config::{get_chain_by_id, is_chain_supported, SUPPORTED_CHAINS};
use crate::infrastructure::contracts::registry::ContractRegistry;
use crate::infrastructure::contracts::types::*;

/// Read access to deployed contracts. Derived queries are written against
/// this trait so they can run on any chain client.
pub trait ContractReader: Send + Sync {
    fn registry(&self) -> &ContractRegistry;

    /// Call a view function and return its decoded outputs
    fn read_contract(
        &self,
        name: ContractName,
        function: &str,
        args: Vec<Token>,
        chain_id: u64,
    ) -> impl Future<Output = Result<Vec<Token>, ContractError>> + Send;

    fn resolve_contract(&self, name: ContractName, chain_id: u64) -> Result<ResolvedContract, ContractError> {
        self.registry().resolve(name, chain_id)
    }
}

// Chain-abstracted client for the DAO contracts. Holds one provider per
// supported chain and no other state.
#[derive(Clone)]
pub struct ContractClient<M = Provider<Http>> {
    registry: Arc<ContractRegistry>,
    providers: HashMap<u64, M>,
}

impl ContractClient<Provider<Http>> {
    /// Create HTTP providers for every supported chain. `rpc_overrides`
    /// replaces the default endpoint of a chain.
    pub fn connect(
        registry: Arc<ContractRegistry>,
        rpc_overrides: &HashMap<u64, String>,
    ) -> Result<Self, ContractError> {
        let mut providers = HashMap::new();
        for chain in SUPPORTED_CHAINS.iter() {
            let rpc_url = rpc_overrides
                .get(&chain.chain_id)
                .map(String::as_str)
                .unwrap_or_else(|| chain.default_rpc_url());

            let provider = Provider::<Http>::try_from(rpc_url)
                .map_err(|e| ContractError::RpcError(format!("{}: {}", rpc_url, e)))?;
            debug!("Provider for {} ({}) at {}", chain.name, chain.chain_id, rpc_url);
            providers.insert(chain.chain_id, provider);
        }

        Ok(Self { registry, providers })
    }
}

impl<M> ContractClient<M>
where
    M: Middleware + Clone + 'static,
{
    /// Build a client over existing providers keyed by chain ID
    pub fn with_providers(registry: Arc<ContractRegistry>, providers: HashMap<u64, M>) -> Self {
        Self { registry, providers }
    }

    pub fn registry(&self) -> &ContractRegistry {
        &self.registry
    }

    fn provider(&self, chain_id: u64) -> Result<&M, ContractError> {
        if !is_chain_supported(chain_id) {
            return Err(ContractError::UnsupportedChain(chain_id));
        }
        self.providers
            .get(&chain_id)
            .ok_or(ContractError::UnsupportedChain(chain_id))
    }

    /// Read a view function on a logical contract
    pub async fn read(
        &self,
        name: ContractName,
        function: &str,
        args: Vec<Token>,
        chain_id: u64,
    ) -> Result<Vec<Token>, ContractError> {
        let provider = self.provider(chain_id)?;
        let target = self.registry.resolve(name, chain_id)?;
        let abi_function = lookup_function(&target, function)
            .map_err(|reason| ContractError::read(name, function, reason))?;
        let data = abi_function
            .encode_input(&args)
            .map_err(|e| ContractError::read(name, function, e))?;

        debug!("eth_call {}.{} on chain {}", name, function, chain_id);
        let tx: TypedTransaction = TransactionRequest::new().to(target.address).data(data).into();
        let output = provider.call(&tx, None).await.map_err(|e| {
            warn!("Read of {}.{} on chain {} failed: {}", name, function, chain_id, e);
            ContractError::read(name, function, e)
        })?;

        abi_function
            .decode_output(&output)
            .map_err(|e| ContractError::read(name, function, format!("failed to decode output: {}", e)))
    }

    /// Simulate, sign, submit and confirm a state-changing call. The chain is
    /// the one the wallet is bound to.
    pub async fn write_contract(
        &self,
        name: ContractName,
        function: &str,
        args: Vec<Token>,
        wallet: Option<&LocalWallet>,
    ) -> Result<WriteOutcome, ContractError> {
        let wallet = wallet.ok_or(ContractError::WalletNotConnected)?;
        let chain_id = wallet.chain_id();
        let chain = get_chain_by_id(chain_id)?;
        let provider = self.provider(chain_id)?;
        let target = self.registry.resolve(name, chain_id)?;

        let abi_function = lookup_function(&target, function)
            .map_err(|reason| ContractError::write(name, function, WriteStage::Simulate, reason))?;
        let data = abi_function
            .encode_input(&args)
            .map_err(|e| ContractError::write(name, function, WriteStage::Simulate, e))?;
        let tx = build_transaction(chain.fee_model, wallet, &target, data.into());

        // Surface reverts before anything is signed
        provider.call(&tx, None).await.map_err(|e| {
            warn!("Simulation of {}.{} on {} reverted: {}", name, function, chain.name, e);
            ContractError::write(name, function, WriteStage::Simulate, e)
        })?;

        let client = SignerMiddleware::new(provider.clone(), wallet.clone());
        let pending_tx = client
            .send_transaction(tx, None)
            .await
            .map_err(|e| ContractError::write(name, function, WriteStage::Broadcast, e))?;
        let transaction_hash = pending_tx.tx_hash();
        info!("Submitted {}.{} on {}: {:?}", name, function, chain.name, transaction_hash);

        // Wait for the transaction to be mined
        let receipt = pending_tx
            .confirmations(1)
            .await
            .map_err(|e| ContractError::write(name, function, WriteStage::Confirm, e))?
            .ok_or_else(|| ContractError::write(name, function, WriteStage::Confirm, "No transaction receipt"))?;

        if receipt.status == Some(U64::zero()) {
            return Err(ContractError::write(
                name,
                function,
                WriteStage::Execution,
                format!("Transaction {:?} reverted", transaction_hash),
            ));
        }

        info!(
            "Confirmed {}.{} in block {}",
            name,
            function,
            receipt.block_number.unwrap_or_default()
        );
        Ok(WriteOutcome {
            transaction_hash,
            receipt,
        })
    }
}

impl<M> ContractReader for ContractClient<M>
where
    M: Middleware + Clone + 'static,
{
    fn registry(&self) -> &ContractRegistry {
        &self.registry
    }

    async fn read_contract(
        &self,
        name: ContractName,
        function: &str,
        args: Vec<Token>,
        chain_id: u64,
    ) -> Result<Vec<Token>, ContractError> {
        self.read(name, function, args, chain_id).await
    }
}

fn lookup_function<'a>(target: &'a ResolvedContract, function: &str) -> Result<&'a Function, String> {
    target
        .abi
        .function(function)
        .map_err(|_| format!("function {} not found in ABI of {}", function, target.name))
}

fn build_transaction(
    fee_model: FeeModel,
    wallet: &LocalWallet,
    target: &ResolvedContract,
    data: Bytes,
) -> TypedTransaction {
    match fee_model {
        FeeModel::Legacy => TransactionRequest::new()
            .from(wallet.address())
            .to(target.address)
            .data(data)
            .chain_id(wallet.chain_id())
            .into(),
        FeeModel::Eip1559 => Eip1559TransactionRequest::new()
            .from(wallet.address())
            .to(target.address)
            .data(data)
            .chain_id(wallet.chain_id())
            .into(),
    }
}
