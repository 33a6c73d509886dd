use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ethers::abi::{encode, parse_abi, Abi, Token};
use ethers::providers::{JsonRpcError, MockProvider, MockResponse, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, Bytes, Log, Transaction, TransactionReceipt, H256, U256, U64};

use crate::domain::errors::ContractError;
use crate::infrastructure::contracts::event_utils::event_signatures;
use crate::infrastructure::contracts::registry::{AbiArtifact, AddressArtifact};
use crate::infrastructure::contracts::{ContractClient, ContractName, ContractReader, ContractRegistry};

/// First Anvil development key
const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub const DAO_TOKEN: Address = Address::repeat_byte(0x11);
pub const GOVERNANCE: Address = Address::repeat_byte(0x22);
pub const TREASURY: Address = Address::repeat_byte(0x33);
pub const ETH_TOKEN: Address = Address::repeat_byte(0x44);
pub const STRATEGY: Address = Address::repeat_byte(0x55);

fn token_abi() -> Abi {
    parse_abi(&[
        "function totalSupply() view returns (uint256)",
        "function name() view returns (string)",
        "function symbol() view returns (string)",
        "function balanceOf(address account) view returns (uint256)",
        "function getVotes(address account) view returns (uint256)",
    ])
    .unwrap()
}

fn governance_abi() -> Abi {
    parse_abi(&[
        "function proposalCount() view returns (uint256)",
        "function proposalDetailsAt(uint256 index) view returns (uint256, address[], uint256[], bytes[], bytes32)",
        "function proposalProposer(uint256 proposalId) view returns (address)",
        "function proposalVotes(uint256 proposalId) view returns (uint256, uint256, uint256)",
        "function proposalSnapshot(uint256 proposalId) view returns (uint256)",
        "function quorum(uint256 timepoint) view returns (uint256)",
        "function state(uint256 proposalId) view returns (uint8)",
        "function hasVoted(uint256 proposalId, address account) view returns (bool)",
        "function castVote(uint256 proposalId, uint8 support) returns (uint256)",
        "event VoteCast(address indexed voter, uint256 proposalId, uint8 support, uint256 weight, string reason)",
    ])
    .unwrap()
}

fn treasury_abi() -> Abi {
    parse_abi(&[
        "function execute(address target, uint256 value, bytes data) returns (bytes)",
        "function getEtherBalance() view returns (uint256)",
        "function getTokenBalance(address token) view returns (uint256)",
    ])
    .unwrap()
}

fn strategy_abi() -> Abi {
    parse_abi(&[
        "function executeStrategy1(address token, uint256 amount)",
        "function executeStrategy2(address token, uint256 amount)",
        "function executeStrategy3(address token, uint256 amount)",
        "function getStrategy1Metrics() view returns (uint256, uint256, uint256, uint256, uint256, string)",
        "function getStrategy2Metrics() view returns (uint256, uint256, uint256, uint256, uint256, string)",
        "function getStrategy3Metrics() view returns (uint256, uint256, uint256, uint256, uint256, string)",
    ])
    .unwrap()
}

/// Registry with the five core contracts on Sepolia and Flow, nothing on Mantle
pub fn registry() -> ContractRegistry {
    let deployed = [
        (ContractName::DAOToken, DAO_TOKEN, token_abi()),
        (ContractName::Governance, GOVERNANCE, governance_abi()),
        (ContractName::Treasury, TREASURY, treasury_abi()),
        (ContractName::ETHToken, ETH_TOKEN, token_abi()),
        (ContractName::Strategy, STRATEGY, strategy_abi()),
    ];

    let mut addresses: AddressArtifact = HashMap::new();
    let mut abis: AbiArtifact = HashMap::new();
    for chain_key in ["sepolia", "flow"] {
        for (name, address, abi) in &deployed {
            addresses
                .entry(chain_key.to_string())
                .or_default()
                .insert(name.to_string(), format!("{:?}", address));
            abis.entry(chain_key.to_string())
                .or_default()
                .insert(name.to_string(), abi.clone());
        }
    }

    ContractRegistry::from_parts(addresses, abis).unwrap()
}

pub fn wallet(chain_id: u64) -> LocalWallet {
    TEST_PRIVATE_KEY.parse::<LocalWallet>().unwrap().with_chain_id(chain_id)
}

/// Block the mocked write transactions are mined in
pub const MINED_BLOCK: u64 = 100;

/// Contract client whose providers for `chain_ids` answer from one mock
pub fn mocked_client(chain_ids: &[u64]) -> (ContractClient<Provider<MockProvider>>, MockProvider) {
    let (provider, mock) = Provider::mocked();
    // Poll pending transactions without the default 7s delay
    let provider = provider.interval(Duration::from_millis(10));
    let providers = chain_ids.iter().map(|id| (*id, provider.clone())).collect();
    (ContractClient::with_providers(Arc::new(registry()), providers), mock)
}

/// Receipt of a mined transaction. `status` 1 is success, 0 a revert.
pub fn receipt(transaction_hash: H256, status: u64, logs: Vec<Log>) -> TransactionReceipt {
    TransactionReceipt {
        transaction_hash,
        block_number: Some(U64::from(MINED_BLOCK)),
        status: Some(U64::from(status)),
        logs,
        ..Default::default()
    }
}

/// `VoteCast` log of the fixture Governance contract
pub fn vote_cast_log(voter: Address, proposal_id: U256, support: u8, weight: U256) -> Log {
    Log {
        address: GOVERNANCE,
        topics: vec![event_signatures::vote_cast(), H256::from(voter)],
        data: encode(&[
            Token::Uint(proposal_id),
            Token::Uint(U256::from(support)),
            Token::Uint(weight),
            Token::String(String::new()),
        ])
        .into(),
        ..Default::default()
    }
}

/// Answers for the RPC calls a write makes on a legacy-fee chain before it
/// is broadcast: simulation, nonce, gas price and gas estimate.
fn pre_broadcast_answers() -> Vec<MockResponse> {
    vec![
        MockResponse::Value(serde_json::to_value(Bytes::from(encode(&[Token::Uint(U256::one())]))).unwrap()),
        MockResponse::Value(serde_json::to_value(U256::zero()).unwrap()),
        MockResponse::Value(serde_json::to_value(U256::from(1_000_000_000u64)).unwrap()),
        MockResponse::Value(serde_json::to_value(U256::from(90_000u64)).unwrap()),
    ]
}

/// The mock answers the most recently pushed response first
fn push_in_call_order(mock: &MockProvider, answers: Vec<MockResponse>) {
    for answer in answers.into_iter().rev() {
        mock.push_response(answer);
    }
}

/// Queue a full write on a legacy-fee chain: pre-broadcast calls, then
/// `eth_sendRawTransaction`, `eth_getTransactionByHash` and the receipt.
pub fn queue_write(mock: &MockProvider, receipt: TransactionReceipt) {
    let transaction_hash = receipt.transaction_hash;
    let mined = Transaction {
        hash: transaction_hash,
        block_number: Some(U64::from(MINED_BLOCK)),
        ..Default::default()
    };

    let mut answers = pre_broadcast_answers();
    answers.push(MockResponse::Value(serde_json::to_value(transaction_hash).unwrap()));
    answers.push(MockResponse::Value(serde_json::to_value(mined).unwrap()));
    answers.push(MockResponse::Value(serde_json::to_value(receipt).unwrap()));
    push_in_call_order(mock, answers);
}

/// Queue a write whose `eth_sendRawTransaction` is rejected by the node
pub fn queue_rejected_broadcast(mock: &MockProvider, message: &str) {
    let mut answers = pre_broadcast_answers();
    answers.push(MockResponse::Error(JsonRpcError {
        code: -32000,
        message: message.to_string(),
        data: None,
    }));
    push_in_call_order(mock, answers);
}

/// A read recorded by [`FakeReader`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub contract: ContractName,
    pub function: String,
    pub args: Vec<Token>,
    pub chain_id: u64,
}

/// In-memory contract reader answering from canned outputs
pub struct FakeReader {
    registry: ContractRegistry,
    responses: HashMap<(ContractName, String), Result<Vec<Token>, String>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeReader {
    pub fn new() -> Self {
        Self {
            registry: registry(),
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(mut self, contract: ContractName, function: &str, tokens: Vec<Token>) -> Self {
        self.responses.insert((contract, function.to_string()), Ok(tokens));
        self
    }

    pub fn failing(mut self, contract: ContractName, function: &str, reason: &str) -> Self {
        self.responses
            .insert((contract, function.to_string()), Err(reason.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ContractReader for FakeReader {
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
        self.calls.lock().unwrap().push(RecordedCall {
            contract: name,
            function: function.to_string(),
            args,
            chain_id,
        });

        match self.responses.get(&(name, function.to_string())) {
            Some(Ok(tokens)) => Ok(tokens.clone()),
            Some(Err(reason)) => Err(ContractError::read(name, function, reason)),
            None => Err(ContractError::read(name, function, "no canned response")),
        }
    }
}
