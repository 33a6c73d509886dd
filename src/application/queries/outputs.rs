use ethers::abi::Token;
use ethers::types::{Address, Bytes, H256, U256};

use crate::domain::errors::ContractError;
use crate::infrastructure::contracts::types::ContractName;

/// Decoded outputs of one view call, with typed accessors that turn a shape
/// mismatch into a read error naming the call.
pub(crate) struct Outputs<'a> {
    contract: ContractName,
    function: &'a str,
    tokens: Vec<Token>,
}

impl<'a> Outputs<'a> {
    pub(crate) fn new(contract: ContractName, function: &'a str, tokens: Vec<Token>) -> Self {
        Self {
            contract,
            function,
            tokens,
        }
    }

    fn mismatch(&self, index: usize, expected: &str) -> ContractError {
        ContractError::read(
            self.contract,
            self.function,
            format!("expected {} at output {}, got {:?}", expected, index, self.tokens.get(index)),
        )
    }

    fn take(&self, index: usize) -> Option<Token> {
        self.tokens.get(index).cloned()
    }

    pub(crate) fn uint(&self, index: usize) -> Result<U256, ContractError> {
        self.take(index)
            .and_then(Token::into_uint)
            .ok_or_else(|| self.mismatch(index, "uint"))
    }

    pub(crate) fn string(&self, index: usize) -> Result<String, ContractError> {
        self.take(index)
            .and_then(Token::into_string)
            .ok_or_else(|| self.mismatch(index, "string"))
    }

    pub(crate) fn address(&self, index: usize) -> Result<Address, ContractError> {
        self.take(index)
            .and_then(Token::into_address)
            .ok_or_else(|| self.mismatch(index, "address"))
    }

    pub(crate) fn boolean(&self, index: usize) -> Result<bool, ContractError> {
        self.take(index)
            .and_then(Token::into_bool)
            .ok_or_else(|| self.mismatch(index, "bool"))
    }

    pub(crate) fn bytes32(&self, index: usize) -> Result<H256, ContractError> {
        self.take(index)
            .and_then(Token::into_fixed_bytes)
            .filter(|bytes| bytes.len() == 32)
            .map(|bytes| H256::from_slice(&bytes))
            .ok_or_else(|| self.mismatch(index, "bytes32"))
    }

    pub(crate) fn addresses(&self, index: usize) -> Result<Vec<Address>, ContractError> {
        self.array(index, Token::into_address, "address[]")
    }

    pub(crate) fn uints(&self, index: usize) -> Result<Vec<U256>, ContractError> {
        self.array(index, Token::into_uint, "uint256[]")
    }

    pub(crate) fn bytes_list(&self, index: usize) -> Result<Vec<Bytes>, ContractError> {
        self.array(index, |t| t.into_bytes().map(Bytes::from), "bytes[]")
    }

    fn array<T>(
        &self,
        index: usize,
        convert: impl Fn(Token) -> Option<T>,
        expected: &str,
    ) -> Result<Vec<T>, ContractError> {
        self.take(index)
            .and_then(Token::into_array)
            .and_then(|items| items.into_iter().map(&convert).collect::<Option<Vec<T>>>())
            .ok_or_else(|| self.mismatch(index, expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_access() {
        let outputs = Outputs::new(
            ContractName::Governance,
            "proposalDetailsAt",
            vec![
                Token::Uint(U256::from(5u64)),
                Token::Array(vec![Token::Address(Address::repeat_byte(1))]),
                Token::FixedBytes(vec![0xab; 32]),
            ],
        );
        assert_eq!(outputs.uint(0).unwrap(), U256::from(5u64));
        assert_eq!(outputs.addresses(1).unwrap(), vec![Address::repeat_byte(1)]);
        assert_eq!(outputs.bytes32(2).unwrap(), H256::repeat_byte(0xab));
    }

    #[test]
    fn test_shape_mismatch_is_a_read_error() {
        let outputs = Outputs::new(ContractName::DAOToken, "name", vec![Token::Uint(U256::one())]);
        let err = outputs.string(0).unwrap_err();
        assert!(matches!(err, ContractError::Read { contract: ContractName::DAOToken, .. }));
        assert!(outputs.uint(3).is_err());
    }

    #[test]
    fn test_mixed_array_is_rejected() {
        let outputs = Outputs::new(
            ContractName::Governance,
            "proposalDetailsAt",
            vec![Token::Array(vec![Token::Uint(U256::one()), Token::Bool(true)])],
        );
        assert!(outputs.uints(0).is_err());
    }
}
