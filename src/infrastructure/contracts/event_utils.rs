use ethers::abi::{decode, ParamType, Token};
use ethers::types::{Address, TransactionReceipt, H256, U256};
use sha3::{Digest, Keccak256};

/// Calculate the keccak256 hash of an event signature
pub fn calculate_event_signature(event_signature: &str) -> H256 {
    let mut hasher = Keccak256::new();
    hasher.update(event_signature.as_bytes());
    H256::from_slice(&hasher.finalize())
}

/// Event signatures emitted by the Governance contract
pub mod event_signatures {
    use super::*;

    pub const VOTE_CAST: &str = "VoteCast(address,uint256,uint8,uint256,string)";

    pub fn vote_cast() -> H256 {
        calculate_event_signature(VOTE_CAST)
    }
}

/// Decoded `VoteCast` event
#[derive(Debug, Clone, PartialEq)]
pub struct VoteCastEvent {
    pub voter: Address,
    pub proposal_id: U256,
    pub support: u8,
    pub weight: U256,
    pub reason: String,
}

/// Find the `VoteCast` event emitted by `governance` in a receipt
pub fn extract_vote_cast(receipt: &TransactionReceipt, governance: Address) -> Option<VoteCastEvent> {
    let signature = event_signatures::vote_cast();

    receipt
        .logs
        .iter()
        .filter(|log| log.address == governance)
        .filter(|log| log.topics.first() == Some(&signature))
        .find_map(|log| {
            // Topic 1: address indexed voter
            let voter = Address::from(*log.topics.get(1)?);
            let tokens = decode(
                &[
                    ParamType::Uint(256),
                    ParamType::Uint(8),
                    ParamType::Uint(256),
                    ParamType::String,
                ],
                &log.data,
            )
            .ok()?;

            match tokens.as_slice() {
                [Token::Uint(proposal_id), Token::Uint(support), Token::Uint(weight), Token::String(reason)] => {
                    Some(VoteCastEvent {
                        voter,
                        proposal_id: *proposal_id,
                        support: support.low_u32() as u8,
                        weight: *weight,
                        reason: reason.clone(),
                    })
                }
                _ => None,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::abi::encode;
    use ethers::types::Log;

    #[test]
    fn test_event_signature_calculation() {
        // keccak256("Transfer(address,address,uint256)")
        let transfer = calculate_event_signature("Transfer(address,address,uint256)");
        assert_eq!(
            format!("{:?}", transfer),
            "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
    }

    #[test]
    fn test_vote_cast_signature() {
        // keccak256("VoteCast(address,uint256,uint8,uint256,string)")
        assert_eq!(
            format!("{:?}", event_signatures::vote_cast()),
            "0xb8e138887d0aa13bab447e82de9d5c1777041ecd21ca36ba824ff1e6c07ddda4"
        );
    }

    fn vote_cast_log(governance: Address, voter: Address, weight: U256) -> Log {
        Log {
            address: governance,
            topics: vec![event_signatures::vote_cast(), H256::from(voter)],
            data: encode(&[
                Token::Uint(U256::from(42u64)),
                Token::Uint(U256::one()),
                Token::Uint(weight),
                Token::String("".to_string()),
            ])
            .into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_extract_vote_cast() {
        let governance = Address::repeat_byte(0x22);
        let voter = Address::repeat_byte(0x99);
        let weight = U256::exp10(21);
        let receipt = TransactionReceipt {
            logs: vec![vote_cast_log(governance, voter, weight)],
            ..Default::default()
        };

        let event = extract_vote_cast(&receipt, governance).unwrap();
        assert_eq!(event.voter, voter);
        assert_eq!(event.proposal_id, U256::from(42u64));
        assert_eq!(event.support, 1);
        assert_eq!(event.weight, weight);
    }

    #[test]
    fn test_vote_cast_from_other_contract_is_ignored() {
        let governance = Address::repeat_byte(0x22);
        let receipt = TransactionReceipt {
            logs: vec![vote_cast_log(Address::repeat_byte(0x33), Address::repeat_byte(0x99), U256::one())],
            ..Default::default()
        };
        assert!(extract_vote_cast(&receipt, governance).is_none());
    }
}
