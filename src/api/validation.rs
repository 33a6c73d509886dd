use ethers::types::{Address, U256};

use crate::api::errors::ApiError;

/// Validation utilities for path and body parameters
pub struct Validator;

impl Validator {
    /// Parse a 0x-prefixed, 40 hex character account address
    pub fn parse_address(address: &str, field_name: &str) -> Result<Address, ApiError> {
        let clean_address = address.strip_prefix("0x").unwrap_or(address);

        if clean_address.len() != 40 {
            return Err(ApiError::bad_request(format!(
                "{}: address must be 40 characters long (excluding 0x prefix)",
                field_name
            )));
        }
        if !clean_address.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ApiError::bad_request(format!(
                "{}: address must contain only hexadecimal characters",
                field_name
            )));
        }

        clean_address
            .parse::<Address>()
            .map_err(|_| ApiError::bad_request(format!("{}: invalid Ethereum address", field_name)))
    }

    /// Parse a proposal ID given in decimal, or in hex with a 0x prefix
    pub fn parse_proposal_id(value: &str, field_name: &str) -> Result<U256, ApiError> {
        let parsed = match value.strip_prefix("0x") {
            Some(hex) if !hex.is_empty() => U256::from_str_radix(hex, 16).ok(),
            Some(_) => None,
            None if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) => U256::from_dec_str(value).ok(),
            None => None,
        };
        parsed.ok_or_else(|| ApiError::bad_request(format!("{}: invalid proposal ID {}", field_name, value)))
    }
}
