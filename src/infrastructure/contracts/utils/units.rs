use ethers::types::U256;

use crate::domain::errors::UnitError;

/// Decimals used by every DAO token
pub const TOKEN_DECIMALS: u8 = 18;

/// Basis points in one percent
const BPS_PER_PERCENT: f64 = 100.0;

/// Converts a base-unit amount to display units (`amount / 10^decimals`).
///
/// Precision is that of an `f64`: amounts are for display, not settlement.
pub fn divide_on_wei(amount: U256, decimals: u8) -> f64 {
    u256_to_f64(amount) / 10f64.powi(decimals as i32)
}

/// Converts a display amount back to base units, rounding to the nearest unit.
pub fn multiply_on_wei(amount: f64, decimals: u8) -> Result<U256, UnitError> {
    if !amount.is_finite() {
        return Err(UnitError::NotFinite(amount));
    }
    if amount < 0.0 {
        return Err(UnitError::Negative(amount));
    }

    let scaled = (amount * 10f64.powi(decimals as i32)).round();
    if !scaled.is_finite() {
        return Err(UnitError::Overflow(amount.to_string()));
    }
    // -0.0 passes the sign check but formats as "-0"
    if scaled == 0.0 {
        return Ok(U256::zero());
    }

    // `{:.0}` prints the exact integer value of the float
    let digits = format!("{:.0}", scaled);
    U256::from_dec_str(&digits).map_err(|_| UnitError::Overflow(digits))
}

/// Nearest `f64` to a uint256 value
pub fn u256_to_f64(value: U256) -> f64 {
    if value <= U256::from(u128::MAX) {
        return value.as_u128() as f64;
    }
    // Decimal parsing rounds correctly for values past u128
    value.to_string().parse::<f64>().unwrap_or(f64::INFINITY)
}

/// Converts a basis-point value (720 = 7.20%) to percent
pub fn bps_to_percent(value: U256) -> f64 {
    u256_to_f64(value) / BPS_PER_PERCENT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(value: &str) -> U256 {
        U256::from_dec_str(value).unwrap()
    }

    #[test]
    fn test_divide_on_wei() {
        assert_eq!(divide_on_wei(wei("1000000000000000000"), 18), 1.0);
        assert_eq!(divide_on_wei(wei("2500000000000000000"), 18), 2.5);
        assert_eq!(divide_on_wei(U256::zero(), 18), 0.0);
        assert_eq!(divide_on_wei(U256::from(1234u64), 0), 1234.0);
    }

    #[test]
    fn test_multiply_on_wei() {
        assert_eq!(multiply_on_wei(1.0, 18).unwrap(), wei("1000000000000000000"));
        assert_eq!(multiply_on_wei(0.5, 18).unwrap(), wei("500000000000000000"));
        assert_eq!(multiply_on_wei(0.0, 18).unwrap(), U256::zero());
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(multiply_on_wei(-0.0, 18), Ok(U256::zero()));
        assert_eq!(multiply_on_wei(-1e-30, 18), Err(UnitError::Negative(-1e-30)));
    }

    #[test]
    fn test_round_trip_is_exact_up_to_2_pow_50() {
        let samples: [u64; 7] = [
            0,
            1,
            3,
            999,
            123_456_789,
            999_999_999_999_999,
            1_125_899_906_842_624, // 2^50
        ];
        for raw in samples {
            let amount = U256::from(raw);
            let back = multiply_on_wei(divide_on_wei(amount, 18), 18).unwrap();
            assert_eq!(back, amount, "round trip of {raw}");
        }
    }

    #[test]
    fn test_round_trip_of_large_amounts_is_within_relative_epsilon() {
        for raw in ["1000000000000000000000000", "123456789123456789123456789"] {
            let amount = wei(raw);
            let back = multiply_on_wei(divide_on_wei(amount, 18), 18).unwrap();
            let original = u256_to_f64(amount);
            let relative = (u256_to_f64(back) - original).abs() / original;
            assert!(relative < 1e-12, "relative error {relative} for {raw}");
        }
    }

    #[test]
    fn test_multiply_rejects_invalid_amounts() {
        assert_eq!(multiply_on_wei(-1.0, 18), Err(UnitError::Negative(-1.0)));
        assert!(matches!(multiply_on_wei(f64::NAN, 18), Err(UnitError::NotFinite(_))));
        assert!(matches!(multiply_on_wei(f64::INFINITY, 18), Err(UnitError::NotFinite(_))));
        assert!(matches!(multiply_on_wei(1e300, 18), Err(UnitError::Overflow(_))));
    }

    #[test]
    fn test_u256_beyond_u128() {
        let value = U256::from(u128::MAX) * U256::from(4u8);
        let expected = (u128::MAX as f64) * 4.0;
        assert!((u256_to_f64(value) - expected).abs() / expected < 1e-15);
    }

    #[test]
    fn test_bps_to_percent() {
        assert_eq!(bps_to_percent(U256::from(720u64)), 7.2);
        assert_eq!(bps_to_percent(U256::from(8500u64)), 85.0);
    }
}
