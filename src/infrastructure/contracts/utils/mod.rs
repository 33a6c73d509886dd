pub mod units;

pub use units::{bps_to_percent, divide_on_wei, multiply_on_wei, u256_to_f64, TOKEN_DECIMALS};
