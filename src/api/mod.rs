pub mod dto;
pub mod errors;
pub mod v1;
pub mod validation;

pub use dto::*;
pub use v1::create_v1_router;
