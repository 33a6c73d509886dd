// Contract integration module
// Resolves logical contract names per chain and performs reads and writes

pub mod client;
pub mod config;
pub mod event_utils;
pub mod registry;
pub mod types;
pub mod utils;

// Re-export main components for easy access
pub use client::{ContractClient, ContractReader};
pub use registry::ContractRegistry;
pub use types::*;
