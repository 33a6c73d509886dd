pub mod proposal_backend;

pub use proposal_backend::{BackendAction, ProposalBackendClient};
