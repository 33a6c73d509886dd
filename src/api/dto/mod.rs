pub mod agent_dto;
pub mod dashboard_dto;
pub mod governance_dto;

pub use agent_dto::*;
pub use dashboard_dto::*;
pub use governance_dto::*;
