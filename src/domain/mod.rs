pub mod agents;
pub mod errors;
pub mod models;
pub mod session;

pub use agents::*;
pub use errors::*;
pub use models::*;
pub use session::*;
