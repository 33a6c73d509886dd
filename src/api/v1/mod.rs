pub mod agents;
pub mod dashboard;
pub mod governance;
pub mod routes;

pub use agents::*;
pub use dashboard::*;
pub use governance::*;
pub use routes::*;
