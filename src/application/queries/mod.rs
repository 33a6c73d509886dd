// Derived queries over the DAO contracts
// Each query composes contract reads and converts units for display

mod outputs;
pub mod proposals;
pub mod strategies;
pub mod tokens;

pub use proposals::*;
pub use strategies::*;
pub use tokens::*;
