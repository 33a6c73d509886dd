pub mod backend;
pub mod contracts;

pub use backend::*;
