//! Error types

mod config;
mod load;
mod validation;

pub use config::*;
pub use load::*;
pub use validation::*;
