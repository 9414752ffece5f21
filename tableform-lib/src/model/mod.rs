//! Form field descriptor types

mod field;
mod option;

pub use field::*;
pub use option::*;
