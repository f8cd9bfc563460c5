//! Utility modules

pub mod form;
pub mod validation;

pub use form::*;
pub use validation::*;
