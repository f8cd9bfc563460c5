//! Tax calculation module: GST split, withholding, and invoice totals

pub mod engine;

pub use engine::*;
