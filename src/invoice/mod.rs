//! Invoice module containing the editable document and its builder

pub mod builder;
pub mod document;

pub use builder::*;
pub use document::*;
