//! # Invoicing Core
//!
//! An invoice financial calculation library covering Indian GST invoicing:
//! per-line discounts and tax, the CGST/SGST split, TDS/TCS withholding,
//! and amount-in-words rendering for printed documents.
//!
//! ## Features
//!
//! - **Tax engine**: pure, side-effect-free computation of subtotal,
//!   discount, CGST/SGST, withholding, and grand total
//! - **Withholding**: TDS (reduces the payable total) and TCS (increases it),
//!   mutually exclusive by construction
//! - **Amount in words**: Indian numbering system (Thousand/Lakh/Crore)
//!   expansion for the printed "Total in Words" line
//! - **Editable documents**: an invoice document type whose totals are
//!   recomputed from scratch after every edit
//! - **Form-friendly parsing**: malformed in-progress field values degrade
//!   to zero instead of erroring
//!
//! ## Quick Start
//!
//! ```rust
//! use invoicing_core::{DocumentSettings, LineItem, TaxKind, TaxSummary};
//! use bigdecimal::BigDecimal;
//!
//! let items = vec![LineItem::new(
//!     "Consulting".to_string(),
//!     BigDecimal::from(2),
//!     BigDecimal::from(500),
//!     BigDecimal::from(10),
//!     TaxKind::GstRate(BigDecimal::from(18)),
//! )];
//!
//! let summary = TaxSummary::compute(&items, &DocumentSettings::new());
//! assert_eq!(summary.grand_total, BigDecimal::from(1062));
//! ```

pub mod invoice;
pub mod tax;
pub mod types;
pub mod utils;
pub mod words;

// Re-export commonly used types
pub use invoice::*;
pub use tax::*;
pub use types::*;

// Re-export the words API for convenience
pub use words::{amount_in_words, total_in_words};
