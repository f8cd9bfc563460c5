//! Core types and data structures for invoice calculations

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tax treatment of a single invoice line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaxKind {
    /// Non-taxable supply - no GST applies
    NonTaxable,
    /// Supply outside the scope of GST
    OutOfScope,
    /// Non-GST supply (e.g. petroleum, alcohol)
    NonGstSupply,
    /// Standard GST slab rate (e.g. 5, 12, 18, 28)
    GstRate(BigDecimal),
    /// User-defined percentage outside the standard slabs
    Custom(BigDecimal),
}

impl TaxKind {
    /// Build a custom tax kind from raw form input.
    ///
    /// Empty or non-numeric input yields a 0% custom rate, matching the
    /// forgiving semantics of a live-editing form.
    pub fn custom_from_input(input: &str) -> Self {
        TaxKind::Custom(crate::utils::form::parse_amount(input))
    }

    /// The percentage this kind applies to a line's discounted amount.
    /// Zero for the three untaxed kinds.
    pub fn effective_percent(&self) -> BigDecimal {
        match self {
            TaxKind::NonTaxable | TaxKind::OutOfScope | TaxKind::NonGstSupply => {
                BigDecimal::from(0)
            }
            TaxKind::GstRate(percent) | TaxKind::Custom(percent) => percent.clone(),
        }
    }

    /// Whether this kind contributes tax (effective percent > 0)
    pub fn is_taxable(&self) -> bool {
        self.effective_percent() > BigDecimal::from(0)
    }
}

/// A single editable invoice line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable identifier for the row (generated when the line is created)
    pub id: String,
    /// Item or service description
    pub description: String,
    /// Quantity, non-negative
    pub quantity: BigDecimal,
    /// Unit price, non-negative
    pub rate: BigDecimal,
    /// Line-level discount percentage in [0, 100]
    pub discount_percent: BigDecimal,
    /// Tax treatment for this line
    pub tax_kind: TaxKind,
}

impl LineItem {
    /// Create a new line item with a generated id
    pub fn new(
        description: String,
        quantity: BigDecimal,
        rate: BigDecimal,
        discount_percent: BigDecimal,
        tax_kind: TaxKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description,
            quantity,
            rate,
            discount_percent,
            tax_kind,
        }
    }

    /// Gross amount before discount and tax: `quantity * rate`
    pub fn amount(&self) -> BigDecimal {
        &self.quantity * &self.rate
    }

    /// Amount after the line discount, before tax
    pub fn net_amount(&self) -> BigDecimal {
        let amount = self.amount();
        &amount - (&amount * &self.discount_percent) / BigDecimal::from(100)
    }
}

/// Document-level withholding selection.
///
/// TDS and TCS are mutually exclusive on an invoice; the enum makes the
/// "selecting one clears the other" rule structural rather than validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Withholding {
    /// No withholding applied
    #[default]
    None,
    /// Tax Deducted at Source - reduces the payable total
    Tds(BigDecimal),
    /// Tax Collected at Source - increases the payable total
    Tcs(BigDecimal),
}

/// Document-level calculation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DocumentSettings {
    /// Active withholding selection
    pub withholding: Withholding,
}

impl DocumentSettings {
    /// Settings with no withholding
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings with TDS at the given percentage
    pub fn with_tds(percent: BigDecimal) -> Self {
        Self {
            withholding: Withholding::Tds(percent),
        }
    }

    /// Settings with TCS at the given percentage
    pub fn with_tcs(percent: BigDecimal) -> Self {
        Self {
            withholding: Withholding::Tcs(percent),
        }
    }
}

/// Errors that can occur during invoice validation and construction
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid percentage: {0}")]
    InvalidPercent(String),
    #[error("Invalid invoice: {0}")]
    InvalidInvoice(String),
    #[error("Line item not found: {0}")]
    LineItemNotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for invoice operations
pub type InvoiceResult<T> = Result<T, InvoiceError>;
