//! Strict validation for finalized invoices.
//!
//! Unlike the lenient parsing in [`crate::utils::form`], these checks reject
//! out-of-range values outright; they run when a document leaves the editing
//! session (builder `build()`, API submission).

use bigdecimal::BigDecimal;

use crate::invoice::InvoiceDocument;
use crate::types::{InvoiceError, InvoiceResult, LineItem, TaxKind, Withholding};

/// Validate that a value is non-negative
pub fn validate_non_negative(field: &str, value: &BigDecimal) -> InvoiceResult<()> {
    if *value < BigDecimal::from(0) {
        Err(InvoiceError::InvalidAmount(format!(
            "{field} cannot be negative: {value}"
        )))
    } else {
        Ok(())
    }
}

/// Validate that a percentage lies in [0, 100]
pub fn validate_percent(field: &str, value: &BigDecimal) -> InvoiceResult<()> {
    if *value < BigDecimal::from(0) || *value > BigDecimal::from(100) {
        Err(InvoiceError::InvalidPercent(format!(
            "{field} must be between 0 and 100: {value}"
        )))
    } else {
        Ok(())
    }
}

/// Validate an invoice number
pub fn validate_invoice_number(invoice_number: &str) -> InvoiceResult<()> {
    if invoice_number.trim().is_empty() {
        return Err(InvoiceError::InvalidInvoice(
            "Invoice number cannot be empty".to_string(),
        ));
    }

    if invoice_number.len() > 50 {
        return Err(InvoiceError::InvalidInvoice(
            "Invoice number cannot exceed 50 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate a line description
pub fn validate_description(description: &str) -> InvoiceResult<()> {
    if description.len() > 500 {
        return Err(InvoiceError::Validation(
            "Description cannot exceed 500 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate a single line item
pub fn validate_line_item(item: &LineItem) -> InvoiceResult<()> {
    validate_description(&item.description)?;
    validate_non_negative("quantity", &item.quantity)?;
    validate_non_negative("rate", &item.rate)?;
    validate_percent("discount", &item.discount_percent)?;

    match &item.tax_kind {
        TaxKind::GstRate(percent) | TaxKind::Custom(percent) => {
            validate_percent("tax rate", percent)?;
        }
        TaxKind::NonTaxable | TaxKind::OutOfScope | TaxKind::NonGstSupply => {}
    }

    Ok(())
}

/// Validate a complete invoice document
pub fn validate_invoice(document: &InvoiceDocument) -> InvoiceResult<()> {
    validate_invoice_number(&document.invoice_number)?;

    for item in &document.line_items {
        validate_line_item(item)?;
    }

    match &document.settings.withholding {
        Withholding::Tds(percent) => validate_percent("TDS", percent)?,
        Withholding::Tcs(percent) => validate_percent("TCS", percent)?,
        Withholding::None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_percent_bounds() {
        assert!(validate_percent("discount", &BigDecimal::from(0)).is_ok());
        assert!(validate_percent("discount", &BigDecimal::from(100)).is_ok());
        assert!(validate_percent("discount", &BigDecimal::from(101)).is_err());
        assert!(validate_percent("discount", &BigDecimal::from(-1)).is_err());
    }

    #[test]
    fn test_validate_invoice_number() {
        assert!(validate_invoice_number("INV-001").is_ok());
        assert!(validate_invoice_number("").is_err());
        assert!(validate_invoice_number(&"X".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_line_item_checks_tax_percent() {
        let item = LineItem::new(
            "Widget".to_string(),
            BigDecimal::from(1),
            BigDecimal::from(100),
            BigDecimal::from(0),
            TaxKind::Custom(BigDecimal::from(200)),
        );
        assert!(validate_line_item(&item).is_err());
    }
}
