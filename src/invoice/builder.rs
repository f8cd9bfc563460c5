//! Fluent builder for constructing validated invoices

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::invoice::InvoiceDocument;
use crate::types::{InvoiceResult, LineItem, TaxKind, Withholding};
use crate::utils::validation;

/// Builder for assembling an [`InvoiceDocument`] with validation at the end
#[derive(Debug)]
pub struct InvoiceBuilder {
    document: InvoiceDocument,
}

impl InvoiceBuilder {
    /// Start a new invoice
    pub fn new(id: String, invoice_number: String, date: NaiveDate, customer_name: String) -> Self {
        Self {
            document: InvoiceDocument::new(id, invoice_number, date, customer_name),
        }
    }

    /// Add metadata to the invoice
    pub fn metadata(mut self, key: String, value: String) -> Self {
        self.document.metadata.insert(key, value);
        self
    }

    /// Add a line with a generated id
    pub fn line(
        mut self,
        description: String,
        quantity: BigDecimal,
        rate: BigDecimal,
        discount_percent: BigDecimal,
        tax_kind: TaxKind,
    ) -> Self {
        self.document.add_line_item(LineItem::new(
            description,
            quantity,
            rate,
            discount_percent,
            tax_kind,
        ));
        self
    }

    /// Add a pre-built line item
    pub fn line_item(mut self, item: LineItem) -> Self {
        self.document.add_line_item(item);
        self
    }

    /// Apply TDS withholding at the given percentage
    pub fn tds(mut self, percent: BigDecimal) -> Self {
        self.document.set_withholding(Withholding::Tds(percent));
        self
    }

    /// Apply TCS withholding at the given percentage
    pub fn tcs(mut self, percent: BigDecimal) -> Self {
        self.document.set_withholding(Withholding::Tcs(percent));
        self
    }

    /// Validate and return the invoice
    pub fn build(self) -> InvoiceResult<InvoiceDocument> {
        validation::validate_invoice(&self.document)?;
        Ok(self.document)
    }
}
