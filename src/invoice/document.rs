//! Editable invoice document that owns line items and settings

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tax::TaxSummary;
use crate::types::{DocumentSettings, InvoiceError, InvoiceResult, LineItem, Withholding};
use crate::words;

/// An invoice under edit: the ordered line items plus document settings the
/// tax engine computes totals from.
///
/// Totals are derived data and are never stored on the document; call
/// [`InvoiceDocument::totals`] after each mutation for a fresh breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    /// Unique identifier for the document
    pub id: String,
    /// Human-facing invoice number (e.g. "INV-2024-001")
    pub invoice_number: String,
    /// Invoice date
    pub date: NaiveDate,
    /// Billed customer name
    pub customer_name: String,
    /// Ordered, editable line items
    pub line_items: Vec<LineItem>,
    /// Document-level calculation settings
    pub settings: DocumentSettings,
    /// Additional metadata
    pub metadata: HashMap<String, String>,
    /// When the document was created
    pub created_at: NaiveDateTime,
    /// When the document was last updated
    pub updated_at: NaiveDateTime,
}

impl InvoiceDocument {
    /// Create a new empty invoice
    pub fn new(id: String, invoice_number: String, date: NaiveDate, customer_name: String) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id,
            invoice_number,
            date,
            customer_name,
            line_items: Vec::new(),
            settings: DocumentSettings::default(),
            metadata: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a line item
    pub fn add_line_item(&mut self, item: LineItem) {
        self.line_items.push(item);
        self.updated_at = chrono::Utc::now().naive_utc();
    }

    /// Replace the line item with the same id as `item`
    pub fn update_line_item(&mut self, item: LineItem) -> InvoiceResult<()> {
        let slot = self
            .line_items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or_else(|| InvoiceError::LineItemNotFound(item.id.clone()))?;

        *slot = item;
        self.updated_at = chrono::Utc::now().naive_utc();
        Ok(())
    }

    /// Remove the line item with the given id
    pub fn remove_line_item(&mut self, item_id: &str) -> InvoiceResult<LineItem> {
        let position = self
            .line_items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| InvoiceError::LineItemNotFound(item_id.to_string()))?;

        let removed = self.line_items.remove(position);
        self.updated_at = chrono::Utc::now().naive_utc();
        Ok(removed)
    }

    /// Set the withholding selection. Assigning TDS or TCS replaces any
    /// previous selection, so at most one is ever active.
    pub fn set_withholding(&mut self, withholding: Withholding) {
        self.settings.withholding = withholding;
        self.updated_at = chrono::Utc::now().naive_utc();
    }

    /// Compute a fresh totals breakdown from the current lines and settings
    pub fn totals(&self) -> TaxSummary {
        TaxSummary::compute(&self.line_items, &self.settings)
    }

    /// The printed "Total in Words" line for the current grand total
    pub fn total_in_words(&self) -> String {
        words::total_in_words(&self.totals().grand_total)
    }
}
