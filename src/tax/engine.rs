//! Invoice total and tax computation engine.
//!
//! Every function here is a pure, total function of its inputs: no I/O, no
//! shared state, and no error paths. Callers (typically an invoice-editing
//! view) re-invoke the engine after every line-item or settings change.
//! No rounding is applied internally; presentation rounding belongs to the
//! display layer so repeated recomputation never compounds rounding error.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::{DocumentSettings, LineItem, Withholding};

/// Line total after discount, with tax added when the line is taxable
pub fn line_amount(item: &LineItem) -> BigDecimal {
    let discounted = item.net_amount();

    if !item.tax_kind.is_taxable() {
        return discounted;
    }

    let percent = item.tax_kind.effective_percent();
    &discounted + (&discounted * percent) / BigDecimal::from(100)
}

/// Sum of `quantity * rate` across all lines, pre-discount and pre-tax
pub fn subtotal(items: &[LineItem]) -> BigDecimal {
    items.iter().map(|item| item.amount()).sum()
}

/// Sum of per-line discount amounts
pub fn total_discount(items: &[LineItem]) -> BigDecimal {
    items
        .iter()
        .map(|item| (item.amount() * &item.discount_percent) / BigDecimal::from(100))
        .sum()
}

/// Discounted subtotal the GST split and withholding are computed on
pub fn taxable_value(items: &[LineItem]) -> BigDecimal {
    subtotal(items) - total_discount(items)
}

/// The invoice-wide GST rate: the percent of the first line (in list order)
/// with a positive effective rate, or 0 when no line is taxable.
///
/// The whole invoice is treated as single-rate for the CGST/SGST split even
/// if later lines nominally carry a different rate. Known limitation,
/// preserved for compatibility with existing single-rate invoices.
pub fn invoice_gst_rate(items: &[LineItem]) -> BigDecimal {
    items
        .iter()
        .find(|item| item.tax_kind.is_taxable())
        .map(|item| item.tax_kind.effective_percent())
        .unwrap_or_else(|| BigDecimal::from(0))
}

/// CGST on the discounted subtotal: half the invoice GST rate
pub fn cgst(items: &[LineItem]) -> BigDecimal {
    let half_rate = invoice_gst_rate(items) / BigDecimal::from(2);
    (taxable_value(items) * half_rate) / BigDecimal::from(100)
}

/// SGST on the discounted subtotal: half the invoice GST rate.
/// Always equal to [`cgst`] - GST splits evenly for intra-state supply.
pub fn sgst(items: &[LineItem]) -> BigDecimal {
    cgst(items)
}

/// Withholding amount on the discounted subtotal.
///
/// TDS is returned negative (it reduces the payable total), TCS positive,
/// and `Withholding::None` yields exactly zero.
pub fn withholding(settings: &DocumentSettings, items: &[LineItem]) -> BigDecimal {
    let base = taxable_value(items);
    match &settings.withholding {
        Withholding::None => BigDecimal::from(0),
        Withholding::Tds(percent) => -((base * percent) / BigDecimal::from(100)),
        Withholding::Tcs(percent) => (base * percent) / BigDecimal::from(100),
    }
}

/// Grand total: discounted subtotal plus both GST halves plus withholding
pub fn grand_total(items: &[LineItem], settings: &DocumentSettings) -> BigDecimal {
    taxable_value(items) + cgst(items) + sgst(items) + withholding(settings, items)
}

/// Complete totals breakdown for one invoice.
///
/// Derived data only: recomputed from the line items and settings on every
/// edit, never cached across renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSummary {
    /// Sum of line amounts before discount and tax
    pub subtotal: BigDecimal,
    /// Sum of per-line discount amounts
    pub total_discount: BigDecimal,
    /// Subtotal less discount; the base for GST and withholding
    pub taxable_value: BigDecimal,
    /// Invoice-wide GST rate used for the CGST/SGST split
    pub gst_rate: BigDecimal,
    /// Central GST amount
    pub cgst_amount: BigDecimal,
    /// State GST amount
    pub sgst_amount: BigDecimal,
    /// Withholding amount: negative for TDS, positive for TCS, zero for none
    pub withholding_amount: BigDecimal,
    /// Final payable total
    pub grand_total: BigDecimal,
}

impl TaxSummary {
    /// Compute the full breakdown for the given lines and settings
    pub fn compute(items: &[LineItem], settings: &DocumentSettings) -> Self {
        let subtotal = subtotal(items);
        let total_discount = total_discount(items);
        let taxable_value = &subtotal - &total_discount;
        let gst_rate = invoice_gst_rate(items);

        let half_rate = &gst_rate / BigDecimal::from(2);
        let cgst_amount = (&taxable_value * &half_rate) / BigDecimal::from(100);
        let sgst_amount = cgst_amount.clone();

        let withholding_amount = withholding(settings, items);
        let grand_total =
            &taxable_value + &cgst_amount + &sgst_amount + &withholding_amount;

        Self {
            subtotal,
            total_discount,
            taxable_value,
            gst_rate,
            cgst_amount,
            sgst_amount,
            withholding_amount,
            grand_total,
        }
    }
}

/// Format a monetary value for display with two decimal places.
///
/// Display-only: the engine itself keeps full precision.
pub fn format_currency(value: &BigDecimal) -> String {
    format!(
        "{}",
        value.with_scale_round(2, bigdecimal::RoundingMode::HalfUp)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaxKind;
    use std::str::FromStr;

    fn item(
        quantity: i64,
        rate: i64,
        discount_percent: i64,
        tax_kind: TaxKind,
    ) -> LineItem {
        LineItem::new(
            "Test item".to_string(),
            BigDecimal::from(quantity),
            BigDecimal::from(rate),
            BigDecimal::from(discount_percent),
            tax_kind,
        )
    }

    #[test]
    fn test_line_amount_with_gst() {
        let line = item(2, 500, 10, TaxKind::GstRate(BigDecimal::from(18)));
        // 1000 - 100 discount = 900, + 18% = 1062
        assert_eq!(line_amount(&line), BigDecimal::from(1062));
    }

    #[test]
    fn test_line_amount_untaxed_kinds() {
        for kind in [
            TaxKind::NonTaxable,
            TaxKind::OutOfScope,
            TaxKind::NonGstSupply,
        ] {
            let line = item(2, 500, 10, kind);
            assert_eq!(line_amount(&line), BigDecimal::from(900));
        }
    }

    #[test]
    fn test_line_amount_custom_rate() {
        let line = item(1, 1000, 0, TaxKind::Custom(BigDecimal::from(7)));
        assert_eq!(line_amount(&line), BigDecimal::from(1070));
    }

    #[test]
    fn test_empty_invoice_is_all_zero() {
        let settings = DocumentSettings::with_tds(BigDecimal::from(10));
        assert_eq!(subtotal(&[]), BigDecimal::from(0));
        assert_eq!(total_discount(&[]), BigDecimal::from(0));
        assert_eq!(grand_total(&[], &settings), BigDecimal::from(0));
    }

    #[test]
    fn test_invoice_gst_rate_takes_first_taxable() {
        let items = vec![
            item(1, 100, 0, TaxKind::NonTaxable),
            item(1, 100, 0, TaxKind::GstRate(BigDecimal::from(12))),
            item(1, 100, 0, TaxKind::GstRate(BigDecimal::from(28))),
        ];
        assert_eq!(invoice_gst_rate(&items), BigDecimal::from(12));
    }

    #[test]
    fn test_invoice_gst_rate_zero_when_untaxed() {
        let items = vec![item(3, 200, 0, TaxKind::OutOfScope)];
        assert_eq!(invoice_gst_rate(&items), BigDecimal::from(0));
    }

    #[test]
    fn test_cgst_equals_sgst() {
        let items = vec![
            item(2, 500, 10, TaxKind::GstRate(BigDecimal::from(18))),
            item(1, 250, 0, TaxKind::GstRate(BigDecimal::from(18))),
        ];
        assert_eq!(cgst(&items), sgst(&items));
    }

    #[test]
    fn test_withholding_signs() {
        let items = vec![item(1, 1000, 0, TaxKind::GstRate(BigDecimal::from(18)))];
        let zero = BigDecimal::from(0);

        let none = DocumentSettings::new();
        assert_eq!(withholding(&none, &items), zero);

        let tds = DocumentSettings::with_tds(BigDecimal::from(10));
        assert!(withholding(&tds, &items) < zero);

        let tcs = DocumentSettings::with_tcs(BigDecimal::from(1));
        assert!(withholding(&tcs, &items) > zero);
    }

    #[test]
    fn test_reference_scenario() {
        // 2 x 500 at 10% discount, GST 18%, no withholding
        let items = vec![item(2, 500, 10, TaxKind::GstRate(BigDecimal::from(18)))];
        let settings = DocumentSettings::new();

        let summary = TaxSummary::compute(&items, &settings);
        assert_eq!(summary.subtotal, BigDecimal::from(1000));
        assert_eq!(summary.total_discount, BigDecimal::from(100));
        assert_eq!(summary.taxable_value, BigDecimal::from(900));
        assert_eq!(summary.gst_rate, BigDecimal::from(18));
        assert_eq!(summary.cgst_amount, BigDecimal::from(81));
        assert_eq!(summary.sgst_amount, BigDecimal::from(81));
        assert_eq!(summary.withholding_amount, BigDecimal::from(0));
        assert_eq!(summary.grand_total, BigDecimal::from(1062));
    }

    #[test]
    fn test_reference_scenario_with_tds() {
        let items = vec![item(2, 500, 10, TaxKind::GstRate(BigDecimal::from(18)))];
        let settings = DocumentSettings::with_tds(BigDecimal::from(10));

        let summary = TaxSummary::compute(&items, &settings);
        assert_eq!(summary.withholding_amount, BigDecimal::from(-90));
        assert_eq!(summary.grand_total, BigDecimal::from(972));
    }

    #[test]
    fn test_summary_matches_individual_functions() {
        let items = vec![
            item(2, 500, 10, TaxKind::GstRate(BigDecimal::from(18))),
            item(4, 75, 0, TaxKind::NonTaxable),
        ];
        let settings = DocumentSettings::with_tcs(BigDecimal::from(1));

        let summary = TaxSummary::compute(&items, &settings);
        assert_eq!(summary.subtotal, subtotal(&items));
        assert_eq!(summary.total_discount, total_discount(&items));
        assert_eq!(summary.cgst_amount, cgst(&items));
        assert_eq!(summary.sgst_amount, sgst(&items));
        assert_eq!(summary.withholding_amount, withholding(&settings, &items));
        assert_eq!(summary.grand_total, grand_total(&items, &settings));
    }

    #[test]
    fn test_idempotent_recomputation() {
        let items = vec![item(3, 199, 5, TaxKind::GstRate(BigDecimal::from(12)))];
        let settings = DocumentSettings::with_tds(BigDecimal::from(2));

        let first = TaxSummary::compute(&items, &settings);
        let second = TaxSummary::compute(&items, &settings);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fractional_amounts_keep_precision() {
        let line = LineItem::new(
            "Loose goods".to_string(),
            BigDecimal::from_str("1.5").unwrap(),
            BigDecimal::from_str("99.99").unwrap(),
            BigDecimal::from(0),
            TaxKind::GstRate(BigDecimal::from(18)),
        );
        let items = vec![line];

        // 1.5 * 99.99 = 149.985; no internal rounding
        assert_eq!(subtotal(&items), BigDecimal::from_str("149.985").unwrap());
        assert_eq!(format_currency(&subtotal(&items)), "149.99");
    }

    #[test]
    fn test_format_currency_pads_scale() {
        assert_eq!(format_currency(&BigDecimal::from(1062)), "1062.00");
    }
}
