//! Invoice total calculation examples

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use invoicing_core::{
    tax::format_currency, InvoiceBuilder, TaxKind, TaxSummary, Withholding,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Invoicing Core - Invoice Total Examples\n");

    // 1. A simple single-line GST invoice
    let mut invoice = InvoiceBuilder::new(
        "doc-1".to_string(),
        "INV-2024-001".to_string(),
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
        "Acme Traders".to_string(),
    )
    .line(
        "Implementation services".to_string(),
        BigDecimal::from(2),
        BigDecimal::from(500),
        BigDecimal::from(10),
        TaxKind::GstRate(BigDecimal::from(18)),
    )
    .line(
        "Exempt goods".to_string(),
        BigDecimal::from(4),
        BigDecimal::from(50),
        BigDecimal::from(0),
        TaxKind::NonTaxable,
    )
    .build()?;

    print_summary("Invoice without withholding", &invoice.totals());

    // 2. The same invoice with TDS withheld by the buyer
    invoice.set_withholding(Withholding::Tds(BigDecimal::from(10)));
    print_summary("With TDS at 10%", &invoice.totals());

    // 3. Switching to TCS clears TDS and collects extra instead
    invoice.set_withholding(Withholding::Tcs(BigDecimal::from(1)));
    print_summary("With TCS at 1%", &invoice.totals());

    println!("  Printed line: {}", invoice.total_in_words());
    println!("\n🎉 Invoice total examples completed successfully!");
    Ok(())
}

fn print_summary(title: &str, totals: &TaxSummary) {
    println!("📊 {title}:");
    println!("  Subtotal:        ₹{}", format_currency(&totals.subtotal));
    println!(
        "  Discount:        ₹{}",
        format_currency(&totals.total_discount)
    );
    println!(
        "  Taxable value:   ₹{}",
        format_currency(&totals.taxable_value)
    );
    println!(
        "  CGST ({}%):       ₹{}",
        &totals.gst_rate / BigDecimal::from(2),
        format_currency(&totals.cgst_amount)
    );
    println!(
        "  SGST ({}%):       ₹{}",
        &totals.gst_rate / BigDecimal::from(2),
        format_currency(&totals.sgst_amount)
    );
    println!(
        "  Withholding:     ₹{}",
        format_currency(&totals.withholding_amount)
    );
    println!(
        "  Grand total:     ₹{}",
        format_currency(&totals.grand_total)
    );
    println!();
}
