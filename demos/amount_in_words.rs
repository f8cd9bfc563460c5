//! Amount-in-words rendering examples

use bigdecimal::BigDecimal;
use invoicing_core::{amount_in_words, total_in_words};
use std::str::FromStr;

fn main() {
    println!("🔤 Invoicing Core - Amount in Words Examples\n");

    let amounts: [u64; 8] = [
        0,
        42,
        100,
        1_500,
        25_061,
        100_000,
        10_000_000,
        12_345_678,
    ];

    println!("📜 Indian numbering system expansion:");
    for amount in amounts {
        println!("  {:>12} → {}", amount, amount_in_words(amount));
    }
    println!();

    println!("🖨️ Printed invoice lines (totals are floored to whole rupees):");
    for total in ["1062.00", "972.40", "150000.99"] {
        let value = BigDecimal::from_str(total).unwrap();
        println!("  ₹{:>10} → {}", total, total_in_words(&value));
    }

    println!("\n🎉 Amount-in-words examples completed successfully!");
}
