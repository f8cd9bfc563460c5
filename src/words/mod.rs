//! Amount-in-words rendering using the Indian numbering system
//! (ones/teens/tens, Hundred, Thousand, Lakh, Crore)

use bigdecimal::{BigDecimal, ToPrimitive};

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Convert a value in 0..=999 to words, e.g. 245 -> "Two Hundred Forty Five".
/// Returns an empty string for 0 so callers can skip empty groups.
fn three_digits(n: u64) -> String {
    debug_assert!(n < 1000);

    let mut parts: Vec<&str> = Vec::new();

    let hundreds = (n / 100) as usize;
    if hundreds > 0 {
        parts.push(ONES[hundreds]);
        parts.push("Hundred");
    }

    let remainder = n % 100;
    if (10..20).contains(&remainder) {
        parts.push(TEENS[(remainder - 10) as usize]);
    } else {
        let tens = (remainder / 10) as usize;
        let ones = (remainder % 10) as usize;
        if tens > 0 {
            parts.push(TENS[tens]);
        }
        if ones > 0 {
            parts.push(ONES[ones]);
        }
    }

    parts.join(" ")
}

/// Convert a non-negative integer amount to its Indian numbering-system
/// word form, as printed on the "Total in Words" line of an invoice.
///
/// Crore counts of 1000 and above reuse the Indian grouping, so every
/// `u64` renders (e.g. "One Thousand Crore", "One Lakh Crore").
///
/// ```
/// use invoicing_core::words::amount_in_words;
///
/// assert_eq!(amount_in_words(0), "Zero");
/// assert_eq!(amount_in_words(1500), "One Thousand Five Hundred");
/// assert_eq!(amount_in_words(10_000_000), "One Crore");
/// ```
pub fn amount_in_words(n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut parts: Vec<String> = Vec::new();

    let crore = n / 10_000_000;
    if crore > 0 {
        parts.push(amount_in_words(crore));
        parts.push("Crore".to_string());
    }

    let groups = [
        ((n % 10_000_000) / 100_000, "Lakh"),
        ((n % 100_000) / 1_000, "Thousand"),
    ];
    for (value, place) in groups {
        if value > 0 {
            parts.push(three_digits(value));
            parts.push(place.to_string());
        }
    }

    let remainder = n % 1_000;
    if remainder > 0 {
        parts.push(three_digits(remainder));
    }

    parts.join(" ")
}

/// Render the printed "Total in Words" line for a computed grand total.
///
/// The total is floored to whole rupees before conversion; negative values
/// are clamped to zero (grand totals are non-negative in this domain).
pub fn total_in_words(amount: &BigDecimal) -> String {
    let rupees = amount
        .with_scale_round(0, bigdecimal::RoundingMode::Floor)
        .to_u64()
        .unwrap_or(0);

    format!("Indian Rupee {} Only", amount_in_words(rupees))
}
