//! Money and duration formatting.

use std::fmt;

/// Inserts `,` between groups of three digits.
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// A catalog price or total in rupees, e.g. `₹8,000` or `₹12.50`.
///
/// Zero is shown as `Free` only through [`Price`]; totals always show the
/// amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(pub f64);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = (self.0.max(0.0) * 100.0).round() as u64;
        let (whole, fraction) = (cents / 100, cents % 100);
        if fraction == 0 {
            write!(f, "₹{}", group_thousands(whole))
        } else {
            write!(f, "₹{}.{fraction:02}", group_thousands(whole))
        }
    }
}

/// An item price, `Free` when zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(pub f64);

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            write!(f, "Free")
        } else {
            write!(f, "{}", Amount(self.0))
        }
    }
}

/// A duration in hours, e.g. `2h` or `3.5h`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hours(pub f64);

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;
        write!(f, "{rounded}h")
    }
}
