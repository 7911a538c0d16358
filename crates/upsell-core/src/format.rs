//! Price display formatting.
//!
//! The widget treats formatted prices as opaque strings; it never parses or
//! recomputes them.

use rust_decimal::{Decimal, RoundingStrategy};

/// Renders a numeric amount in a currency as a display string.
pub trait PriceFormatter {
    fn format_price(&self, amount: Decimal, currency_code: &str) -> String;
}

/// Default formatter: symbol-prefixed for common currencies, ISO-code
/// suffixed otherwise, with `,` thousands grouping.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyFormatter;

impl CurrencyFormatter {
    fn symbol(currency_code: &str) -> Option<&'static str> {
        match currency_code {
            "USD" | "CAD" | "AUD" | "NZD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "JPY" => Some("¥"),
            _ => None,
        }
    }

    fn minor_units(currency_code: &str) -> u32 {
        match currency_code {
            "JPY" | "KRW" => 0,
            _ => 2,
        }
    }
}

impl PriceFormatter for CurrencyFormatter {
    fn format_price(&self, amount: Decimal, currency_code: &str) -> String {
        let code = currency_code.to_ascii_uppercase();
        let scale = Self::minor_units(&code);
        let rounded = amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let number = group_thousands(&format!("{:.*}", scale as usize, rounded.abs()));

        match Self::symbol(&code) {
            Some(symbol) => format!("{sign}{symbol}{number}"),
            None => format!("{sign}{number} {code}"),
        }
    }
}

/// Inserts `,` between groups of three integer digits: `"1234.50"` → `"1,234.50"`.
fn group_thousands(plain: &str) -> String {
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain, None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(plain.len() + digits / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn fmt(amount: &str, code: &str) -> String {
        CurrencyFormatter.format_price(Decimal::from_str(amount).unwrap(), code)
    }

    #[test]
    fn formats_usd_with_symbol_and_two_decimals() {
        assert_eq!(fmt("12.5", "USD"), "$12.50");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(fmt("1234567.891", "USD"), "$1,234,567.89");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(fmt("0.125", "EUR"), "€0.13");
    }

    #[test]
    fn yen_has_no_minor_units() {
        assert_eq!(fmt("1500.6", "JPY"), "¥1,501");
    }

    #[test]
    fn unknown_currency_uses_code_suffix() {
        assert_eq!(fmt("99.9", "chf"), "99.90 CHF");
    }

    #[test]
    fn negative_amount_keeps_leading_sign() {
        assert_eq!(fmt("-1000", "GBP"), "-£1,000.00");
    }

    #[test]
    fn group_thousands_leaves_short_numbers_alone() {
        assert_eq!(group_thousands("999.00"), "999.00");
        assert_eq!(group_thousands("1000"), "1,000");
    }
}
