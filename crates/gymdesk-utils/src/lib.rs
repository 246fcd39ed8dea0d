//! Display formatting helpers
//!
//! Currency rendering is a presentation concern and lives here so the
//! report aggregations stay format-agnostic.

use rust_decimal::Decimal;

/// Format an integer part with a thousands separator
fn group_digits(s: &str, separator: &str) -> String {
    let mut result = String::new();
    let mut count = 0;
    for c in s.chars().rev() {
        if count == 3 {
            result.push_str(separator);
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Format an amount in Brazilian Real style: `R$ 1.234,56`
pub fn format_brl(amount: Decimal) -> String {
    format_currency(amount, "R$", ".", ",", 2)
}

/// Format an amount with explicit symbol and separators
pub fn format_currency(
    amount: Decimal,
    symbol: &str,
    thousands_sep: &str,
    decimal_sep: &str,
    decimal_places: u32,
) -> String {
    let rounded = amount.round_dp(decimal_places).abs();
    let plain = rounded.to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (plain, String::new()),
    };

    let mut frac = frac_part;
    while (frac.len() as u32) < decimal_places {
        frac.push('0');
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let grouped = group_digits(&int_part, thousands_sep);

    if decimal_places == 0 {
        format!("{}{} {}", sign, symbol, grouped)
    } else {
        format!("{}{} {}{}{}", sign, symbol, grouped, decimal_sep, frac)
    }
}

/// Month label in the dashboard's `MM/YYYY` form
pub fn month_label(month: u32, year: i32) -> String {
    format!("{:02}/{}", month, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl_grouping() {
        assert_eq!(format_brl(Decimal::new(123456, 2)), "R$ 1.234,56");
        assert_eq!(format_brl(Decimal::new(350000, 2)), "R$ 3.500,00");
        assert_eq!(format_brl(Decimal::from(120)), "R$ 120,00");
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(Decimal::new(-4550, 2)), "-R$ 45,50");
    }

    #[test]
    fn test_format_brl_rounds() {
        assert_eq!(format_brl(Decimal::new(12346, 3)), "R$ 12,35");
        assert_eq!(format_brl(Decimal::new(12344, 3)), "R$ 12,34");
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(6, 2024), "06/2024");
        assert_eq!(month_label(10, 2023), "10/2023");
    }
}
