pub mod agenda_view;
pub mod board_view;
pub mod donor_view;
pub mod finance_view;
pub mod month_view;

use rust_decimal::{Decimal, RoundingStrategy};

/// Whole-dollar amount with thousands separators, e.g. `-$28,500`.
pub fn format_currency(amount: Decimal) -> String {
    let whole = amount
        .abs()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let rounded = whole.to_string();

    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, digit) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount.is_sign_negative() && !whole.is_zero() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// One decimal place with an explicit sign, e.g. `+12.5%`.
pub fn format_change(percent: Decimal) -> String {
    let rounded = percent.round_dp(1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("{}%", rounded)
    } else {
        format!("+{}%", rounded.abs())
    }
}

pub fn truncate_to_width(line: &str, width: usize) -> String {
    if width > 0 && line.chars().count() > width {
        let mut truncated = line.chars().take(width.saturating_sub(1)).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(dec!(75000)), "$75,000");
        assert_eq!(format_currency(dec!(1234567)), "$1,234,567");
        assert_eq!(format_currency(dec!(950)), "$950");
    }

    #[test]
    fn currency_keeps_sign_and_rounds() {
        assert_eq!(format_currency(dec!(-28500)), "-$28,500");
        assert_eq!(format_currency(dec!(2499.5)), "$2,500");
        assert_eq!(format_currency(Decimal::ZERO), "$0");
    }

    #[test]
    fn currency_that_rounds_to_zero_has_no_sign() {
        assert_eq!(format_currency(dec!(-0.4)), "$0");
        assert_eq!(format_currency(dec!(-0.5)), "-$1");
    }

    #[test]
    fn change_has_explicit_sign() {
        assert_eq!(format_change(dec!(50)), "+50%");
        assert_eq!(format_change(dec!(-12.345)), "-12.3%");
        assert_eq!(format_change(Decimal::ZERO), "+0%");
    }

    #[test]
    fn truncation_adds_ellipsis() {
        assert_eq!(truncate_to_width("Board Meeting", 6), "Board…");
        assert_eq!(truncate_to_width("Board", 10), "Board");
    }
}
