// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::QuotationForm;

/// Price, discount, and net total for one generation attempt. All values are
/// already resolved to numbers; blank or unparseable input counts as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub price: f64,
    pub discount: f64,
    pub total: f64,
}

impl Totals {
    pub fn from_form(form: &QuotationForm) -> Self {
        let price = parse_amount(&form.price);
        let discount = parse_amount(&form.discount);
        Self {
            price,
            discount,
            // Discount may exceed price; the total clamps to zero rather
            // than going negative.
            total: (price - discount).max(0.0),
        }
    }
}

fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// es-MX currency rendering: `$1,234,567.89`. Rounded to whole cents before
/// grouping so float noise never leaks into the document.
pub fn format_mxn(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::{Totals, format_mxn};
    use crate::QuotationForm;
    use time::{Date, Month};

    fn form_with(price: &str, discount: &str) -> QuotationForm {
        let today = Date::from_calendar_date(2026, Month::August, 27).expect("valid date");
        let mut form = QuotationForm::with_date(today);
        form.price = price.to_owned();
        form.discount = discount.to_owned();
        form
    }

    #[test]
    fn total_is_price_minus_discount() {
        let totals = Totals::from_form(&form_with("500000", "20000"));
        assert_eq!(totals.price, 500_000.0);
        assert_eq!(totals.discount, 20_000.0);
        assert_eq!(totals.total, 480_000.0);
    }

    #[test]
    fn excess_discount_clamps_total_to_zero() {
        let totals = Totals::from_form(&form_with("1000", "2500"));
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn unparseable_amounts_count_as_zero() {
        let totals = Totals::from_form(&form_with("abc", ""));
        assert_eq!(totals.price, 0.0);
        assert_eq!(totals.discount, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn currency_formatting_groups_thousands() {
        assert_eq!(format_mxn(480_000.0), "$480,000.00");
        assert_eq!(format_mxn(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_mxn(0.0), "$0.00");
        assert_eq!(format_mxn(999.5), "$999.50");
        assert_eq!(format_mxn(100.0), "$100.00");
    }

    #[test]
    fn currency_formatting_rounds_to_whole_cents() {
        assert_eq!(format_mxn(0.005), "$0.01");
        assert_eq!(format_mxn(12_345.004), "$12,345.00");
    }
}
