use serde::Serialize;

use crate::color::{self, Rgb};

// ---------------------------------------------------------------------------
// Number formatting
// ---------------------------------------------------------------------------

/// Format `value` with a fixed number of decimals and `,` as thousands
/// separator, e.g. `1234.0, 0 → "1,234"`.
pub fn format_number(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" is not a number anyone wants to read.
    let negative = value < 0.0 && text.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Decimals a stat card shows: one if the value has a fractional part.
pub fn card_decimals(value: f64) -> usize {
    if value.fract() == 0.0 {
        0
    } else {
        1
    }
}

// ---------------------------------------------------------------------------
// Percentage deltas
// ---------------------------------------------------------------------------

/// A month-over-month change in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Delta {
    pub percent: f64,
}

impl Delta {
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }

    /// `+12%`, `-3%`, `0%`; one decimal only when needed.
    pub fn format(&self) -> String {
        let sign = if self.percent > 0.0 { "+" } else { "" };
        format!(
            "{sign}{}%",
            format_number(self.percent, card_decimals(self.percent))
        )
    }

    pub fn color(&self) -> Rgb {
        if self.percent < 0.0 {
            color::RED
        } else {
            color::CARD_GREEN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_number(1234.0, 0), "1,234");
        assert_eq!(format_number(42.0, 0), "42");
        assert_eq!(format_number(1_234_567.0, 0), "1,234,567");
        assert_eq!(format_number(100.0, 0), "100");
        assert_eq!(format_number(128.5, 1), "128.5");
        assert_eq!(format_number(12345.67, 1), "12,345.7");
    }

    #[test]
    fn negative_numbers_keep_sign_but_not_negative_zero() {
        assert_eq!(format_number(-1500.0, 0), "-1,500");
        assert_eq!(format_number(-0.01, 0), "0");
    }

    #[test]
    fn card_decimals_follow_fractional_part() {
        assert_eq!(card_decimals(63.0), 0);
        assert_eq!(card_decimals(128.5), 1);
        assert_eq!(card_decimals(1234.0), 0);
    }

    #[test]
    fn deltas_render_with_sign() {
        assert_eq!(Delta::new(12.0).format(), "+12%");
        assert_eq!(Delta::new(-3.0).format(), "-3%");
        assert_eq!(Delta::new(0.0).format(), "0%");
        assert_eq!(Delta::new(2.5).format(), "+2.5%");
        assert_eq!(Delta::new(8.0).color(), color::CARD_GREEN);
        assert_eq!(Delta::new(-8.0).color(), color::RED);
    }
}
