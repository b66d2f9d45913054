use std::fmt::{self, Display};

/// A point estimate of the property price.
///
/// Always finite and non-negative. `Display` renders it with thousands
/// separators and two decimals, e.g. `1,234,567.89`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PredictionResult {
    value: f64,
}

impl PredictionResult {
    /// Wraps a finite model output, flooring it at zero.
    pub(crate) fn new(value: f64) -> Self {
        let value = if value <= 0.0 { 0.0 } else { value };
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group_thousands(self.value))
    }
}

/// Formats `value` with two decimals and a comma between every three digits of
/// the integer part.
pub fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + int.len() / 3 + 1);
    if value.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    for (i, digit) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out.push('.');
    out.push_str(frac);

    out
}
