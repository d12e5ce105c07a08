//! # Amount Types
//!
//! Monetary amounts entered at the prompt and the currency they are shown in.

use crate::error::PaymentError;
use std::fmt;
use std::str::FromStr;

/// Supported display currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    CHF,
    MXN,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "usd",
            Currency::EUR => "eur",
            Currency::GBP => "gbp",
            Currency::JPY => "jpy",
            Currency::CAD => "cad",
            Currency::AUD => "aud",
            Currency::CHF => "chf",
            Currency::MXN => "mxn",
        }
    }

    /// Returns the number of decimal places for this currency
    /// (JPY has 0 decimals, most others have 2)
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Prefix written before the digits
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CAD => "C$",
            Currency::AUD => "A$",
            Currency::CHF => "CHF ",
            Currency::MXN => "MX$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

impl FromStr for Currency {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "usd" => Ok(Currency::USD),
            "eur" => Ok(Currency::EUR),
            "gbp" => Ok(Currency::GBP),
            "jpy" => Ok(Currency::JPY),
            "cad" => Ok(Currency::CAD),
            "aud" => Ok(Currency::AUD),
            "chf" => Ok(Currency::CHF),
            "mxn" => Ok(Currency::MXN),
            other => Err(PaymentError::Configuration(format!(
                "unsupported currency: {}",
                other
            ))),
        }
    }
}

/// A payment amount as typed by the user.
///
/// The value is kept exactly as parsed; sign is not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount {
    pub value: f64,
    pub currency: Currency,
}

impl Amount {
    pub fn new(value: f64, currency: Currency) -> Self {
        Self { value, currency }
    }

    /// Parse a line of user input.
    ///
    /// Surrounding whitespace is ignored and `,` group separators are allowed
    /// in the whole-number part ("1,234.50"). Returns `None` for anything that
    /// is not a finite floating-point number.
    pub fn parse(input: &str, currency: Currency) -> Option<Self> {
        let value: f64 = strip_group_separators(input.trim())?.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Self::new(value, currency))
    }

    /// Format for display (e.g., "$1,234.50", "¥1,235", "-$5.00")
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places();
        // Midpoints round away from zero, not to even
        let scale = 10_f64.powi(places as i32);
        let scaled = self.value.abs() * scale;
        let rounded = if scaled.is_finite() {
            scaled.round() / scale
        } else {
            self.value.abs()
        };
        let digits = format!("{:.*}", places as usize, rounded);

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        // Values that round to zero print without a sign
        let negative = self.value < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9'));

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(self.currency.symbol());
        out.push_str(&group_thousands(whole));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Drop `,` separators before the decimal point; a `,` after it is invalid.
fn strip_group_separators(input: &str) -> Option<String> {
    let (whole, rest) = match input.find(['.', 'e', 'E']) {
        Some(at) => input.split_at(at),
        None => (input, ""),
    };
    if rest.contains(',') || whole.starts_with(',') {
        return None;
    }
    let mut out: String = whole.chars().filter(|&c| c != ',').collect();
    out.push_str(rest);
    Some(out)
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
