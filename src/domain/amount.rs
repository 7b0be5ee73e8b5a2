use crate::error::{AmountError, FieldError};
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Largest amount a credit transfer payload can carry.
pub const MAX_AMOUNT: Decimal = dec!(999999999.99);
/// Smallest amount a credit transfer payload can carry.
pub const MIN_AMOUNT: Decimal = dec!(0.01);

const CURRENCY: &str = "EUR";

fn amount_regex() -> &'static Regex {
    static AMOUNT_REGEX: OnceLock<Regex> = OnceLock::new();
    AMOUNT_REGEX.get_or_init(|| {
        Regex::new(r"^[+-]?([0-9]+([.,][0-9]*)?|[.,][0-9]+)$").expect("amount pattern is valid")
    })
}

/// A positive euro amount with at most two decimal places.
///
/// The value is kept at a scale of exactly two so equal amounts written
/// differently ("5", "5.0", "5,00") compare and print the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }
        if value.normalize().scale() > 2 {
            return Err(AmountError::TooManyDecimals);
        }
        if value > MAX_AMOUNT {
            return Err(AmountError::TooLarge);
        }
        let mut value = value;
        value.rescale(2);
        Ok(Self(value))
    }

    /// Parses user input. Either `.` or `,` is accepted as the decimal
    /// separator; exponents, thousands separators and non-finite values are not.
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(FieldError::MissingAmount);
        }
        Self::parse_decimal(raw)
            .and_then(Self::new)
            .map_err(FieldError::InvalidAmount)
    }

    /// Works on the digits as text, so no precision is lost or rounded away
    /// before the bounds are checked.
    fn parse_decimal(raw: &str) -> Result<Decimal, AmountError> {
        if !amount_regex().is_match(raw) {
            return Err(AmountError::NotANumber);
        }
        let (negative, digits) = match raw.as_bytes()[0] {
            b'-' => (true, &raw[1..]),
            b'+' => (false, &raw[1..]),
            _ => (false, raw),
        };
        let (int_part, frac_part) = digits
            .split_once(['.', ','])
            .unwrap_or((digits, ""));
        let int_part = int_part.trim_start_matches('0');
        let frac_part = frac_part.trim_end_matches('0');

        if negative || (int_part.is_empty() && frac_part.is_empty()) {
            return Err(AmountError::NotPositive);
        }
        if frac_part.len() > 2 {
            return Err(AmountError::TooManyDecimals);
        }
        if int_part.len() > 9 {
            return Err(AmountError::TooLarge);
        }

        let int_part = if int_part.is_empty() { "0" } else { int_part };
        Decimal::from_str(&format!("{int_part}.{frac_part:0<2}"))
            .map_err(|_| AmountError::NotANumber)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn currency(&self) -> &'static str {
        CURRENCY
    }

    /// Currency code followed by the amount with two fraction digits, e.g. `EUR100.00`.
    pub fn to_payload(&self) -> String {
        format!("{CURRENCY}{}", self.0)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
