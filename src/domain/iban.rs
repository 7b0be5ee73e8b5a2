use crate::error::{FieldError, IbanError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// How thoroughly an IBAN is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IbanCheck {
    /// Format only: country code, check digits, 1 to 30 alphanumerics.
    #[default]
    Syntax,
    /// Format, registered country length and ISO 7064 mod-97-10 check digits.
    Checksum,
}

/// IBAN lengths per country, from the SWIFT IBAN registry.
#[rustfmt::skip]
const COUNTRY_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24), ("AE", 23), ("AL", 28), ("AT", 20), ("AZ", 28), ("BA", 20),
    ("BE", 16), ("BG", 22), ("BH", 22), ("BR", 29), ("BY", 28), ("CH", 21),
    ("CR", 22), ("CY", 28), ("CZ", 24), ("DE", 22), ("DK", 18), ("DO", 28),
    ("EE", 20), ("EG", 29), ("ES", 24), ("FI", 18), ("FO", 18), ("FR", 27),
    ("GB", 22), ("GE", 22), ("GI", 23), ("GL", 18), ("GR", 27), ("GT", 28),
    ("HR", 21), ("HU", 28), ("IE", 22), ("IL", 23), ("IQ", 23), ("IS", 26),
    ("IT", 27), ("JO", 30), ("KW", 30), ("KZ", 20), ("LB", 28), ("LC", 32),
    ("LI", 21), ("LT", 20), ("LU", 20), ("LV", 21), ("MC", 27), ("MD", 24),
    ("ME", 22), ("MK", 19), ("MR", 27), ("MT", 31), ("MU", 30), ("NL", 18),
    ("NO", 15), ("PK", 24), ("PL", 28), ("PS", 29), ("PT", 25), ("QA", 29),
    ("RO", 24), ("RS", 22), ("SA", 24), ("SC", 31), ("SE", 24), ("SI", 19),
    ("SK", 24), ("SM", 27), ("ST", 25), ("SV", 28), ("TL", 23), ("TN", 24),
    ("TR", 26), ("UA", 29), ("VA", 22), ("VG", 24), ("XK", 20),
];

fn iban_regex() -> &'static Regex {
    static IBAN_REGEX: OnceLock<Regex> = OnceLock::new();
    IBAN_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}$").expect("IBAN pattern is valid")
    })
}

/// Registered IBAN length for a country code, if the country issues IBANs.
pub fn country_length(country: &str) -> Option<usize> {
    COUNTRY_LENGTHS
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, len)| *len)
}

/// ISO 7064 mod-97-10 remainder of an IBAN already in electronic form.
///
/// The first four characters are moved to the end and letters expand to
/// two digits (A = 10 .. Z = 35). A valid IBAN leaves a remainder of 1.
pub fn mod97(iban: &str) -> u32 {
    let (head, tail) = iban.split_at(4.min(iban.len()));
    tail.chars().chain(head.chars()).fold(0, |rem, c| match c.to_digit(36) {
        Some(v) if v < 10 => (rem * 10 + v) % 97,
        Some(v) => (rem * 100 + v) % 97,
        None => rem,
    })
}

/// Removes every whitespace character and uppercases the rest.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// An account identifier in electronic form (no spaces, uppercase).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Iban(String);

impl Iban {
    pub fn parse(raw: &str, check: IbanCheck) -> Result<Self, FieldError> {
        Self::parse_inner(raw, check).map_err(FieldError::InvalidIban)
    }

    fn parse_inner(raw: &str, check: IbanCheck) -> Result<Self, IbanError> {
        let iban = normalize(raw);
        if iban.is_empty() {
            return Err(IbanError::Missing);
        }
        if !iban_regex().is_match(&iban) {
            return Err(IbanError::Malformed);
        }

        if check == IbanCheck::Checksum {
            let country = &iban[..2];
            let expected = country_length(country)
                .ok_or_else(|| IbanError::UnknownCountry(country.to_string()))?;
            if iban.len() != expected {
                return Err(IbanError::WrongLength {
                    country: country.to_string(),
                    expected,
                    actual: iban.len(),
                });
            }
            if mod97(&iban) != 1 {
                return Err(IbanError::Checksum);
            }
        }

        Ok(Self(iban))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn country(&self) -> &str {
        &self.0[..2]
    }

    /// Print form: blocks of four characters separated by spaces.
    pub fn grouped(&self) -> String {
        self.0
            .as_bytes()
            .chunks(4)
            .map(|chunk| String::from_utf8_lossy(chunk))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
