use crate::error::FieldError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

fn bic_regex() -> &'static Regex {
    static BIC_REGEX: OnceLock<Regex> = OnceLock::new();
    BIC_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Z]{6}[A-Z0-9]{2}([A-Z0-9]{3})?$").expect("BIC pattern is valid")
    })
}

/// Business identifier code of the beneficiary's bank (8 or 11 characters).
///
/// Optional in version 002 payloads within the EEA.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Bic(String);

impl Bic {
    /// Blank input means "no BIC".
    pub fn parse(raw: &str) -> Result<Option<Self>, FieldError> {
        let bic: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if bic.is_empty() {
            return Ok(None);
        }
        if !bic_regex().is_match(&bic) {
            return Err(FieldError::InvalidBic);
        }
        Ok(Some(Self(bic)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
