use crate::error::{FieldError, TextError};
use serde::Serialize;
use std::fmt;

/// Maximum length of the beneficiary name line.
pub const MAX_NAME_LEN: usize = 70;
/// Maximum length of the unstructured remittance line.
pub const MAX_REFERENCE_LEN: usize = 140;

/// Characters allowed in free-text payload lines.
///
/// The payload is UTF-8 (character set `1`), so any printable character is
/// accepted. Control characters and the Unicode line and paragraph
/// separators would break the line structure.
pub fn is_permitted(c: char) -> bool {
    !c.is_control() && !matches!(c, '\u{2028}' | '\u{2029}')
}

fn check_text(value: &str, max: usize) -> Result<(), TextError> {
    if let Some(c) = value.chars().find(|c| !is_permitted(*c)) {
        return Err(TextError::ForbiddenCharacter(c));
    }
    let len = value.chars().count();
    if len > max {
        return Err(TextError::TooLong { max, len });
    }
    Ok(())
}

/// The beneficiary's name: trimmed, non-empty and at most 70 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BeneficiaryName(String);

impl BeneficiaryName {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(FieldError::MissingName);
        }
        check_text(name, MAX_NAME_LEN).map_err(FieldError::InvalidName)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BeneficiaryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unstructured remittance information shown to the payer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    /// Blank input means "no reference" and is not an error.
    pub fn parse(raw: &str) -> Result<Option<Self>, FieldError> {
        let reference = raw.trim();
        if reference.is_empty() {
            return Ok(None);
        }
        check_text(reference, MAX_REFERENCE_LEN).map_err(FieldError::InvalidReference)?;
        Ok(Some(Self(reference.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
