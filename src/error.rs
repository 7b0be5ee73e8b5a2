use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// The input fields a payment description is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Iban,
    Amount,
    Reference,
    Bic,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Iban => "iban",
            Field::Amount => "amount",
            Field::Reference => "reference",
            Field::Bic => "bic",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a free-text field (name or reference) was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextError {
    #[error("longer than {max} characters ({len})")]
    TooLong { max: usize, len: usize },
    #[error("contains forbidden character {0:?}")]
    ForbiddenCharacter(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IbanError {
    #[error("IBAN is required")]
    Missing,
    #[error("IBAN format is not valid")]
    Malformed,
    #[error("unknown IBAN country code {0}")]
    UnknownCountry(String),
    #[error("IBAN for {country} must have {expected} characters, got {actual}")]
    WrongLength {
        country: String,
        expected: usize,
        actual: usize,
    },
    #[error("IBAN check digits do not match")]
    Checksum,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountError {
    #[error("not a number")]
    NotANumber,
    #[error("must be a positive number")]
    NotPositive,
    #[error("at most two decimal places are allowed")]
    TooManyDecimals,
    #[error("exceeds the maximum of 999999999.99")]
    TooLarge,
}

/// One failure kind per input field.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum FieldError {
    #[error("beneficiary name is required")]
    MissingName,
    #[error("beneficiary name {0}")]
    InvalidName(TextError),
    #[error("{0}")]
    InvalidIban(IbanError),
    #[error("amount is required")]
    MissingAmount,
    #[error("amount {0}")]
    InvalidAmount(AmountError),
    #[error("reference {0}")]
    InvalidReference(TextError),
    #[error("BIC format is not valid")]
    InvalidBic,
}

/// Every field-level failure found in a single validation pass.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
#[error("invalid payment details{}", list_field_errors(.0))]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

fn list_field_errors(errors: &BTreeMap<Field, FieldError>) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, (field, error))| {
            let sep = if i == 0 { ": " } else { "; " };
            format!("{sep}{field}: {error}")
        })
        .collect()
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the failure for `field`. A field keeps its first failure.
    pub fn add(&mut self, field: Field, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }

    /// Folds the error side of a field check into the collection.
    pub fn check<T>(&mut self, field: Field, result: std::result::Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.add(field, error);
                None
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

/// Failure reported by an external QR rendering collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct RenderError(pub String);

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Error, Debug)]
pub enum QrError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("QR code rendering failed: {0}")]
    GeneralFailure(#[from] RenderError),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QrError>;
