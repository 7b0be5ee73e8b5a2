use super::amount::Amount;
use super::bic::Bic;
use super::iban::Iban;
use super::text::{BeneficiaryName, Reference};
use serde::{Deserialize, Serialize};

/// Payment details exactly as a person typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PaymentInput {
    pub name: String,
    pub iban: String,
    pub amount: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub bic: String,
}

impl PaymentInput {
    pub fn new(
        name: impl Into<String>,
        iban: impl Into<String>,
        amount: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            iban: iban.into(),
            amount: amount.into(),
            reference: reference.into(),
            bic: String::new(),
        }
    }

    pub fn with_bic(mut self, bic: impl Into<String>) -> Self {
        self.bic = bic.into();
        self
    }
}

/// A credit transfer whose every field passed validation.
///
/// Only the validator builds these, so holding one is proof the fields are
/// encodable. Two requests with equal fields encode to the same payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PaymentRequest {
    name: BeneficiaryName,
    iban: Iban,
    amount: Amount,
    reference: Option<Reference>,
    bic: Option<Bic>,
}

impl PaymentRequest {
    pub(crate) fn new(
        name: BeneficiaryName,
        iban: Iban,
        amount: Amount,
        reference: Option<Reference>,
        bic: Option<Bic>,
    ) -> Self {
        Self {
            name,
            iban,
            amount,
            reference,
            bic,
        }
    }

    pub fn name(&self) -> &BeneficiaryName {
        &self.name
    }

    pub fn iban(&self) -> &Iban {
        &self.iban
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn reference(&self) -> Option<&Reference> {
        self.reference.as_ref()
    }

    pub fn bic(&self) -> Option<&Bic> {
        self.bic.as_ref()
    }

    /// The validated fields written back as raw input.
    pub fn to_input(&self) -> PaymentInput {
        PaymentInput {
            name: self.name.to_string(),
            iban: self.iban.to_string(),
            amount: self.amount.to_string(),
            reference: self
                .reference
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            bic: self.bic.as_ref().map(ToString::to_string).unwrap_or_default(),
        }
    }
}
