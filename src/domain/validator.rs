use super::amount::Amount;
use super::bic::Bic;
use super::iban::{Iban, IbanCheck};
use super::payment::{PaymentInput, PaymentRequest};
use super::text::{BeneficiaryName, Reference};
use crate::error::{Field, ValidationErrors};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationOptions {
    pub iban_check: IbanCheck,
}

impl ValidationOptions {
    /// Options that also verify IBAN country length and check digits.
    pub fn strict() -> Self {
        Self {
            iban_check: IbanCheck::Checksum,
        }
    }
}

/// Turns raw payment fields into a [`PaymentRequest`].
///
/// Every field is checked on each call, so a single pass reports all invalid
/// fields at once. The validator holds no state besides its options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    pub fn validate(
        &self,
        name: &str,
        iban: &str,
        amount: &str,
        reference: &str,
    ) -> Result<PaymentRequest, ValidationErrors> {
        self.validate_fields(name, iban, amount, reference, "")
    }

    /// Same as [`Validator::validate`], plus the optional BIC.
    pub fn validate_input(&self, input: &PaymentInput) -> Result<PaymentRequest, ValidationErrors> {
        self.validate_fields(
            &input.name,
            &input.iban,
            &input.amount,
            &input.reference,
            &input.bic,
        )
    }

    fn validate_fields(
        &self,
        name: &str,
        iban: &str,
        amount: &str,
        reference: &str,
        bic: &str,
    ) -> Result<PaymentRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.check(Field::Name, BeneficiaryName::parse(name));
        let iban = errors.check(Field::Iban, Iban::parse(iban, self.options.iban_check));
        let amount = errors.check(Field::Amount, Amount::parse(amount));
        let reference = errors.check(Field::Reference, Reference::parse(reference));
        let bic = errors.check(Field::Bic, Bic::parse(bic));

        match (name, iban, amount, reference, bic) {
            (Some(name), Some(iban), Some(amount), Some(reference), Some(bic)) => {
                Ok(PaymentRequest::new(name, iban, amount, reference, bic))
            }
            _ => Err(errors),
        }
    }
}

/// Validates with the default (syntax-only IBAN) options.
pub fn validate(
    name: &str,
    iban: &str,
    amount: &str,
    reference: &str,
) -> Result<PaymentRequest, ValidationErrors> {
    Validator::default().validate(name, iban, amount, reference)
}
