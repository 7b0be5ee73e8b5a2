//! Validation and encoding of SEPA credit transfer QR payloads (EPC069-12).
//!
//! Raw form fields go through the [`domain::validator::Validator`], which
//! either yields a [`domain::payment::PaymentRequest`] or reports every
//! invalid field at once. [`domain::encoder::encode`] turns a request into the
//! payload text that a QR renderer embeds.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use domain::encoder::encode;
pub use domain::payment::{PaymentInput, PaymentRequest};
pub use domain::validator::{ValidationOptions, Validator, validate};
pub use error::{Field, FieldError, QrError, Result, ValidationErrors};
