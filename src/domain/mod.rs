//! Payment value objects, validation and payload encoding.
//!
//! Everything here is synchronous and side-effect free, apart from the
//! rendering port which only declares the external collaborator.

pub mod amount;
pub mod bic;
pub mod encoder;
pub mod iban;
pub mod payment;
pub mod ports;
pub mod text;
pub mod validator;
