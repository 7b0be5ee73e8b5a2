//! Application layer orchestrating validation, encoding and rendering.
//!
//! This module defines the `QrGenerator` which acts as the primary entry point
//! for turning raw payment input into a scannable code.

pub mod generator;
