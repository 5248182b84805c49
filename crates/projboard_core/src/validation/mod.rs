//! Declarative field validation.
//!
//! # Responsibility
//! - Check one labeled value against optional text/numeric bounds.
//! - Keep rule evaluation pure so the form layer owns user messaging.
//!
//! # Invariants
//! - An unset bound skips its rule; a bound of `0` is still evaluated.
//! - Validation never panics and never reports which rule failed to users.

pub mod validatable;

pub use validatable::{validate, validate_with, FieldValue, Validatable, ValidationPolicy, Violation};
