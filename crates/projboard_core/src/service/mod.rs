//! Core use-case services.
//!
//! # Responsibility
//! - Turn raw UI input into validated store mutations.
//! - Keep UI/FFI layers decoupled from validation rules.

pub mod project_form;
