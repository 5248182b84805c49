//! Project board domain model.
//!
//! # Responsibility
//! - Define the record shape rendered by the active/finished lists.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Records are never mutated after creation.

pub mod project;
