//! Observable in-memory project store.
//!
//! # Responsibility
//! - Own the ordered project sequence for one UI session.
//! - Notify listeners synchronously after every add.
//!
//! # Invariants
//! - Insertion order is display order.
//! - Listeners receive owned snapshots, never the store's own sequence.
//! - Mutation from inside a notification is rejected, not recursed.

pub mod listener;
pub mod project_store;

pub use listener::{ListenerId, ProjectListener};
pub use project_store::{ProjectStore, StoreError, StoreResult};
