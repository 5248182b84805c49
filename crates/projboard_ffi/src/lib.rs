//! Flutter-facing bridge for the project board core.

pub mod api;
