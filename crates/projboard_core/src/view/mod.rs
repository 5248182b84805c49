//! Renderer-facing projections of store snapshots.

pub mod project_list;
