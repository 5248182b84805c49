//! Core domain logic for the project board.
//! Field validation, the observable project store, and the use cases built on them.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use service::project_form::{
    FormError, FormInput, FormResult, FormRules, ProjectForm, INVALID_INPUT_MESSAGE,
};
pub use store::{ListenerId, ProjectListener, ProjectStore, StoreError, StoreResult};
pub use validation::{
    validate, validate_with, FieldValue, Validatable, ValidationPolicy, Violation,
};
pub use view::project_list::{ProjectList, ProjectListItem};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
