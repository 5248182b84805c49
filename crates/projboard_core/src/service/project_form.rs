//! Project form submission use case.
//!
//! # Responsibility
//! - Build field descriptors from raw form text.
//! - Reject the whole submission with one generic message on any failure.
//! - Add accepted submissions to the injected store.
//!
//! # Invariants
//! - The store is only touched after every field passes.
//! - Users never learn which field failed; diagnostics go to logs by rule name.
//! - Field contents are never logged.

use crate::model::project::ProjectId;
use crate::store::{ProjectStore, StoreError};
use crate::validation::{Validatable, ValidationPolicy, Violation};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed user-facing text for any rejected submission.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. please try again!";

/// Raw field text as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub title: String,
    pub description: String,
    /// Headcount as entered; parsed as a number before validation.
    pub people: String,
}

impl FormInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }
}

/// Field constraints applied on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct FormRules {
    pub policy: ValidationPolicy,
    /// Description must be strictly longer than this (trimmed).
    pub description_min_length: usize,
    /// Headcount must be strictly greater than this.
    pub people_min: f64,
    /// Headcount must be strictly less than this (ignored by `Legacy`).
    pub people_max: f64,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::Strict,
            description_min_length: 5,
            people_min: 1.0,
            people_max: 5.0,
        }
    }
}

/// Form submission errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// At least one field failed validation.
    InvalidInput,
    /// Store rejected the mutation.
    Store(StoreError),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "{INVALID_INPUT_MESSAGE}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidInput => None,
        }
    }
}

impl From<StoreError> for FormError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Result type for form use cases.
pub type FormResult<T> = Result<T, FormError>;

/// Input collector bound to one store.
pub struct ProjectForm<'a> {
    store: &'a ProjectStore,
    rules: FormRules,
}

impl<'a> ProjectForm<'a> {
    /// Creates a form with default rules.
    pub fn new(store: &'a ProjectStore) -> Self {
        Self::with_rules(store, FormRules::default())
    }

    pub fn with_rules(store: &'a ProjectStore, rules: FormRules) -> Self {
        Self { store, rules }
    }

    /// Validates all fields and adds the project on success.
    ///
    /// # Contract
    /// - Title: required.
    /// - Description: required, trimmed length above `description_min_length`.
    /// - People: required, numeric, within `(people_min, people_max)`, whole,
    ///   and representable as `i64` without rounding or saturation.
    /// - Title and description are stored exactly as entered.
    ///
    /// # Errors
    /// - `FormError::InvalidInput` when any field fails; the store is unchanged.
    /// - `FormError::Store` when called from inside a store listener.
    pub fn submit(&self, input: &FormInput) -> FormResult<ProjectId> {
        let people = parse_people(&input.people);
        let checks = [
            ("title", Validatable::text(input.title.as_str()).required()),
            (
                "description",
                Validatable::text(input.description.as_str())
                    .required()
                    .min_length(self.rules.description_min_length),
            ),
            (
                "people",
                Validatable::number(people)
                    .required()
                    .min(self.rules.people_min)
                    .max(self.rules.people_max),
            ),
        ];

        let mut rejected = false;
        for (field, descriptor) in &checks {
            let violations = descriptor.violations(self.rules.policy);
            if !violations.is_empty() {
                rejected = true;
                debug!(
                    "event=form_submit module=form status=invalid field={} rules={}",
                    field,
                    rule_names(&violations)
                );
            }
        }
        let headcount = whole_headcount(people);
        if headcount.is_none() {
            rejected = true;
            debug!("event=form_submit module=form status=invalid field=people rules=whole");
        }
        let Some(headcount) = headcount.filter(|_| !rejected) else {
            return Err(FormError::InvalidInput);
        };

        let id = self.store.add_project(
            input.title.as_str(),
            input.description.as_str(),
            headcount,
        )?;
        info!("event=form_submit module=form status=ok project_id={id}");
        Ok(id)
    }
}

/// Converts headcount text to a number: blank is `0`, unparsable is `NaN`.
fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Converts a parsed headcount to `i64` when it is whole and in range.
///
/// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
fn whole_headcount(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if !in_range || value.fract() != 0.0 {
        return None;
    }
    Some(value as i64)
}

fn rule_names(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::rule)
        .collect::<Vec<_>>()
        .join(",")
}
