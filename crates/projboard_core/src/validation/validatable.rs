//! Constraint descriptor and rule evaluation.
//!
//! Text bounds only apply to `FieldValue::Text`; numeric bounds only apply to
//! `FieldValue::Number`. A bound that does not match the value kind is ignored.

use std::fmt::{Display, Formatter};

/// Scalar value being checked.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Returns whether the stringified value is empty after trimming.
    ///
    /// Numbers always stringify to at least one character, so they are never
    /// blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Rule set used when evaluating a descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// All five rules, each guarded by its own bound.
    #[default]
    Strict,
    /// Reproduces the historical rule set: `max_length` is only checked when
    /// `min_length` is also set, and numeric `max` is never checked.
    Legacy,
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    Required,
    MinLength { min: usize, actual: usize },
    MaxLength { max: usize, actual: usize },
    Min { min: f64, actual: f64 },
    Max { max: f64, actual: f64 },
}

impl Violation {
    /// Stable rule name for diagnostics.
    pub fn rule(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength { .. } => "min_length",
            Self::MaxLength { .. } => "max_length",
            Self::Min { .. } => "min",
            Self::Max { .. } => "max",
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "value is required"),
            Self::MinLength { min, actual } => {
                write!(f, "length {actual} must be greater than {min}")
            }
            Self::MaxLength { max, actual } => {
                write!(f, "length {actual} must be less than {max}")
            }
            Self::Min { min, actual } => write!(f, "value {actual} must be greater than {min}"),
            Self::Max { max, actual } => write!(f, "value {actual} must be less than {max}"),
        }
    }
}

/// Constraint descriptor for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Creates a descriptor with no constraints.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Evaluates every rule and returns the ones that failed, in rule order.
    ///
    /// # Rules
    /// - `required`: trimmed value must be non-empty.
    /// - `min_length`: trimmed char count must be strictly greater.
    /// - `max_length`: char count must be strictly less.
    /// - `min` / `max`: strict comparison; `NaN` fails both.
    pub fn violations(&self, policy: ValidationPolicy) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.required && self.value.is_blank() {
            violations.push(Violation::Required);
        }

        match &self.value {
            FieldValue::Text(text) => {
                if let Some(min) = self.min_length {
                    let actual = text.trim().chars().count();
                    if actual <= min {
                        violations.push(Violation::MinLength { min, actual });
                    }
                }

                let check_max_length = match policy {
                    ValidationPolicy::Strict => true,
                    ValidationPolicy::Legacy => self.min_length.is_some(),
                };
                if let Some(max) = self.max_length.filter(|_| check_max_length) {
                    let actual = text.chars().count();
                    if actual >= max {
                        violations.push(Violation::MaxLength { max, actual });
                    }
                }
            }
            FieldValue::Number(actual) => {
                let actual = *actual;
                if let Some(min) = self.min {
                    // Written as a negated `>` so NaN fails.
                    if !(actual > min) {
                        violations.push(Violation::Min { min, actual });
                    }
                }
                if policy == ValidationPolicy::Strict {
                    if let Some(max) = self.max {
                        if !(actual < max) {
                            violations.push(Violation::Max { max, actual });
                        }
                    }
                }
            }
        }

        violations
    }
}

/// Validates with the default (`Strict`) policy.
pub fn validate(input: &Validatable) -> bool {
    validate_with(input, ValidationPolicy::default())
}

/// Validates with an explicit policy. Returns `true` only when every rule passes.
pub fn validate_with(input: &Validatable, policy: ValidationPolicy) -> bool {
    input.violations(policy).is_empty()
}
