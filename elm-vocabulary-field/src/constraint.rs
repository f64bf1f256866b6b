//! Value-level validation constraints.
//!
//! The field type only supplies rule parameters; evaluation produces
//! [`ConstraintViolation`]s addressed by property path so the widget can map
//! them back onto form elements.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::field::FieldItem;

/// Message for a blank value.
pub const NOT_BLANK_MESSAGE: &str = "This value should not be blank.";

/// Message for a value outside the allowed set.
pub const ALLOWED_VALUES_MESSAGE: &str = "The value you selected is not a valid choice.";

/// A rule applied to a single property value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Constraint {
    /// The value must be present and non-empty.
    NotBlank,
    /// A present value must be one of `choices`.
    AllowedValues { choices: Vec<String> },
}

impl Constraint {
    /// The violation message for `value`, if it breaks this rule.
    ///
    /// `AllowedValues` ignores blank values, leaving them to `NotBlank`.
    pub fn check(&self, value: Option<&str>) -> Option<&'static str> {
        let value = value.filter(|v| !v.is_empty());
        match self {
            Constraint::NotBlank => value.is_none().then_some(NOT_BLANK_MESSAGE),
            Constraint::AllowedValues { choices } => match value {
                Some(v) if !choices.iter().any(|choice| choice == v) => {
                    Some(ALLOWED_VALUES_MESSAGE)
                }
                _ => None,
            },
        }
    }
}

/// A reported constraint failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstraintViolation {
    /// `"<delta>.<property>"`, relative to the field.
    pub property_path: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_value: Option<String>,
}

impl ConstraintViolation {
    /// The property segment of the path (`"value"` for `"0.value"`).
    pub fn property(&self) -> Option<&str> {
        self.property_path.split('.').nth(1)
    }

    /// The delta segment of the path.
    pub fn delta(&self) -> Option<usize> {
        self.property_path.split('.').next()?.parse().ok()
    }
}

/// Per-property constraints for a complex data item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComplexDataConstraint {
    pub properties: IndexMap<String, Vec<Constraint>>,
}

impl ComplexDataConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for `property`.
    pub fn with(mut self, property: impl Into<String>, constraint: Constraint) -> Self {
        self.properties
            .entry(property.into())
            .or_default()
            .push(constraint);
        self
    }

    /// Rules registered for `property`.
    pub fn constraints_for(&self, property: &str) -> &[Constraint] {
        self.properties
            .get(property)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Evaluate every rule against the item at `delta`.
    pub fn validate(&self, delta: usize, item: &FieldItem) -> Vec<ConstraintViolation> {
        let mut violations = Vec::new();
        for (property, constraints) in &self.properties {
            let value = match property.as_str() {
                "value" => item.value.as_deref(),
                _ => None,
            };
            for constraint in constraints {
                if let Some(message) = constraint.check(value) {
                    violations.push(ConstraintViolation {
                        property_path: format!("{delta}.{property}"),
                        message: message.to_string(),
                        invalid_value: value.map(str::to_string),
                    });
                }
            }
        }
        violations
    }
}
