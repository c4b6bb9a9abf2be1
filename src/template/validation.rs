//! Shallow type checking, recursive validation, and validation errors.

use super::model::Template;
use crate::value::{Map, Value};
use thiserror::Error;

/// ValidationError represents a violation of a template's constraints.
///
/// Every variant carries the path label of the offending position, built
/// from the view's type name (e.g. `Order.items`, `(item of Order.items)`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{path}: shape mismatch: expected {expected}, got {value}")]
    ShapeMismatch {
        path: String,
        expected: String,
        value: String,
    },

    #[error("{path}: unknown field: {field}")]
    UnknownField { path: String, field: String },

    #[error("{path}: index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds {
        path: String,
        index: usize,
        len: usize,
    },

    #[error("cannot compute a delta between {left} and {right}: type names or templates differ")]
    IncompatibleDelta { left: String, right: String },
}

impl ValidationError {
    /// Creates a shape mismatch error.
    pub fn shape_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        ValidationError::ShapeMismatch {
            path: path.into(),
            expected: expected.into(),
            value: value.into(),
        }
    }

    /// Creates an unknown field error.
    pub fn unknown_field(path: impl Into<String>, field: impl Into<String>) -> Self {
        ValidationError::UnknownField {
            path: path.into(),
            field: field.into(),
        }
    }

    /// Creates an index out of bounds error.
    pub fn index_out_of_bounds(path: impl Into<String>, index: usize, len: usize) -> Self {
        ValidationError::IndexOutOfBounds {
            path: path.into(),
            index,
            len,
        }
    }

    /// Creates an incompatible delta error.
    pub fn incompatible_delta(left: impl Into<String>, right: impl Into<String>) -> Self {
        ValidationError::IncompatibleDelta {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl Template {
    /// Checks one value against this template without recursing into
    /// containers.
    ///
    /// An unconstrained template and a null value always pass. A choice
    /// template requires the value to equal one of its literals; any other
    /// template requires the value's shallow category to match.
    pub fn shallow_check(&self, path: &str, value: &Value) -> Result<(), ValidationError> {
        if matches!(self, Template::Unconstrained) || value.is_null() {
            return Ok(());
        }

        if let Template::Choice(options) = self {
            if options.iter().any(|option| option == value) {
                return Ok(());
            }
            let allowed = options
                .iter()
                .map(|option| option.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ValidationError::shape_mismatch(
                path,
                format!("one of [{}]", allowed),
                value.to_string(),
            ));
        }

        if self.category() != value.type_name() {
            return Err(ValidationError::shape_mismatch(
                path,
                self.category(),
                value.to_string(),
            ));
        }

        Ok(())
    }

    /// Validates a value against this template, recursing into containers.
    ///
    /// Object templates validate every present entry, sequence templates
    /// validate every element; scalar and choice templates never recurse.
    pub fn validate(&self, path: &str, value: &Value) -> Result<(), ValidationError> {
        if matches!(self, Template::Unconstrained) || value.is_null() {
            return Ok(());
        }

        self.shallow_check(path, value)?;

        match (self, value) {
            (Template::FixedObject(_) | Template::WildcardObject(_), Value::Map(data)) => {
                self.validate_object(path, data)
            }
            (Template::Sequence(item), Value::List(items)) => {
                let label = format!("(item of {})", path);
                for element in items {
                    item.validate(&label, element)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Validates an object's entries against this template. This is the
    /// object-rooted entry point used by mapping view construction.
    pub fn validate_object(&self, path: &str, data: &Map) -> Result<(), ValidationError> {
        match self {
            Template::Unconstrained => Ok(()),
            Template::FixedObject(fields) => {
                for (key, value) in data.iter() {
                    match fields.get(key) {
                        Some(field) => {
                            field.validate(&format!("{}.{}", path, key), value)?;
                        }
                        None => {
                            return Err(ValidationError::unknown_field(path, key));
                        }
                    }
                }
                Ok(())
            }
            Template::WildcardObject(item) => {
                let label = format!("(element of {})", path);
                for (_, value) in data.iter() {
                    item.validate(&label, value)?;
                }
                Ok(())
            }
            other => Err(ValidationError::shape_mismatch(
                path,
                other.category(),
                "map",
            )),
        }
    }
}
