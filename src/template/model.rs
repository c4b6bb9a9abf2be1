//! Compiled template model.

use crate::value::Value;
use std::collections::BTreeMap;

/// Scalar represents a type which has a single value which is either
/// numeric, string, or boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Numeric,
    Boolean,
    String,
}

/// Template is the compiled form of a JSON-shaped template value.
///
/// The authoring form is interpreted structurally, not as literal data:
///
/// - `null` compiles to [`Template::Unconstrained`] and accepts anything.
/// - A primitive compiles to [`Template::Scalar`] and constrains values to
///   its shallow category.
/// - A map compiles to [`Template::FixedObject`] over its declared fields;
///   a map whose only key is the empty string compiles to
///   [`Template::WildcardObject`], and an empty map compiles to a wildcard
///   over [`Template::Unconstrained`] ("any object shape").
/// - A list of length zero or one compiles to [`Template::Sequence`]; a
///   longer list compiles to [`Template::Choice`], a closed enumeration of
///   literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Template {
    /// No shape or type constraint at this position.
    Unconstrained,
    /// The value must share the scalar's shallow category.
    Scalar(Scalar),
    /// A fixed-shape object: each declared key maps to a field template,
    /// and keys not listed are rejected.
    FixedObject(BTreeMap<String, Template>),
    /// Every present key is validated against the single item template;
    /// presence checking is bypassed.
    WildcardObject(Box<Template>),
    /// An ordered container whose items all match the item template.
    Sequence(Box<Template>),
    /// The value must equal one of the listed literals.
    Choice(Vec<Value>),
}

impl Template {
    /// Compiles a JSON-shaped authoring value into a template.
    ///
    /// Compilation is total: every value denotes some template.
    pub fn compile(value: &Value) -> Template {
        match value {
            Value::Null => Template::Unconstrained,
            Value::Bool(_) => Template::Scalar(Scalar::Boolean),
            Value::Int(_) | Value::Float(_) => Template::Scalar(Scalar::Numeric),
            Value::String(_) => Template::Scalar(Scalar::String),
            Value::List(items) => match items.as_slice() {
                [] => Template::Sequence(Box::new(Template::Unconstrained)),
                [item] => Template::Sequence(Box::new(Template::compile(item))),
                _ => Template::Choice(items.clone()),
            },
            Value::Map(fields) => match (fields.len(), fields.get("")) {
                (0, _) => Template::WildcardObject(Box::new(Template::Unconstrained)),
                (1, Some(item)) => Template::WildcardObject(Box::new(Template::compile(item))),
                _ => Template::FixedObject(
                    fields
                        .iter()
                        .map(|(name, field)| (name.clone(), Template::compile(field)))
                        .collect(),
                ),
            },
        }
    }

    /// Returns the shallow category this template constrains values to,
    /// as used in diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            Template::Unconstrained => "any",
            Template::Scalar(Scalar::Numeric) => "number",
            Template::Scalar(Scalar::Boolean) => "boolean",
            Template::Scalar(Scalar::String) => "string",
            Template::FixedObject(_) | Template::WildcardObject(_) => "map",
            Template::Sequence(_) => "list",
            Template::Choice(_) => "choice",
        }
    }

    /// Returns true if this template denotes an object shape.
    pub fn is_object(&self) -> bool {
        matches!(self, Template::FixedObject(_) | Template::WildcardObject(_))
    }

    /// Returns true if this template denotes a homogeneous sequence shape.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Template::Sequence(_))
    }
}
