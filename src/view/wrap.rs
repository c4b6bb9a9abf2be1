//! The wrap factory: the single place deciding whether a templated value
//! reads back as an object view, a sequence view, or a leaf.

use super::mapping::MappingView;
use super::sequence::SequenceView;
use crate::template::{Template, ValidationError};
use crate::value::Value;

/// Field is the result of reading one position through a view.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// The key is absent or holds an explicit null.
    Absent,
    /// A leaf value.
    Value(Value),
    /// A nested object, wrapped against its resolved template.
    Mapping(MappingView),
    /// A nested sequence, wrapped against its resolved item template.
    Sequence(SequenceView),
}

impl Field {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Field::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_mapping(self) -> Option<MappingView> {
        match self {
            Field::Mapping(view) => Some(view),
            _ => None,
        }
    }

    pub fn into_sequence(self) -> Option<SequenceView> {
        match self {
            Field::Sequence(view) => Some(view),
            _ => None,
        }
    }

    /// Unwraps to the underlying raw value; absence surfaces as null.
    pub fn into_value(self) -> Value {
        match self {
            Field::Absent => Value::Null,
            Field::Value(value) => value,
            Field::Mapping(view) => view.into(),
            Field::Sequence(view) => view.into(),
        }
    }
}

/// Wraps a raw value against its resolved template.
///
/// Object-shaped templates produce a [`MappingView`], sequence templates a
/// [`SequenceView`], and an unconstrained template defers to the value's
/// own shape. Scalar and choice templates always read back as leaves.
/// Wrapping a container re-runs recursive validation through the view
/// constructor.
pub fn wrap(type_name: String, template: &Template, value: &Value) -> Result<Field, ValidationError> {
    if value.is_null() {
        return Ok(Field::Absent);
    }

    match template {
        Template::FixedObject(_) | Template::WildcardObject(_) => match value {
            Value::Map(data) => Ok(Field::Mapping(MappingView::new(
                type_name,
                template.clone(),
                data.clone(),
            )?)),
            other => Err(ValidationError::shape_mismatch(
                type_name,
                "map",
                other.to_string(),
            )),
        },
        Template::Sequence(item) => match value {
            Value::List(items) => Ok(Field::Sequence(SequenceView::new(
                type_name,
                (**item).clone(),
                items.clone(),
            )?)),
            other => Err(ValidationError::shape_mismatch(
                type_name,
                "list",
                other.to_string(),
            )),
        },
        Template::Unconstrained => match value {
            Value::Map(data) => Ok(Field::Mapping(MappingView::new(
                type_name,
                Template::Unconstrained,
                data.clone(),
            )?)),
            Value::List(items) => Ok(Field::Sequence(SequenceView::new(
                type_name,
                Template::Unconstrained,
                items.clone(),
            )?)),
            other => Ok(Field::Value(other.clone())),
        },
        Template::Scalar(_) | Template::Choice(_) => Ok(Field::Value(value.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::from_json;

    fn compile(json: &str) -> Template {
        Template::compile(&from_json(json).unwrap())
    }

    #[test]
    fn test_wrap_null_is_absent() {
        let field = wrap("T".into(), &compile("\"\""), &Value::Null).unwrap();
        assert!(field.is_absent());
    }

    #[test]
    fn test_wrap_object_template() {
        let template = compile(r#"{"name": ""}"#);
        let value = from_json(r#"{"name": "a"}"#).unwrap();
        let field = wrap("T".into(), &template, &value).unwrap();
        assert!(matches!(field, Field::Mapping(_)));
    }

    #[test]
    fn test_wrap_sequence_template() {
        let template = compile(r#"[""]"#);
        let value = from_json(r#"["a", "b"]"#).unwrap();
        let field = wrap("T".into(), &template, &value).unwrap();
        assert!(matches!(field, Field::Sequence(_)));
    }

    #[test]
    fn test_wrap_unconstrained_infers_from_data() {
        let template = Template::Unconstrained;
        assert!(matches!(
            wrap("T".into(), &template, &from_json(r#"{"a": 1}"#).unwrap()).unwrap(),
            Field::Mapping(_)
        ));
        assert!(matches!(
            wrap("T".into(), &template, &from_json("[1]").unwrap()).unwrap(),
            Field::Sequence(_)
        ));
        assert!(matches!(
            wrap("T".into(), &template, &from_json("5").unwrap()).unwrap(),
            Field::Value(Value::Int(5))
        ));
    }

    #[test]
    fn test_wrap_scalar_and_choice_are_leaves() {
        let field = wrap("T".into(), &compile("\"\""), &Value::String("x".into())).unwrap();
        assert_eq!(field.as_value(), Some(&Value::String("x".into())));

        let field = wrap(
            "T".into(),
            &compile(r#"["open", "closed"]"#),
            &Value::String("open".into()),
        )
        .unwrap();
        assert!(matches!(field, Field::Value(_)));
    }

    #[test]
    fn test_wrap_validates_recursively() {
        let template = compile(r#"{"count": 0}"#);
        let value = from_json(r#"{"count": "many"}"#).unwrap();
        assert!(wrap("T".into(), &template, &value).is_err());
    }

    #[test]
    fn test_field_into_value() {
        assert_eq!(Field::Absent.into_value(), Value::Null);
        assert_eq!(Field::Value(Value::Int(1)).into_value(), Value::Int(1));
    }
}
