//! Sequence views over ordered containers.

use super::wrap::{wrap, Field};
use crate::template::{Template, ValidationError};
use crate::value::Value;
use std::fmt;

/// SequenceView wraps an ordered container together with the single
/// template every item must match.
///
/// Like [`MappingView`](super::MappingView), the view owns its data
/// exclusively; element reads hand out independent snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceView {
    type_name: String,
    item_template: Template,
    item_type_name: String,
    data: Vec<Value>,
}

impl SequenceView {
    /// Creates a view over `data`, validating every element eagerly and
    /// recursively against `item_template`.
    pub fn new(
        type_name: impl Into<String>,
        item_template: Template,
        data: Vec<Value>,
    ) -> Result<SequenceView, ValidationError> {
        let type_name = type_name.into();
        let item_type_name = format!("(item of {})", type_name);
        for element in &data {
            item_template.validate(&item_type_name, element)?;
        }
        Ok(SequenceView {
            type_name,
            item_template,
            item_type_name,
            data,
        })
    }

    /// Returns the type-name label used in diagnostics.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the template every item validates against.
    pub fn item_template(&self) -> &Template {
        &self.item_template
    }

    /// Returns a reference to the underlying data.
    pub fn data(&self) -> &Vec<Value> {
        &self.data
    }

    /// Consumes the view and returns the underlying data.
    pub fn into_data(self) -> Vec<Value> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads the element at `index`, wrapped by the same shape rules as a
    /// mapping view's field read.
    pub fn get(&self, index: usize) -> Result<Field, ValidationError> {
        match self.data.get(index) {
            Some(element) => wrap(self.item_type_name.clone(), &self.item_template, element),
            None => Err(ValidationError::index_out_of_bounds(
                &self.type_name,
                index,
                self.data.len(),
            )),
        }
    }

    /// Replaces the element at `index`, validating the incoming value
    /// recursively before committing. Views unwrap to their raw data.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<(), ValidationError> {
        if index >= self.data.len() {
            return Err(ValidationError::index_out_of_bounds(
                &self.type_name,
                index,
                self.data.len(),
            ));
        }
        let value = value.into();
        self.item_template.validate(&self.item_type_name, &value)?;
        self.data[index] = value;
        Ok(())
    }

    /// Appends an element, validating it recursively before committing.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<(), ValidationError> {
        let value = value.into();
        self.item_template.validate(&self.item_type_name, &value)?;
        self.data.push(value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting subsequent
    /// elements down.
    pub fn remove(&mut self, index: usize) -> Result<Value, ValidationError> {
        if index >= self.data.len() {
            return Err(ValidationError::index_out_of_bounds(
                &self.type_name,
                index,
                self.data.len(),
            ));
        }
        Ok(self.data.remove(index))
    }

    /// Renders the underlying data as indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.data)
    }
}

impl fmt::Display for SequenceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.data).map_err(|_| fmt::Error)?;
        write!(f, "{}: {}", self.type_name, json)
    }
}

impl From<SequenceView> for Value {
    fn from(view: SequenceView) -> Value {
        Value::List(view.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::from_json;
    use pretty_assertions::assert_eq;

    fn items(template: &str, data: &str) -> Result<SequenceView, ValidationError> {
        let item_template = Template::compile(&from_json(template).unwrap());
        let data = match from_json(data).unwrap() {
            Value::List(l) => l,
            other => panic!("test data must be a list, got {:?}", other),
        };
        SequenceView::new("Order.items", item_template, data)
    }

    #[test]
    fn test_construction_validates_each_element() {
        assert!(items("\"\"", r#"["a", "b"]"#).is_ok());

        let err = items("\"\"", r#"["a", 5]"#).unwrap_err();
        assert_eq!(
            err,
            ValidationError::shape_mismatch("(item of Order.items)", "string", "5")
        );
    }

    #[test]
    fn test_construction_validates_recursively() {
        let err = items(r#"{"sku": ""}"#, r#"[{"sku": "a"}, {"sku": 5}]"#).unwrap_err();
        assert_eq!(
            err,
            ValidationError::shape_mismatch("(item of Order.items).sku", "string", "5")
        );
    }

    #[test]
    fn test_get_wraps_by_item_template() {
        let v = items(r#"{"sku": ""}"#, r#"[{"sku": "a"}]"#).unwrap();
        let item = v.get(0).unwrap().into_mapping().unwrap();
        assert_eq!(item.get("sku").unwrap().as_value(), Some(&Value::String("a".into())));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let v = items("\"\"", r#"["a"]"#).unwrap();
        assert_eq!(
            v.get(3).unwrap_err(),
            ValidationError::index_out_of_bounds("Order.items", 3, 1)
        );
    }

    #[test]
    fn test_null_element_reads_absent() {
        let v = items("\"\"", r#"["a", null]"#).unwrap();
        assert!(v.get(1).unwrap().is_absent());
    }

    #[test]
    fn test_set_validates_before_commit() {
        let mut v = items("\"\"", r#"["a"]"#).unwrap();
        assert!(v.set(0, 5i64).is_err());
        assert_eq!(v.data(), &vec![Value::String("a".into())]);

        v.set(0, "b").unwrap();
        assert_eq!(v.data(), &vec![Value::String("b".into())]);
    }

    #[test]
    fn test_push_validates() {
        let mut v = items("0", "[1, 2]").unwrap();
        v.push(3i64).unwrap();
        assert_eq!(v.len(), 3);

        assert!(v.push("four").is_err());
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_remove_shifts() {
        let mut v = items("\"\"", r#"["a", "b", "c"]"#).unwrap();
        assert_eq!(v.remove(1).unwrap(), Value::String("b".into()));
        assert_eq!(
            v.data(),
            &vec![Value::String("a".into()), Value::String("c".into())]
        );
        assert!(v.remove(5).is_err());
    }

    #[test]
    fn test_unconstrained_items() {
        let mut v = items("null", r#"[1, "two", {"three": 3}]"#).unwrap();
        assert!(v.get(2).unwrap().into_mapping().is_some());
        v.push(from_json("[4]").unwrap()).unwrap();
        assert!(v.get(3).unwrap().into_sequence().is_some());
    }

    #[test]
    fn test_display() {
        let v = items("0", "[1, 2]").unwrap();
        assert_eq!(format!("{}", v), "Order.items: [1,2]");
    }
}
