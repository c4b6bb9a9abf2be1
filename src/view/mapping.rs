//! Mapping views over keyed containers.

use super::wrap::{wrap, Field};
use super::underscores_to_spaces;
use crate::template::{Template, ValidationError};
use crate::value::{Map, Value};
use std::fmt;

/// MappingView wraps a keyed container together with its template,
/// exposing named-field access, mutation, and deletion.
///
/// The view owns its data exclusively: nested views returned by reads are
/// independent snapshots, and nested updates are written back through
/// [`MappingView::set`]. `Clone` is a deep copy of template and data both.
///
/// Identifier-style accessors (`get`, `set`, `remove`, `contains`) run the
/// name through [`underscores_to_spaces`]; the `*_key` variants take the
/// stored key form verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingView {
    type_name: String,
    template: Template,
    data: Map,
}

impl MappingView {
    /// Creates a view over `data`, validating it eagerly and recursively
    /// against `template`. A malformed tree fails here, at the point it is
    /// wrapped, with a path-labelled error.
    pub fn new(
        type_name: impl Into<String>,
        template: Template,
        data: Map,
    ) -> Result<MappingView, ValidationError> {
        let view = MappingView {
            type_name: type_name.into(),
            template,
            data,
        };
        view.template.validate_object(&view.type_name, &view.data)?;
        Ok(view)
    }

    /// Returns the type-name label used in diagnostics.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the compiled template this view validates against.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Returns a reference to the underlying data.
    pub fn data(&self) -> &Map {
        &self.data
    }

    /// Consumes the view and returns the underlying data.
    pub fn into_data(self) -> Map {
        self.data
    }

    /// Reads a field by identifier-style name.
    ///
    /// An absent key and an explicit null both surface as
    /// [`Field::Absent`]. Container-shaped fields come back wrapped as
    /// nested views; everything else comes back as a leaf value.
    pub fn get(&self, name: &str) -> Result<Field, ValidationError> {
        self.get_key(&underscores_to_spaces(name))
    }

    /// Reads a field by exact key, without name translation.
    pub fn get_key(&self, key: &str) -> Result<Field, ValidationError> {
        self.check_name(key)?;
        match self.data.get(key) {
            None => Ok(Field::Absent),
            Some(value) if value.is_null() => Ok(Field::Absent),
            Some(value) => wrap(self.element_type_name(key), self.field_template(key), value),
        }
    }

    /// Writes a field by identifier-style name.
    ///
    /// Views passed as the value unwrap to their raw data. With a
    /// constrained template the name and the value are validated, the
    /// value recursively, strictly before the write commits; a failed
    /// write leaves the data untouched.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ValidationError> {
        self.set_key(underscores_to_spaces(name), value)
    }

    /// Writes a field by exact key, without name translation.
    pub fn set_key(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), ValidationError> {
        let key = key.into();
        let value = value.into();
        if !matches!(self.template, Template::Unconstrained) {
            self.check_name(&key)?;
            self.field_template(&key)
                .validate(&self.element_type_name(&key), &value)?;
        }
        self.data.set(key, value);
        Ok(())
    }

    /// Removes a field by identifier-style name, returning its prior value.
    pub fn remove(&mut self, name: &str) -> Result<Option<Value>, ValidationError> {
        self.remove_key(&underscores_to_spaces(name))
    }

    /// Removes a field by exact key, without name translation.
    pub fn remove_key(&mut self, key: &str) -> Result<Option<Value>, ValidationError> {
        self.check_name(key)?;
        Ok(self.data.delete(key))
    }

    /// Returns true if the named field is present and non-null.
    pub fn contains(&self, name: &str) -> bool {
        self.has_key(&underscores_to_spaces(name))
    }

    /// Returns true if the exact key is present and non-null.
    pub fn has_key(&self, key: &str) -> bool {
        matches!(self.data.get(key), Some(value) if !value.is_null())
    }

    /// Iterates over the present, non-null field names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.data
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, _)| key.as_str())
    }

    /// Renders the underlying data as indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.data)
    }

    /// Resolves the template value applicable to a key: the declared field
    /// template, the wildcard item template, or no constraint.
    fn field_template(&self, key: &str) -> &Template {
        match &self.template {
            Template::FixedObject(fields) => fields.get(key).unwrap_or(&Template::Unconstrained),
            Template::WildcardObject(item) => item,
            _ => &Template::Unconstrained,
        }
    }

    /// Builds the diagnostic label for a field position.
    fn element_type_name(&self, key: &str) -> String {
        match self.template {
            Template::WildcardObject(_) => format!("(element of {})", self.type_name),
            _ => format!("{}.{}", self.type_name, key),
        }
    }

    /// Fails with UnknownField for a key not declared by a fixed-shape
    /// template. Wildcard and unconstrained templates accept any key.
    fn check_name(&self, key: &str) -> Result<(), ValidationError> {
        if let Template::FixedObject(fields) = &self.template {
            if !fields.contains_key(key) {
                return Err(ValidationError::unknown_field(&self.type_name, key));
            }
        }
        Ok(())
    }
}

impl fmt::Display for MappingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.data).map_err(|_| fmt::Error)?;
        write!(f, "{}: {}", self.type_name, json)
    }
}

impl From<MappingView> for Value {
    fn from(view: MappingView) -> Value {
        Value::Map(view.data)
    }
}
