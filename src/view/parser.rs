//! Parser for authoring templates and wrapping documents from text.

use super::mapping::MappingView;
use crate::template::{Template, ValidationError};
use crate::value::{from_json, from_yaml, Value};

/// Parser pairs a root type name with a compiled template and produces
/// validated views from YAML or JSON text.
#[derive(Debug, Clone)]
pub struct Parser {
    type_name: String,
    template: Template,
}

impl Parser {
    /// Creates a parser from a YAML template authoring form.
    pub fn from_yaml(type_name: impl Into<String>, template_yaml: &str) -> Result<Parser, ParseError> {
        let authored = from_yaml(template_yaml)
            .map_err(|e| ParseError::new(format!("failed to parse template: {}", e)))?;
        Ok(Parser::from_value(type_name, &authored))
    }

    /// Creates a parser from a JSON template authoring form.
    pub fn from_json(type_name: impl Into<String>, template_json: &str) -> Result<Parser, ParseError> {
        let authored = from_json(template_json)
            .map_err(|e| ParseError::new(format!("failed to parse template: {}", e)))?;
        Ok(Parser::from_value(type_name, &authored))
    }

    /// Creates a parser from an already-decoded template authoring value.
    pub fn from_value(type_name: impl Into<String>, authored: &Value) -> Parser {
        Parser {
            type_name: type_name.into(),
            template: Template::compile(authored),
        }
    }

    /// Returns the compiled template.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Returns the root type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Parses a YAML document and wraps it as a validated mapping view.
    pub fn object_from_yaml(&self, yaml: &str) -> Result<MappingView, ParseError> {
        let value = from_yaml(yaml)
            .map_err(|e| ParseError::new(format!("failed to parse YAML: {}", e)))?;
        self.object_from_value(value)
    }

    /// Parses a JSON document and wraps it as a validated mapping view.
    pub fn object_from_json(&self, json: &str) -> Result<MappingView, ParseError> {
        let value = from_json(json)
            .map_err(|e| ParseError::new(format!("failed to parse JSON: {}", e)))?;
        self.object_from_value(value)
    }

    /// Wraps an already-decoded document as a validated mapping view.
    pub fn object_from_value(&self, value: Value) -> Result<MappingView, ParseError> {
        match value {
            Value::Map(data) => {
                MappingView::new(self.type_name.clone(), self.template.clone(), data)
                    .map_err(ParseError::from)
            }
            other => Err(ParseError::new(format!(
                "expected a map at the document root, got {}",
                other.type_name()
            ))),
        }
    }
}

/// Error type for parsing operations.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

impl From<ValidationError> for ParseError {
    fn from(e: ValidationError) -> Self {
        ParseError::new(format!("validation failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_TEMPLATE: &str = r#"
name: ""
status: ["open", "closed"]
items:
- sku: ""
  quantity: 0
"#;

    #[test]
    fn test_parser_from_yaml() {
        let parser = Parser::from_yaml("Order", ORDER_TEMPLATE).unwrap();
        assert_eq!(parser.type_name(), "Order");
        assert!(parser.template().is_object());
    }

    #[test]
    fn test_object_from_yaml() {
        let parser = Parser::from_yaml("Order", ORDER_TEMPLATE).unwrap();
        let order = parser
            .object_from_yaml("name: widgets\nstatus: open\n")
            .unwrap();
        assert!(order.contains("status"));
    }

    #[test]
    fn test_object_from_json_validation_failure() {
        let parser = Parser::from_yaml("Order", ORDER_TEMPLATE).unwrap();
        let err = parser
            .object_from_json(r#"{"status": "pending"}"#)
            .unwrap_err();
        assert!(err.message.contains("validation failed"));
    }

    #[test]
    fn test_object_root_must_be_a_map() {
        let parser = Parser::from_json("Order", "{}").unwrap();
        let err = parser.object_from_json("[1, 2]").unwrap_err();
        assert!(err.message.contains("expected a map"));
    }

    #[test]
    fn test_malformed_text() {
        assert!(Parser::from_json("Order", "{not json").is_err());

        let parser = Parser::from_json("Order", "{}").unwrap();
        assert!(parser.object_from_json("{not json").is_err());
    }
}
