//! Binding status of one field expression

use crate::error::BindingResult;
use crate::value_type::ValueType;
use serde_json::{Value, json};

/// What the binding framework knows about one bound field
pub trait BindStatus {
	/// Property path relative to the bound object, `None` when unavailable
	fn expression(&self) -> Option<&str>;

	/// Current value of the property
	fn value(&self) -> &Value;

	/// Declared type of the property
	fn value_type(&self) -> &ValueType;

	/// Field errors recorded by the last binding
	fn errors(&self) -> &[String];

	/// Value formatted for an HTML attribute or body
	fn display_value(&self) -> String {
		display_value(self.value())
	}

	fn is_error(&self) -> bool {
		!self.errors().is_empty()
	}
}

/// Source of binding statuses for the current render
pub trait BindingService {
	/// Resolve a field expression such as `*{address.street}`
	fn bind_status(&self, expression: &str) -> BindingResult<Box<dyn BindStatus>>;
}

/// Owned [`BindStatus`]
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBindStatus {
	expression: Option<String>,
	value: Value,
	value_type: ValueType,
	errors: Vec<String>,
}

impl FieldBindStatus {
	/// Status with the type inferred from the value
	pub fn new(expression: impl Into<String>, value: Value) -> Self {
		let value_type = ValueType::infer(&value);
		Self {
			expression: Some(expression.into()),
			value,
			value_type,
			errors: Vec::new(),
		}
	}

	/// Status whose expression is unknown
	pub fn anonymous(value: Value, value_type: ValueType) -> Self {
		Self {
			expression: None,
			value,
			value_type,
			errors: Vec::new(),
		}
	}

	pub fn with_type(mut self, value_type: ValueType) -> Self {
		self.value_type = value_type;
		self
	}

	pub fn with_errors(mut self, errors: Vec<String>) -> Self {
		self.errors = errors;
		self
	}
}

impl BindStatus for FieldBindStatus {
	fn expression(&self) -> Option<&str> {
		self.expression.as_deref()
	}

	fn value(&self) -> &Value {
		&self.value
	}

	fn value_type(&self) -> &ValueType {
		&self.value_type
	}

	fn errors(&self) -> &[String] {
		&self.errors
	}
}

/// Format a bound value the way it is written into HTML
///
/// # Examples
///
/// ```
/// use fieldbind_binding::display_value;
/// use serde_json::json;
///
/// assert_eq!(display_value(&json!(null)), "");
/// assert_eq!(display_value(&json!("alice")), "alice");
/// assert_eq!(display_value(&json!(42)), "42");
/// assert_eq!(display_value(&json!(["red", "blue"])), "red,blue");
/// ```
pub fn display_value(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		Value::Array(items) => items
			.iter()
			.map(display_value)
			.collect::<Vec<_>>()
			.join(","),
		Value::Object(_) => value.to_string(),
	}
}

/// Snapshot of a status exposed to templates as a node-local variable
pub fn status_variable(status: &dyn BindStatus) -> Value {
	json!({
		"expression": status.expression(),
		"value": status.value(),
		"errors": status.errors(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_field_bind_status_infers_type() {
		let status = FieldBindStatus::new("age", json!(30));

		assert_eq!(status.expression(), Some("age"));
		assert_eq!(status.value_type(), &ValueType::Other("number".to_string()));
		assert_eq!(status.display_value(), "30");
		assert!(!status.is_error());
	}

	#[rstest]
	fn test_status_variable() {
		let status = FieldBindStatus::new("email", json!("x"))
			.with_errors(vec!["Enter a valid email".to_string()]);

		assert_eq!(
			status_variable(&status),
			json!({
				"expression": "email",
				"value": "x",
				"errors": ["Enter a valid email"],
			})
		);
	}
}
