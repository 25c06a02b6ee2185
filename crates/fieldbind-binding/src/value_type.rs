//! Declared type of a bound property

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Runtime type descriptor of a bound property
///
/// Only the boolean distinction matters to the field processors; every other
/// type is carried by name and compared through the selection comparator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
	/// Non-nullable boolean
	Boolean,
	/// Nullable boolean; a null value reads as `false`
	OptionalBoolean,
	/// Any other type, identified by name
	Other(String),
}

impl ValueType {
	/// Whether the property is a boolean, nullable or not
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_binding::ValueType;
	///
	/// assert!(ValueType::Boolean.is_boolean());
	/// assert!(ValueType::OptionalBoolean.is_boolean());
	/// assert!(!ValueType::Other("string".to_string()).is_boolean());
	/// ```
	pub fn is_boolean(&self) -> bool {
		matches!(self, ValueType::Boolean | ValueType::OptionalBoolean)
	}

	/// Type implied by a value when none was declared
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_binding::ValueType;
	/// use serde_json::json;
	///
	/// assert_eq!(ValueType::infer(&json!(false)), ValueType::Boolean);
	/// assert_eq!(ValueType::infer(&json!(["a"])), ValueType::Other("array".to_string()));
	/// ```
	pub fn infer(value: &Value) -> Self {
		let name = match value {
			Value::Bool(_) => return ValueType::Boolean,
			Value::Null => "unknown",
			Value::Number(_) => "number",
			Value::String(_) => "string",
			Value::Array(_) => "array",
			Value::Object(_) => "object",
		};
		ValueType::Other(name.to_string())
	}
}
