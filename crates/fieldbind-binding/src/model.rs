//! In-memory binding service over a JSON model

use crate::error::{BindingError, BindingResult};
use crate::expression::{FieldExpression, PathSegment};
use crate::status::{BindStatus, BindingService, FieldBindStatus};
use crate::value_type::ValueType;
use serde_json::Value;
use std::collections::HashMap;

/// Binding service for one form-backing object
///
/// Property types default to the type implied by the current value; declare
/// them with [`with_type`](Self::with_type) when the value alone is ambiguous
/// (for example a boolean that is still null, or a string that has not been
/// converted yet).
///
/// # Examples
///
/// ```
/// use fieldbind_binding::{BindStatus, BindingService, ModelBinding, ValueType};
/// use serde_json::json;
///
/// let binding = ModelBinding::new("user", json!({"newsletter": "true"}))
/// 	.with_type("newsletter", ValueType::Boolean)
/// 	.with_error("newsletter", "Please decide");
///
/// let status = binding.bind_status("${user.newsletter}").unwrap();
/// assert_eq!(status.value(), &json!("true"));
/// assert_eq!(status.value_type(), &ValueType::Boolean);
/// assert_eq!(status.errors(), ["Please decide"]);
/// ```
#[derive(Debug, Clone)]
pub struct ModelBinding {
	object_name: String,
	target: Value,
	types: HashMap<String, ValueType>,
	errors: HashMap<String, Vec<String>>,
}

impl ModelBinding {
	pub fn new(object_name: impl Into<String>, target: Value) -> Self {
		Self {
			object_name: object_name.into(),
			target,
			types: HashMap::new(),
			errors: HashMap::new(),
		}
	}

	/// Declare the type of a property path
	pub fn with_type(mut self, path: impl Into<String>, value_type: ValueType) -> Self {
		self.types.insert(path.into(), value_type);
		self
	}

	/// Record a field error for a property path
	pub fn with_error(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
		self.errors
			.entry(path.into())
			.or_default()
			.push(message.into());
		self
	}

	fn lookup(&self, expression: &FieldExpression) -> BindingResult<Option<&Value>> {
		let mut current = &self.target;
		for segment in expression.segments()? {
			let next = match segment {
				PathSegment::Property(name) => current.get(name),
				PathSegment::Index(index) => current.get(index),
			};
			match next {
				Some(value) => current = value,
				None => return Ok(None),
			}
		}
		Ok(Some(current))
	}
}

impl BindingService for ModelBinding {
	fn bind_status(&self, raw: &str) -> BindingResult<Box<dyn BindStatus>> {
		let expression = FieldExpression::parse(raw, &self.object_name)?;
		let path = expression.path();
		let declared = self.types.get(path);

		let value = match (self.lookup(&expression)?, declared) {
			(Some(value), _) => value.clone(),
			(None, Some(_)) => Value::Null,
			(None, None) => {
				return Err(BindingError::UnknownProperty {
					object: self.object_name.clone(),
					property: path.to_string(),
				});
			}
		};

		tracing::trace!(object = %self.object_name, path, "resolved bind status");

		let mut status = FieldBindStatus::new(path, value);
		if let Some(value_type) = declared {
			status = status.with_type(value_type.clone());
		}
		if let Some(errors) = self.errors.get(path) {
			status = status.with_errors(errors.clone());
		}
		Ok(Box::new(status))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn binding() -> ModelBinding {
		ModelBinding::new(
			"order",
			json!({
				"express": false,
				"lines": [{"sku": "A-1"}, {"sku": "B-2"}],
				"address": {"city": "Lyon"},
			}),
		)
		.with_type("gift", ValueType::OptionalBoolean)
	}

	#[rstest]
	#[case("*{express}", json!(false))]
	#[case("*{lines[1].sku}", json!("B-2"))]
	#[case("${order.address.city}", json!("Lyon"))]
	fn test_resolves_nested_paths(
		binding: ModelBinding,
		#[case] raw: &str,
		#[case] expected: Value,
	) {
		let status = binding.bind_status(raw).unwrap();
		assert_eq!(status.value(), &expected);
	}

	#[rstest]
	fn test_declared_but_absent_property_is_null(binding: ModelBinding) {
		let status = binding.bind_status("*{gift}").unwrap();

		assert_eq!(status.value(), &Value::Null);
		assert_eq!(status.value_type(), &ValueType::OptionalBoolean);
	}

	#[rstest]
	fn test_empty_path_binds_whole_object(binding: ModelBinding) {
		let status = binding.bind_status("*{}").unwrap();

		assert_eq!(status.expression(), Some(""));
		assert_eq!(status.value_type(), &ValueType::Other("object".to_string()));
	}

	#[rstest]
	fn test_unknown_property(binding: ModelBinding) {
		let result = binding.bind_status("*{coupon}");

		assert_eq!(
			result.err(),
			Some(BindingError::UnknownProperty {
				object: "order".to_string(),
				property: "coupon".to_string(),
			})
		);
	}
}
