//! Field binding resolver for checkboxes
//!
//! A checkbox bound to a boolean property always submits `true` and is
//! checked when the property is. A checkbox bound to anything else submits
//! its literal `value` and is checked when the selection comparator says so.

use crate::error::{ProcessorError, ProcessorResult};
use fieldbind_binding::{BindStatus, SelectedValueComparator};
use serde_json::Value;

pub const CHECKBOX_TAG: &str = "input(checkbox)";

const BOOLEAN_CHECKBOX_VALUE: &str = "true";

/// How a checkbox relates to its bound property, decided once from the declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxBinding {
	/// Boolean property, already coerced
	Boolean(bool),
	/// Any other property; selection is up to the comparator
	Opaque,
}

impl CheckboxBinding {
	/// # Examples
	///
	/// ```
	/// use fieldbind_binding::{FieldBindStatus, ValueType};
	/// use fieldbind_processors::CheckboxBinding;
	/// use serde_json::json;
	///
	/// let unconverted = FieldBindStatus::new("agree", json!("TRUE")).with_type(ValueType::Boolean);
	/// assert_eq!(CheckboxBinding::classify(&unconverted), CheckboxBinding::Boolean(true));
	///
	/// let tags = FieldBindStatus::new("tags", json!(["a"]));
	/// assert_eq!(CheckboxBinding::classify(&tags), CheckboxBinding::Opaque);
	/// ```
	pub fn classify(status: &dyn BindStatus) -> Self {
		if !status.value_type().is_boolean() {
			return CheckboxBinding::Opaque;
		}
		let checked = match status.value() {
			Value::Bool(value) => *value,
			Value::String(raw) => parse_boolean(raw),
			_ => false,
		};
		CheckboxBinding::Boolean(checked)
	}
}

/// Rendered `value` and `checked` state of a checkbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxState {
	pub value: String,
	pub checked: bool,
}

/// Lenient boolean parsing: only `true`, in any case, is true
pub fn parse_boolean(raw: &str) -> bool {
	raw.eq_ignore_ascii_case("true")
}

/// Decide a checkbox's `value` and `checked` state
///
/// `literal_value` is the `value` attribute written in the template. It is
/// ignored for boolean properties and required for every other property.
pub fn resolve_checkbox(
	status: &dyn BindStatus,
	literal_value: Option<&str>,
	comparator: &dyn SelectedValueComparator,
) -> ProcessorResult<CheckboxState> {
	match CheckboxBinding::classify(status) {
		CheckboxBinding::Boolean(checked) => Ok(CheckboxState {
			value: BOOLEAN_CHECKBOX_VALUE.to_string(),
			checked,
		}),
		CheckboxBinding::Opaque => {
			let value = literal_value.ok_or_else(|| {
				ProcessorError::missing_attribute(
					"value",
					CHECKBOX_TAG,
					Some("when binding to non-boolean values"),
				)
			})?;
			let checked = comparator.is_selected(status, value)?;
			Ok(CheckboxState {
				value: value.to_string(),
				checked,
			})
		}
	}
}
