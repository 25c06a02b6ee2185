//! Selection-equality between a literal candidate and a bound value

use crate::error::BindingResult;
use crate::status::{BindStatus, display_value};
use serde_json::Value;

/// Decides whether a literal option/checkbox value is selected
///
/// Implementations may fail, for example when a custom converter rejects the
/// candidate; such failures propagate to the caller unchanged.
pub trait SelectedValueComparator: Send + Sync {
	fn is_selected(&self, status: &dyn BindStatus, candidate: &str) -> BindingResult<bool>;
}

/// Selection-equality over JSON values
///
/// - a null bound value selects nothing
/// - an array selects the candidate when any element matches
/// - an object selects the candidate when it is one of its keys
/// - scalars match when their display string equals the candidate, with
///   numbers also compared numerically (`"1.0"` selects `1`)
///
/// # Examples
///
/// ```
/// use fieldbind_binding::{DefaultSelectedValueComparator, FieldBindStatus, SelectedValueComparator};
/// use serde_json::json;
///
/// let comparator = DefaultSelectedValueComparator;
/// let colors = FieldBindStatus::new("colors", json!(["red", "green"]));
///
/// assert!(comparator.is_selected(&colors, "green").unwrap());
/// assert!(!comparator.is_selected(&colors, "blue").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSelectedValueComparator;

impl SelectedValueComparator for DefaultSelectedValueComparator {
	fn is_selected(&self, status: &dyn BindStatus, candidate: &str) -> BindingResult<bool> {
		let selected = match status.value() {
			Value::Null => false,
			Value::Array(items) => items.iter().any(|item| scalar_matches(item, candidate)),
			Value::Object(map) => map.contains_key(candidate),
			scalar => scalar_matches(scalar, candidate) || status.display_value() == candidate,
		};
		Ok(selected)
	}
}

fn scalar_matches(value: &Value, candidate: &str) -> bool {
	match value {
		Value::Null | Value::Array(_) | Value::Object(_) => false,
		Value::Number(number) => {
			number.to_string() == candidate
				|| matches!(
					(number.as_f64(), candidate.trim().parse::<f64>()),
					(Some(bound), Ok(literal)) if bound == literal
				)
		}
		other => display_value(other) == candidate,
	}
}
