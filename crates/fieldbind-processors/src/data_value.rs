//! Request data value hook
//!
//! Applications can rewrite every form field value the processors emit, for
//! example to encrypt values or add integrity tokens. The hook only exists on
//! binding frameworks 3.1 and later; on older versions it is never called.

use fieldbind_conf::FrameworkVersion;

/// Rewrites form field values before they are written to the output
pub trait RequestDataValueProcessor: Send + Sync {
	fn process_form_field_value(&self, name: &str, value: &str, input_type: &str) -> String;
}

/// The hook as seen by one processor call
#[derive(Clone, Copy)]
pub struct FieldValues<'a> {
	processor: Option<&'a dyn RequestDataValueProcessor>,
}

impl<'a> FieldValues<'a> {
	/// Activate `processor` only when `version` supports it
	pub fn new(
		processor: Option<&'a dyn RequestDataValueProcessor>,
		version: &FrameworkVersion,
	) -> Self {
		Self {
			processor: processor.filter(|_| version.is_31_at_least()),
		}
	}

	/// No hook: values pass through unchanged
	pub fn passthrough() -> Self {
		Self { processor: None }
	}

	pub fn is_active(&self) -> bool {
		self.processor.is_some()
	}

	pub fn process(&self, name: &str, value: &str, input_type: &str) -> String {
		match self.processor {
			Some(processor) => processor.process_form_field_value(name, value, input_type),
			None => value.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct Upper;

	impl RequestDataValueProcessor for Upper {
		fn process_form_field_value(&self, _name: &str, value: &str, _input_type: &str) -> String {
			value.to_uppercase()
		}
	}

	#[rstest]
	#[case(FrameworkVersion::new(3, 0), false)]
	#[case(FrameworkVersion::new(3, 1), true)]
	#[case(FrameworkVersion::new(5, 2), true)]
	fn test_hook_gated_by_version(#[case] version: FrameworkVersion, #[case] active: bool) {
		let values = FieldValues::new(Some(&Upper), &version);

		assert_eq!(values.is_active(), active);
		let expected = if active { "ON" } else { "on" };
		assert_eq!(values.process("_agree", "on", "hidden"), expected);
	}

	#[rstest]
	fn test_passthrough() {
		assert_eq!(FieldValues::passthrough().process("a", "b", "text"), "b");
	}
}
