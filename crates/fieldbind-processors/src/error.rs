use fieldbind_binding::BindingError;
use fieldbind_conf::SettingsError;
use fieldbind_dom::DomError;

/// Error raised while processing a template
///
/// Every variant aborts the current render.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
	/// A template-authoring defect: the element lacks a literal attribute the binding needs
	#[error("Attribute \"{attribute}\" is required in \"{tag}\" tags{}", when_clause(.context))]
	MissingRequiredAttribute {
		attribute: String,
		tag: String,
		context: Option<String>,
	},

	#[error(transparent)]
	Binding(#[from] BindingError),

	#[error(transparent)]
	Dom(#[from] DomError),

	#[error(transparent)]
	Settings(#[from] SettingsError),
}

impl ProcessorError {
	pub fn missing_attribute(
		attribute: impl Into<String>,
		tag: impl Into<String>,
		context: Option<&str>,
	) -> Self {
		ProcessorError::MissingRequiredAttribute {
			attribute: attribute.into(),
			tag: tag.into(),
			context: context.map(str::to_string),
		}
	}
}

fn when_clause(context: &Option<String>) -> String {
	context
		.as_deref()
		.map(|context| format!(" {}", context))
		.unwrap_or_default()
}

pub type ProcessorResult<T> = Result<T, ProcessorError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_missing_attribute_message() {
		let with_context = ProcessorError::missing_attribute(
			"value",
			"input(checkbox)",
			Some("when binding to non-boolean values"),
		);
		let without_context = ProcessorError::missing_attribute("value", "input(radio)", None);

		assert_eq!(
			with_context.to_string(),
			"Attribute \"value\" is required in \"input(checkbox)\" tags when binding to non-boolean values"
		);
		assert_eq!(
			without_context.to_string(),
			"Attribute \"value\" is required in \"input(radio)\" tags"
		);
	}
}
