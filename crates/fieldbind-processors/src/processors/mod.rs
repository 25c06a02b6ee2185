//! Field attribute processors
//!
//! Each processor answers two questions: does it handle this element, and
//! what should the element render as. The tree surgery itself is shared (see
//! [`rewriter`](crate::rewriter)).

mod checkbox;
mod errors;
mod input;
mod radio;
mod select;
mod textarea;

pub use checkbox::CheckboxFieldProcessor;
pub use errors::ErrorsProcessor;
pub use input::InputFieldProcessor;
pub use radio::RadioFieldProcessor;
pub use select::SelectFieldProcessor;
pub use textarea::TextareaFieldProcessor;

use crate::context::FieldContext;
use crate::decision::RenderDecision;
use crate::error::ProcessorResult;
use fieldbind_dom::Element;

pub const FIELD_DIRECTIVE: &str = "field";
pub const ERRORS_DIRECTIVE: &str = "errors";

/// A processor for one family of bound elements
pub trait FieldProcessor: Send + Sync {
	/// Directive attribute name without the dialect prefix
	fn directive(&self) -> &str {
		FIELD_DIRECTIVE
	}

	/// Whether this processor handles `element`
	fn matches(&self, element: &Element) -> bool;

	/// Describe the element's output
	///
	/// Runs before any tree mutation; an error here leaves the tree untouched.
	fn decide(&self, context: &mut FieldContext<'_>) -> ProcessorResult<RenderDecision>;
}

/// Processors in the order they are tried
pub fn default_processors() -> Vec<Box<dyn FieldProcessor>> {
	vec![
		Box::new(CheckboxFieldProcessor),
		Box::new(RadioFieldProcessor),
		Box::new(InputFieldProcessor),
		Box::new(SelectFieldProcessor),
		Box::new(TextareaFieldProcessor),
		Box::new(ErrorsProcessor),
	]
}

/// Lower-cased `type` attribute of an `input`, `text` when absent
pub(crate) fn input_type(element: &Element) -> String {
	element
		.attribute("type")
		.map(|kind| kind.trim().to_ascii_lowercase())
		.unwrap_or_else(|| "text".to_string())
}

pub(crate) fn is_input_of_type(element: &Element, kind: &str) -> bool {
	element.is("input") && input_type(element) == kind
}
