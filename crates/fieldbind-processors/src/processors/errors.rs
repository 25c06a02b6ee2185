use super::{ERRORS_DIRECTIVE, FieldProcessor};
use crate::context::FieldContext;
use crate::decision::{Body, FieldRewrite, RenderDecision};
use crate::error::ProcessorResult;
use fieldbind_dom::Element;

/// `<span th:errors="...">`
///
/// Shows the field's errors, one per line, or removes the element when the
/// field has none.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorsProcessor;

impl FieldProcessor for ErrorsProcessor {
	fn directive(&self) -> &str {
		ERRORS_DIRECTIVE
	}

	fn matches(&self, _element: &Element) -> bool {
		true
	}

	fn decide(&self, context: &mut FieldContext<'_>) -> ProcessorResult<RenderDecision> {
		let status = context.status();
		if !status.is_error() {
			return Ok(RenderDecision::Remove);
		}
		Ok(RenderDecision::Rewrite(FieldRewrite::new(Body::Lines(
			status.errors().to_vec(),
		))))
	}
}
