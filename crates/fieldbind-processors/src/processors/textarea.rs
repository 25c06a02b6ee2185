use super::FieldProcessor;
use crate::context::FieldContext;
use crate::decision::{Body, FieldRewrite, RenderDecision};
use crate::error::ProcessorResult;
use fieldbind_dom::Element;

/// `<textarea th:field="...">`; the bound value replaces the body
#[derive(Debug, Clone, Copy, Default)]
pub struct TextareaFieldProcessor;

impl FieldProcessor for TextareaFieldProcessor {
	fn matches(&self, element: &Element) -> bool {
		element.is("textarea")
	}

	fn decide(&self, context: &mut FieldContext<'_>) -> ProcessorResult<RenderDecision> {
		let name = context.name();
		let id = context.compute_id(&name, false);
		let text = context.process_value(&name, &context.status().display_value(), "textarea");

		Ok(RenderDecision::Rewrite(
			FieldRewrite::new(Body::Text(text))
				.set("id", id)
				.set("name", name),
		))
	}
}
