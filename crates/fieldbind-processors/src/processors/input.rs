use super::{FieldProcessor, input_type};
use crate::context::FieldContext;
use crate::decision::{Body, FieldRewrite, RenderDecision};
use crate::error::ProcessorResult;
use fieldbind_dom::Element;

/// Input types whose `value` is the bound value as text
const TEXT_LIKE_TYPES: &[&str] = &[
	"text",
	"hidden",
	"password",
	"email",
	"number",
	"search",
	"tel",
	"url",
	"date",
	"datetime-local",
	"month",
	"week",
	"time",
	"color",
	"range",
];

/// `<input th:field="...">` for text-like input types
///
/// Password inputs never echo the bound value.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFieldProcessor;

impl FieldProcessor for InputFieldProcessor {
	fn matches(&self, element: &Element) -> bool {
		element.is("input") && TEXT_LIKE_TYPES.contains(&input_type(element).as_str())
	}

	fn decide(&self, context: &mut FieldContext<'_>) -> ProcessorResult<RenderDecision> {
		let kind = input_type(context.element());
		let name = context.name();
		let id = context.compute_id(&name, false);
		let display = if kind == "password" {
			String::new()
		} else {
			context.status().display_value()
		};
		let value = context.process_value(&name, &display, &kind);

		Ok(RenderDecision::Rewrite(
			FieldRewrite::new(Body::Drop)
				.set("id", id)
				.set("name", name)
				.set("value", value),
		))
	}
}
