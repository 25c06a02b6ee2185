use super::{FieldProcessor, is_input_of_type};
use crate::context::FieldContext;
use crate::decision::{Body, FieldRewrite, RenderDecision};
use crate::error::{ProcessorError, ProcessorResult};
use fieldbind_dom::Element;

const RADIO_TYPE: &str = "radio";

/// `<input type="radio" th:field="..." value="...">`
#[derive(Debug, Clone, Copy, Default)]
pub struct RadioFieldProcessor;

impl FieldProcessor for RadioFieldProcessor {
	fn matches(&self, element: &Element) -> bool {
		is_input_of_type(element, RADIO_TYPE)
	}

	fn decide(&self, context: &mut FieldContext<'_>) -> ProcessorResult<RenderDecision> {
		let literal = context
			.element()
			.attribute("value")
			.map(str::to_string)
			.ok_or_else(|| ProcessorError::missing_attribute("value", "input(radio)", None))?;
		let checked = context.comparator().is_selected(context.status(), &literal)?;

		let name = context.name();
		let id = context.compute_id(&name, true);
		let value = context.process_value(&name, &literal, RADIO_TYPE);

		Ok(RenderDecision::Rewrite(
			FieldRewrite::new(Body::Drop)
				.set("id", id)
				.set("name", name)
				.set("value", value)
				.toggle("checked", checked),
		))
	}
}
