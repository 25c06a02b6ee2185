use super::{FieldProcessor, is_input_of_type};
use crate::context::FieldContext;
use crate::decision::{Body, FieldRewrite, RenderDecision};
use crate::error::ProcessorResult;
use crate::resolver::resolve_checkbox;
use fieldbind_dom::Element;

const CHECKBOX_TYPE: &str = "checkbox";
const MARKER_VALUE: &str = "on";

/// `<input type="checkbox" th:field="...">`
///
/// An unchecked checkbox submits nothing, so each checkbox is followed by a
/// hidden marker named after the field. The marker lets the receiving side
/// tell "rendered but unchecked" from "not rendered at all".
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxFieldProcessor;

impl FieldProcessor for CheckboxFieldProcessor {
	fn matches(&self, element: &Element) -> bool {
		is_input_of_type(element, CHECKBOX_TYPE)
	}

	fn decide(&self, context: &mut FieldContext<'_>) -> ProcessorResult<RenderDecision> {
		let state = resolve_checkbox(
			context.status(),
			context.element().attribute("value"),
			context.comparator(),
		)?;

		let name = context.name();
		let id = context.compute_id(&name, true);
		let value = context.process_value(&name, &state.value, CHECKBOX_TYPE);
		let marker_name = context.marker_name(&name);
		let marker_value = context.process_value(&marker_name, MARKER_VALUE, "hidden");

		tracing::debug!(field = %name, checked = state.checked, "rendering checkbox field");

		Ok(RenderDecision::Rewrite(
			FieldRewrite::new(Body::Drop)
				.set("id", id)
				.set("name", name)
				.set("value", value)
				.toggle("checked", state.checked)
				.with_hidden_marker(marker_name, marker_value),
		))
	}
}
