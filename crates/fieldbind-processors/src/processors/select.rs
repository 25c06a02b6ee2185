use super::FieldProcessor;
use crate::context::FieldContext;
use crate::decision::{Body, FieldRewrite, RenderDecision};
use crate::error::ProcessorResult;
use fieldbind_dom::Element;

/// Value of the hidden marker written after a multiple select
const MULTIPLE_MARKER_VALUE: &str = "1";

/// `<select th:field="...">`
///
/// Options keep their place; each one is selected when the comparator
/// matches its `value` (or its text when it has none). A multiple select
/// submits nothing when every option is deselected, so it gets the same kind
/// of hidden marker as a checkbox.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectFieldProcessor;

impl FieldProcessor for SelectFieldProcessor {
	fn matches(&self, element: &Element) -> bool {
		element.is("select")
	}

	fn decide(&self, context: &mut FieldContext<'_>) -> ProcessorResult<RenderDecision> {
		let name = context.name();
		let id = context.compute_id(&name, false);
		let multiple = context.element().has_attribute("multiple");

		let mut rewrite = FieldRewrite::new(Body::Keep)
			.set("id", id)
			.set("name", name.clone());

		let tree = context.tree();
		for option in tree.find_elements(context.node(), "option")? {
			let candidate = match tree.element(option)?.attribute("value") {
				Some(value) => value.to_string(),
				None => tree.text_content(option)?.trim().to_string(),
			};
			let selected = context
				.comparator()
				.is_selected(context.status(), &candidate)?;
			rewrite = rewrite.select_option(option, selected);
		}

		if multiple {
			let marker_name = context.marker_name(&name);
			let marker_value =
				context.process_value(&marker_name, MULTIPLE_MARKER_VALUE, "hidden");
			rewrite = rewrite.with_hidden_marker(marker_name, marker_value);
		}
		Ok(RenderDecision::Rewrite(rewrite))
	}
}
