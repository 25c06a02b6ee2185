//! Form-binding dialect: walks a template tree and runs the field processors
//!
//! Elements are visited depth first, in document order. When a processor
//! replaces an element, the walk resumes at the same index so the
//! replacements go through the pipeline too: a rewritten element has lost the
//! directive that matched, so only its remaining directives (and children)
//! are processed, and a hidden marker carries none at all.

use crate::context::{FieldContext, RenderContext};
use crate::data_value::{FieldValues, RequestDataValueProcessor};
use crate::decision::RenderDecision;
use crate::error::ProcessorResult;
use crate::processors::{FieldProcessor, default_processors};
use crate::rewriter;
use fieldbind_binding::{
	BindingService, DefaultSelectedValueComparator, SelectedValueComparator, status_variable,
};
use fieldbind_conf::{DialectSettings, FrameworkVersion};
use fieldbind_dom::{NodeId, NodeTree};
use std::sync::Arc;

/// Local variable exposing the bound field's status to the rewritten subtree
pub const FIELD_BIND_STATUS_VARIABLE: &str = "fieldBindStatus";

enum Visit {
	Kept,
	Replaced,
}

/// The configured processor pipeline
///
/// A dialect holds no per-render state and can be shared between concurrent
/// renders.
///
/// # Examples
///
/// ```
/// use fieldbind_binding::{ModelBinding, ValueType};
/// use fieldbind_conf::{DialectSettings, FrameworkVersion};
/// use fieldbind_dom::{Element, NodeTree};
/// use fieldbind_processors::FieldBindingDialect;
/// use serde_json::json;
///
/// let dialect = FieldBindingDialect::new(DialectSettings::default(), FrameworkVersion::new(5, 3));
/// let binding = ModelBinding::new("user", json!({"subscribed": true}))
/// 	.with_type("subscribed", ValueType::Boolean);
///
/// let mut tree = NodeTree::new();
/// let root = tree.root();
/// tree.append_element(
/// 	root,
/// 	Element::new("input")
/// 		.with_attribute("type", "checkbox")
/// 		.with_attribute("th:field", "*{subscribed}"),
/// )
/// .unwrap();
///
/// dialect.process(&mut tree, &binding).unwrap();
///
/// assert_eq!(
/// 	tree.to_html(root).unwrap(),
/// 	concat!(
/// 		r#"<input type="checkbox" id="subscribed1" name="subscribed" value="true" checked="checked"/>"#,
/// 		r#"<input type="hidden" name="_subscribed" value="on"/>"#,
/// 	)
/// );
/// ```
pub struct FieldBindingDialect {
	settings: DialectSettings,
	version: FrameworkVersion,
	processors: Vec<Box<dyn FieldProcessor>>,
	comparator: Arc<dyn SelectedValueComparator>,
	data_value_processor: Option<Arc<dyn RequestDataValueProcessor>>,
}

impl FieldBindingDialect {
	/// Dialect with the default processors and selection comparator
	pub fn new(settings: DialectSettings, version: FrameworkVersion) -> Self {
		Self {
			settings,
			version,
			processors: default_processors(),
			comparator: Arc::new(DefaultSelectedValueComparator),
			data_value_processor: None,
		}
	}

	/// Validate `settings` and compute the version snapshot they describe
	pub fn from_settings(settings: DialectSettings) -> ProcessorResult<Self> {
		settings.validate()?;
		let version = settings.framework()?;
		Ok(Self::new(settings, version))
	}

	pub fn with_comparator(mut self, comparator: Arc<dyn SelectedValueComparator>) -> Self {
		self.comparator = comparator;
		self
	}

	/// Install a request data value hook; it only runs on framework 3.1 or later
	pub fn with_data_value_processor(
		mut self,
		processor: Arc<dyn RequestDataValueProcessor>,
	) -> Self {
		self.data_value_processor = Some(processor);
		self
	}

	/// Add a processor, tried after the existing ones
	pub fn with_processor(mut self, processor: Box<dyn FieldProcessor>) -> Self {
		self.processors.push(processor);
		self
	}

	pub fn settings(&self) -> &DialectSettings {
		&self.settings
	}

	pub fn version(&self) -> &FrameworkVersion {
		&self.version
	}

	/// Process every bound element of `tree` against `binding`
	///
	/// Stops at the first error; the element that failed is left as it was.
	pub fn process(&self, tree: &mut NodeTree, binding: &dyn BindingService) -> ProcessorResult<()> {
		let mut render = RenderContext::new();
		let root = tree.root();
		self.process_children(tree, root, binding, &mut render)
	}

	fn process_children(
		&self,
		tree: &mut NodeTree,
		parent: NodeId,
		binding: &dyn BindingService,
		render: &mut RenderContext,
	) -> ProcessorResult<()> {
		let mut index = 0;
		while let Some(&child) = tree.children(parent)?.get(index) {
			match self.process_node(tree, child, binding, render)? {
				Visit::Replaced => {}
				Visit::Kept => {
					self.process_children(tree, child, binding, render)?;
					index += 1;
				}
			}
		}
		Ok(())
	}

	fn process_node(
		&self,
		tree: &mut NodeTree,
		node: NodeId,
		binding: &dyn BindingService,
		render: &mut RenderContext,
	) -> ProcessorResult<Visit> {
		let Some(element) = tree.get(node)?.as_element() else {
			return Ok(Visit::Kept);
		};
		tracing::trace!(%node, tag = element.name(), "visiting element");

		for processor in &self.processors {
			let directive = self.settings.attribute_name(processor.directive());
			let Some(expression) = element.attribute(&directive) else {
				continue;
			};
			if !processor.matches(element) {
				continue;
			}

			let status = binding.bind_status(expression)?;
			let values = FieldValues::new(self.data_value_processor.as_deref(), &self.version);
			let mut context = FieldContext::new(
				tree,
				node,
				element,
				status.as_ref(),
				self.comparator.as_ref(),
				&self.settings,
				values,
				render,
			);
			let decision = match processor.decide(&mut context)? {
				RenderDecision::Rewrite(rewrite) => RenderDecision::Rewrite(
					rewrite.with_local_variable(
						FIELD_BIND_STATUS_VARIABLE,
						status_variable(status.as_ref()),
					),
				),
				RenderDecision::Remove => RenderDecision::Remove,
			};

			tracing::debug!(
				%node,
				directive = %directive,
				expression = status.expression().unwrap_or_default(),
				"processed bound element"
			);
			rewriter::apply(tree, node, &directive, &decision)?;
			return Ok(Visit::Replaced);
		}
		Ok(Visit::Kept)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use fieldbind_binding::ModelBinding;
	use fieldbind_dom::Element;
	use rstest::rstest;
	use serde_json::json;
	use std::thread;

	fn assert_send_sync<T: Send + Sync>() {}

	#[rstest]
	fn test_dialect_is_send_sync() {
		assert_send_sync::<FieldBindingDialect>();
	}

	#[rstest]
	fn test_dialect_shared_between_renders() {
		let dialect = Arc::new(FieldBindingDialect::new(
			DialectSettings::default(),
			FrameworkVersion::new(5, 3),
		));

		let renders: Vec<_> = ["ada", "grace"]
			.into_iter()
			.map(|nickname| {
				let dialect = Arc::clone(&dialect);
				thread::spawn(move || {
					let binding = ModelBinding::new("user", json!({ "nickname": nickname }));
					let mut tree = NodeTree::new();
					let root = tree.root();
					tree.append_element(
						root,
						Element::new("input").with_attribute("th:field", "*{nickname}"),
					)
					.unwrap();
					dialect.process(&mut tree, &binding).unwrap();
					tree.to_html(root).unwrap()
				})
			})
			.collect();

		let html: Vec<String> = renders
			.into_iter()
			.map(|render| render.join().unwrap())
			.collect();
		assert_eq!(
			html,
			vec![
				r#"<input id="nickname" name="nickname" value="ada"/>"#,
				r#"<input id="nickname" name="nickname" value="grace"/>"#,
			]
		);
	}
}
