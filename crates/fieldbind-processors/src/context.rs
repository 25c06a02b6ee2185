//! Per-render state and the view a processor gets of the node it handles

use crate::data_value::FieldValues;
use fieldbind_binding::{BindStatus, SelectedValueComparator};
use fieldbind_conf::DialectSettings;
use fieldbind_dom::{Element, NodeId, NodeTree};
use std::collections::HashMap;

/// State that lives for exactly one render
#[derive(Debug, Default)]
pub struct RenderContext {
	id_sequences: HashMap<String, u32>,
}

impl RenderContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// Next sequence number for `base_id`, starting at 1
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_processors::RenderContext;
	///
	/// let mut render = RenderContext::new();
	/// assert_eq!(render.next_id_sequence("tags"), 1);
	/// assert_eq!(render.next_id_sequence("tags"), 2);
	/// assert_eq!(render.next_id_sequence("colors"), 1);
	/// ```
	pub fn next_id_sequence(&mut self, base_id: &str) -> u32 {
		let counter = self.id_sequences.entry(base_id.to_string()).or_insert(0);
		*counter += 1;
		*counter
	}
}

/// Everything a [`FieldProcessor`](crate::FieldProcessor) may consult to decide
/// how a bound element renders
pub struct FieldContext<'a> {
	tree: &'a NodeTree,
	node: NodeId,
	element: &'a Element,
	status: &'a dyn BindStatus,
	comparator: &'a dyn SelectedValueComparator,
	settings: &'a DialectSettings,
	values: FieldValues<'a>,
	render: &'a mut RenderContext,
}

impl<'a> FieldContext<'a> {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		tree: &'a NodeTree,
		node: NodeId,
		element: &'a Element,
		status: &'a dyn BindStatus,
		comparator: &'a dyn SelectedValueComparator,
		settings: &'a DialectSettings,
		values: FieldValues<'a>,
		render: &'a mut RenderContext,
	) -> Self {
		Self {
			tree,
			node,
			element,
			status,
			comparator,
			settings,
			values,
			render,
		}
	}

	pub fn tree(&self) -> &NodeTree {
		self.tree
	}

	pub fn node(&self) -> NodeId {
		self.node
	}

	pub fn element(&self) -> &Element {
		self.element
	}

	pub fn status(&self) -> &dyn BindStatus {
		self.status
	}

	pub fn comparator(&self) -> &dyn SelectedValueComparator {
		self.comparator
	}

	pub fn settings(&self) -> &DialectSettings {
		self.settings
	}

	/// The `name` attribute value: the bound expression, or empty when unknown
	pub fn name(&self) -> String {
		self.status.expression().unwrap_or_default().to_string()
	}

	/// Name of the hidden marker input that accompanies `name`
	pub fn marker_name(&self, name: &str) -> String {
		format!("{}{}", self.settings.field_marker_prefix, name)
	}

	/// The element's `id`
	///
	/// A literal `id` attribute wins. Otherwise the id is derived from `name`
	/// and, for controls that can repeat for one field (`sequence`), suffixed
	/// with a per-render counter.
	pub fn compute_id(&mut self, name: &str, sequence: bool) -> String {
		if let Some(id) = self.element.attribute("id")
			&& !id.trim().is_empty()
		{
			return id.to_string();
		}
		let id = id_from_name(name);
		if sequence {
			let count = self.render.next_id_sequence(&id);
			format!("{}{}", id, count)
		} else {
			id
		}
	}

	/// Pass a value through the request data value hook, when active
	pub fn process_value(&self, name: &str, value: &str, input_type: &str) -> String {
		self.values.process(name, value, input_type)
	}
}

/// Derive an element id from a field name by dropping index brackets
///
/// # Examples
///
/// ```
/// use fieldbind_processors::context::id_from_name;
///
/// assert_eq!(id_from_name("lines[0].sku"), "lines0.sku");
/// assert_eq!(id_from_name("subscribed"), "subscribed");
/// ```
pub fn id_from_name(name: &str) -> String {
	name.chars().filter(|c| *c != '[' && *c != ']').collect()
}
