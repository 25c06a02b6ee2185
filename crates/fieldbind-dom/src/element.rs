//! Element data: tag name, ordered attributes and node-local variables

use indexmap::IndexMap;
use serde_json::Value;

/// Variables visible only within a node's subtree
pub type LocalVariables = IndexMap<String, Value>;

/// An element node's payload
///
/// Attributes keep insertion order. Setting an attribute that already exists
/// keeps its original position; removing one preserves the order of the rest.
/// Attribute names are matched ignoring ASCII case, as in HTML.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
	name: String,
	attributes: IndexMap<String, String>,
	local_variables: LocalVariables,
}

impl Element {
	/// Create an element with no attributes
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_dom::Element;
	///
	/// let input = Element::new("input");
	/// assert_eq!(input.name(), "input");
	/// assert_eq!(input.attributes().count(), 0);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attributes: IndexMap::new(),
			local_variables: IndexMap::new(),
		}
	}

	/// Builder-style attribute setter
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_dom::Element;
	///
	/// let input = Element::new("input")
	/// 	.with_attribute("type", "checkbox")
	/// 	.with_attribute("th:field", "*{subscribed}");
	/// assert_eq!(input.attribute("type"), Some("checkbox"));
	/// ```
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set_attribute(name, value);
		self
	}

	/// Builder-style local variable setter
	pub fn with_local_variable(mut self, name: impl Into<String>, value: Value) -> Self {
		self.local_variables.insert(name.into(), value);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Whether the tag name matches, ignoring ASCII case
	pub fn is(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
	}

	/// Attribute value by name, ignoring ASCII case
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_dom::Element;
	///
	/// let input = Element::new("INPUT").with_attribute("TYPE", "checkbox");
	/// assert_eq!(input.attribute("type"), Some("checkbox"));
	/// ```
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.position(name)
			.and_then(|index| self.attributes.get_index(index))
			.map(|(_, value)| value.as_str())
	}

	pub fn has_attribute(&self, name: &str) -> bool {
		self.position(name).is_some()
	}

	/// Set an attribute, keeping its position if it already exists
	///
	/// An existing attribute whose name differs only in ASCII case is
	/// overwritten and keeps its original spelling.
	pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self
			.position(&name)
			.and_then(|index| self.attributes.get_index_mut(index))
		{
			Some((_, existing)) => *existing = value,
			None => {
				self.attributes.insert(name, value);
			}
		}
	}

	/// Remove an attribute, returning its previous value
	///
	/// Removing an attribute that is not present is a no-op.
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_dom::Element;
	///
	/// let mut input = Element::new("input")
	/// 	.with_attribute("type", "checkbox")
	/// 	.with_attribute("checked", "checked")
	/// 	.with_attribute("name", "agree");
	///
	/// assert_eq!(input.remove_attribute("checked"), Some("checked".to_string()));
	/// assert_eq!(input.remove_attribute("checked"), None);
	/// let names: Vec<_> = input.attributes().map(|(name, _)| name).collect();
	/// assert_eq!(names, vec!["type", "name"]);
	/// ```
	pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
		let index = self.position(name)?;
		self.attributes
			.shift_remove_index(index)
			.map(|(_, value)| value)
	}

	fn position(&self, name: &str) -> Option<usize> {
		self.attributes.get_index_of(name).or_else(|| {
			self.attributes
				.keys()
				.position(|key| key.eq_ignore_ascii_case(name))
		})
	}

	/// Attributes in document order
	pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attributes
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	pub fn local_variables(&self) -> &LocalVariables {
		&self.local_variables
	}

	pub fn local_variable(&self, name: &str) -> Option<&Value> {
		self.local_variables.get(name)
	}

	/// Merge variables into this node's local scope, overriding existing keys
	pub fn add_local_variables(&mut self, variables: &LocalVariables) {
		for (name, value) in variables {
			self.local_variables.insert(name.clone(), value.clone());
		}
	}
}
