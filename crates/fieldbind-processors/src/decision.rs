//! What a processor decided to render
//!
//! Processors never touch the tree. They describe the output as a
//! [`RenderDecision`] and the shared [`rewriter`](crate::rewriter) performs it.

use fieldbind_dom::{LocalVariables, NodeId};
use serde_json::Value;

/// Outcome of [`FieldProcessor::decide`](crate::FieldProcessor::decide)
#[derive(Debug, Clone, PartialEq)]
pub enum RenderDecision {
	/// Replace the element with a rewritten copy, optionally followed by a hidden marker
	Rewrite(FieldRewrite),
	/// Drop the element from the output
	Remove,
}

/// One attribute change, applied in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeOp {
	Set(String, String),
	Remove(String),
}

/// What becomes of the element's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
	/// The copy has no children
	Drop,
	/// The element's children move to the copy
	Keep,
	/// The copy holds a single text node
	Text(String),
	/// The copy holds one text node per line, separated by `<br>` elements
	Lines(Vec<String>),
}

/// Hidden input emitted right after the rewritten element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenMarker {
	pub name: String,
	pub value: String,
}

/// Description of a rewritten element
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRewrite {
	attributes: Vec<AttributeOp>,
	body: Body,
	option_states: Vec<(NodeId, bool)>,
	hidden_marker: Option<HiddenMarker>,
	local_variables: LocalVariables,
}

impl FieldRewrite {
	/// # Examples
	///
	/// ```
	/// use fieldbind_processors::decision::{AttributeOp, Body, FieldRewrite};
	///
	/// let rewrite = FieldRewrite::new(Body::Drop)
	/// 	.set("name", "email")
	/// 	.remove("checked")
	/// 	.with_hidden_marker("_email", "on");
	///
	/// assert_eq!(
	/// 	rewrite.attributes(),
	/// 	&[
	/// 		AttributeOp::Set("name".to_string(), "email".to_string()),
	/// 		AttributeOp::Remove("checked".to_string()),
	/// 	]
	/// );
	/// assert_eq!(rewrite.hidden_marker().map(|m| m.name.as_str()), Some("_email"));
	/// ```
	pub fn new(body: Body) -> Self {
		Self {
			attributes: Vec::new(),
			body,
			option_states: Vec::new(),
			hidden_marker: None,
			local_variables: LocalVariables::new(),
		}
	}

	pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes
			.push(AttributeOp::Set(name.into(), value.into()));
		self
	}

	pub fn remove(mut self, name: impl Into<String>) -> Self {
		self.attributes.push(AttributeOp::Remove(name.into()));
		self
	}

	/// Set a boolean attribute as `name="name"`, or remove it
	pub fn toggle(self, name: &str, on: bool) -> Self {
		if on {
			self.set(name, name)
		} else {
			self.remove(name)
		}
	}

	/// Mark an `option` descendant as selected or not
	pub fn select_option(mut self, option: NodeId, selected: bool) -> Self {
		self.option_states.push((option, selected));
		self
	}

	pub fn with_hidden_marker(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.hidden_marker = Some(HiddenMarker {
			name: name.into(),
			value: value.into(),
		});
		self
	}

	/// Expose a variable to the rewritten element's subtree and its marker
	pub fn with_local_variable(mut self, name: impl Into<String>, value: Value) -> Self {
		self.local_variables.insert(name.into(), value);
		self
	}

	pub fn attributes(&self) -> &[AttributeOp] {
		&self.attributes
	}

	pub fn body(&self) -> &Body {
		&self.body
	}

	pub fn option_states(&self) -> &[(NodeId, bool)] {
		&self.option_states
	}

	pub fn hidden_marker(&self) -> Option<&HiddenMarker> {
		self.hidden_marker.as_ref()
	}

	pub fn local_variables(&self) -> &LocalVariables {
		&self.local_variables
	}
}
