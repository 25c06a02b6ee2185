//! Arena node tree
//!
//! Every node lives in a single `Vec` owned by [`NodeTree`] and is addressed
//! by a [`NodeId`]. Parent and child links are stored as ids, so splicing a
//! node into or out of a parent is an operation on the parent's child-id list.
//! Removed nodes stay in the arena, detached, until the tree is dropped.

use crate::element::Element;
use crate::error::{DomError, DomResult};
use crate::html;
use serde_json::Value;
use std::fmt;

/// Stable index of a node inside a [`NodeTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Node payload
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
	/// The tree root; never has a parent
	Document,
	Element(Element),
	Text(String),
}

/// A node with its structural links
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
	kind: NodeKind,
	parent: Option<NodeId>,
	children: Vec<NodeId>,
}

impl Node {
	fn new(kind: NodeKind) -> Self {
		Self {
			kind,
			parent: None,
			children: Vec::new(),
		}
	}

	pub fn kind(&self) -> &NodeKind {
		&self.kind
	}

	pub fn parent(&self) -> Option<NodeId> {
		self.parent
	}

	pub fn children(&self) -> &[NodeId] {
		&self.children
	}

	pub fn as_element(&self) -> Option<&Element> {
		match &self.kind {
			NodeKind::Element(element) => Some(element),
			_ => None,
		}
	}
}

/// Owner of all nodes of one template rendering
#[derive(Debug, Clone)]
pub struct NodeTree {
	nodes: Vec<Node>,
}

impl NodeTree {
	/// Create a tree holding only the document node
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_dom::NodeTree;
	///
	/// let tree = NodeTree::new();
	/// assert!(tree.children(tree.root()).unwrap().is_empty());
	/// ```
	pub fn new() -> Self {
		Self {
			nodes: vec![Node::new(NodeKind::Document)],
		}
	}

	pub fn root(&self) -> NodeId {
		NodeId(0)
	}

	/// Number of nodes in the arena, detached ones included
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the document has no content
	///
	/// The document node itself is always present, so this only looks at
	/// the root's children.
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_dom::{Element, NodeTree};
	///
	/// let mut tree = NodeTree::new();
	/// assert!(tree.is_empty());
	///
	/// let root = tree.root();
	/// tree.append_element(root, Element::new("form")).unwrap();
	/// assert!(!tree.is_empty());
	/// ```
	pub fn is_empty(&self) -> bool {
		self.nodes[0].children.is_empty()
	}

	pub fn get(&self, id: NodeId) -> DomResult<&Node> {
		self.nodes.get(id.0).ok_or(DomError::UnknownNode(id))
	}

	fn get_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
		self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode(id))
	}

	pub fn element(&self, id: NodeId) -> DomResult<&Element> {
		self.get(id)?.as_element().ok_or(DomError::NotAnElement(id))
	}

	pub fn element_mut(&mut self, id: NodeId) -> DomResult<&mut Element> {
		match &mut self.get_mut(id)?.kind {
			NodeKind::Element(element) => Ok(element),
			_ => Err(DomError::NotAnElement(id)),
		}
	}

	pub fn parent(&self, id: NodeId) -> DomResult<Option<NodeId>> {
		Ok(self.get(id)?.parent)
	}

	pub fn children(&self, id: NodeId) -> DomResult<&[NodeId]> {
		Ok(&self.get(id)?.children)
	}

	/// Add a detached element to the arena
	pub fn create_element(&mut self, element: Element) -> NodeId {
		self.push(NodeKind::Element(element))
	}

	/// Add a detached text node to the arena
	pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
		self.push(NodeKind::Text(text.into()))
	}

	fn push(&mut self, kind: NodeKind) -> NodeId {
		let id = NodeId(self.nodes.len());
		self.nodes.push(Node::new(kind));
		id
	}

	/// Create an element and append it as the last child of `parent`
	pub fn append_element(&mut self, parent: NodeId, element: Element) -> DomResult<NodeId> {
		self.get(parent)?;
		let id = self.create_element(element);
		self.append_child(parent, id)?;
		Ok(id)
	}

	/// Create a text node and append it as the last child of `parent`
	pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> DomResult<NodeId> {
		self.get(parent)?;
		let id = self.create_text(text);
		self.append_child(parent, id)?;
		Ok(id)
	}

	fn check_insertable(&self, child: NodeId) -> DomResult<()> {
		let node = self.get(child)?;
		if matches!(node.kind, NodeKind::Document) {
			return Err(DomError::DocumentNotInsertable);
		}
		if node.parent.is_some() {
			return Err(DomError::AlreadyAttached(child));
		}
		Ok(())
	}

	/// Append a detached node as the last child of `parent`
	pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
		self.get(parent)?;
		self.check_insertable(child)?;
		self.get_mut(child)?.parent = Some(parent);
		self.get_mut(parent)?.children.push(child);
		Ok(())
	}

	/// Position of `child` in the child list of `parent`
	pub fn index_of(&self, parent: NodeId, child: NodeId) -> DomResult<usize> {
		self.get(parent)?
			.children
			.iter()
			.position(|id| *id == child)
			.ok_or(DomError::NotAChild { parent, child })
	}

	/// Insert a detached node immediately before `reference` in `parent`
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_dom::{Element, NodeTree};
	///
	/// let mut tree = NodeTree::new();
	/// let root = tree.root();
	/// let b = tree.append_element(root, Element::new("b")).unwrap();
	/// let a = tree.create_element(Element::new("a"));
	/// tree.insert_before(root, b, a).unwrap();
	///
	/// assert_eq!(tree.children(root).unwrap(), &[a, b]);
	/// ```
	pub fn insert_before(
		&mut self,
		parent: NodeId,
		reference: NodeId,
		new_child: NodeId,
	) -> DomResult<()> {
		let position = self.index_of(parent, reference)?;
		self.check_insertable(new_child)?;
		self.get_mut(new_child)?.parent = Some(parent);
		self.get_mut(parent)?.children.insert(position, new_child);
		Ok(())
	}

	/// Detach `child` from `parent`
	///
	/// The node and its subtree stay in the arena.
	pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
		let position = self.index_of(parent, child)?;
		self.get_mut(parent)?.children.remove(position);
		self.get_mut(child)?.parent = None;
		Ok(())
	}

	/// Detach the children of `from` and append them, in order, to `to`
	pub fn move_children(&mut self, from: NodeId, to: NodeId) -> DomResult<()> {
		self.get(to)?;
		let children = std::mem::take(&mut self.get_mut(from)?.children);
		for child in children {
			self.get_mut(child)?.parent = Some(to);
			self.get_mut(to)?.children.push(child);
		}
		Ok(())
	}

	/// Copy an element without its children
	///
	/// The copy carries the same attributes and local variables and is
	/// detached; the caller decides where to insert it.
	pub fn clone_element(&mut self, id: NodeId) -> DomResult<NodeId> {
		let element = self.element(id)?.clone();
		Ok(self.create_element(element))
	}

	/// Look a variable up in the local scope of `id` and its ancestors
	///
	/// The nearest declaration wins.
	pub fn resolve_variable(&self, id: NodeId, name: &str) -> DomResult<Option<&Value>> {
		let mut current = Some(id);
		while let Some(node_id) = current {
			let node = self.get(node_id)?;
			if let Some(value) = node.as_element().and_then(|e| e.local_variable(name)) {
				return Ok(Some(value));
			}
			current = node.parent;
		}
		Ok(None)
	}

	/// Pre-order list of `id` and every attached descendant
	pub fn descendants(&self, id: NodeId) -> DomResult<Vec<NodeId>> {
		let mut result = Vec::new();
		let mut stack = vec![id];
		while let Some(current) = stack.pop() {
			result.push(current);
			let children = self.children(current)?;
			stack.extend(children.iter().rev().copied());
		}
		Ok(result)
	}

	/// Attached elements named `name` under `id`, in document order
	pub fn find_elements(&self, id: NodeId, name: &str) -> DomResult<Vec<NodeId>> {
		Ok(self
			.descendants(id)?
			.into_iter()
			.filter(|node| {
				self.nodes[node.0]
					.as_element()
					.is_some_and(|element| element.is(name))
			})
			.collect())
	}

	/// Concatenated text content of `id`'s subtree
	pub fn text_content(&self, id: NodeId) -> DomResult<String> {
		let mut text = String::new();
		for node in self.descendants(id)? {
			if let NodeKind::Text(content) = &self.nodes[node.0].kind {
				text.push_str(content);
			}
		}
		Ok(text)
	}

	/// Serialize the subtree rooted at `id` to HTML
	pub fn to_html(&self, id: NodeId) -> DomResult<String> {
		let mut out = String::new();
		html::write_node(self, id, &mut out)?;
		Ok(out)
	}
}

impl Default for NodeTree {
	fn default() -> Self {
		Self::new()
	}
}
