//! Shared node rewriter
//!
//! Performs a [`RenderDecision`] on the live tree. For a rewrite, the steps
//! run in a fixed order:
//!
//! 1. copy the element without its children
//! 2. drop the directive attribute from the copy
//! 3. apply the attribute changes in order
//! 4. give the copy the element's local variables plus the decision's
//! 5. build the hidden marker, if any, with the same variables
//! 6. insert the copy, then the marker, before the element
//! 7. remove the element
//!
//! The marker therefore always follows the copy, and both take the
//! element's former position.

use crate::decision::{AttributeOp, Body, FieldRewrite, RenderDecision};
use crate::error::ProcessorResult;
use fieldbind_dom::{DomError, Element, NodeId, NodeTree};

/// Apply `decision` to `node`, returning the nodes that replaced it in order
pub fn apply(
	tree: &mut NodeTree,
	node: NodeId,
	directive: &str,
	decision: &RenderDecision,
) -> ProcessorResult<Vec<NodeId>> {
	let parent = tree.parent(node)?.ok_or(DomError::Detached(node))?;
	match decision {
		RenderDecision::Remove => {
			tree.remove_child(parent, node)?;
			Ok(Vec::new())
		}
		RenderDecision::Rewrite(rewrite) => rewrite_node(tree, parent, node, directive, rewrite),
	}
}

fn rewrite_node(
	tree: &mut NodeTree,
	parent: NodeId,
	node: NodeId,
	directive: &str,
	rewrite: &FieldRewrite,
) -> ProcessorResult<Vec<NodeId>> {
	let mut local_variables = tree.element(node)?.local_variables().clone();
	for (name, value) in rewrite.local_variables() {
		local_variables.insert(name.clone(), value.clone());
	}

	let copy = tree.clone_element(node)?;
	{
		let element = tree.element_mut(copy)?;
		element.remove_attribute(directive);
		for op in rewrite.attributes() {
			match op {
				AttributeOp::Set(name, value) => element.set_attribute(name.clone(), value.clone()),
				AttributeOp::Remove(name) => {
					element.remove_attribute(name);
				}
			}
		}
		element.add_local_variables(&local_variables);
	}

	match rewrite.body() {
		Body::Drop => {}
		Body::Keep => tree.move_children(node, copy)?,
		Body::Text(text) => {
			tree.append_text(copy, text.clone())?;
		}
		Body::Lines(lines) => {
			for (index, line) in lines.iter().enumerate() {
				if index > 0 {
					tree.append_element(copy, Element::new("br"))?;
				}
				tree.append_text(copy, line.clone())?;
			}
		}
	}

	for (option, selected) in rewrite.option_states() {
		let option = tree.element_mut(*option)?;
		if *selected {
			option.set_attribute("selected", "selected");
		} else {
			option.remove_attribute("selected");
		}
	}

	let marker = rewrite.hidden_marker().map(|marker| {
		let mut hidden = Element::new("input")
			.with_attribute("type", "hidden")
			.with_attribute("name", marker.name.clone())
			.with_attribute("value", marker.value.clone());
		hidden.add_local_variables(&local_variables);
		tree.create_element(hidden)
	});

	let mut replacements = vec![copy];
	tree.insert_before(parent, node, copy)?;
	if let Some(marker) = marker {
		tree.insert_before(parent, node, marker)?;
		replacements.push(marker);
	}
	tree.remove_child(parent, node)?;

	Ok(replacements)
}
