//! HTML serialization
//!
//! Void elements are written self-closed (`<input type="text"/>`); every
//! other element gets an explicit close tag. Attribute values and text are
//! escaped. Node-local variables are never written.

use crate::error::DomResult;
use crate::tree::{NodeId, NodeKind, NodeTree};

/// Elements that never have content
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
	"track", "wbr",
];

pub fn is_void_element(name: &str) -> bool {
	VOID_ELEMENTS
		.iter()
		.any(|void| void.eq_ignore_ascii_case(name))
}

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use fieldbind_dom::escape;
///
/// assert_eq!(escape("Tom & Jerry"), "Tom &amp; Jerry");
/// assert_eq!(escape(r#"<a href="x">'</a>"#),
///            "&lt;a href=&quot;x&quot;&gt;&#x27;&lt;/a&gt;");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	for ch in text.chars() {
		push_escaped(&mut result, ch);
	}
	result
}

/// Escape an attribute value
///
/// Like [`escape`], also encoding line breaks and tabs.
///
/// # Examples
///
/// ```
/// use fieldbind_dom::escape_attr;
///
/// assert_eq!(escape_attr("a\tb"), "a&#9;b");
/// assert_eq!(escape_attr("1\r\n2"), "1&#13;&#10;2");
/// ```
pub fn escape_attr(value: &str) -> String {
	let mut result = String::with_capacity(value.len() + 10);
	for ch in value.chars() {
		match ch {
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			ch => push_escaped(&mut result, ch),
		}
	}
	result
}

fn push_escaped(out: &mut String, ch: char) {
	match ch {
		'&' => out.push_str("&amp;"),
		'<' => out.push_str("&lt;"),
		'>' => out.push_str("&gt;"),
		'"' => out.push_str("&quot;"),
		'\'' => out.push_str("&#x27;"),
		_ => out.push(ch),
	}
}

pub(crate) fn write_node(tree: &NodeTree, id: NodeId, out: &mut String) -> DomResult<()> {
	let node = tree.get(id)?;
	match node.kind() {
		NodeKind::Document => {
			for child in node.children() {
				write_node(tree, *child, out)?;
			}
		}
		NodeKind::Text(text) => out.push_str(&escape(text)),
		NodeKind::Element(element) => {
			out.push('<');
			out.push_str(element.name());
			for (name, value) in element.attributes() {
				out.push(' ');
				out.push_str(name);
				out.push_str("=\"");
				out.push_str(&escape_attr(value));
				out.push('"');
			}
			if is_void_element(element.name()) {
				out.push_str("/>");
				return Ok(());
			}
			out.push('>');
			for child in node.children() {
				write_node(tree, *child, out)?;
			}
			out.push_str("</");
			out.push_str(element.name());
			out.push('>');
		}
	}
	Ok(())
}
