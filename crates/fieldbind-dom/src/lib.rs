//! Template node tree for fieldbind
//!
//! This crate provides the node tree the form-binding processors operate on:
//! - An arena of nodes addressed by stable [`NodeId`] indices
//! - Elements with ordered attributes and node-local variables
//! - In-place splicing (`insert_before`, `remove_child`) on a parent's child list
//! - HTML serialization of any subtree
//!
//! Parsing templates is the job of the surrounding engine; trees are built
//! programmatically.
//!
//! # Examples
//!
//! ```
//! use fieldbind_dom::{Element, NodeTree};
//!
//! let mut tree = NodeTree::new();
//! let root = tree.root();
//! let form = tree.append_element(root, Element::new("form")).unwrap();
//! tree.append_element(form, Element::new("input").with_attribute("type", "text"))
//! 	.unwrap();
//!
//! assert_eq!(tree.to_html(root).unwrap(), r#"<form><input type="text"/></form>"#);
//! ```

pub mod element;
pub mod error;
pub mod html;
pub mod tree;

pub use element::{Element, LocalVariables};
pub use error::{DomError, DomResult};
pub use html::{VOID_ELEMENTS, escape, escape_attr, is_void_element};
pub use tree::{Node, NodeId, NodeKind, NodeTree};
