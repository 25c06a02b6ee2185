//! Template node tree module.
//!
//! # Examples
//!
//! ```rust
//! use fieldbind::dom::{Element, NodeTree};
//!
//! let mut tree = NodeTree::new();
//! let root = tree.root();
//! tree.append_element(root, Element::new("br")).unwrap();
//! assert_eq!(tree.to_html(root).unwrap(), "<br/>");
//! ```

#[cfg(feature = "dom")]
pub use fieldbind_dom::*;
