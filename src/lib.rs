//! # fieldbind
//!
//! Form field binding for HTML templates.
//!
//! Template elements carry field directives (`th:field`, `th:errors`) naming
//! a property of a form-backing object. Processing a template rewrites each
//! bound element so it shows the property's current value and submits back
//! under the property's name:
//!
//! - text-like `input`, `textarea` and `select` elements get `id`, `name` and
//!   their value or selected options
//! - `input type="checkbox"` gets its `checked` state plus a hidden marker
//!   input, so an unchecked box is still visible to the request binder
//! - `input type="radio"` is checked when its value matches
//! - `th:errors` elements list the field's errors, or disappear
//!
//! ## Feature Flags
//!
//! - `full` (default) - everything below
//! - `dom` - the template node tree ([`dom`])
//! - `binding` - bind status and value comparison ([`binding`])
//! - `conf` - dialect settings and the framework version snapshot ([`conf`])
//! - `processors` - the field processors and the dialect ([`processors`])
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldbind::prelude::*;
//! use serde_json::json;
//!
//! let dialect = FieldBindingDialect::from_settings(
//! 	DialectSettings::default().with_framework_version("5.3.1"),
//! )
//! .unwrap();
//! let binding = ModelBinding::new("user", json!({"nickname": "ada"}));
//!
//! let mut tree = NodeTree::new();
//! let root = tree.root();
//! tree.append_element(
//! 	root,
//! 	Element::new("input").with_attribute("th:field", "*{nickname}"),
//! )
//! .unwrap();
//!
//! dialect.process(&mut tree, &binding).unwrap();
//! assert_eq!(
//! 	tree.to_html(root).unwrap(),
//! 	r#"<input id="nickname" name="nickname" value="ada"/>"#
//! );
//! ```

#[cfg(feature = "binding")]
pub mod binding;
#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "dom")]
pub mod dom;
#[cfg(feature = "processors")]
pub mod processors;

#[cfg(feature = "binding")]
pub use fieldbind_binding::{
	BindStatus, BindingError, BindingService, FieldBindStatus, ModelBinding, ValueType,
};
#[cfg(feature = "conf")]
pub use fieldbind_conf::{DialectSettings, FrameworkVersion, SettingsError};
#[cfg(feature = "dom")]
pub use fieldbind_dom::{DomError, Element, NodeId, NodeTree};
#[cfg(feature = "processors")]
pub use fieldbind_processors::{FieldBindingDialect, ProcessorError, ProcessorResult};

/// Everything needed to process a template
#[cfg(feature = "processors")]
pub mod prelude {
	pub use fieldbind_binding::{BindStatus, BindingService, ModelBinding, ValueType};
	pub use fieldbind_conf::{DialectSettings, FrameworkVersion};
	pub use fieldbind_dom::{Element, NodeId, NodeTree};
	pub use fieldbind_processors::{
		FieldBindingDialect, FieldProcessor, ProcessorError, ProcessorResult,
		RequestDataValueProcessor,
	};
}
