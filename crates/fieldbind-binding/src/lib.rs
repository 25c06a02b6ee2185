//! Data binding seams for fieldbind
//!
//! The form processors never look at a model directly. They ask a
//! [`BindingService`] for the [`BindStatus`] of a field expression and ask a
//! [`SelectedValueComparator`] whether a literal candidate value is selected.
//!
//! [`ModelBinding`] and [`DefaultSelectedValueComparator`] are in-memory
//! implementations over a JSON model.
//!
//! # Examples
//!
//! ```
//! use fieldbind_binding::{BindingService, ModelBinding, ValueType};
//! use serde_json::json;
//!
//! let binding = ModelBinding::new("user", json!({"subscribed": true}))
//! 	.with_type("subscribed", ValueType::Boolean);
//!
//! let status = binding.bind_status("*{subscribed}").unwrap();
//! assert_eq!(status.expression(), Some("subscribed"));
//! assert!(status.value_type().is_boolean());
//! ```

pub mod comparator;
pub mod error;
pub mod expression;
pub mod model;
pub mod status;
pub mod value_type;

pub use comparator::{DefaultSelectedValueComparator, SelectedValueComparator};
pub use error::{BindingError, BindingResult};
pub use expression::FieldExpression;
pub use model::ModelBinding;
pub use status::{BindStatus, BindingService, FieldBindStatus, display_value, status_variable};
pub use value_type::ValueType;
