//! Form field attribute processors
//!
//! Binds template form elements to data-binding status:
//! - `input` (text-like types), `input type="checkbox"`, `input type="radio"`,
//!   `select` and `textarea` carrying a field directive (`th:field`)
//! - any element carrying an errors directive (`th:errors`)
//!
//! Processors only decide what an element renders as ([`RenderDecision`]);
//! the shared [`rewriter`] splices the result into the tree. The
//! [`FieldBindingDialect`] drives both over a whole template.
//!
//! A checkbox is the one element that turns into two:
//!
//! ```html
//! <input type="checkbox" id="subscribed1" name="subscribed" value="true" checked="checked"/>
//! <input type="hidden" name="_subscribed" value="on"/>
//! ```

pub mod context;
pub mod data_value;
pub mod decision;
pub mod dialect;
pub mod error;
pub mod processors;
pub mod resolver;
pub mod rewriter;

pub use context::{FieldContext, RenderContext};
pub use data_value::{FieldValues, RequestDataValueProcessor};
pub use decision::{AttributeOp, Body, FieldRewrite, HiddenMarker, RenderDecision};
pub use dialect::{FIELD_BIND_STATUS_VARIABLE, FieldBindingDialect};
pub use error::{ProcessorError, ProcessorResult};
pub use processors::{
	CheckboxFieldProcessor, ErrorsProcessor, FieldProcessor, InputFieldProcessor,
	RadioFieldProcessor, SelectFieldProcessor, TextareaFieldProcessor, default_processors,
};
pub use resolver::{CheckboxBinding, CheckboxState, parse_boolean, resolve_checkbox};
