/// Errors raised while resolving bindings
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
	#[error("Invalid field expression: {0}")]
	InvalidExpression(String),

	#[error("Unknown property '{property}' on bound object '{object}'")]
	UnknownProperty { object: String, property: String },

	#[error("Selection comparison failed for '{expression}': {message}")]
	Comparison { expression: String, message: String },
}

pub type BindingResult<T> = Result<T, BindingError>;
