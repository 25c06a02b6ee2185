//! Data binding module.
//!
//! Bind status lookup, value types and selected-value comparison.

#[cfg(feature = "binding")]
pub use fieldbind_binding::*;
