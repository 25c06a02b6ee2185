//! Field processors module.

#[cfg(feature = "processors")]
pub use fieldbind_processors::*;
