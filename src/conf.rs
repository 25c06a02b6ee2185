//! Configuration module.
//!
//! # Examples
//!
//! ```rust
//! use fieldbind::conf::DialectSettings;
//!
//! let settings = DialectSettings::from_toml_str(r#"framework_version = "4.3.9""#).unwrap();
//! assert!(settings.framework().unwrap().is_43_at_least());
//! ```

#[cfg(feature = "conf")]
pub use fieldbind_conf::*;
