//! Dialect settings
//!
//! Settings have code defaults and can be overridden from TOML:
//!
//! ```toml
//! prefix = "data-th"
//! field_marker_prefix = "_"
//! framework_version = "5.3.1"
//! capabilities = ["web-mvc-view"]
//! ```

use crate::error::{SettingsError, SettingsResult};
use crate::version::{FrameworkVersion, StaticProbe};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_PREFIX: &str = "th";
pub const DEFAULT_FIELD_MARKER_PREFIX: &str = "_";

/// Settings of the form-binding dialect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectSettings {
	/// Prefix of directive attributes (`th` gives `th:field`)
	pub prefix: String,
	/// Prefix of the hidden marker inputs that accompany checkboxes
	pub field_marker_prefix: String,
	/// Version string reported by the binding framework, when known
	pub framework_version: Option<String>,
	/// Optional framework capabilities available at runtime
	pub capabilities: Vec<String>,
}

impl Default for DialectSettings {
	fn default() -> Self {
		Self {
			prefix: DEFAULT_PREFIX.to_string(),
			field_marker_prefix: DEFAULT_FIELD_MARKER_PREFIX.to_string(),
			framework_version: None,
			capabilities: Vec::new(),
		}
	}
}

impl DialectSettings {
	/// Parse settings from TOML; missing keys keep their defaults
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_conf::DialectSettings;
	///
	/// let settings = DialectSettings::from_toml_str(r#"prefix = "data-th""#).unwrap();
	/// assert_eq!(settings.field_attribute(), "data-th:field");
	/// assert_eq!(settings.field_marker_prefix, "_");
	/// ```
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loading dialect settings");
		Self::from_toml_str(&source)
	}

	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	pub fn with_field_marker_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.field_marker_prefix = prefix.into();
		self
	}

	pub fn with_framework_version(mut self, version: impl Into<String>) -> Self {
		self.framework_version = Some(version.into());
		self
	}

	pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
		self.capabilities.push(capability.into());
		self
	}

	/// Reject settings that would produce unusable attribute names
	pub fn validate(&self) -> SettingsResult<()> {
		if self.prefix.is_empty() || self.prefix.contains(':') {
			return Err(SettingsError::InvalidValue {
				key: "prefix".to_string(),
				message: "must be non-empty and must not contain ':'".to_string(),
			});
		}
		if self.field_marker_prefix.is_empty() {
			return Err(SettingsError::InvalidValue {
				key: "field_marker_prefix".to_string(),
				message: "must be non-empty".to_string(),
			});
		}
		Ok(())
	}

	/// Qualified name of a directive attribute
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_conf::DialectSettings;
	///
	/// assert_eq!(DialectSettings::default().attribute_name("errors"), "th:errors");
	/// ```
	pub fn attribute_name(&self, directive: &str) -> String {
		format!("{}:{}", self.prefix, directive)
	}

	pub fn field_attribute(&self) -> String {
		self.attribute_name("field")
	}

	pub fn errors_attribute(&self) -> String {
		self.attribute_name("errors")
	}

	/// Compute the framework version snapshot these settings describe
	pub fn framework(&self) -> SettingsResult<FrameworkVersion> {
		let probe: StaticProbe = self.capabilities.iter().map(String::as_str).collect();
		Ok(FrameworkVersion::detect(
			self.framework_version.as_deref(),
			&probe,
		)?)
	}
}
