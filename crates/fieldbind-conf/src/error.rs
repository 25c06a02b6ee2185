/// Error raised while loading or validating [`DialectSettings`](crate::DialectSettings)
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid value for '{key}': {message}")]
	InvalidValue { key: String, message: String },

	#[error(transparent)]
	Version(#[from] VersionError),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Error raised while building a [`FrameworkVersion`](crate::FrameworkVersion)
///
/// Fatal: a malformed version string aborts startup.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
	#[error(
		"Identified binding framework version is '{0}', which does not follow the {{major}}.{{minor}}.{{...}} scheme"
	)]
	Malformed(String),
}
