//! Settings file loading tests

use fieldbind_conf::{DialectSettings, SettingsError, capability};
use rstest::rstest;
use std::io::Write;
use tempfile::NamedTempFile;

#[rstest]
fn test_load_settings_from_file() -> anyhow::Result<()> {
	let mut file = NamedTempFile::new()?;
	writeln!(
		file,
		r#"
prefix = "data-th"
framework_version = "4.3.30.RELEASE"
capabilities = ["{}"]
"#,
		capability::WEB_MVC_VIEW
	)?;

	let settings = DialectSettings::from_file(file.path())?;
	let version = settings.framework()?;

	assert_eq!(settings.field_attribute(), "data-th:field");
	assert_eq!(settings.field_marker_prefix, "_");
	assert_eq!(version.to_string(), "4.3");
	assert!(version.is_web_mvc_present());
	Ok(())
}

#[rstest]
fn test_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let result = DialectSettings::from_file(dir.path().join("absent.toml"));

	assert!(matches!(result, Err(SettingsError::Io(_))));
}
