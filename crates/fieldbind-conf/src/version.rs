//! Binding framework version snapshot
//!
//! The snapshot is built once, from the framework's reported version string
//! when there is one, and from ordered capability probes otherwise. It never
//! changes afterwards, so it can be shared freely between renders.

use crate::error::VersionError;
use std::collections::HashSet;
use std::fmt;

/// Capability names answered by a [`CapabilityProbe`]
pub mod capability {
	pub const DATA_BUFFER: &str = "data-buffer";
	pub const COMPONENT_SCANS: &str = "component-scans";
	pub const ALIAS_FOR: &str = "alias-for";
	pub const CACHE_CONFIG: &str = "cache-config";
	pub const PATH_RESOURCE: &str = "path-resource";
	pub const DEFERRED_RESULT: &str = "deferred-result";
	pub const REQUEST_DATA_VALUE_PROCESSOR: &str = "request-data-value-processor";
	pub const REQUEST_BODY: &str = "request-body";
	pub const WEB_MVC_VIEW: &str = "web-mvc-view";
	pub const WEB_REACTIVE_VIEW: &str = "web-reactive-view";
}

/// Probes consulted when no version string is available, most specific first
const VERSION_PROBES: &[(&str, u32, u32)] = &[
	(capability::DATA_BUFFER, 5, 0),
	(capability::COMPONENT_SCANS, 4, 3),
	(capability::ALIAS_FOR, 4, 2),
	(capability::CACHE_CONFIG, 4, 1),
	(capability::PATH_RESOURCE, 4, 0),
	(capability::DEFERRED_RESULT, 3, 2),
	(capability::REQUEST_DATA_VALUE_PROCESSOR, 3, 1),
	(capability::REQUEST_BODY, 3, 0),
];

const FALLBACK_VERSION: (u32, u32) = (2, 5);

/// Answers whether an optional framework capability is available
pub trait CapabilityProbe {
	fn is_present(&self, capability: &str) -> bool;
}

/// Probe over a fixed set of capability names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProbe {
	capabilities: HashSet<String>,
}

impl StaticProbe {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, capability: impl Into<String>) -> Self {
		self.capabilities.insert(capability.into());
		self
	}
}

impl<S: Into<String>> FromIterator<S> for StaticProbe {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self {
			capabilities: iter.into_iter().map(Into::into).collect(),
		}
	}
}

impl CapabilityProbe for StaticProbe {
	fn is_present(&self, capability: &str) -> bool {
		self.capabilities.contains(capability)
	}
}

/// Immutable version and module snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkVersion {
	major: u32,
	minor: u32,
	web_mvc_present: bool,
	web_reactive_present: bool,
}

impl FrameworkVersion {
	/// Snapshot for a known version with no optional modules
	pub fn new(major: u32, minor: u32) -> Self {
		Self {
			major,
			minor,
			web_mvc_present: false,
			web_reactive_present: false,
		}
	}

	/// Build the snapshot from a reported version string or, failing that, from probes
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_conf::{FrameworkVersion, StaticProbe, capability};
	///
	/// let probe = StaticProbe::new().with(capability::WEB_MVC_VIEW);
	/// let version = FrameworkVersion::detect(Some("4.3.12.RELEASE"), &probe).unwrap();
	/// assert_eq!((version.major(), version.minor()), (4, 3));
	/// assert!(version.is_web_mvc_present());
	/// assert!(!version.is_web_reactive_present());
	///
	/// let probed = FrameworkVersion::detect(None, &StaticProbe::new().with(capability::ALIAS_FOR))
	/// 	.unwrap();
	/// assert_eq!(probed.to_string(), "4.2");
	/// ```
	pub fn detect(
		version: Option<&str>,
		probe: &dyn CapabilityProbe,
	) -> Result<Self, VersionError> {
		let (major, minor) = match version {
			Some(version) => Self::parse(version)?,
			None => {
				let (major, minor) = VERSION_PROBES
					.iter()
					.find(|(capability, _, _)| probe.is_present(capability))
					.map(|(_, major, minor)| (*major, *minor))
					.unwrap_or(FALLBACK_VERSION);
				tracing::warn!(
					major,
					minor,
					"binding framework version unavailable, inferred from capabilities"
				);
				(major, minor)
			}
		};

		let snapshot = Self {
			major,
			minor,
			web_mvc_present: probe.is_present(capability::WEB_MVC_VIEW),
			web_reactive_present: major >= 5 && probe.is_present(capability::WEB_REACTIVE_VIEW),
		};
		tracing::info!(
			version = %snapshot,
			web_mvc = snapshot.web_mvc_present,
			web_reactive = snapshot.web_reactive_present,
			"binding framework version snapshot"
		);
		Ok(snapshot)
	}

	/// Extract `(major, minor)` from a `{major}.{minor}.{...}` version string
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_conf::FrameworkVersion;
	///
	/// assert_eq!(FrameworkVersion::parse("5.0.3.RELEASE").unwrap(), (5, 0));
	/// assert!(FrameworkVersion::parse("5.0").is_err());
	/// ```
	pub fn parse(version: &str) -> Result<(u32, u32), VersionError> {
		let malformed = || VersionError::Malformed(version.to_string());

		let (major, rest) = version.split_once('.').ok_or_else(malformed)?;
		let (minor, _) = rest.split_once('.').ok_or_else(malformed)?;
		let major = major.parse().map_err(|_| malformed())?;
		let minor = minor.parse().map_err(|_| malformed())?;
		Ok((major, minor))
	}

	pub fn with_web_mvc(mut self, present: bool) -> Self {
		self.web_mvc_present = present;
		self
	}

	/// Reactive web support only exists from 5.0 on; earlier versions ignore the flag
	pub fn with_web_reactive(mut self, present: bool) -> Self {
		self.web_reactive_present = self.major >= 5 && present;
		self
	}

	pub fn major(&self) -> u32 {
		self.major
	}

	pub fn minor(&self) -> u32 {
		self.minor
	}

	/// Whether this version is `major.minor` or later
	pub fn is_at_least(&self, major: u32, minor: u32) -> bool {
		(self.major, self.minor) >= (major, minor)
	}

	pub fn is_30_at_least(&self) -> bool {
		self.is_at_least(3, 0)
	}

	pub fn is_31_at_least(&self) -> bool {
		self.is_at_least(3, 1)
	}

	pub fn is_32_at_least(&self) -> bool {
		self.is_at_least(3, 2)
	}

	pub fn is_40_at_least(&self) -> bool {
		self.is_at_least(4, 0)
	}

	pub fn is_41_at_least(&self) -> bool {
		self.is_at_least(4, 1)
	}

	pub fn is_42_at_least(&self) -> bool {
		self.is_at_least(4, 2)
	}

	pub fn is_43_at_least(&self) -> bool {
		self.is_at_least(4, 3)
	}

	pub fn is_50_at_least(&self) -> bool {
		self.is_at_least(5, 0)
	}

	pub fn is_web_mvc_present(&self) -> bool {
		self.web_mvc_present
	}

	pub fn is_web_reactive_present(&self) -> bool {
		self.web_reactive_present
	}
}

impl fmt::Display for FrameworkVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.major, self.minor)
	}
}
