//! Configuration for fieldbind
//!
//! - [`DialectSettings`]: attribute prefix, field marker prefix and the
//!   inputs of version detection, loaded from TOML or built in code
//! - [`FrameworkVersion`]: immutable snapshot of the binding framework's
//!   version and optional modules, computed once at startup and injected
//!   into the components that consult it

pub mod error;
pub mod settings;
pub mod version;

pub use error::{SettingsError, SettingsResult, VersionError};
pub use settings::DialectSettings;
pub use version::{CapabilityProbe, FrameworkVersion, StaticProbe, capability};
