//! Map style catalog and stylesheet retrieval for OGC API style endpoints.
//! This crate owns every style document the hosting API layer serves.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod provider;

pub use catalog::StyleCatalog;
pub use config::{
    ConfigError, LayerConfig, LoggingConfig, ProviderConfig, ProviderKind, StyleConfig,
    StylesheetConfig,
};
pub use error::{StyleError, StyleResult};
pub use format::StyleFormat;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{
    LayerMetadata, Link, StyleEntry, StyleList, StyleMetadata, StylesheetLink, StylesheetMetadata,
};
pub use provider::{
    build_provider, FileSystemStyleProvider, HttpStyleProvider, ProviderBuildError, StyleProvider,
};

/// Minimal health-check API for host integration checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
