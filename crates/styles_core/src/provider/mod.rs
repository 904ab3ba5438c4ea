//! Style provider contract and retrieval backends.
//!
//! # Responsibility
//! - Define the capability interface the hosting API layer calls into.
//! - Select one retrieval backend from configuration at startup.
//!
//! # Invariants
//! - Catalog operations behave identically across backends.
//! - Only `get_style_definition` differs between backends.
//! - Absence is `Ok(None)`; errors are reserved for faults.

pub mod file_system;
pub mod http;

use crate::catalog::StyleCatalog;
use crate::config::{ConfigError, ProviderConfig, ProviderKind};
use crate::error::{StyleError, StyleResult};
use crate::model::document::{StyleEntry, StyleList, StyleMetadata};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use file_system::FileSystemStyleProvider;
pub use http::HttpStyleProvider;

/// Capability interface implemented by every retrieval backend.
pub trait StyleProvider: Send + Sync {
    /// Backing catalog of configured styles.
    fn catalog(&self) -> &StyleCatalog;

    /// Returns raw stylesheet content for one style and format tag.
    fn get_style_definition(&self, style_id: &str, format_tag: &str)
        -> StyleResult<Option<String>>;

    fn list_styles(&self) -> StyleList {
        self.catalog().list_styles()
    }

    fn get_style(&self, style_id: &str) -> Option<StyleEntry> {
        self.catalog().get_style(style_id)
    }

    fn get_style_metadata(&self, style_id: &str) -> StyleResult<Option<StyleMetadata>> {
        self.catalog().get_style_metadata(style_id)
    }

    /// Reserved for rendered style previews.
    ///
    /// # Errors
    /// - Always returns `StyleError::Unsupported`.
    fn get_style_preview(&self, _style_id: &str) -> StyleResult<Vec<u8>> {
        Err(StyleError::Unsupported("get_style_preview"))
    }
}

/// Provider construction errors.
#[derive(Debug)]
pub enum ProviderBuildError {
    Config(ConfigError),
    HttpClient(reqwest::Error),
}

impl Display for ProviderBuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::HttpClient(err) => write!(f, "failed to build http client: {err}"),
        }
    }
}

impl Error for ProviderBuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::HttpClient(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ProviderBuildError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<reqwest::Error> for ProviderBuildError {
    fn from(value: reqwest::Error) -> Self {
        Self::HttpClient(value)
    }
}

/// Builds the retrieval backend selected by `config.provider`.
pub fn build_provider(
    config: &ProviderConfig,
) -> Result<Box<dyn StyleProvider>, ProviderBuildError> {
    let provider: Box<dyn StyleProvider> = match config.provider {
        ProviderKind::FileSystem => Box::new(FileSystemStyleProvider::from_config(config)?),
        ProviderKind::Http => Box::new(HttpStyleProvider::from_config(config)?),
    };
    Ok(provider)
}
