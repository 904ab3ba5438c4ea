//! Provider configuration loading and validation.
//!
//! # Responsibility
//! - Deserialize the declarative provider definition supplied by the host.
//! - Reject configuration that would make catalog lookups ambiguous.
//!
//! # Invariants
//! - Style ids are non-empty and unique within one configuration.
//! - `server_url` is non-empty.
//! - Stylesheet format tags are not checked here; unknown tags surface when
//!   their descriptor is requested.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Retrieval backend selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Reads stylesheets from the local filesystem.
    #[default]
    FileSystem,
    /// Fetches stylesheets from a remote HTTP endpoint.
    Http,
}

/// Top-level provider definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    /// Public base URL used to build every generated link.
    pub server_url: String,
    /// Directory stylesheet paths are resolved against (filesystem backend).
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    /// URL stylesheet paths are joined onto (HTTP backend).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Optional request timeout for the HTTP backend.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
    pub styles: Vec<StyleConfig>,
}

/// Optional logging section consumed by hosts that bootstrap logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: String,
}

/// One configured style.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleConfig {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub stylesheets: Vec<StylesheetConfig>,
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
}

impl StyleConfig {
    /// Returns the first stylesheet reference configured for `format_tag`.
    pub fn stylesheet(&self, format_tag: &str) -> Option<&StylesheetConfig> {
        self.stylesheets
            .iter()
            .find(|stylesheet| stylesheet.format_tag == format_tag)
    }
}

/// Reference to one serialized stylesheet of a style.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StylesheetConfig {
    /// Serialized as `type` to match the provider definition schema.
    #[serde(rename = "type")]
    pub format_tag: String,
    /// Relative path or URL segment of the stylesheet.
    pub path: String,
    #[serde(default)]
    pub native: bool,
}

/// Layer reference passed through to metadata unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayerConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Configuration load/validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    MissingServerUrl,
    EmptyStyleId,
    DuplicateStyleId(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid provider config: {err}"),
            Self::MissingServerUrl => write!(f, "server_url cannot be empty"),
            Self::EmptyStyleId => write!(f, "style id cannot be empty"),
            Self::DuplicateStyleId(id) => write!(f, "style id configured more than once: {id}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::MissingServerUrl | Self::EmptyStyleId | Self::DuplicateStyleId(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl ProviderConfig {
    /// Parses and validates a JSON provider definition.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON provider definition file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Validates declaration-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_url.trim().is_empty() {
            return Err(ConfigError::MissingServerUrl);
        }
        validate_style_ids(&self.styles)
    }
}

pub(crate) fn validate_style_ids(styles: &[StyleConfig]) -> Result<(), ConfigError> {
    let mut seen = BTreeSet::<&str>::new();
    for style in styles {
        if style.id.trim().is_empty() {
            return Err(ConfigError::EmptyStyleId);
        }
        if !seen.insert(style.id.as_str()) {
            return Err(ConfigError::DuplicateStyleId(style.id.clone()));
        }
    }
    Ok(())
}
