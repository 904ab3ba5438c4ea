//! Filesystem retrieval backend.
//!
//! # Invariants
//! - A missing stylesheet file is absence, not an error.
//! - Every other I/O failure propagates as `StyleError::Io`.
//! - One synchronous full read per call; nothing is cached.

use crate::catalog::StyleCatalog;
use crate::config::{ConfigError, ProviderConfig, StyleConfig};
use crate::error::{StyleError, StyleResult};
use crate::provider::StyleProvider;
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads stylesheet content from local files.
#[derive(Debug, Clone)]
pub struct FileSystemStyleProvider {
    catalog: StyleCatalog,
    base_dir: Option<PathBuf>,
}

impl FileSystemStyleProvider {
    /// Creates a provider; `base_dir` of `None` leaves paths as configured.
    pub fn new(catalog: StyleCatalog, base_dir: Option<PathBuf>) -> Self {
        Self {
            catalog,
            base_dir: base_dir.filter(|dir| !dir.as_os_str().is_empty()),
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self, ConfigError> {
        let catalog = StyleCatalog::new(&config.server_url, config.styles.clone())?;
        Ok(Self::new(catalog, config.base_dir.clone()))
    }

    /// Resolves the on-disk path for one style/format pair.
    ///
    /// Returns `None` when the style or format is not configured, or when the
    /// resolved file does not exist.
    pub fn style_definition_path(&self, style_id: &str, format_tag: &str) -> Option<PathBuf> {
        let path = self.resolve(self.catalog.find(style_id)?, format_tag)?;
        path.exists().then_some(path)
    }

    fn resolve(&self, style: &StyleConfig, format_tag: &str) -> Option<PathBuf> {
        let stylesheet = style.stylesheet(format_tag)?;
        Some(match &self.base_dir {
            Some(base_dir) => base_dir.join(&stylesheet.path),
            None => PathBuf::from(&stylesheet.path),
        })
    }
}

impl StyleProvider for FileSystemStyleProvider {
    fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    fn get_style_definition(
        &self,
        style_id: &str,
        format_tag: &str,
    ) -> StyleResult<Option<String>> {
        let Some(path) = self.style_definition_path(style_id, format_tag) else {
            debug!(
                "event=style_definition_missing module=provider.fs status=ok style_id={} type={}",
                style_id, format_tag
            );
            return Ok(None);
        };
        read_definition(&path)
    }
}

fn read_definition(path: &Path) -> StyleResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        // Removed between the existence check and the read.
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StyleError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
