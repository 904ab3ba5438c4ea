//! HTTP retrieval backend.
//!
//! # Invariants
//! - Every transport, status or URL failure is logged at `warn` and surfaces
//!   as absence; callers never see network errors.
//! - One GET per call, no retries.

use crate::catalog::StyleCatalog;
use crate::config::ProviderConfig;
use crate::error::StyleResult;
use crate::provider::{ProviderBuildError, StyleProvider};
use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

/// Fetches stylesheet content from a remote HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpStyleProvider {
    catalog: StyleCatalog,
    base_url: Option<String>,
    client: Client,
}

impl HttpStyleProvider {
    /// Creates a provider; `base_url` of `None` treats stylesheet paths as
    /// full URLs.
    pub fn new(
        catalog: StyleCatalog,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ProviderBuildError> {
        // `None` clears the blocking client's built-in 30s default.
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(catalog, base_url, client))
    }

    /// Creates a provider around an existing client, sharing its connection
    /// pool and proxy settings.
    pub fn with_client(catalog: StyleCatalog, base_url: Option<String>, client: Client) -> Self {
        Self {
            catalog,
            base_url: base_url.filter(|url| !url.trim().is_empty()),
            client,
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderBuildError> {
        let catalog = StyleCatalog::new(&config.server_url, config.styles.clone())?;
        Self::new(
            catalog,
            config.base_url.clone(),
            config.timeout_ms.map(Duration::from_millis),
        )
    }

    /// Resolves the remote location for one style/format pair.
    ///
    /// Returns `None` when the style or format is not configured.
    pub fn style_definition_url(&self, style_id: &str, format_tag: &str) -> Option<String> {
        let stylesheet = self.catalog.find(style_id)?.stylesheet(format_tag)?;
        Some(match &self.base_url {
            Some(base_url) => join_url(base_url, &stylesheet.path),
            None => stylesheet.path.clone(),
        })
    }

    fn fetch(&self, url: &str) -> reqwest::Result<String> {
        self.client.get(url).send()?.error_for_status()?.text()
    }
}

impl StyleProvider for HttpStyleProvider {
    fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    fn get_style_definition(
        &self,
        style_id: &str,
        format_tag: &str,
    ) -> StyleResult<Option<String>> {
        let Some(url) = self.style_definition_url(style_id, format_tag) else {
            debug!(
                "event=style_definition_missing module=provider.http status=ok style_id={} type={}",
                style_id, format_tag
            );
            return Ok(None);
        };

        match self.fetch(&url) {
            Ok(body) => Ok(Some(body)),
            Err(err) => {
                warn!(
                    "event=style_fetch_failed module=provider.http status=error url={} error={}",
                    url, err
                );
                Ok(None)
            }
        }
    }
}

/// Joins `path` onto `base` with URL reference resolution.
///
/// An unparseable base is returned concatenated with `path`, so the failure
/// surfaces on fetch instead of during lookup.
fn join_url(base: &str, path: &str) -> String {
    match Url::parse(base).and_then(|base| base.join(path)) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{base}{path}"),
    }
}
