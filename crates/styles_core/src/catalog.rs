//! Base style catalog shared by every retrieval backend.
//!
//! # Responsibility
//! - Own the configured styles and the public server URL.
//! - Derive catalog listings, per-style link sets and metadata documents.
//!
//! # Invariants
//! - Styles are immutable after construction and keep configuration order.
//! - Generated hrefs never contain a doubled `/` after the server URL.
//! - Listing tolerates unregistered stylesheet types; metadata does not.

use crate::config::{validate_style_ids, ConfigError, StyleConfig};
use crate::error::StyleResult;
use crate::format;
use crate::model::document::{
    LayerMetadata, Link, StyleEntry, StyleList, StyleMetadata, StylesheetLink,
    StylesheetMetadata, METADATA_SCOPE, REL_DESCRIBED_BY, REL_STYLESHEET,
};
use log::warn;

const HTML_FORMAT_CODE: &str = "html";
const HTML_MEDIA_TYPE: &str = "text/html";

/// Read-only catalog of configured styles.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    server_url: String,
    styles: Vec<StyleConfig>,
}

impl StyleCatalog {
    /// Creates a catalog from configured styles.
    ///
    /// # Errors
    /// - Returns `ConfigError::MissingServerUrl` for a blank `server_url`.
    /// - Returns `ConfigError::EmptyStyleId` / `DuplicateStyleId` when ids
    ///   are not unique and non-empty.
    pub fn new(server_url: &str, styles: Vec<StyleConfig>) -> Result<Self, ConfigError> {
        let server_url = server_url.trim().trim_end_matches('/');
        if server_url.is_empty() {
            return Err(ConfigError::MissingServerUrl);
        }
        validate_style_ids(&styles)?;

        Ok(Self {
            server_url: server_url.to_string(),
            styles,
        })
    }

    /// Normalized server URL without trailing slash.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn styles(&self) -> &[StyleConfig] {
        &self.styles
    }

    /// Returns one configured style by id.
    pub fn find(&self, style_id: &str) -> Option<&StyleConfig> {
        self.styles.iter().find(|style| style.id == style_id)
    }

    /// Lists all styles with their link sets, in configuration order.
    pub fn list_styles(&self) -> StyleList {
        StyleList {
            styles: self.styles.iter().map(|style| self.entry(style)).collect(),
        }
    }

    /// Returns the listing entry for one style.
    pub fn get_style(&self, style_id: &str) -> Option<StyleEntry> {
        self.find(style_id).map(|style| self.entry(style))
    }

    /// Builds the metadata document for one style.
    ///
    /// Returns `Ok(None)` when `style_id` is unknown.
    ///
    /// # Errors
    /// - Returns `StyleError::UnknownFormat` when the style references a
    ///   stylesheet type missing from the format registry.
    pub fn get_style_metadata(&self, style_id: &str) -> StyleResult<Option<StyleMetadata>> {
        let Some(style) = self.find(style_id) else {
            return Ok(None);
        };

        let mut stylesheets = Vec::with_capacity(style.stylesheets.len());
        for stylesheet in &style.stylesheets {
            let format = format::require(&stylesheet.format_tag)?;
            stylesheets.push(StylesheetMetadata {
                title: format.title.to_string(),
                version: format.version.to_string(),
                specification: format.spec_url.to_string(),
                native: stylesheet.native,
                link: StylesheetLink {
                    href: self.style_href(&style.id, format.format_code),
                    rel: REL_STYLESHEET.to_string(),
                    media_type: format.mime_type.to_string(),
                },
            });
        }

        let layers = style
            .layers
            .iter()
            .map(|layer| LayerMetadata {
                id: layer.id.clone(),
                kind: layer.kind.clone(),
            })
            .collect();

        Ok(Some(StyleMetadata {
            id: style.id.clone(),
            title: style.title.clone().unwrap_or_else(|| style.id.clone()),
            description: non_blank(style.description.as_ref()),
            keywords: style.keywords.clone().filter(|keywords| !keywords.is_empty()),
            scope: METADATA_SCOPE.to_string(),
            version: non_blank(style.version.as_ref()),
            stylesheets,
            layers,
        }))
    }

    fn entry(&self, style: &StyleConfig) -> StyleEntry {
        let mut links = Vec::with_capacity(style.stylesheets.len() + 2);
        links.push(Link {
            rel: REL_DESCRIBED_BY.to_string(),
            media_type: None,
            title: Some("Style metadata".to_string()),
            href: format!("{}/styles/{}/metadata", self.server_url, style.id),
        });
        links.push(Link {
            rel: REL_STYLESHEET.to_string(),
            media_type: Some(HTML_MEDIA_TYPE.to_string()),
            title: Some("Web map using the style".to_string()),
            href: self.style_href(&style.id, HTML_FORMAT_CODE),
        });

        for stylesheet in &style.stylesheets {
            let Some(format) = format::describe(&stylesheet.format_tag) else {
                warn!(
                    "event=stylesheet_link_skipped module=catalog status=warn style_id={} type={}",
                    style.id, stylesheet.format_tag
                );
                continue;
            };
            links.push(Link {
                rel: REL_STYLESHEET.to_string(),
                media_type: Some(format.mime_type.to_string()),
                title: Some(format!("Style in {} format", format.title)),
                href: self.style_href(&style.id, format.format_code),
            });
        }

        StyleEntry {
            id: style.id.clone(),
            title: style.title.clone(),
            links,
        }
    }

    fn style_href(&self, style_id: &str, format_code: &str) -> String {
        format!("{}/styles/{}?f={}", self.server_url, style_id, format_code)
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::StyleCatalog;
    use crate::config::{ConfigError, LayerConfig, StyleConfig, StylesheetConfig};
    use crate::error::StyleError;

    fn style(id: &str, tags: &[&str]) -> StyleConfig {
        StyleConfig {
            id: id.to_string(),
            title: Some(format!("{id} title")),
            description: None,
            keywords: None,
            version: None,
            stylesheets: tags
                .iter()
                .map(|tag| StylesheetConfig {
                    format_tag: tag.to_string(),
                    path: format!("{id}.{tag}"),
                    native: *tag == "mapbox",
                })
                .collect(),
            layers: vec![LayerConfig {
                id: "roads".to_string(),
                kind: "line".to_string(),
            }],
        }
    }

    #[test]
    fn trims_trailing_slash_from_server_url() {
        let catalog = StyleCatalog::new("https://x/", vec![style("streets", &["mapbox"])])
            .expect("catalog should build");
        assert_eq!(catalog.server_url(), "https://x");

        let entry = catalog.get_style("streets").expect("style should exist");
        assert_eq!(entry.links[0].href, "https://x/styles/streets/metadata");
        assert_eq!(entry.links[1].href, "https://x/styles/streets?f=html");
        assert_eq!(entry.links[2].href, "https://x/styles/streets?f=mapbox");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = StyleCatalog::new(
            "https://x",
            vec![style("streets", &[]), style("streets", &[])],
        )
        .expect_err("duplicate ids must fail");
        assert!(matches!(err, ConfigError::DuplicateStyleId(_)));
    }

    #[test]
    fn listing_skips_unregistered_stylesheet_types() {
        let catalog = StyleCatalog::new("https://x", vec![style("streets", &["css", "sld10"])])
            .expect("catalog should build");
        let entry = catalog.get_style("streets").expect("style should exist");
        assert_eq!(entry.links.len(), 3);
        assert_eq!(entry.links[2].href, "https://x/styles/streets?f=sld10");
    }

    #[test]
    fn metadata_fails_for_unregistered_stylesheet_type() {
        let catalog = StyleCatalog::new("https://x", vec![style("streets", &["mapbox", "css"])])
            .expect("catalog should build");
        let err = catalog
            .get_style_metadata("streets")
            .expect_err("unregistered type must fail metadata build");
        assert!(matches!(err, StyleError::UnknownFormat(tag) if tag == "css"));
    }

    #[test]
    fn metadata_title_falls_back_to_id() {
        let mut untitled = style("bare", &[]);
        untitled.title = None;
        let catalog = StyleCatalog::new("https://x", vec![untitled]).expect("catalog should build");
        let metadata = catalog
            .get_style_metadata("bare")
            .expect("metadata should build")
            .expect("style should exist");
        assert_eq!(metadata.title, "bare");
    }

    #[test]
    fn metadata_treats_empty_optional_values_as_absent() {
        let mut sparse = style("sparse", &[]);
        sparse.description = Some("   ".to_string());
        sparse.keywords = Some(vec![]);
        sparse.version = Some(String::new());
        let catalog = StyleCatalog::new("https://x", vec![sparse]).expect("catalog should build");
        let metadata = catalog
            .get_style_metadata("sparse")
            .expect("metadata should build")
            .expect("style should exist");
        assert!(metadata.description.is_none());
        assert!(metadata.keywords.is_none());
        assert!(metadata.version.is_none());
    }
}
