//! Catalog listing and style metadata documents.

use serde::Serialize;

/// Link relation to the style metadata resource.
pub const REL_DESCRIBED_BY: &str = "describedby";
/// Link relation to a renderable stylesheet.
pub const REL_STYLESHEET: &str = "stylesheet";
/// Fixed `scope` value of every style metadata document.
pub const METADATA_SCOPE: &str = "style";

/// Hypermedia link attached to listings and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub rel: String,
    /// MIME type of the target; serialized as `type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub href: String,
}

/// Catalog listing document (`{"styles": [...]}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleList {
    pub styles: Vec<StyleEntry>,
}

/// One style with its self-describing link set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleEntry {
    pub id: String,
    pub title: Option<String>,
    pub links: Vec<Link>,
}

impl StyleEntry {
    /// Returns links pointing at stylesheet representations other than the
    /// HTML web map preview.
    pub fn stylesheet_links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|link| {
            link.rel == REL_STYLESHEET && link.media_type.as_deref() != Some("text/html")
        })
    }
}

/// Style metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleMetadata {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    pub scope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub stylesheets: Vec<StylesheetMetadata>,
    pub layers: Vec<LayerMetadata>,
}

/// Metadata for one available stylesheet representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylesheetMetadata {
    pub title: String,
    pub version: String,
    pub specification: String,
    pub native: bool,
    pub link: StylesheetLink,
}

/// Link to a stylesheet; never carries a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylesheetLink {
    pub href: String,
    pub rel: String,
    #[serde(rename = "type")]
    pub media_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerMetadata {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}
