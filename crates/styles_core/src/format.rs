//! Stylesheet format registry.
//!
//! # Responsibility
//! - Describe every stylesheet dialect the provider can serve.
//! - Map configured format tags and link format codes to descriptors.
//!
//! # Invariants
//! - The registry is fixed at compile time; no runtime registration.
//! - Tags and format codes are unique across descriptors.

use crate::error::{StyleError, StyleResult};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// Format tag for Mapbox GL style documents.
pub const FORMAT_MAPBOX: &str = "mapbox";
/// Format tag for OGC Symbology Encoding 1.1.
pub const FORMAT_SE11: &str = "se11";
/// Format tag for OGC Styled Layer Descriptor 1.0.
pub const FORMAT_SLD10: &str = "sld10";

/// Immutable descriptor for one stylesheet dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleFormat {
    /// Tag used by configuration (`stylesheets[].type`).
    pub tag: &'static str,
    /// Human-readable dialect name.
    pub title: &'static str,
    pub mime_type: &'static str,
    /// Dialect version advertised in metadata.
    pub version: &'static str,
    pub spec_url: &'static str,
    /// Value of the `f` query parameter in generated links.
    pub format_code: &'static str,
}

const STYLE_FORMATS: &[StyleFormat] = &[
    StyleFormat {
        tag: FORMAT_MAPBOX,
        title: "Mapbox Style",
        mime_type: "application/vnd.mapbox.style+json",
        version: "8",
        spec_url: "https://docs.mapbox.com/style-spec/guides",
        format_code: "mapbox",
    },
    StyleFormat {
        tag: FORMAT_SE11,
        title: "OGC SE",
        mime_type: "application/vnd.ogc.se+xml;version=1.1",
        version: "1.1",
        spec_url: "https://www.ogc.org/standards/se",
        format_code: "se11",
    },
    StyleFormat {
        tag: FORMAT_SLD10,
        title: "OGC SLD",
        mime_type: "application/vnd.ogc.sld+xml;version=1.0",
        version: "1.0",
        spec_url: "https://www.ogc.org/standards/sld",
        format_code: "sld10",
    },
];

static FORMATS_BY_TAG: Lazy<BTreeMap<&'static str, &'static StyleFormat>> =
    Lazy::new(|| STYLE_FORMATS.iter().map(|format| (format.tag, format)).collect());

static FORMATS_BY_CODE: Lazy<BTreeMap<&'static str, &'static StyleFormat>> = Lazy::new(|| {
    STYLE_FORMATS
        .iter()
        .map(|format| (format.format_code, format))
        .collect()
});

/// Returns all registered formats in declaration order.
pub fn formats() -> &'static [StyleFormat] {
    STYLE_FORMATS
}

/// Looks up one descriptor by configured format tag.
pub fn describe(tag: &str) -> Option<&'static StyleFormat> {
    FORMATS_BY_TAG.get(tag).copied()
}

/// Looks up one descriptor by tag, failing for unregistered tags.
///
/// # Errors
/// - Returns `StyleError::UnknownFormat` when `tag` is not registered.
pub fn require(tag: &str) -> StyleResult<&'static StyleFormat> {
    describe(tag).ok_or_else(|| StyleError::UnknownFormat(tag.to_string()))
}

/// Resolves the `f` query code of a generated link back to its descriptor.
pub fn from_format_code(code: &str) -> Option<&'static StyleFormat> {
    FORMATS_BY_CODE.get(code.trim()).copied()
}
