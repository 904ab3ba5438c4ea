//! Error taxonomy for catalog and retrieval operations.
//!
//! # Responsibility
//! - Separate misconfiguration and I/O faults from ordinary absence.
//!
//! # Invariants
//! - "Not found" outcomes are never errors; they surface as `Ok(None)`.
//! - `UnknownFormat` is raised only when a caller asks for a descriptor that
//!   the format registry does not define.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type StyleResult<T> = Result<T, StyleError>;

/// Style provider operation error.
#[derive(Debug)]
pub enum StyleError {
    /// Configuration references a stylesheet type missing from the registry.
    UnknownFormat(String),
    /// Filesystem error other than "does not exist".
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Operation is reserved and has no implementation.
    Unsupported(&'static str),
}

impl Display for StyleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFormat(tag) => write!(f, "unknown stylesheet format: {tag}"),
            Self::Io { path, source } => {
                write!(f, "failed to read stylesheet `{}`: {source}", path.display())
            }
            Self::Unsupported(operation) => write!(f, "operation not supported: {operation}"),
        }
    }
}

impl Error for StyleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::UnknownFormat(_) => None,
            Self::Unsupported(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StyleError;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn io_error_exposes_source_and_path() {
        let err = StyleError::Io {
            path: PathBuf::from("/styles/streets.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/styles/streets.json"));
        assert!(err.source().is_some());
    }

    #[test]
    fn unsupported_names_operation() {
        let err = StyleError::Unsupported("get_style_preview");
        assert_eq!(err.to_string(), "operation not supported: get_style_preview");
        assert!(err.source().is_none());
    }
}
