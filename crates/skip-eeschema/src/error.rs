//! Error types for the symbol library layer
//!
//! Covers:
//! - Field lookups that neither the typed entity nor its node can answer
//! - Identifier lookups that miss the library index
//! - Configuration loading

/// Field requested from an entity that its node does not define
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} has no field '{field}'")]
pub struct FieldNotFound {
    /// Entity kind the lookup went through (`symbol`, `pin`, ...)
    pub kind: &'static str,
    /// Requested field name
    pub field: String,
}

impl FieldNotFound {
    /// Create error for a field on the given entity kind
    pub fn new(kind: &'static str, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
        }
    }
}

/// Errors from library index lookups
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// No symbol registered under this raw identifier
    #[error("no symbol '{identifier}' in library")]
    NotFound {
        /// Identifier that was looked up
        identifier: String,
    },
}

impl IndexError {
    /// Create not-found error
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }
}

/// Errors loading [`IndexConfig`](crate::config::IndexConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML text could not be deserialized
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Combined error for the crate
#[derive(Debug, thiserror::Error)]
pub enum EeschemaError {
    /// Field lookup failed
    #[error("field error: {0}")]
    Field(#[from] FieldNotFound),

    /// Library lookup failed
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Library text could not be read
    #[error("parse error: {0}")]
    Parse(#[from] skip_sexp::ParseError),
}

/// Result type alias for library operations
pub type EeschemaResult<T> = Result<T, EeschemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_not_found_display() {
        let err = FieldNotFound::new("pin", "name");
        assert_eq!(err.to_string(), "pin has no field 'name'");
    }

    #[test]
    fn index_error_display() {
        let err = IndexError::not_found("Z");
        assert_eq!(err.to_string(), "no symbol 'Z' in library");
    }

    #[test]
    fn error_conversions() {
        let err: EeschemaError = IndexError::not_found("Z").into();
        assert!(matches!(err, EeschemaError::Index(IndexError::NotFound { .. })));

        let err: EeschemaError = skip_sexp::ParseError::EmptyDocument.into();
        assert!(matches!(err, EeschemaError::Parse(_)));
    }
}
