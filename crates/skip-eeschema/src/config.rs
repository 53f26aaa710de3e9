//! Indexing configuration
//!
//! Controls how symbol nodes are scanned for pins and how name collisions
//! are reported while a library is indexed.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// How far below a symbol node the pin scan reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinSearch {
    /// Direct children of the symbol only
    #[default]
    Children,

    /// Whole subtree, including per-unit sub-symbols
    Descendants,
}

/// Pin scan settings carried by every symbol entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinScan {
    /// Type tag identifying pin nodes
    pub tag: String,
    /// Scan depth
    pub search: PinSearch,
}

impl Default for PinScan {
    fn default() -> Self {
        Self {
            tag: "pin".to_string(),
            search: PinSearch::Children,
        }
    }
}

/// Library indexing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Type tag identifying pin nodes
    pub pin_tag: String,
    /// Pin scan depth
    pub pin_search: PinSearch,
    /// Emit a warning for each identifier or safe-name collision
    pub warn_on_collision: bool,
}

impl IndexConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML text
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    /// Returns [`ConfigError::Toml`] if the text is not valid TOML or a value
    /// has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// With pin type tag
    #[inline]
    #[must_use]
    pub fn with_pin_tag(mut self, tag: impl Into<String>) -> Self {
        self.pin_tag = tag.into();
        self
    }

    /// With pin scan depth
    #[inline]
    #[must_use]
    pub fn with_pin_search(mut self, search: PinSearch) -> Self {
        self.pin_search = search;
        self
    }

    /// With collision warnings on or off
    #[inline]
    #[must_use]
    pub fn with_collision_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_collision = enabled;
        self
    }

    /// Pin scan settings derived from this configuration
    #[must_use]
    pub fn pin_scan(&self) -> PinScan {
        PinScan {
            tag: self.pin_tag.clone(),
            search: self.pin_search,
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            pin_tag: "pin".to_string(),
            pin_search: PinSearch::Children,
            warn_on_collision: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = IndexConfig::new();
        assert_eq!(config.pin_tag, "pin");
        assert_eq!(config.pin_search, PinSearch::Children);
        assert!(config.warn_on_collision);
        assert_eq!(config.pin_scan(), PinScan::default());
    }

    #[test]
    fn config_from_partial_toml() {
        let config = IndexConfig::from_toml_str("pin_search = \"descendants\"").unwrap();
        assert_eq!(config.pin_search, PinSearch::Descendants);
        assert_eq!(config.pin_tag, "pin");
    }

    #[test]
    fn config_rejects_unknown_search() {
        let result = IndexConfig::from_toml_str("pin_search = \"sideways\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn config_builder() {
        let config = IndexConfig::new()
            .with_pin_tag("pad")
            .with_pin_search(PinSearch::Descendants)
            .with_collision_warnings(false);

        assert_eq!(config.pin_scan().tag, "pad");
        assert!(!config.warn_on_collision);
    }
}
