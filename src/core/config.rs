//! Codec configuration.
//!
//! Both codecs are built from a `CodecConfig`. The defaults match the
//! format as deployed; games or tools embedding the codec can tighten the
//! delimited-code ceiling or use a different compact prefix.

use serde::{Deserialize, Serialize};

/// Default maximum length of a delimited deck code, in characters.
pub const DEFAULT_MAX_CODE_LENGTH: usize = 2048;

/// Default prefix of a compact deck code.
pub const DEFAULT_COMPACT_PREFIX: &str = "KCG-";

/// Configuration shared by the delimited and compact codecs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Maximum accepted length of a delimited code (after trimming).
    pub max_code_length: usize,

    /// Literal prefix every compact code starts with.
    pub compact_prefix: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_code_length: DEFAULT_MAX_CODE_LENGTH,
            compact_prefix: DEFAULT_COMPACT_PREFIX.to_string(),
        }
    }
}

impl CodecConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimited-code ceiling.
    #[must_use]
    pub fn with_max_code_length(mut self, max: usize) -> Self {
        self.max_code_length = max;
        self
    }

    /// Set the compact-code prefix.
    #[must_use]
    pub fn with_compact_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.compact_prefix = prefix.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.max_code_length, DEFAULT_MAX_CODE_LENGTH);
        assert_eq!(config.compact_prefix, "KCG-");
    }

    #[test]
    fn test_builder() {
        let config = CodecConfig::new()
            .with_max_code_length(64)
            .with_compact_prefix("TEST-");

        assert_eq!(config.max_code_length, 64);
        assert_eq!(config.compact_prefix, "TEST-");
    }

    #[test]
    fn test_partial_deserialization() {
        let config: CodecConfig = serde_json::from_str(r#"{"max_code_length": 100}"#).unwrap();
        assert_eq!(config.max_code_length, 100);
        assert_eq!(config.compact_prefix, "KCG-");
    }
}
