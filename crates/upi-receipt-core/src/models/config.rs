//! Configuration for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Configuration for receipt field extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Run generic shape-only fallback variants (bare amounts, bare
    /// reference tokens) when labeled variants find nothing. Disabling
    /// this restricts extraction to explicitly labeled values.
    pub use_fallback_variants: bool,

    /// Length cap, in characters, applied to extracted payee and payer
    /// display names. Longer captures are truncated, not rejected.
    pub max_name_len: usize,

    /// Currency code stamped on extracted records.
    pub currency: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            use_fallback_variants: true,
            max_name_len: 80,
            currency: "INR".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractionConfig::default();
        assert!(config.use_fallback_variants);
        assert_eq!(config.max_name_len, 80);
        assert_eq!(config.currency, "INR");
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: ExtractionConfig =
            serde_json::from_str(r#"{"use_fallback_variants": false}"#).unwrap();
        assert!(!config.use_fallback_variants);
        assert_eq!(config.max_name_len, 80);
        assert_eq!(config.currency, "INR");
    }
}
