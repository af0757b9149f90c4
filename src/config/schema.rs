//! Settings schema.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Runtime settings for a recipe registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log unhandled recipe classes (once per class)
    #[serde(default, skip_serializing_if = "is_false")]
    pub debug_mode: bool,

    /// Plugin lookups slower than this many milliseconds are logged as warnings
    #[serde(
        default = "default_slow_lookup_threshold_ms",
        skip_serializing_if = "is_default_slow_lookup_threshold_ms"
    )]
    pub slow_lookup_threshold_ms: u64,

    /// Show a progress bar while recipes are being indexed
    #[serde(default, skip_serializing_if = "is_false")]
    pub show_progress: bool,
}

impl Settings {
    /// The slow lookup threshold as a [`Duration`].
    pub fn slow_lookup_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_lookup_threshold_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_mode: false,
            slow_lookup_threshold_ms: default_slow_lookup_threshold_ms(),
            show_progress: false,
        }
    }
}

fn default_slow_lookup_threshold_ms() -> u64 {
    10
}

fn is_default_slow_lookup_threshold_ms(v: &u64) -> bool {
    *v == default_slow_lookup_threshold_ms()
}

fn is_false(v: &bool) -> bool {
    !v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert!(!settings.debug_mode);
        assert!(!settings.show_progress);
        assert_eq!(settings.slow_lookup_threshold(), Duration::from_millis(10));
    }

    #[test]
    fn empty_document_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let settings: Settings = serde_yaml::from_str("debug_mode: true").unwrap();
        assert!(settings.debug_mode);
        assert_eq!(settings.slow_lookup_threshold_ms, 10);
    }

    #[test]
    fn default_values_are_not_serialized() {
        let yaml = serde_yaml::to_string(&Settings::default()).unwrap();
        assert_eq!(yaml.trim(), "{}");
    }
}
