//! Bridge configuration.

/// Install-time settings for the scripting bridge.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Name the extension's namespace is installed under.
    /// Default: `samp_cef`.
    pub namespace: String,

    /// Define a `version` entry carrying the crate version on install.
    /// Default: true.
    pub expose_version: bool,

    /// Log every native dispatch at debug level.
    /// Default: false.
    pub trace_calls: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            namespace: crate::sampcef::NAMESPACE.to_string(),
            expose_version: true,
            trace_calls: false,
        }
    }
}

impl BridgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace name.
    pub fn namespace(mut self, name: impl Into<String>) -> Self {
        self.namespace = name.into();
        self
    }

    /// Enable or disable the `version` entry.
    pub fn expose_version(mut self, enabled: bool) -> Self {
        self.expose_version = enabled;
        self
    }

    /// Enable or disable per-dispatch debug logging.
    pub fn trace_calls(mut self, enabled: bool) -> Self {
        self.trace_calls = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert_eq!(config.namespace, "samp_cef");
        assert!(config.expose_version);
        assert!(!config.trace_calls);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BridgeConfig::new()
            .namespace("cef")
            .expose_version(false)
            .trace_calls(true);

        assert_eq!(config.namespace, "cef");
        assert!(!config.expose_version);
        assert!(config.trace_calls);
    }
}
